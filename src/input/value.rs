//! Runtime value model
//!
//! A single `Value` type is used both for validator input and output:
//! - scalars: none, bool, int, float, str
//! - sequences: list
//! - mappings: dict (insertion ordered)
//! - aggregate instances: model (shared, identity carrying)

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use uuid::Uuid;

/// Handle identifying the target type of a model validator.
///
/// Every handle carries a unique stamp. Two handles are the same class only
/// if their stamps are equal, regardless of name.
#[derive(Clone)]
pub struct ClassType(Arc<ClassInfo>);

struct ClassInfo {
    id: Uuid,
    name: String,
}

impl ClassType {
    /// Creates a fresh class with a new identity stamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(ClassInfo {
            id: Uuid::new_v4(),
            name: name.into(),
        }))
    }

    /// Returns the class name
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the identity stamp
    pub fn id(&self) -> Uuid {
        self.0.id
    }
}

impl PartialEq for ClassType {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for ClassType {}

impl fmt::Debug for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassType({})", self.0.name)
    }
}

/// An aggregate instance produced by a model validator.
///
/// Only declared fields that were resolved are present; unknown input keys
/// never appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstance {
    class: ClassType,
    fields: Vec<(String, Value)>,
}

impl ModelInstance {
    /// Creates an instance of `class` with the given field values.
    pub fn new(class: ClassType, fields: Vec<(String, Value)>) -> Self {
        Self { class, fields }
    }

    pub fn class(&self) -> &ClassType {
        &self.class
    }

    /// Returns true if this instance was created for exactly `class`.
    pub fn is_instance_of(&self, class: &ClassType) -> bool {
        self.class == *class
    }

    /// Looks up a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns true if the field was set on this instance
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }
}

/// Insertion-ordered string-keyed mapping.
///
/// Lookups and inserts are O(1); equality ignores key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dict {
    entries: IndexMap<String, Value>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts a key, replacing the value in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut dict = Dict::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

/// Any value a validator can consume or produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Dict(Dict),
    /// Shared so that returning an already-valid instance preserves identity
    Model(Arc<ModelInstance>),
}

impl Value {
    /// Returns the type name used in error reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
            Value::Model(_) => "model",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&Arc<ModelInstance>> {
        match self {
            Value::Model(instance) => Some(instance),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Dict> for Value {
    fn from(dict: Dict) -> Self {
        Value::Dict(dict)
    }
}

impl From<ModelInstance> for Value {
    fn from(instance: ModelInstance) -> Self {
        Value::Model(Arc::new(instance))
    }
}

impl From<Arc<ModelInstance>> for Value {
    fn from(instance: Arc<ModelInstance>) -> Self {
        Value::Model(instance)
    }
}

/// Short repr used when rendering error reports.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "'{}'", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Dict(dict) => {
                write!(f, "{{")?;
                for (i, (key, value)) in dict.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}': {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Model(instance) => {
                write!(f, "{}(", instance.class().name())?;
                for (i, (key, value)) in instance.fields().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                write!(f, ")")
            }
        }
    }
}
