//! Error locations
//!
//! A location is an ordered path from the outermost validator to the one
//! that raised the error. Composite validators wrap child errors by adding
//! a segment on the outside, so segments are stored innermost-first and
//! reversed on read.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// One path segment: a field name / branch tag, or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocItem {
    Key(String),
    Index(usize),
}

impl fmt::Display for LocItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocItem::Key(key) => write!(f, "{}", key),
            LocItem::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for LocItem {
    fn from(key: &str) -> Self {
        LocItem::Key(key.to_string())
    }
}

impl From<String> for LocItem {
    fn from(key: String) -> Self {
        LocItem::Key(key)
    }
}

impl From<usize> for LocItem {
    fn from(index: usize) -> Self {
        LocItem::Index(index)
    }
}

impl Serialize for LocItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LocItem::Key(key) => serializer.serialize_str(key),
            LocItem::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    // innermost segment first
    segments: Vec<LocItem>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a location from outermost to innermost segments.
    pub fn from_path<I, T>(path: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<LocItem>,
    {
        let mut segments: Vec<LocItem> = path.into_iter().map(Into::into).collect();
        segments.reverse();
        Self { segments }
    }

    /// Adds a segment on the outside of the path.
    pub fn push_outer(&mut self, item: LocItem) {
        self.segments.push(item);
    }

    /// Iterates from the outermost segment inwards.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LocItem> {
        self.segments.iter().rev()
    }

    pub fn to_vec(&self) -> Vec<LocItem> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}
