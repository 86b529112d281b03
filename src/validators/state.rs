//! Per-call validation state

use crate::errors::{val_error, ErrorKind, ValResult};
use crate::input::Value;

/// Mode and depth tracking threaded through one `validate` call.
#[derive(Debug, Clone, Copy)]
pub struct ValidationState {
    strict: bool,
    depth: usize,
    max_depth: usize,
}

impl ValidationState {
    pub fn new(strict: bool, max_depth: usize) -> Self {
        Self {
            strict,
            depth: 0,
            max_depth,
        }
    }

    /// True when only exact types are accepted
    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Copy of this state with exact-type checking forced on.
    pub fn as_strict(&self) -> Self {
        Self {
            strict: true,
            ..*self
        }
    }

    /// Enters one nested validator, failing at `input` past the limit.
    pub(crate) fn enter(&mut self, input: &Value) -> ValResult<()> {
        if self.depth >= self.max_depth {
            return val_error(
                ErrorKind::DepthExceeded {
                    max_depth: self.max_depth,
                },
                input,
            );
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}
