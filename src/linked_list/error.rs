use core::fmt;

/// Returned when a value could not be stored in a list.
///
/// Allocation exhaustion and a failed value construction look the same to
/// the caller: in both cases the list is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsertError;

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node storage exhausted or value construction failed")
    }
}

impl core::error::Error for InsertError {}

/// Returned by a [`ValuePolicy`](super::traits::ValuePolicy) that failed to
/// build a node value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructError {
    reason: &'static str,
}

impl ConstructError {
    pub const fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value construction failed: {}", self.reason)
    }
}

impl core::error::Error for ConstructError {}

/// Returned when the nodes of one list cannot be moved into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceError {
    /// The destination's allocator cannot release nodes of the source.
    IncompatibleAllocator,
}

impl fmt::Display for SpliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpliceError::IncompatibleAllocator => {
                write!(f, "lists draw their nodes from different storage")
            }
        }
    }
}

impl core::error::Error for SpliceError {}
