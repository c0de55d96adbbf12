//! Error types for richspan.

use std::fmt;

use crate::style::TagKind;

/// Result type alias for richspan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for richspan operations.
///
/// All validation happens before the first structural mutation, so an error
/// from [`Container::apply_format`](crate::Container::apply_format) means the
/// container is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A selection anchor resolves to neither a text leaf nor a segment.
    UnsupportedTarget {
        /// Description of the node kind the host handed over.
        node: &'static str,
    },
    /// Segment index beyond the container.
    SegmentOutOfRange { index: usize, len: usize },
    /// Split or selection offset outside the valid range for its segment.
    ///
    /// For splits this means an offset at or past a segment edge; under the
    /// cutting-point policy callers suppress edge splits, so hitting this
    /// from `apply_format` signals an internal logic error rather than bad
    /// user input.
    InvalidOffset { offset: usize, len: usize },
    /// Formatting command value type does not match its kind.
    TypeMismatch { kind: TagKind },
    /// Formatting command value could not be parsed for its kind.
    InvalidValue { kind: TagKind, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedTarget { node } => {
                write!(f, "selection anchor targets unsupported node: {node}")
            }
            Self::SegmentOutOfRange { index, len } => {
                write!(f, "segment index {index} out of range for {len} segments")
            }
            Self::InvalidOffset { offset, len } => {
                write!(f, "offset {offset} invalid for segment of {len} characters")
            }
            Self::TypeMismatch { kind } => {
                write!(f, "value type mismatch for {kind} format")
            }
            Self::InvalidValue { kind, value } => {
                write!(f, "cannot parse {value:?} as a {kind} value")
            }
        }
    }
}

impl std::error::Error for Error {}
