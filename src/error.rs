/*!
error module defines the error types used in rpsl-parser.
*/
use std::fmt::{Display, Formatter};
use std::{fmt, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    /// The input could not be split into keys and values.
    ///
    /// ## Occurs during:
    ///  - Tokenizing the attribute lines of an object
    #[error(transparent)]
    SyntaxError(#[from] SyntaxError),
    /// The caller asked for exactly one object but the input held none.
    #[error("no objects found")]
    NoObjectsFound,
    /// The caller asked for exactly one object but the input held more than one. Reading
    /// stops at the second object.
    #[error("multiple objects found, expected exactly one")]
    MultipleObjectsFound,
    /// A general IO error triggered by the internal reader.
    ///
    /// ## Occurs during:
    ///  - Reading the next physical line from the source
    #[error(transparent)]
    IoError(#[from] io::Error),
    #[cfg(feature = "oneio")]
    #[error(transparent)]
    OneIoError(#[from] oneio::OneIoError),
}

/// The reason a key could not be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A `:` with no key characters in front of it.
    EmptyKey,
    /// A byte outside the key grammar before the `:` was reached.
    IllegalKeyCharacter(u8),
    /// The input ended before a `:` was found.
    UnterminatedKey,
}

/// A tokenizer failure together with the absolute byte offset where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub offset: usize,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, offset: usize) -> Self {
        SyntaxError { kind, offset }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            SyntaxErrorKind::EmptyKey => write!(f, "zero-sized key at offset {}", self.offset),
            SyntaxErrorKind::IllegalKeyCharacter(c) => write!(
                f,
                "illegal character '{}' in key at offset {}",
                c.escape_ascii(),
                self.offset
            ),
            SyntaxErrorKind::UnterminatedKey => {
                write!(f, "no key terminator found for key at offset {}", self.offset)
            }
        }
    }
}

/// How many times an attribute is allowed to appear in an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    MandatoryMultiple,
    OptionalSingle,
    MandatorySingle,
}

impl Display for Cardinality {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::MandatoryMultiple => write!(f, "mandatory, multiple"),
            Cardinality::OptionalSingle => write!(f, "optional, single"),
            Cardinality::MandatorySingle => write!(f, "mandatory, single"),
        }
    }
}

/// Returned by the `ensure_*` checks on [RpslObject][crate::RpslObject]. Never produced while
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("object has no attributes")]
    EmptyObject,
    #[error("attribute '{expected}' should be the first, but found '{found}' instead")]
    WrongClass { expected: String, found: String },
    #[error("attribute '{key}' is ({cardinality}) but found none")]
    Missing { key: String, cardinality: Cardinality },
    #[error("attribute '{key}' is ({cardinality}) but found multiple")]
    Multiple { key: String, cardinality: Cardinality },
}
