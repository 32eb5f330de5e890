use std::fmt;

use thiserror::Error;

/// Raised by the string calculator when one or more parsed numbers are negative.
///
/// The offending values are kept in the order they appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("negatives not allowed: {}", JoinedValues(.negatives))]
pub struct InvalidInputError {
    pub negatives: Vec<i64>,
}

impl InvalidInputError {
    pub fn new(negatives: Vec<i64>) -> Self {
        Self { negatives }
    }
}

struct JoinedValues<'a>(&'a [i64]);

impl fmt::Display for JoinedValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Unified error type for the kata tooling.
#[derive(Debug, Error)]
pub enum KataError {
    #[error("{0}")]
    InvalidInput(#[from] InvalidInputError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KataError>;
