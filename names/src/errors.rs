//! Error types for name selection.

use thiserror::Error;

use crate::components::{Descent, NameKind, Sex};

pub type Result<T> = std::result::Result<T, SelectionError>;

/// Errors raised when a (descent, sex) query cannot be answered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The table has no entry for the descent
    #[error("unsupported descent for {kind}: {descent}")]
    UnsupportedDescent { kind: NameKind, descent: Descent },

    /// The sex is missing, or none of its compatible sexes exist for the descent
    #[error("unsupported sex for {descent} {kind}: {}", display_sex(.sex))]
    UnsupportedSex {
        kind: NameKind,
        descent: Descent,
        sex: Option<Sex>,
    },
}

fn display_sex(sex: &Option<Sex>) -> String {
    match sex {
        Some(sex) => sex.to_string(),
        None => "none".to_string(),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown descent: {0:?}")]
pub struct ParseDescentError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sex: {0:?}")]
pub struct ParseSexError(pub String);
