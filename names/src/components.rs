//! Core value types for name selection
//!
//! Descent and sex categories, plus the kind of name being looked up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ParseDescentError, ParseSexError};

// ============================================================================
// Descent
// ============================================================================

/// Cultural/linguistic naming tradition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Descent {
    English,
    Russian,
    German,
    French,
}

impl Descent {
    pub const ALL: [Descent; 4] = [
        Descent::English,
        Descent::Russian,
        Descent::German,
        Descent::French,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Descent::English => "english",
            Descent::Russian => "russian",
            Descent::German => "german",
            Descent::French => "french",
        }
    }
}

impl fmt::Display for Descent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Descent {
    type Err = ParseDescentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Descent::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDescentError(s.to_string()))
    }
}

// ============================================================================
// Sex
// ============================================================================

/// Sex of a name, or the sex a query asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Unisex,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Unisex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unisex => "unisex",
        }
    }

    /// Sexes whose names satisfy a query for `self`.
    ///
    /// Unisex names are valid for every query; a unisex query only
    /// accepts unisex names.
    pub fn compatible(&self) -> &'static [Sex] {
        match self {
            Sex::Male => &[Sex::Male, Sex::Unisex],
            Sex::Female => &[Sex::Female, Sex::Unisex],
            Sex::Unisex => &[Sex::Unisex],
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ParseSexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sex::ALL
            .into_iter()
            .find(|sex| sex.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSexError(s.to_string()))
    }
}

// ============================================================================
// Name kind
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    First,
    Last,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::First => f.write_str("first name"),
            NameKind::Last => f.write_str("last name"),
        }
    }
}
