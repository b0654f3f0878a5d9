//! Descent Names
//!
//! First and last name selection by descent and sex, over static name tables.
//! Unisex names satisfy male and female queries alike.

pub mod components;
pub mod errors;
pub mod names;
pub mod selectors;
pub mod table;

pub use components::*;
pub use errors::{ParseDescentError, ParseSexError, Result, SelectionError};
pub use names::{FIRST_NAMES, LAST_NAMES};
pub use selectors::{get_first_names, get_last_names, get_sexes, Selector};
pub use table::{DescentSummary, NameTable, TableSummary};
