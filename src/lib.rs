//! Loads student rosters from CSV files, validating the age column and
//! reporting every bad row in a single aggregate failure.

pub mod error;
pub mod instrument;
pub mod students;

pub use error::LoadError;
pub use students::{Record, StudentLoader};
