use thiserror::Error;

/// Message recorded for a row whose age field does not parse as an integer.
pub const NOT_NUMBER: &str = "Age is not a valid number";

/// Marker prefixed to the offending value when a row's age is zero or
/// negative.
pub const VALID_AGE: &str = "Age must be a positive number";

/// Failures surfaced by [`StudentLoader::load_data`].
///
/// Row-level problems are never raised individually; they accumulate into a
/// single [`LoadError::Validation`] whose message joins every per-row error
/// with `" | "`.
///
/// [`StudentLoader::load_data`]: crate::students::StudentLoader::load_data
#[derive(Debug, Error)]
pub enum LoadError {
    /// At least one row failed age validation.
    #[error("{0}")]
    Validation(String),

    /// The CSV header row has no age column.
    #[error("CSV header has no '{0}' column")]
    MissingAgeColumn(&'static str),

    /// Anything unexpected from the filesystem or the CSV parser.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
