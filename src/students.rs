//! Student roster loading. Reads a CSV file with a header row, validates the
//! age column on every row, and returns the valid records as field-name →
//! value maps.

use anyhow::Context;
use csv::ReaderBuilder;
use serde_json::{Map, Value};
use std::{fs::File, io, path::PathBuf};
use tracing::{debug, error};

use crate::error::{LoadError, NOT_NUMBER, VALID_AGE};
use crate::instrument::{benchmark, with_logging};

/// Text encoding the roster files are written in.
pub const ENCODING: &str = "utf-8";

/// Directory holding raw roster files, relative to the crate root.
pub const DATA_DIR: &str = "data/raw";

/// Header label of the age column in the source data.
pub const AGE_FIELD: &str = "edad";

/// One roster row as a field-name → value map. Fields other than
/// [`AGE_FIELD`] pass through as strings; a validated age is stored as a
/// positive integer.
pub type Record = Map<String, Value>;

/// Loads student records from a CSV roster file.
///
/// The loader holds only the file location; every call to
/// [`load_data`](StudentLoader::load_data) opens and closes its own file
/// handle, so repeated calls on an unchanged file return identical results.
pub struct StudentLoader {
    base_dir: PathBuf,
    csv_file: String,
}

impl StudentLoader {
    /// Loader for `csv_file` under the conventional [`DATA_DIR`].
    pub fn new(csv_file: impl Into<String>) -> Self {
        Self::in_dir(DATA_DIR, csv_file)
    }

    /// Loader for `csv_file` under an explicit base directory.
    pub fn in_dir(base_dir: impl Into<PathBuf>, csv_file: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            csv_file: csv_file.into(),
        }
    }

    /// Full path of the roster file this loader reads.
    pub fn file_path(&self) -> PathBuf {
        self.base_dir.join(&self.csv_file)
    }

    /// Load the roster and validate every row's age field.
    ///
    /// Rows whose age parses as a positive integer are returned with the age
    /// field converted in place; every other row is excluded and contributes
    /// one message to a single [`LoadError::Validation`] raised after all
    /// rows have been processed. A missing roster file is recovered locally:
    /// it logs one error line and returns an empty list.
    ///
    /// Note the asymmetry: if even one row is invalid, the valid rows
    /// gathered in the same call are discarded along with it.
    pub fn load_data(&self) -> Result<Vec<Record>, LoadError> {
        with_logging("load_data", benchmark("load_data", || self.read_rows()))()
    }

    fn read_rows(&self) -> Result<Vec<Record>, LoadError> {
        let path = self.file_path();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                error!(
                    "Data file not found at {}. Please check the location of your data file.",
                    path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to open roster file {}", path.display()))
                    .into())
            }
        };
        debug!("Reading {} as {}", path.display(), ENCODING);

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read CSV header in {}", path.display()))?
            .clone();
        let age_idx = headers
            .iter()
            .position(|h| h == AGE_FIELD)
            .ok_or(LoadError::MissingAgeColumn(AGE_FIELD))?;

        let mut students: Vec<Record> = Vec::new();
        let mut errors: Vec<String> = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            let record = result.with_context(|| {
                format!("CSV parse error in {} at record {}", path.display(), idx)
            })?;

            match record.get(age_idx).unwrap_or("").trim().parse::<i64>() {
                Ok(age) if age > 0 => {
                    let mut student: Record = headers
                        .iter()
                        .zip(record.iter())
                        .map(|(header, value)| {
                            (header.to_string(), Value::String(value.to_string()))
                        })
                        .collect();
                    student.insert(AGE_FIELD.to_string(), Value::from(age));
                    students.push(student);
                }
                Ok(age) => {
                    let message = format!("{}: {}", VALID_AGE, age);
                    error!("{}", message);
                    errors.push(message);
                }
                Err(e) => {
                    error!("{}: {}", NOT_NUMBER, e);
                    errors.push(NOT_NUMBER.to_string());
                }
            }
        }

        if !errors.is_empty() {
            return Err(LoadError::Validation(errors.join(" | ")));
        }

        Ok(students)
    }
}
