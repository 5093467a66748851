//! Deck dataset loader.
//!
//! Reads the precon dataset from a JSON file (handling `.gz` transparently)
//! into memory once. Both a bare array of deck objects and the
//! `{ "data": [...] }` wrapper are accepted.

use crate::error::{DataSourceError, Result};
use crate::models::Deck;
use flate2::read::GzDecoder;
use serde_json::Value;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An in-memory, read-only sequence of deck records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    decks: Vec<Deck>,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Wrap already-parsed decks.
    pub fn from_decks(decks: Vec<Deck>) -> Self {
        Self {
            decks,
            source: None,
        }
    }

    /// Load and parse a dataset file.
    ///
    /// Returns [`DataSourceError::NotFound`] if the file does not exist and
    /// [`DataSourceError::Malformed`] if it is not valid JSON or its top level
    /// is neither an array nor a `data` wrapper.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataSourceError::NotFound(path.display().to_string()));
        }

        let contents = read_to_string(path)?;
        let mut dataset = Self::from_json_str(&contents).map_err(|e| match e {
            DataSourceError::Malformed(msg) => {
                DataSourceError::Malformed(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        dataset.source = Some(path.to_path_buf());

        info!(path = %path.display(), decks = dataset.len(), "loaded deck dataset");
        Ok(dataset)
    }

    /// Parse a dataset from JSON text.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(contents)?;
        let records = match value {
            Value::Array(arr) => arr,
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(arr)) => arr,
                _ => {
                    return Err(DataSourceError::Malformed(
                        "expected a deck array or an object with a \"data\" array".to_string(),
                    ))
                }
            },
            _ => {
                return Err(DataSourceError::Malformed(
                    "expected a deck array at the top level".to_string(),
                ))
            }
        };

        let decks = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                if !record.is_object() {
                    return Err(DataSourceError::Malformed(format!(
                        "deck record {} is not an object",
                        index
                    )));
                }
                serde_json::from_value::<Deck>(record).map_err(|e| {
                    DataSourceError::Malformed(format!("deck record {}: {}", index, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(decks = decks.len(), "parsed deck records");
        Ok(Self::from_decks(decks))
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Path the dataset was loaded from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Read a text file, decompressing it first if it ends in `.gz`.
pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let mut buf_reader = BufReader::new(decoder);
        let mut contents = String::new();
        buf_reader.read_to_string(&mut contents)?;
        Ok(contents)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
