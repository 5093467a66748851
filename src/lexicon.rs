//! Trigger → label keyword table used for creature-type suggestions.
//!
//! Matching is literal, case-insensitive substring containment with no
//! word-boundary awareness: `"rat"` matches `"Pirates"`, and `"elf"` does
//! not match `"Elvish"`.

use crate::config;
use crate::dataset;
use crate::error::{DataSourceError, Result};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<(String, String)>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::creature_types()
    }
}

impl Lexicon {
    /// The built-in creature-type table from [`config::CREATURE_KEYWORDS`].
    pub fn creature_types() -> Self {
        Self {
            entries: config::CREATURE_KEYWORDS
                .iter()
                .map(|(trigger, label)| (trigger.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Build a lexicon from `(trigger, label)` pairs.
    ///
    /// Triggers are lowercased. An empty trigger would match every deck and
    /// is rejected.
    pub fn from_pairs<I, T, L>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, L)>,
        T: AsRef<str>,
        L: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(trigger, label)| {
                let trigger = trigger.as_ref().to_lowercase();
                if trigger.is_empty() {
                    Err(DataSourceError::Malformed(
                        "lexicon trigger must not be empty".to_string(),
                    ))
                } else {
                    Ok((trigger, label.into()))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Load a lexicon from a JSON object mapping trigger → label.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataSourceError::NotFound(path.display().to_string()));
        }
        let contents = dataset::read_to_string(path)?;
        match serde_json::from_str::<Value>(&contents)? {
            Value::Object(map) => {
                let pairs = map
                    .into_iter()
                    .map(|(trigger, label)| match label {
                        Value::String(label) => Ok((trigger, label)),
                        other => Err(DataSourceError::Malformed(format!(
                            "lexicon label for \"{}\" must be a string, got {}",
                            trigger, other
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Self::from_pairs(pairs)
            }
            _ => Err(DataSourceError::Malformed(format!(
                "{}: lexicon must be a JSON object of trigger to label",
                path.display()
            ))),
        }
    }

    /// `(trigger, label)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(trigger, label)| (trigger.as_str(), label.as_str()))
    }

    /// Distinct canonical labels.
    pub fn labels(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|(_, label)| label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels whose trigger occurs in any of `texts`.
    ///
    /// Texts are lowercased before matching. The result is a set, so it does
    /// not depend on entry order.
    pub fn matches<'t, I>(&self, texts: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let texts: Vec<String> = texts.into_iter().map(str::to_lowercase).collect();
        self.entries
            .iter()
            .filter(|(trigger, _)| texts.iter().any(|text| text.contains(trigger.as_str())))
            .map(|(_, label)| label.clone())
            .collect()
    }
}
