//! Creature-type tag tooling for a Commander precon dataset.
//!
//! Loads the deck dataset once and exposes three read-only reporters over it:
//! creature-type coverage, keyword-based creature-type suggestions, and a
//! catalog of every tag in use.
//!
//! # Quick start
//!
//! ```no_run
//! use precon_tags::PreconTags;
//!
//! let tags = PreconTags::builder()
//!     .dataset_path("src/data/precons-data.json")
//!     .build()
//!     .unwrap();
//!
//! let coverage = tags.coverage().report();
//! println!("{} of {} decks lack primary creature types",
//!     coverage.empty_primary.len(), coverage.total_decks);
//!
//! for s in tags.suggester().suggestions() {
//!     println!("{}: {:?}", s.deck, s.suggested);
//! }
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod lexicon;
pub mod models;
pub mod render;
pub mod reports;

pub use dataset::Dataset;
pub use error::{DataSourceError, Result};
pub use lexicon::Lexicon;

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// PreconTagsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PreconTags`] instance.
#[derive(Default)]
pub struct PreconTagsBuilder {
    dataset_path: Option<PathBuf>,
    lexicon_path: Option<PathBuf>,
    lexicon: Option<Lexicon>,
}

impl PreconTagsBuilder {
    /// Set the dataset file. Defaults to [`config::DEFAULT_DATASET_PATH`].
    pub fn dataset_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dataset_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load the keyword lexicon from a JSON file instead of the built-in table.
    pub fn lexicon_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.lexicon_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use an in-memory lexicon. Takes precedence over [`lexicon_path`](Self::lexicon_path).
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Load the dataset (and lexicon file, if set).
    pub fn build(self) -> Result<PreconTags> {
        let path = self.dataset_path.unwrap_or_else(config::default_dataset_path);
        let dataset = Dataset::load(&path)?;
        let lexicon = match (self.lexicon, self.lexicon_path) {
            (Some(lexicon), _) => lexicon,
            (None, Some(lexicon_path)) => Lexicon::from_json_file(lexicon_path)?,
            (None, None) => Lexicon::creature_types(),
        };
        Ok(PreconTags { dataset, lexicon })
    }
}

// ---------------------------------------------------------------------------
// PreconTags
// ---------------------------------------------------------------------------

/// A loaded dataset plus the lexicon used for suggestions.
///
/// Reporters are lightweight wrappers borrowing from this value.
pub struct PreconTags {
    dataset: Dataset,
    lexicon: Lexicon,
}

impl PreconTags {
    pub fn builder() -> PreconTagsBuilder {
        PreconTagsBuilder::default()
    }

    /// Wrap an already-loaded dataset.
    pub fn new(dataset: Dataset, lexicon: Lexicon) -> Self {
        Self { dataset, lexicon }
    }

    /// Creature-type coverage reporter.
    pub fn coverage(&self) -> reports::CoverageReporter<'_> {
        reports::CoverageReporter::new(&self.dataset)
    }

    /// Keyword-based creature-type suggestion engine.
    pub fn suggester(&self) -> reports::TagSuggester<'_> {
        reports::TagSuggester::new(&self.dataset, &self.lexicon)
    }

    /// Tag vocabulary, power levels, and theme grouping counts.
    pub fn catalog(&self) -> reports::TagCatalog<'_> {
        reports::TagCatalog::new(&self.dataset)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PreconTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self
            .dataset
            .source()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());
        write!(
            f,
            "PreconTags(source={}, decks={}, triggers={}, labels={})",
            source,
            self.dataset.len(),
            self.lexicon.len(),
            self.lexicon.labels().len()
        )
    }
}
