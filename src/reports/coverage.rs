//! Creature-type coverage: which decks have no primary or no secondary
//! creature-type tags.

use tracing::debug;

use crate::dataset::Dataset;
use crate::models::{CoverageReport, FlaggedDeck};

// ---------------------------------------------------------------------------
// CoverageReporter
// ---------------------------------------------------------------------------

pub struct CoverageReporter<'a> {
    dataset: &'a Dataset,
}

impl<'a> CoverageReporter<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Flag decks with an empty (or absent) primary and secondary list.
    ///
    /// Flagged decks keep their input order.
    pub fn report(&self) -> CoverageReport {
        let decks = self.dataset.decks();

        let empty_primary: Vec<FlaggedDeck> = decks
            .iter()
            .filter(|d| d.creature_types().primary.is_empty())
            .map(FlaggedDeck::from)
            .collect();

        let empty_secondary: Vec<FlaggedDeck> = decks
            .iter()
            .filter(|d| d.creature_types().secondary.is_empty())
            .map(FlaggedDeck::from)
            .collect();

        debug!(
            total = decks.len(),
            empty_primary = empty_primary.len(),
            empty_secondary = empty_secondary.len(),
            "creature-type coverage computed"
        );

        CoverageReport {
            total_decks: decks.len(),
            empty_primary,
            empty_secondary,
        }
    }
}
