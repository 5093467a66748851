use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::deck::{Deck, DeckId};

// ---------------------------------------------------------------------------
// Coverage
// ---------------------------------------------------------------------------

/// A deck flagged by the coverage report. Fields are copied from the deck as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedDeck {
    pub name: String,
    pub commander: String,
    pub id: Option<DeckId>,
}

impl From<&Deck> for FlaggedDeck {
    fn from(deck: &Deck) -> Self {
        Self {
            name: deck.name.clone(),
            commander: deck.commander.clone(),
            id: deck.id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub total_decks: usize,
    pub empty_primary: Vec<FlaggedDeck>,
    pub empty_secondary: Vec<FlaggedDeck>,
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub deck: String,
    pub commander: String,
    /// Labels already applied (primary ∪ secondary).
    pub current: BTreeSet<String>,
    /// Matched labels not yet applied. Never empty.
    pub suggested: BTreeSet<String>,
}

// ---------------------------------------------------------------------------
// Tag catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeGroupingCount {
    pub name: String,
    pub deck_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCatalogReport {
    pub total_decks: usize,
    /// Category key → every label seen in that category.
    pub categories: BTreeMap<String, BTreeSet<String>>,
    pub ips: BTreeSet<String>,
    pub complexity_levels: BTreeSet<String>,
    pub power_levels: BTreeMap<String, usize>,
    pub groupings: Vec<ThemeGroupingCount>,
}
