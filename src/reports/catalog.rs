//! Tag catalog: the vocabulary of every tag category in the dataset, the
//! power-level distribution, and deck counts for candidate theme groupings.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::config::{self, ThemeGrouping};
use crate::dataset::Dataset;
use crate::models::{Deck, TagCatalogReport, ThemeGroupingCount};

// ---------------------------------------------------------------------------
// TagCatalog
// ---------------------------------------------------------------------------

pub struct TagCatalog<'a> {
    dataset: &'a Dataset,
    groupings: &'a [ThemeGrouping],
}

impl<'a> TagCatalog<'a> {
    /// Create a catalog using the built-in [`config::THEME_GROUPINGS`].
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_groupings(dataset, config::THEME_GROUPINGS)
    }

    pub fn with_groupings(dataset: &'a Dataset, groupings: &'a [ThemeGrouping]) -> Self {
        Self { dataset, groupings }
    }

    pub fn report(&self) -> TagCatalogReport {
        let decks = self.dataset.decks();

        let mut categories: BTreeMap<String, BTreeSet<String>> = config::TAG_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), BTreeSet::new()))
            .collect();
        let mut ips = BTreeSet::new();
        let mut complexity_levels = BTreeSet::new();
        let mut power_levels: BTreeMap<String, usize> = BTreeMap::new();

        for deck in decks {
            for (category, labels) in categories.iter_mut() {
                if let Some(group) = deck.tags.category(category) {
                    labels.extend(group.all().map(str::to_string));
                }
            }
            if let Some(ip) = &deck.ip {
                ips.insert(ip.clone());
            }
            if let Some(complexity) = &deck.tags.complexity {
                complexity_levels.insert(complexity.clone());
            }
            let level = deck
                .tags
                .power_level
                .clone()
                .unwrap_or_else(|| config::UNKNOWN_POWER_LEVEL.to_string());
            *power_levels.entry(level).or_insert(0) += 1;
        }

        let groupings = self
            .groupings
            .iter()
            .map(|grouping| ThemeGroupingCount {
                name: grouping.name.to_string(),
                deck_count: decks.iter().filter(|d| matches_grouping(d, grouping)).count(),
            })
            .collect();

        debug!(
            decks = decks.len(),
            ips = ips.len(),
            power_levels = power_levels.len(),
            "tag catalog computed"
        );

        TagCatalogReport {
            total_decks: decks.len(),
            categories,
            ips,
            complexity_levels,
            power_levels,
            groupings,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A deck matches when any grouping label is tagged in the named category.
fn matches_grouping(deck: &Deck, grouping: &ThemeGrouping) -> bool {
    grouping.tags.iter().any(|(category, labels)| {
        deck.tags
            .category(category)
            .map(|group| labels.iter().any(|label| group.contains(label)))
            .unwrap_or(false)
    })
}
