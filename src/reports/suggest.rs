//! Keyword-based creature-type tag suggestions.
//!
//! Each deck's commander and name are matched against a [`Lexicon`]; any
//! matched label not already tagged on the deck is proposed. The heuristic is
//! advisory: it over-triggers on incidental substrings and misses synonyms
//! that aren't in the lexicon.

use std::collections::BTreeSet;

use tracing::debug;

use crate::dataset::Dataset;
use crate::lexicon::Lexicon;
use crate::models::{Deck, Suggestion};

// ---------------------------------------------------------------------------
// TagSuggester
// ---------------------------------------------------------------------------

pub struct TagSuggester<'a> {
    dataset: &'a Dataset,
    lexicon: &'a Lexicon,
}

impl<'a> TagSuggester<'a> {
    pub fn new(dataset: &'a Dataset, lexicon: &'a Lexicon) -> Self {
        Self { dataset, lexicon }
    }

    /// One suggestion per deck that has at least one new label, in input order.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        let suggestions: Vec<Suggestion> = self
            .dataset
            .decks()
            .iter()
            .filter_map(|deck| self.suggest_for(deck))
            .collect();

        debug!(
            decks = self.dataset.len(),
            triggers = self.lexicon.len(),
            suggestions = suggestions.len(),
            "creature-type suggestions computed"
        );
        suggestions
    }

    /// Suggest labels for a single deck, or `None` if nothing new matched.
    pub fn suggest_for(&self, deck: &Deck) -> Option<Suggestion> {
        let found = self
            .lexicon
            .matches([deck.commander.as_str(), deck.name.as_str()]);

        // Existing tags are compared verbatim, without case folding.
        let current: BTreeSet<String> = deck
            .creature_types()
            .all()
            .map(str::to_string)
            .collect();

        let suggested: BTreeSet<String> = found.difference(&current).cloned().collect();
        if suggested.is_empty() {
            return None;
        }

        Some(Suggestion {
            deck: deck.name.clone(),
            commander: deck.commander.clone(),
            current,
            suggested,
        })
    }
}
