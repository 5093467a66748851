//! Tag suggestion engine tests.

mod common;

use precon_tags::models::{Deck, TagGroup};
use precon_tags::reports::TagSuggester;
use precon_tags::{Dataset, Lexicon};
use std::collections::BTreeSet;

fn set(labels: &[&str]) -> BTreeSet<String> {
    labels.iter().map(|l| l.to_string()).collect()
}

fn suggest_one(deck: Deck) -> Option<BTreeSet<String>> {
    let lexicon = Lexicon::creature_types();
    let dataset = Dataset::from_decks(vec![deck]);
    TagSuggester::new(&dataset, &lexicon)
        .suggestions()
        .into_iter()
        .next()
        .map(|s| s.suggested)
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[test]
fn ur_dragon_suggests_dragon() {
    let suggested = suggest_one(Deck::new(1_i64, "Draconic Destruction", "The Ur-Dragon"));
    assert_eq!(suggested, Some(set(&["dragon"])));
}

#[test]
fn elvish_is_not_matched() {
    let suggested = suggest_one(Deck::new(1_i64, "Forest Chorus", "Elvish Archdruid"));
    assert_eq!(suggested, None);
}

#[test]
fn matching_is_literal_substring() {
    // "rat" inside "Pirate"
    let suggested = suggest_one(Deck::new(1_i64, "Pirate Crew", "Admiral Beckett Brass"));
    assert_eq!(suggested, Some(set(&["rat"])));
}

#[test]
fn name_and_commander_both_contribute() {
    let suggested = suggest_one(Deck::new(1_i64, "Vampire Court", "Edgar Markov"));
    assert_eq!(suggested, Some(set(&["vampire"])));

    let suggested = suggest_one(Deck::new(2_i64, "Elven Council", "Lathril, Blade of the Elves"));
    assert_eq!(suggested, Some(set(&["elf"])));
}

#[test]
fn many_to_one_triggers_collapse_to_one_label() {
    let suggested = suggest_one(Deck::new(1_i64, "Elf Lords", "Lathril, Blade of the Elves"));
    assert_eq!(suggested, Some(set(&["elf"])));
}

#[test]
fn mapped_label_differs_from_trigger() {
    let suggested = suggest_one(Deck::new(1_i64, "Artifact Assault", "Saheeli"));
    assert_eq!(suggested, Some(set(&["artifact creature"])));
}

#[test]
fn missing_name_and_commander_match_nothing() {
    let dataset = Dataset::from_json_str(r#"[{"id": 1}]"#).unwrap();
    let lexicon = Lexicon::creature_types();
    assert!(TagSuggester::new(&dataset, &lexicon).suggestions().is_empty());
}

// ---------------------------------------------------------------------------
// Existing tags
// ---------------------------------------------------------------------------

#[test]
fn already_applied_labels_are_not_suggested() {
    let deck = Deck::new(1_i64, "Draconic Destruction", "The Ur-Dragon")
        .with_creature_types(TagGroup::new(Vec::<String>::new(), ["dragon"]));
    assert_eq!(suggest_one(deck), None);
}

#[test]
fn existing_tags_are_compared_case_sensitively() {
    let deck = Deck::new(1_i64, "Elven Council", "Lathril, Blade of the Elves")
        .with_creature_types(TagGroup::new(["Elf"], ["warrior"]));
    assert_eq!(suggest_one(deck), Some(set(&["elf"])));
}

#[test]
fn suggestion_records_current_labels() {
    let dataset = common::sample_dataset();
    let lexicon = Lexicon::creature_types();
    let suggestions = TagSuggester::new(&dataset, &lexicon).suggestions();

    let names: Vec<&str> = suggestions.iter().map(|s| s.deck.as_str()).collect();
    assert_eq!(names, vec!["Goblin Gang", "Pirate Crew", "Elven Council"]);

    let elves = &suggestions[2];
    assert_eq!(elves.commander, "Lathril, Blade of the Elves");
    assert_eq!(elves.current, set(&["Elf", "warrior"]));
    assert_eq!(elves.suggested, set(&["elf"]));
}

#[test]
fn merging_suggestions_is_idempotent() {
    let dataset = common::sample_dataset();
    let lexicon = Lexicon::creature_types();
    let suggester = TagSuggester::new(&dataset, &lexicon);

    for deck in dataset.decks() {
        let Some(suggestion) = suggester.suggest_for(deck) else {
            continue;
        };
        let mut merged = deck.clone();
        merged
            .tags
            .creature_types
            .primary
            .extend(suggestion.suggested.iter().cloned());
        assert_eq!(suggester.suggest_for(&merged), None, "{}", deck.name);
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_are_identical() {
    let dataset = common::sample_dataset();
    let lexicon = Lexicon::creature_types();
    let suggester = TagSuggester::new(&dataset, &lexicon);
    assert_eq!(suggester.suggestions(), suggester.suggestions());
}

#[test]
fn lexicon_order_does_not_affect_results() {
    let dataset = common::sample_dataset();
    let forward = Lexicon::creature_types();
    let mut pairs: Vec<(&str, &str)> = forward.entries().collect();
    pairs.reverse();
    let reversed = Lexicon::from_pairs(pairs).unwrap();

    assert_eq!(
        TagSuggester::new(&dataset, &forward).suggestions(),
        TagSuggester::new(&dataset, &reversed).suggestions()
    );
}

#[test]
fn end_to_end_goblin_gang() {
    let text = r#"[{"id":1,"name":"Goblin Gang","commander":"Krenko, Mob Boss","tags":{"creature_types":{"primary":[],"secondary":[]}}}]"#;
    let dataset = Dataset::from_json_str(text).unwrap();
    let lexicon = Lexicon::creature_types();
    let suggestions = TagSuggester::new(&dataset, &lexicon).suggestions();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].deck, "Goblin Gang");
    assert!(suggestions[0].current.is_empty());
    assert_eq!(suggestions[0].suggested, set(&["goblin"]));
}
