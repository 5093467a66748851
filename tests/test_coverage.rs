//! Coverage reporter tests.

mod common;

use precon_tags::models::{Deck, DeckId, TagGroup};
use precon_tags::reports::CoverageReporter;
use precon_tags::Dataset;

fn ids(decks: &[precon_tags::models::FlaggedDeck]) -> Vec<String> {
    decks
        .iter()
        .map(|d| d.id.as_ref().map(|id| id.to_string()).unwrap_or_default())
        .collect()
}

#[test]
fn flags_decks_with_empty_lists_in_input_order() {
    let dataset = common::sample_dataset();
    let report = CoverageReporter::new(&dataset).report();

    assert_eq!(report.total_decks, 5);
    assert_eq!(ids(&report.empty_primary), vec!["1", "3"]);
    assert_eq!(ids(&report.empty_secondary), vec!["1", "3", "4"]);
}

#[test]
fn absent_and_explicit_empty_lists_are_equivalent() {
    let text = r#"[
        {"id": 1, "name": "a", "commander": "x"},
        {"id": 2, "name": "b", "commander": "x", "tags": {}},
        {"id": 3, "name": "c", "commander": "x", "tags": {"creature_types": {}}},
        {"id": 4, "name": "d", "commander": "x", "tags": {"creature_types": {"primary": []}}},
        {"id": 5, "name": "e", "commander": "x", "tags": {"creature_types": {"primary": [], "secondary": []}}}
    ]"#;
    let dataset = Dataset::from_json_str(text).unwrap();
    let report = CoverageReporter::new(&dataset).report();

    assert_eq!(report.empty_primary.len(), 5);
    assert_eq!(report.empty_secondary.len(), 5);
}

#[test]
fn flagged_records_copy_name_commander_and_id() {
    let dataset = common::sample_dataset();
    let report = CoverageReporter::new(&dataset).report();

    let first = &report.empty_primary[0];
    assert_eq!(first.name, "Goblin Gang");
    assert_eq!(first.commander, "Krenko, Mob Boss");
    assert_eq!(first.id, Some(DeckId::Int(1)));
}

#[test]
fn empty_primary_partitions_the_dataset() {
    let decks = vec![
        Deck::new(1_i64, "a", "x").with_creature_types(TagGroup::new(["elf"], Vec::<String>::new())),
        Deck::new(2_i64, "b", "y"),
        Deck::new(3_i64, "c", "z").with_creature_types(TagGroup::new(Vec::<String>::new(), ["rat"])),
        Deck::new("four", "d", "w").with_creature_types(TagGroup::new(["cat"], ["dog"])),
    ];
    let dataset = Dataset::from_decks(decks);
    let report = CoverageReporter::new(&dataset).report();

    let non_empty_primary = dataset
        .decks()
        .iter()
        .filter(|d| !d.creature_types().primary.is_empty())
        .count();
    assert_eq!(report.empty_primary.len() + non_empty_primary, report.total_decks);
    assert_eq!(ids(&report.empty_primary), vec!["2", "3"]);
    assert_eq!(ids(&report.empty_secondary), vec!["1", "2"]);
}

#[test]
fn empty_dataset_reports_zero() {
    let dataset = Dataset::default();
    let report = CoverageReporter::new(&dataset).report();
    assert_eq!(report.total_decks, 0);
    assert!(report.empty_primary.is_empty());
    assert!(report.empty_secondary.is_empty());
}

#[test]
fn end_to_end_single_untagged_deck() {
    let text = r#"[{"id":1,"name":"Goblin Gang","commander":"Krenko, Mob Boss","tags":{"creature_types":{"primary":[],"secondary":[]}}}]"#;
    let file = common::write_temp(text, ".json");
    let dataset = Dataset::load(file.path()).unwrap();
    let report = CoverageReporter::new(&dataset).report();

    assert_eq!(report.total_decks, 1);
    assert_eq!(ids(&report.empty_primary), vec!["1"]);
    assert_eq!(ids(&report.empty_secondary), vec!["1"]);
}
