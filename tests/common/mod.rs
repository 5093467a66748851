//! Shared test fixtures for the precon-tags integration tests.
//!
//! Provides a small sample dataset as JSON, plus helpers that write it to a
//! temp file so the loader is exercised the same way the CLI uses it.

#![allow(dead_code)]

use precon_tags::Dataset;
use std::io::Write;
use tempfile::NamedTempFile;

/// Sample decks covering tagged, untagged, partially tagged, and malformed
/// records.
pub fn sample_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Goblin Gang",
            "commander": "Krenko, Mob Boss",
            "ip": "Magic",
            "tags": {
                "creature_types": { "primary": [], "secondary": [] },
                "themes": { "primary": ["tribal", "tokens"], "secondary": [] },
                "power_level": "3"
            }
        },
        {
            "id": "draconic-destruction",
            "name": "Draconic Destruction",
            "commander": "The Ur-Dragon",
            "tags": {
                "creature_types": { "primary": ["dragon"], "secondary": ["kobold"] },
                "themes": { "primary": ["tribal"] },
                "aesthetic_vibe": { "primary": ["dark"] },
                "complexity": "moderate",
                "power_level": "4"
            }
        },
        {
            "id": 3,
            "name": "Forest Chorus",
            "commander": "Elvish Archdruid"
        },
        {
            "id": 4,
            "name": "Pirate Crew",
            "commander": "Admiral Beckett Brass",
            "tags": {
                "creature_types": { "primary": ["pirate"], "secondary": "oops" },
                "archetype": ["not", "an", "object"]
            }
        },
        {
            "id": 5,
            "name": "Elven Council",
            "commander": "Lathril, Blade of the Elves",
            "ip": "Magic",
            "tags": {
                "creature_types": { "primary": ["Elf"], "secondary": ["warrior"] },
                "play_pattern": { "primary": ["go wide"] },
                "power_level": 3
            }
        }
    ])
}

pub fn sample_dataset() -> Dataset {
    Dataset::from_json_str(&sample_json().to_string()).unwrap()
}

/// Write JSON text to a temp file with the given suffix.
///
/// The caller must keep the returned file alive while it is being read.
pub fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn write_sample_dataset() -> NamedTempFile {
    write_temp(&sample_json().to_string(), ".json")
}
