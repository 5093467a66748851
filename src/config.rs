use std::path::PathBuf;

/// Dataset location used when neither `--data` nor `PRECON_TAGS_DATA` is set.
pub const DEFAULT_DATASET_PATH: &str = "src/data/precons-data.json";

/// Environment variable that overrides the dataset path.
pub const DATASET_ENV_VAR: &str = "PRECON_TAGS_DATA";

/// Number of empty-primary decks listed by the coverage report.
pub const DEFAULT_COVERAGE_LIMIT: usize = 10;

/// Number of suggestion records printed by the suggestion report.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 20;

/// Label used in the power-level distribution for decks without one.
pub const UNKNOWN_POWER_LEVEL: &str = "unknown";

/// Built-in creature-type keyword table, as `(trigger, label)` pairs.
///
/// Several triggers share a label (`elf`/`elves`), so the label set is
/// smaller than the trigger set.
pub const CREATURE_KEYWORDS: &[(&str, &str)] = &[
    ("dragon", "dragon"),
    ("elf", "elf"),
    ("elves", "elf"),
    ("goblin", "goblin"),
    ("zombie", "zombie"),
    ("vampire", "vampire"),
    ("angel", "angel"),
    ("demon", "demon"),
    ("wizard", "wizard"),
    ("knight", "knight"),
    ("soldier", "soldier"),
    ("cat", "cat"),
    ("dog", "dog"),
    ("bird", "bird"),
    ("beast", "beast"),
    ("elemental", "elemental"),
    ("spirit", "spirit"),
    ("human", "human"),
    ("merfolk", "merfolk"),
    ("sliver", "sliver"),
    ("dinosaur", "dinosaur"),
    ("phoenix", "phoenix"),
    ("hydra", "hydra"),
    ("artifact", "artifact creature"),
    ("spider", "spider"),
    ("insect", "insect"),
    ("snake", "snake"),
    ("wurm", "wurm"),
    ("fox", "fox"),
    ("otter", "otter"),
    ("mouse", "mouse"),
    ("raccoon", "raccoon"),
    ("badger", "badger"),
    ("squirrel", "squirrel"),
    ("rat", "rat"),
];

/// Tag categories that carry `primary`/`secondary` label lists.
pub const TAG_CATEGORIES: &[&str] = &[
    "aesthetic_vibe",
    "creature_types",
    "themes",
    "archetype",
    "play_pattern",
    "flavor_setting",
    "tone",
];

/// A named grouping of tags, used to size candidate browse themes.
#[derive(Debug, Clone, Copy)]
pub struct ThemeGrouping {
    pub name: &'static str,
    /// `(category, labels)` pairs; a deck matches on any label in any category.
    pub tags: &'static [(&'static str, &'static [&'static str])],
}

pub const THEME_GROUPINGS: &[ThemeGrouping] = &[
    ThemeGrouping {
        name: "Spooky & Dark",
        tags: &[
            ("aesthetic_vibe", &["dark", "spooky"]),
            ("tone", &["dark", "eerie"]),
        ],
    },
    ThemeGrouping {
        name: "Space & Sci-Fi",
        tags: &[
            ("flavor_setting", &["space", "sci-fi"]),
            ("aesthetic_vibe", &["technological", "futuristic"]),
        ],
    },
    ThemeGrouping {
        name: "Tribal Decks",
        tags: &[("themes", &["tribal"])],
    },
    ThemeGrouping {
        name: "Artifacts Matter",
        tags: &[("themes", &["artifacts"]), ("archetype", &["artifacts"])],
    },
    ThemeGrouping {
        name: "Spellslinging",
        tags: &[
            ("themes", &["spellslinger", "instants and sorceries"]),
            ("archetype", &["spellslinger"]),
        ],
    },
    ThemeGrouping {
        name: "Go Wide (Tokens)",
        tags: &[
            ("themes", &["tokens", "go wide"]),
            ("play_pattern", &["go wide"]),
        ],
    },
    ThemeGrouping {
        name: "Big Creatures",
        tags: &[
            ("play_pattern", &["stompy"]),
            ("themes", &["big creatures"]),
        ],
    },
    ThemeGrouping {
        name: "Graveyard Matters",
        tags: &[("themes", &["graveyard"]), ("archetype", &["graveyard"])],
    },
    ThemeGrouping {
        name: "Lands Matter",
        tags: &[("themes", &["lands matter", "landfall"])],
    },
    ThemeGrouping {
        name: "Combo & Synergy",
        tags: &[("archetype", &["combo"]), ("play_pattern", &["combo"])],
    },
];

pub fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}
