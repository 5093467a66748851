use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ---------------------------------------------------------------------------
// DeckId — opaque identifier, passed through untouched
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeckId {
    Int(i64),
    Text(String),
    Other(Value),
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckId::Int(n) => write!(f, "{}", n),
            DeckId::Text(s) => f.write_str(s),
            DeckId::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for DeckId {
    fn from(n: i64) -> Self {
        DeckId::Int(n)
    }
}

impl From<&str> for DeckId {
    fn from(s: &str) -> Self {
        DeckId::Text(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// TagGroup — a primary/secondary label pair for one tag category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagGroup {
    #[serde(default, deserialize_with = "lenient_labels")]
    pub primary: Vec<String>,
    #[serde(default, deserialize_with = "lenient_labels")]
    pub secondary: Vec<String>,
}

impl TagGroup {
    pub fn new<P, S>(primary: P, secondary: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            primary: primary.into_iter().map(Into::into).collect(),
            secondary: secondary.into_iter().map(Into::into).collect(),
        }
    }

    /// Primary labels followed by secondary labels, duplicates included.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.all().any(|l| l == label)
    }
}

// ---------------------------------------------------------------------------
// DeckTags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckTags {
    #[serde(default, deserialize_with = "lenient")]
    pub creature_types: TagGroup,
    #[serde(default, deserialize_with = "lenient")]
    pub aesthetic_vibe: TagGroup,
    #[serde(default, deserialize_with = "lenient")]
    pub themes: TagGroup,
    #[serde(default, deserialize_with = "lenient")]
    pub archetype: TagGroup,
    #[serde(default, deserialize_with = "lenient")]
    pub play_pattern: TagGroup,
    #[serde(default, deserialize_with = "lenient")]
    pub flavor_setting: TagGroup,
    #[serde(default, deserialize_with = "lenient")]
    pub tone: TagGroup,
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub complexity: Option<String>,
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub power_level: Option<String>,
}

impl DeckTags {
    /// Look up a tag category by its dataset key (e.g. `"themes"`).
    pub fn category(&self, name: &str) -> Option<&TagGroup> {
        match name {
            "creature_types" => Some(&self.creature_types),
            "aesthetic_vibe" => Some(&self.aesthetic_vibe),
            "themes" => Some(&self.themes),
            "archetype" => Some(&self.archetype),
            "play_pattern" => Some(&self.play_pattern),
            "flavor_setting" => Some(&self.flavor_setting),
            "tone" => Some(&self.tone),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Deck — one preconstructed deck record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub id: Option<DeckId>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub commander: String,
    #[serde(default, deserialize_with = "lenient_scalar")]
    pub ip: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: DeckTags,
}

impl Deck {
    pub fn new(id: impl Into<DeckId>, name: &str, commander: &str) -> Self {
        Self {
            id: Some(id.into()),
            name: name.to_string(),
            commander: commander.to_string(),
            ..Default::default()
        }
    }

    pub fn with_creature_types(mut self, creature_types: TagGroup) -> Self {
        self.tags.creature_types = creature_types;
        self
    }

    pub fn creature_types(&self) -> &TagGroup {
        &self.tags.creature_types
    }
}

// ---------------------------------------------------------------------------
// Lenient field deserializers
// ---------------------------------------------------------------------------

/// Deserialize `T`, falling back to `T::default()` when the value is null or
/// has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keep the string entries of an array; anything else is an empty list.
fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Accept strings, numbers, and booleans as text; anything else is `None`.
fn lenient_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}
