//! ID prefixes, ID generation, and the stable chunk key.
//!
//! Entity IDs have the shape `{prefix}-{8 hex chars}`, e.g. `asg-a3f8b2c1`.
//! Chunk keys are `{assignment_id}|{index}` and never encode the day or the
//! completion state, so overrides keyed by them survive recomputation.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const PREFIX_ASSIGNMENT: &str = "asg";

/// Separator between assignment ID and chunk index in a [`ChunkKey`].
pub const CHUNK_KEY_SEPARATOR: char = '|';

/// Generate a prefixed random ID. Returns e.g. `"asg-a3f8b2c1"`.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

/// Deterministic identifier of one plan chunk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChunkKey {
    assignment_id: String,
    index: u32,
}

impl ChunkKey {
    #[must_use]
    pub fn new(assignment_id: impl Into<String>, index: u32) -> Self {
        Self {
            assignment_id: assignment_id.into(),
            index,
        }
    }

    #[must_use]
    pub fn assignment_id(&self) -> &str {
        &self.assignment_id
    }

    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for ChunkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{CHUNK_KEY_SEPARATOR}{}", self.assignment_id, self.index)
    }
}

impl FromStr for ChunkKey {
    type Err = CoreError;

    /// Splits on the last separator so assignment IDs may themselves contain `|`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (id, index) = raw
            .rsplit_once(CHUNK_KEY_SEPARATOR)
            .ok_or_else(|| CoreError::InvalidChunkKey(raw.to_string()))?;
        if id.is_empty() {
            return Err(CoreError::InvalidChunkKey(raw.to_string()));
        }
        let index = index
            .parse::<u32>()
            .map_err(|_| CoreError::InvalidChunkKey(raw.to_string()))?;
        Ok(Self::new(id, index))
    }
}

impl TryFrom<String> for ChunkKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChunkKey> for String {
    fn from(key: ChunkKey) -> Self {
        key.to_string()
    }
}

impl JsonSchema for ChunkKey {
    fn schema_name() -> Cow<'static, str> {
        "ChunkKey".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^.+\\|[0-9]+$"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_id_correct_format() {
        let id = generate_id(PREFIX_ASSIGNMENT).unwrap();
        assert!(id.starts_with("asg-"), "ID should start with 'asg-': {id}");
        assert_eq!(id.len(), 12);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generate_id_is_random() {
        let a = generate_id(PREFIX_ASSIGNMENT).unwrap();
        let b = generate_id(PREFIX_ASSIGNMENT).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn chunk_key_display_and_parse() {
        let key = ChunkKey::new("asg-00000001", 3);
        assert_eq!(key.to_string(), "asg-00000001|3");
        assert_eq!("asg-00000001|3".parse::<ChunkKey>().unwrap(), key);
    }

    #[test]
    fn chunk_key_splits_on_last_separator() {
        let key: ChunkKey = "legacy|id|2".parse().unwrap();
        assert_eq!(key.assignment_id(), "legacy|id");
        assert_eq!(key.index(), 2);
    }

    #[test]
    fn chunk_key_rejects_malformed() {
        for raw in ["", "asg-1", "asg-1|", "|2", "asg-1|x", "asg-1|-1"] {
            assert!(raw.parse::<ChunkKey>().is_err(), "should reject {raw:?}");
        }
    }

    #[test]
    fn chunk_key_serializes_as_string() {
        let key = ChunkKey::new("asg-1", 0);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"asg-1|0\"");
        let back: ChunkKey = serde_json::from_str("\"asg-1|0\"").unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn chunk_keys_order_numerically_within_assignment() {
        let mut keys = vec![ChunkKey::new("a", 10), ChunkKey::new("a", 2)];
        keys.sort();
        assert_eq!(keys[0].index(), 2);
    }
}
