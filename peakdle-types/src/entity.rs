use crate::AttributeValue;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One guessable catalog item. Read-only reference data; `name` is the
/// identity key and attribute values follow the owning category's schema
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Entity {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<AttributeValue>,
    /// Opaque image path, passed through to the UI uninterpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Secondary-phase target set (e.g. the cosmetic rewards behind a badge).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rewards: Vec<String>,
}

impl Entity {
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// A single submission: a snapshot of the entity the player picked, not a
/// live reference into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Guess {
    pub entity: Entity,
    /// ISO 8601 submission time.
    pub guessed_at: String,
}

impl Guess {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            guessed_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matching_is_case_insensitive() {
        let entity = Entity {
            name: "Trail Mix".to_string(),
            attributes: Vec::new(),
            image: None,
            rewards: Vec::new(),
        };

        assert!(entity.matches_name("trail mix"));
        assert!(entity.matches_name("TRAIL MIX"));
        assert!(entity.matches_name("  Trail Mix  "));
        assert!(!entity.matches_name("Trail"));
    }

    #[test]
    fn test_entity_parses_with_optional_fields_missing() {
        let entity: Entity =
            serde_json::from_str(r#"{"name": "Rope", "attributes": [1.5, "Tool"]}"#).unwrap();

        assert_eq!(entity.name, "Rope");
        assert_eq!(entity.attributes.len(), 2);
        assert!(entity.image.is_none());
        assert!(entity.rewards.is_empty());
    }
}
