//! Character records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::CharacterId;

/// The work a character comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSource {
    pub title: String,
    pub company: String,
    pub release_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub original_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub official_image: String,
    #[serde(default)]
    pub source: Option<CharacterSource>,
}

/// A character as returned by `GET /character/{id}`.
///
/// The API may send fields beyond the listing shape; they are kept in
/// `extra` and written back unchanged on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDetail {
    #[serde(flatten)]
    pub character: Character,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl From<Character> for CharacterDetail {
    fn from(character: Character) -> Self {
        Self {
            character,
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_keeps_unknown_fields() {
        let detail: CharacterDetail = serde_json::from_value(json!({
            "id": 2,
            "name": "Aqua",
            "originalName": "アクア",
            "type": "anime",
            "officialImage": "https://img/2.png",
            "source": { "title": "Konosuba", "company": "Kadokawa", "releaseYear": 2016 },
            "aliases": ["Aqua-sama"],
            "popularity": 9
        }))
        .unwrap();

        assert_eq!(detail.character.id, 2);
        assert_eq!(detail.character.kind, "anime");
        assert_eq!(detail.extra.len(), 2);
        assert_eq!(detail.extra["popularity"], json!(9));
        assert!(!detail.extra.contains_key("name"));

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["aliases"], json!(["Aqua-sama"]));
        assert_eq!(value["originalName"], "アクア");
    }

    #[test]
    fn null_source_is_none() {
        let character: Character = serde_json::from_value(json!({
            "id": 5,
            "name": "Original",
            "originalName": "Original",
            "type": "oc",
            "officialImage": "",
            "source": null
        }))
        .unwrap();
        assert!(character.source.is_none());
    }
}
