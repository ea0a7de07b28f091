//! Kiger (performer) records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::KigerId;

/// Social profiles of a kiger. Every field may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KigerSocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixiv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Platforms without a dedicated field, e.g. `youtube`.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl KigerSocialMedia {
    /// Non-empty links: known platforms in declaration order, then the
    /// remaining string-valued entries by key.
    pub fn links(&self) -> Vec<&str> {
        let known = [
            &self.instagram,
            &self.twitter,
            &self.facebook,
            &self.tiktok,
            &self.pixiv,
            &self.website,
        ]
        .into_iter()
        .filter_map(|link| link.as_deref());

        known
            .chain(self.other.values().filter_map(Value::as_str))
            .filter(|link| !link.is_empty())
            .collect()
    }
}

/// A character a kiger portrays, with the maker of the costume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterReference {
    pub character_id: String,
    #[serde(default)]
    pub maker: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A kiger as returned by `GET /kigers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kiger {
    pub id: KigerId,
    pub name: String,
    pub bio: String,
    pub profile_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub is_active: bool,
    /// Absent and `null` both decode as `None`.
    #[serde(default)]
    pub social_media: Option<KigerSocialMedia>,
    pub created_at: String,
    pub updated_at: String,
}

impl Kiger {
    pub fn social_links(&self) -> Vec<&str> {
        self.social_media
            .as_ref()
            .map(KigerSocialMedia::links)
            .unwrap_or_default()
    }
}

/// A kiger as returned by `GET /kiger/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KigerDetail {
    #[serde(flatten)]
    pub kiger: Kiger,
    #[serde(rename = "Characters", default)]
    pub characters: Vec<CharacterReference>,
}

/// Body of `POST /kiger` and `PUT /admin/kiger/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KigerSubmit {
    pub name: String,
    pub bio: String,
    pub profile_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub social_media: Option<KigerSocialMedia>,
    #[serde(rename = "Characters", default)]
    pub characters: Vec<CharacterReference>,
}
