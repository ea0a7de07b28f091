//! Maker (costume studio) records.

use serde::{Deserialize, Serialize};

use crate::types::MakerId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakerSocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taobao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amazon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl MakerSocialMedia {
    /// Non-empty links in declaration order.
    pub fn links(&self) -> Vec<&str> {
        [
            &self.twitter,
            &self.facebook,
            &self.taobao,
            &self.amazon,
            &self.website,
        ]
        .into_iter()
        .filter_map(|link| link.as_deref())
        .filter(|link| !link.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maker {
    pub id: MakerId,
    pub name: String,
    pub original_name: String,
    #[serde(rename = "Avatar")]
    pub avatar: String,
    #[serde(default)]
    pub social_media: Option<MakerSocialMedia>,
}

impl Maker {
    pub fn social_links(&self) -> Vec<&str> {
        self.social_media
            .as_ref()
            .map(MakerSocialMedia::links)
            .unwrap_or_default()
    }
}
