//! Payloads of the crawler endpoints.
//!
//! The crawler parses third-party pages, so its output is looser than the
//! stored records: social links and suggested characters arrive as open
//! JSON maps.

use serde::{Deserialize, Serialize};

use crate::kiger::CharacterReference;

/// Body of `POST /crawl/twitter/user`.
#[derive(Debug, Clone, Serialize)]
pub struct TwitterUserRequest<'a> {
    pub username: &'a str,
}

/// Body of `POST /crawl/twitter/tweet`.
#[derive(Debug, Clone, Serialize)]
pub struct TwitterTweetRequest<'a> {
    pub username: &'a str,
    pub tweet_id: &'a str,
}

/// Body of `POST /crawl/image`.
#[derive(Debug, Clone, Serialize)]
pub struct ImageCrawlRequest<'a> {
    pub image_url: &'a str,
}

/// A kiger profile pre-filled from a Twitter account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterUserCrawl {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub profile_image: String,
    #[serde(default)]
    pub position: String,
    pub is_active: bool,
    #[serde(default)]
    pub social_media: serde_json::Map<String, serde_json::Value>,
    #[serde(rename = "Characters", default)]
    pub characters: Vec<CharacterReference>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterTweetCrawl {
    #[serde(default)]
    pub character: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCharacterCrawl {
    pub success: bool,
    #[serde(default)]
    pub character: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
