use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Kiger ids are opaque strings assigned by the API.
pub type KigerId = String;

/// Character and maker ids are integers assigned by the API.
pub type CharacterId = i64;

pub type MakerId = i64;

/// The three listed resources.
///
/// Every API path and site path is derived from these names, so the
/// segments live in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Kiger,
    Character,
    Maker,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Kiger, Self::Character, Self::Maker];

    /// Singular path segment, e.g. `kiger` in `/kiger/{id}`.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Kiger => "kiger",
            Self::Character => "character",
            Self::Maker => "maker",
        }
    }

    /// Plural path segment, e.g. `kigers` in `/kigers`.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Kiger => "kigers",
            Self::Character => "characters",
            Self::Maker => "makers",
        }
    }

    /// Human-readable entity name used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Kiger => "Kiger",
            Self::Character => "Character",
            Self::Maker => "Maker",
        }
    }

    /// Site path of the listing page, e.g. `/kiger`.
    pub fn listing_path(self) -> String {
        format!("/{}", self.singular())
    }

    /// Path of a detail page, e.g. `/kiger/p1`. The same shape is used
    /// by the site and the API. The id is percent-encoded as one segment.
    pub fn detail_path(self, id: impl fmt::Display) -> String {
        let id = id.to_string();
        format!("/{}/{}", self.singular(), urlencoding::encode(&id))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    /// Accepts both the singular and the plural segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| s == kind.singular() || s == kind.plural())
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid resource kind '{s}'. Must be one of: kiger, character, maker"
                ))
            })
    }
}

/// `{ "message": ... }` acknowledgement returned by write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
