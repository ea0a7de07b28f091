//! Server-side page data loaders.
//!
//! Listing loaders never fail: a failed fetch yields an empty list plus a
//! fixed error string so the page renders its empty state. Detail loaders
//! turn any failed fetch, including an upstream 404, into
//! [`CoreError::NotFound`].

use std::fmt::Display;
use std::future::Future;

use kiglist_client::ApiError;
use kiglist_core::character::{Character, CharacterDetail};
use kiglist_core::error::CoreError;
use kiglist_core::jsonld::{self, OrganizationJsonLd, PersonJsonLd, ThingJsonLd, WebSiteJsonLd};
use kiglist_core::kiger::{Kiger, KigerDetail};
use kiglist_core::maker::Maker;
use kiglist_core::types::{CharacterId, MakerId, ResourceKind};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Page payloads
-------------------------------------------------------------------------- */

/// Data for a listing page.
#[derive(Debug, Serialize)]
pub struct ListingPage<T: Serialize> {
    pub items: Vec<T>,
    /// Set when the listing could not be fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub json_ld: WebSiteJsonLd,
}

#[derive(Debug, Serialize)]
pub struct KigerPage {
    pub kiger: KigerDetail,
    pub json_ld: PersonJsonLd,
}

#[derive(Debug, Serialize)]
pub struct CharacterPage {
    pub character: CharacterDetail,
    pub json_ld: ThingJsonLd,
}

#[derive(Debug, Serialize)]
pub struct MakerPage {
    pub maker: Maker,
    pub json_ld: OrganizationJsonLd,
}

/* --------------------------------------------------------------------------
Loaders
-------------------------------------------------------------------------- */

pub fn home(state: &AppState) -> HomePage {
    HomePage {
        json_ld: jsonld::website(&state.config.site_url, &state.config.locales),
    }
}

pub async fn kigers(state: &AppState) -> ListingPage<Kiger> {
    listing(ResourceKind::Kiger, state.api.list_kigers()).await
}

pub async fn characters(state: &AppState) -> ListingPage<Character> {
    listing(ResourceKind::Character, state.api.list_characters()).await
}

pub async fn makers(state: &AppState) -> ListingPage<Maker> {
    listing(ResourceKind::Maker, state.api.list_makers()).await
}

pub async fn kiger(state: &AppState, id: &str) -> AppResult<KigerPage> {
    let kiger = detail(ResourceKind::Kiger, id, state.api.get_kiger(id)).await?;
    let url = state.config.canonical_url(&ResourceKind::Kiger.detail_path(id));
    let json_ld = jsonld::kiger(&kiger.kiger, &url);
    Ok(KigerPage { kiger, json_ld })
}

pub async fn character(state: &AppState, id: CharacterId) -> AppResult<CharacterPage> {
    let character = detail(ResourceKind::Character, id, state.api.get_character(id)).await?;
    let url = state.config.canonical_url(&ResourceKind::Character.detail_path(id));
    let json_ld = jsonld::character(&character.character, &url);
    Ok(CharacterPage { character, json_ld })
}

pub async fn maker(state: &AppState, id: MakerId) -> AppResult<MakerPage> {
    let maker = detail(ResourceKind::Maker, id, state.api.get_maker(id)).await?;
    let url = state.config.canonical_url(&ResourceKind::Maker.detail_path(id));
    let json_ld = jsonld::maker(&maker, &url);
    Ok(MakerPage { maker, json_ld })
}

// ---- private helpers ----

async fn listing<T, F>(kind: ResourceKind, fetch: F) -> ListingPage<T>
where
    T: Serialize,
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    match fetch.await {
        Ok(items) => ListingPage { items, error: None },
        Err(e) => {
            tracing::warn!(resource = kind.plural(), error = %e, "Listing fetch failed, rendering empty page");
            ListingPage {
                items: Vec::new(),
                error: Some(format!("Failed to load {}", kind.plural())),
            }
        }
    }
}

async fn detail<T, F>(kind: ResourceKind, id: impl Display, fetch: F) -> Result<T, CoreError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    fetch.await.map_err(|e| {
        tracing::warn!(resource = kind.singular(), %id, error = %e, "Detail fetch failed");
        CoreError::NotFound {
            entity: kind.entity(),
            id: id.to_string(),
        }
    })
}
