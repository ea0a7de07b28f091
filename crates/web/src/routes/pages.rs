//! JSON endpoints serving page data to the rendering layer.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use kiglist_core::character::Character;
use kiglist_core::error::CoreError;
use kiglist_core::kiger::Kiger;
use kiglist_core::maker::Maker;
use kiglist_core::types::ResourceKind;

use crate::error::AppResult;
use crate::loaders::{self, CharacterPage, HomePage, KigerPage, ListingPage, MakerPage};
use crate::state::AppState;

/// Routes mounted at `/data`.
///
/// ```text
/// GET /home              -> home
/// GET /kiger             -> kigers
/// GET /kiger/{id}        -> kiger
/// GET /character         -> characters
/// GET /character/{id}    -> character
/// GET /maker             -> makers
/// GET /maker/{id}        -> maker
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(home))
        .route("/kiger", get(kigers))
        .route("/kiger/{id}", get(kiger))
        .route("/character", get(characters))
        .route("/character/{id}", get(character))
        .route("/maker", get(makers))
        .route("/maker/{id}", get(maker))
}

async fn home(State(state): State<AppState>) -> Json<HomePage> {
    Json(loaders::home(&state))
}

async fn kigers(State(state): State<AppState>) -> Json<ListingPage<Kiger>> {
    Json(loaders::kigers(&state).await)
}

async fn characters(State(state): State<AppState>) -> Json<ListingPage<Character>> {
    Json(loaders::characters(&state).await)
}

async fn makers(State(state): State<AppState>) -> Json<ListingPage<Maker>> {
    Json(loaders::makers(&state).await)
}

async fn kiger(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<KigerPage>> {
    Ok(Json(loaders::kiger(&state, &id).await?))
}

async fn character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CharacterPage>> {
    let id = numeric_id(ResourceKind::Character, &id)?;
    Ok(Json(loaders::character(&state, id).await?))
}

async fn maker(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<MakerPage>> {
    let id = numeric_id(ResourceKind::Maker, &id)?;
    Ok(Json(loaders::maker(&state, id).await?))
}

/// Character and maker ids are integers; anything else names no entity.
fn numeric_id(kind: ResourceKind, raw: &str) -> Result<i64, CoreError> {
    raw.parse().map_err(|_| CoreError::NotFound {
        entity: kind.entity(),
        id: raw.to_string(),
    })
}
