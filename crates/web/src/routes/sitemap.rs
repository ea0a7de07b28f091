//! `GET /sitemap.xml`.
//!
//! The three listings are fetched concurrently. A failed listing is logged
//! and contributes no detail pages; the sitemap itself always renders.

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use kiglist_client::ApiError;
use kiglist_core::sitemap;
use kiglist_core::types::ResourceKind;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/sitemap.xml", get(sitemap_xml))
}

async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let (kigers, characters, makers) = tokio::join!(
        state.api.list_kigers(),
        state.api.list_characters(),
        state.api.list_makers(),
    );

    let mut pages = sitemap::static_pages();
    pages.extend(detail_paths(ResourceKind::Kiger, kigers, |k| k.id.clone()));
    pages.extend(detail_paths(ResourceKind::Character, characters, |c| c.id.to_string()));
    pages.extend(detail_paths(ResourceKind::Maker, makers, |m| m.id.to_string()));

    let xml = sitemap::render(
        &state.config.site_url,
        &state.config.locales,
        &pages,
        Utc::now().date_naive(),
    );
    tracing::debug!(pages = pages.len(), locales = state.config.locales.len(), "Sitemap rendered");

    (
        [
            (CONTENT_TYPE, sitemap::CONTENT_TYPE),
            (CACHE_CONTROL, sitemap::CACHE_CONTROL),
        ],
        xml,
    )
}

/// Detail page paths for a fetched listing; empty when the fetch failed.
fn detail_paths<T>(
    kind: ResourceKind,
    listing: Result<Vec<T>, ApiError>,
    id: impl Fn(&T) -> String,
) -> Vec<String> {
    match listing {
        Ok(items) => items.iter().map(|item| kind.detail_path(id(item))).collect(),
        Err(e) => {
            tracing::warn!(
                resource = kind.plural(),
                error = %e,
                "Listing fetch failed, omitting its pages from the sitemap"
            );
            Vec::new()
        }
    }
}
