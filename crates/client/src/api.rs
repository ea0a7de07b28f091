//! Typed facade over the kiglist REST API.
//!
//! One method per resource operation. Path segments come from
//! [`ResourceKind`] so every caller (CLI, page loaders, sitemap) shares a
//! single source of truth for endpoints. Ids are percent-encoded as one
//! path segment. Errors are exactly those of the underlying [`HttpClient`]
//! call.

use std::fmt;

use kiglist_core::character::{Character, CharacterDetail};
use kiglist_core::crawl::{
    ImageCharacterCrawl, ImageCrawlRequest, TwitterTweetCrawl, TwitterTweetRequest,
    TwitterUserCrawl, TwitterUserRequest,
};
use kiglist_core::kiger::{Kiger, KigerDetail, KigerSubmit};
use kiglist_core::maker::Maker;
use kiglist_core::review::{
    LoginRequest, LoginResponse, PendingCharacter, PendingKiger, PendingMaker, ReviewAction,
    ReviewRequest, ReviewResponse,
};
use kiglist_core::types::{CharacterId, MakerId, MessageResponse, ResourceKind};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::http::{ApiError, HttpClient, RequestOptions};

#[derive(Debug, Clone)]
pub struct KiglistApi {
    http: HttpClient,
}

impl KiglistApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /* ----------------------------------------------------------------------
    Kigers
    ---------------------------------------------------------------------- */

    /// GET /kigers
    pub async fn list_kigers(&self) -> Result<Vec<Kiger>, ApiError> {
        self.list(ResourceKind::Kiger).await
    }

    /// GET /kiger/{id}
    pub async fn get_kiger(&self, id: &str) -> Result<KigerDetail, ApiError> {
        self.get(ResourceKind::Kiger, id).await
    }

    /// POST /kiger -- queues the kiger for moderation.
    pub async fn submit_kiger(&self, data: &KigerSubmit) -> Result<MessageResponse, ApiError> {
        self.submit(ResourceKind::Kiger, data).await
    }

    /// PUT /admin/kiger/{id} with a token, otherwise the same as
    /// [`submit_kiger`](Self::submit_kiger).
    pub async fn update_kiger(
        &self,
        id: &str,
        data: &KigerSubmit,
        token: Option<&str>,
    ) -> Result<MessageResponse, ApiError> {
        self.update(ResourceKind::Kiger, id, data, token).await
    }

    /* ----------------------------------------------------------------------
    Characters
    ---------------------------------------------------------------------- */

    /// GET /characters
    pub async fn list_characters(&self) -> Result<Vec<Character>, ApiError> {
        self.list(ResourceKind::Character).await
    }

    /// GET /character/{id}
    pub async fn get_character(&self, id: CharacterId) -> Result<CharacterDetail, ApiError> {
        self.get(ResourceKind::Character, id).await
    }

    /// POST /character
    pub async fn submit_character(&self, data: &Character) -> Result<MessageResponse, ApiError> {
        self.submit(ResourceKind::Character, data).await
    }

    /// PUT /admin/character/{id} with a token, otherwise POST /character.
    pub async fn update_character(
        &self,
        id: CharacterId,
        data: &Character,
        token: Option<&str>,
    ) -> Result<MessageResponse, ApiError> {
        self.update(ResourceKind::Character, id, data, token).await
    }

    /* ----------------------------------------------------------------------
    Makers
    ---------------------------------------------------------------------- */

    /// GET /makers
    pub async fn list_makers(&self) -> Result<Vec<Maker>, ApiError> {
        self.list(ResourceKind::Maker).await
    }

    /// GET /maker/{id}
    pub async fn get_maker(&self, id: MakerId) -> Result<Maker, ApiError> {
        self.get(ResourceKind::Maker, id).await
    }

    /// POST /maker
    pub async fn submit_maker(&self, data: &Maker) -> Result<MessageResponse, ApiError> {
        self.submit(ResourceKind::Maker, data).await
    }

    /// PUT /admin/maker/{id} with a token, otherwise POST /maker.
    pub async fn update_maker(
        &self,
        id: MakerId,
        data: &Maker,
        token: Option<&str>,
    ) -> Result<MessageResponse, ApiError> {
        self.update(ResourceKind::Maker, id, data, token).await
    }

    /* ----------------------------------------------------------------------
    Crawlers
    ---------------------------------------------------------------------- */

    /// POST /crawl/twitter/user
    pub async fn crawl_twitter_user(&self, username: &str) -> Result<TwitterUserCrawl, ApiError> {
        let options = RequestOptions::json(Method::POST, &TwitterUserRequest { username })?;
        self.http.fetch("/crawl/twitter/user", options).await
    }

    /// POST /crawl/twitter/tweet
    pub async fn crawl_twitter_tweet(
        &self,
        username: &str,
        tweet_id: &str,
    ) -> Result<TwitterTweetCrawl, ApiError> {
        let body = TwitterTweetRequest { username, tweet_id };
        let options = RequestOptions::json(Method::POST, &body)?;
        self.http.fetch("/crawl/twitter/tweet", options).await
    }

    /// POST /crawl/image
    pub async fn crawl_image(&self, image_url: &str) -> Result<ImageCharacterCrawl, ApiError> {
        let options = RequestOptions::json(Method::POST, &ImageCrawlRequest { image_url })?;
        self.http.fetch("/crawl/image", options).await
    }

    /* ----------------------------------------------------------------------
    Admin
    ---------------------------------------------------------------------- */

    /// POST /admin/login
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let options = RequestOptions::json(Method::POST, credentials)?;
        self.http.fetch("/admin/login", options).await
    }

    /// GET /admin/pending/kigers
    pub async fn pending_kigers(&self, token: &str) -> Result<Vec<PendingKiger>, ApiError> {
        self.pending(ResourceKind::Kiger, token).await
    }

    /// GET /admin/pending/characters
    pub async fn pending_characters(
        &self,
        token: &str,
    ) -> Result<Vec<PendingCharacter>, ApiError> {
        self.pending(ResourceKind::Character, token).await
    }

    /// GET /admin/pending/makers
    pub async fn pending_makers(&self, token: &str) -> Result<Vec<PendingMaker>, ApiError> {
        self.pending(ResourceKind::Maker, token).await
    }

    /// POST /admin/review/{kind}/{id}
    pub async fn review(
        &self,
        token: &str,
        kind: ResourceKind,
        id: &str,
        action: ReviewAction,
    ) -> Result<ReviewResponse, ApiError> {
        let endpoint = format!("/admin/review{}", kind.detail_path(id));
        let options = RequestOptions::json(Method::POST, &ReviewRequest { action })?;
        self.http.fetch_with_auth(&endpoint, token, options).await
    }

    // ---- private helpers ----

    async fn list<T: DeserializeOwned>(&self, kind: ResourceKind) -> Result<Vec<T>, ApiError> {
        let endpoint = format!("/{}", kind.plural());
        self.http.fetch(&endpoint, RequestOptions::get()).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        id: impl fmt::Display,
    ) -> Result<T, ApiError> {
        self.http
            .fetch(&kind.detail_path(id), RequestOptions::get())
            .await
    }

    async fn submit<B: Serialize>(
        &self,
        kind: ResourceKind,
        data: &B,
    ) -> Result<MessageResponse, ApiError> {
        let endpoint = format!("/{}", kind.singular());
        let options = RequestOptions::json(Method::POST, data)?;
        self.http.fetch(&endpoint, options).await
    }

    /// Without a (non-empty) token an update can only queue a submission
    /// for review.
    async fn update<B: Serialize>(
        &self,
        kind: ResourceKind,
        id: impl fmt::Display,
        data: &B,
        token: Option<&str>,
    ) -> Result<MessageResponse, ApiError> {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => {
                let endpoint = format!("/admin{}", kind.detail_path(&id));
                let options = RequestOptions::json(Method::PUT, data)?;
                self.http.fetch_with_auth(&endpoint, token, options).await
            }
            None => {
                tracing::debug!(%kind, %id, "No token, submitting update for review");
                self.submit(kind, data).await
            }
        }
    }

    async fn pending<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        token: &str,
    ) -> Result<Vec<T>, ApiError> {
        let endpoint = format!("/admin/pending/{}", kind.plural());
        self.http
            .fetch_with_auth(&endpoint, token, RequestOptions::get())
            .await
    }
}
