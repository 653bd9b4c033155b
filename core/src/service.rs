//! Feed and detail fetching with outcome classification.
//!
//! # Design
//! `PostsClient` is stateless apart from its base URL and transport handle.
//! Each operation resolves the absolute URL, performs one GET, and
//! classifies the outcome into `ApiError` — the classification order is
//! the contract: URL composition, transport, status, body presence,
//! decoding. Completion is the returned future resolving exactly once on
//! the caller's executor; there is no retry, no response caching, and no
//! coordination between calls.

use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info};
use reqwest::Url;

use crate::endpoints::Endpoint;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{FeedResponse, Post, PostDetail, PostDetailResponse};

/// Base of the production API.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/anton-natife/jsons/master/api/";

/// Capability to fetch the feed and per-post details.
#[async_trait]
pub trait PostsService: Send + Sync {
    /// Posts in server order, exactly as decoded.
    async fn fetch_feed(&self) -> Result<Vec<Post>, ApiError>;

    /// Detail for one post. Whether `id` exists is the server's call; an
    /// unknown id comes back as `InvalidResponse` via the 404 status.
    async fn fetch_post_detail(&self, id: i64) -> Result<PostDetail, ApiError>;
}

/// Production `PostsService` over an injected transport.
pub struct PostsClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl PostsClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL)
    }

    /// The base is kept as a string and composed per request, so a
    /// malformed base surfaces as `InvalidUrl` on the call instead of at
    /// construction.
    pub fn with_base_url(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            transport,
        }
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, endpoint.path());
        Url::parse(&raw).map_err(|_| ApiError::InvalidUrl(raw))
    }

    /// One GET plus everything that can go wrong before decoding.
    async fn get_checked(&self, endpoint: Endpoint, what: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint_url(endpoint)?;

        let response = self.transport.get(&url).await.map_err(|e| {
            error!("Network error while fetching {what}: {e}");
            ApiError::Network(e.to_string())
        })?;

        if !(200..300).contains(&response.status) {
            error!(
                "HTTP error while fetching {what}. Status code: {}",
                response.status
            );
            return Err(ApiError::InvalidResponse);
        }

        if response.body.is_empty() {
            error!("No data received while fetching {what}");
            return Err(ApiError::InvalidResponse);
        }

        Ok(response.body)
    }
}

#[async_trait]
impl PostsService for PostsClient {
    async fn fetch_feed(&self) -> Result<Vec<Post>, ApiError> {
        let body = self.get_checked(Endpoint::Feed, "feed").await?;
        let feed: FeedResponse = serde_json::from_slice(&body).map_err(|e| {
            error!("Decoding error while parsing feed: {e}");
            ApiError::Decoding(e.to_string())
        })?;
        info!("Successfully decoded feed with {} posts", feed.posts.len());
        Ok(feed.posts)
    }

    async fn fetch_post_detail(&self, id: i64) -> Result<PostDetail, ApiError> {
        let body = self
            .get_checked(Endpoint::PostDetail(id), "post detail")
            .await?;
        let response: PostDetailResponse = serde_json::from_slice(&body).map_err(|e| {
            error!("Decoding error while parsing post detail: {e}");
            ApiError::Decoding(e.to_string())
        })?;
        let detail = response.post;
        info!("Successfully decoded detail for post {}", detail.post_id);
        Ok(detail)
    }
}
