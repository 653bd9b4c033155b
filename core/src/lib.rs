//! Client core for the posts feed: fetching, decoding, and image caching.
//!
//! # Overview
//! Fetches a feed of posts and per-post details from a remote JSON API,
//! classifies every failure into a small `ApiError` taxonomy, and serves
//! post images through a process-wide deduplicating cache. View-state
//! holders for the feed and detail screens consume these capabilities and
//! expose UI-ready projections; everything visual stays with the caller.
//!
//! # Design
//! - Capabilities are traits (`PostsService`, `ImageLoader`, `Transport`)
//!   with one production implementation each and test doubles in tests;
//!   nothing reaches for a global.
//! - All operations are `async fn`s returning exactly once on the caller's
//!   executor. State holders are single-writer and belong on the UI-owning
//!   executor.
//! - Requests are single non-retried GETs with transport-default timeouts.
//!   Feed and detail responses are never cached; only decoded images are.
//! - The mock-server crate speaks the same wire schema from independent
//!   types; integration tests catch drift.

pub mod detail_view;
pub mod endpoints;
pub mod error;
pub mod feed_view;
pub mod http;
pub mod image_loader;
pub mod relative_date;
pub mod service;
pub mod types;

pub use detail_view::{DetailViewState, PostDetailViewModel};
pub use endpoints::Endpoint;
pub use error::ApiError;
pub use feed_view::{FeedState, FeedViewModel, PostCellViewModel};
pub use http::{HttpResponse, ReqwestTransport, Transport, TransportError};
pub use image_loader::{CachedImageLoader, ImageLoader};
pub use relative_date::relative_date_text;
pub use service::{PostsClient, PostsService, DEFAULT_BASE_URL};
pub use types::{FeedResponse, Post, PostDetail, PostDetailResponse};
