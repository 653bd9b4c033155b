//! Test server speaking the posts API's wire schema.
//!
//! # Design
//! Serves a deterministic seeded dataset over the same three routes the
//! production service exposes. DTOs are defined independently from the
//! core crate; integration tests catch schema drift. Image requests bump a
//! shared counter so tests can prove a cached load never reached the
//! network.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize)]
pub struct PostDoc {
    #[serde(rename = "postId")]
    pub post_id: i64,
    /// Spelled the way the real API spells it.
    #[serde(rename = "timeshamp")]
    pub timestamp: f64,
    pub title: String,
    pub preview_text: String,
    pub likes_count: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct PostDetailDoc {
    #[serde(rename = "postId")]
    pub post_id: i64,
    #[serde(rename = "timeshamp")]
    pub timestamp: f64,
    pub title: String,
    pub text: String,
    #[serde(rename = "postImage")]
    pub post_image: Option<String>,
    pub likes_count: u32,
}

#[derive(Serialize)]
struct FeedDoc {
    posts: Vec<PostDoc>,
}

#[derive(Serialize)]
struct DetailDoc {
    post: PostDetailDoc,
}

/// Everything the server answers with.
pub struct MockData {
    pub posts: Vec<PostDoc>,
    pub details: HashMap<i64, PostDetailDoc>,
}

impl MockData {
    /// Three posts; the first detail carries an image under `image_base`
    /// (the server's own address in tests), the second has none.
    pub fn seeded(image_base: &str) -> Self {
        let posts = vec![
            PostDoc {
                post_id: 1,
                timestamp: 1575655535.0,
                title: "Voluptatem officia aut".to_string(),
                preview_text: "Asperiores et quo perspiciatis ipsam.".to_string(),
                likes_count: 18,
            },
            PostDoc {
                post_id: 2,
                timestamp: 1575125300.0,
                title: "Quia reiciendis".to_string(),
                preview_text: "Autem sequi sed repellendus.".to_string(),
                likes_count: 0,
            },
            PostDoc {
                post_id: 3,
                timestamp: 1574000000.0,
                title: "Dolorem eum".to_string(),
                preview_text: "Rerum ut sint.".to_string(),
                likes_count: 441,
            },
        ];

        let mut details = HashMap::new();
        for post in &posts {
            details.insert(
                post.post_id,
                PostDetailDoc {
                    post_id: post.post_id,
                    timestamp: post.timestamp,
                    title: post.title.clone(),
                    text: format!("{} Full body of post {}.", post.preview_text, post.post_id),
                    post_image: (post.post_id == 1)
                        .then(|| format!("{image_base}/images/1.png")),
                    likes_count: post.likes_count,
                },
            );
        }

        Self { posts, details }
    }
}

#[derive(Clone)]
pub struct AppState {
    data: Arc<MockData>,
    /// Hits on `/images/`, readable by tests holding a clone of the state.
    pub image_requests: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(data: MockData) -> Self {
        Self {
            data: Arc::new(data),
            image_requests: Arc::new(AtomicUsize::new(0)),
        }
    }
}

pub fn app(data: MockData) -> Router {
    app_with_state(AppState::new(data))
}

pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/api/main.json", get(feed))
        .route("/api/posts/{file}", get(post_detail))
        .route("/images/{file}", get(image))
        .with_state(state)
}

pub async fn run(listener: TcpListener, data: MockData) -> Result<(), std::io::Error> {
    run_with_state(listener, AppState::new(data)).await
}

pub async fn run_with_state(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn feed(State(state): State<AppState>) -> Json<FeedDoc> {
    Json(FeedDoc {
        posts: state.data.posts.clone(),
    })
}

async fn post_detail(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Json<DetailDoc>, StatusCode> {
    let id = file
        .strip_suffix(".json")
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(StatusCode::NOT_FOUND)?;
    state
        .data
        .details
        .get(&id)
        .cloned()
        .map(|post| Json(DetailDoc { post }))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn image(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let id = file
        .strip_suffix(".png")
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(StatusCode::NOT_FOUND)?;
    state.image_requests.fetch_add(1, Ordering::SeqCst);
    Ok(([(header::CONTENT_TYPE, "image/png")], png_for(id)))
}

/// A small solid-color PNG whose shade depends on the id.
fn png_for(id: i64) -> Vec<u8> {
    let shade = (id as u8).wrapping_mul(40);
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        8,
        8,
        image::Rgba([shade, 96, 160, 255]),
    ));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageOutputFormat::Png)
        .expect("png encoding to memory");
    buf.into_inner()
}
