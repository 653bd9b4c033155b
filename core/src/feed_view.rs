//! Feed view state: fetch lifecycle, per-post expansion, cell projections.
//!
//! # Design
//! `FeedViewModel` lives on the UI-owning executor and is the only writer
//! of its state; the service capability is injected, so tests drive it with
//! a stub. Expansion flags are keyed by post id in a map that outlives the
//! posts themselves — a re-fetch keeps the flags of every id it brings
//! back. Observers are plain closures fired on every state or projection
//! change, in the order set-then-notify.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::detail_view::PostDetailViewModel;
use crate::image_loader::ImageLoader;
use crate::relative_date::relative_date_text;
use crate::service::PostsService;
use crate::types::Post;

/// Fetch lifecycle of the feed screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// UI-ready projection of one post row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCellViewModel {
    pub id: i64,
    pub title: String,
    pub preview_text: String,
    pub likes_text: String,
    pub date_text: String,
    pub is_expanded: bool,
}

type StateObserver = Box<dyn Fn(&FeedState)>;
type CellsObserver = Box<dyn Fn(&[PostCellViewModel])>;

pub struct FeedViewModel {
    service: Arc<dyn PostsService>,
    posts: Vec<Post>,
    expanded_by_id: HashMap<i64, bool>,
    cells: Vec<PostCellViewModel>,
    state: FeedState,
    pub on_state_changed: Option<StateObserver>,
    pub on_cells_changed: Option<CellsObserver>,
}

impl FeedViewModel {
    pub fn new(service: Arc<dyn PostsService>) -> Self {
        Self {
            service,
            posts: Vec::new(),
            expanded_by_id: HashMap::new(),
            cells: Vec::new(),
            state: FeedState::Idle,
            on_state_changed: None,
            on_cells_changed: None,
        }
    }

    /// One full fetch: Loading, then Loaded with rebuilt cells or Failed
    /// with the error's user-facing message.
    pub async fn load_feed(&mut self) {
        self.set_state(FeedState::Loading);
        let service = Arc::clone(&self.service);
        match service.fetch_feed().await {
            Ok(posts) => {
                self.posts = posts;
                self.rebuild_cells();
                self.set_state(FeedState::Loaded);
            }
            Err(err) => self.set_state(FeedState::Failed(err.to_string())),
        }
    }

    /// Flip one post's expansion flag and re-project. Unknown ids start
    /// collapsed, so the first toggle expands.
    pub fn toggle_expanded(&mut self, post_id: i64) {
        let current = self.expanded_by_id.get(&post_id).copied().unwrap_or(false);
        self.expanded_by_id.insert(post_id, !current);
        self.rebuild_cells();
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn cells(&self) -> &[PostCellViewModel] {
        &self.cells
    }

    /// Detail holder for the row at `index`, sharing this model's service.
    pub fn detail_view_model(
        &self,
        index: usize,
        image_loader: Arc<dyn ImageLoader>,
    ) -> Option<PostDetailViewModel> {
        let post = self.posts.get(index)?;
        Some(PostDetailViewModel::new(
            post.post_id,
            Arc::clone(&self.service),
            image_loader,
        ))
    }

    fn set_state(&mut self, state: FeedState) {
        self.state = state;
        if let Some(observer) = &self.on_state_changed {
            observer(&self.state);
        }
    }

    fn rebuild_cells(&mut self) {
        let now = Utc::now();
        self.cells = self
            .posts
            .iter()
            .map(|post| {
                let date = DateTime::from_timestamp(post.timestamp as i64, 0).unwrap_or_default();
                PostCellViewModel {
                    id: post.post_id,
                    title: post.title.clone(),
                    preview_text: post.preview_text.clone(),
                    likes_text: format!("❤️ {}", post.likes_count),
                    date_text: relative_date_text(date, now),
                    is_expanded: self.expanded_by_id.get(&post.post_id).copied().unwrap_or(false),
                }
            })
            .collect();
        if let Some(observer) = &self.on_cells_changed {
            observer(&self.cells);
        }
    }
}
