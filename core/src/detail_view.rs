//! Detail view state: one fetch per activation, best-effort image load.

use std::sync::Arc;

use image::DynamicImage;
use reqwest::Url;

use crate::image_loader::ImageLoader;
use crate::service::PostsService;
use crate::types::PostDetail;

/// Outcome of loading the detail screen.
#[derive(Debug, Clone)]
pub enum DetailViewState {
    Loaded {
        detail: PostDetail,
        /// Present only when the post has an image URL that fetched and
        /// decoded; a missing image is not an error.
        image: Option<Arc<DynamicImage>>,
    },
    Failed(String),
}

pub struct PostDetailViewModel {
    post_id: i64,
    service: Arc<dyn PostsService>,
    image_loader: Arc<dyn ImageLoader>,
}

impl PostDetailViewModel {
    pub fn new(
        post_id: i64,
        service: Arc<dyn PostsService>,
        image_loader: Arc<dyn ImageLoader>,
    ) -> Self {
        Self {
            post_id,
            service,
            image_loader,
        }
    }

    pub fn post_id(&self) -> i64 {
        self.post_id
    }

    /// Fetch the detail; on success, request the image if the payload names
    /// one. Detail is not cached — every activation fetches again.
    pub async fn load(&self) -> DetailViewState {
        match self.service.fetch_post_detail(self.post_id).await {
            Ok(detail) => {
                let image = match detail.post_image.as_deref().and_then(|s| Url::parse(s).ok()) {
                    Some(url) => self.image_loader.load_image(&url).await,
                    None => None,
                };
                DetailViewState::Loaded { detail, image }
            }
            Err(err) => DetailViewState::Failed(err.to_string()),
        }
    }
}
