//! Best-effort image fetching with a process-wide cache.
//!
//! # Design
//! The cache is the only shared mutable state in the crate; all mutation
//! happens under one async mutex, while the fetches themselves run on the
//! transport's workers. Failures of any kind collapse to `None` — a missing
//! image is a degraded state, not an error worth surfacing. Concurrent
//! misses for the same URL each fetch; the later insert overwrites the
//! earlier one with an identical image.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use image::DynamicImage;
use log::debug;
use reqwest::Url;
use tokio::sync::Mutex;
use tokio::task;

use crate::http::Transport;

const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Capability to load an image, best effort.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// The decoded image, or `None` on any failure. A previously served URL
    /// may miss again later; entries can be evicted at any time.
    async fn load_image(&self, url: &Url) -> Option<Arc<DynamicImage>>;
}

/// url → decoded image, bounded by dropping the oldest-inserted entry.
struct ImageCache {
    entries: HashMap<Url, Arc<DynamicImage>>,
    order: VecDeque<Url>,
    capacity: usize,
}

impl ImageCache {
    fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    fn get(&self, url: &Url) -> Option<Arc<DynamicImage>> {
        self.entries.get(url).cloned()
    }

    fn insert(&mut self, url: Url, image: Arc<DynamicImage>) {
        if self.entries.insert(url.clone(), image).is_some() {
            return;
        }
        self.order.push_back(url);
        while self.entries.len() > self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }
}

/// Production `ImageLoader` over an injected transport.
pub struct CachedImageLoader {
    transport: Arc<dyn Transport>,
    cache: Mutex<ImageCache>,
}

impl CachedImageLoader {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_capacity(transport, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(transport: Arc<dyn Transport>, capacity: usize) -> Self {
        Self {
            transport,
            cache: Mutex::new(ImageCache::new(capacity)),
        }
    }
}

#[async_trait]
impl ImageLoader for CachedImageLoader {
    async fn load_image(&self, url: &Url) -> Option<Arc<DynamicImage>> {
        if let Some(cached) = self.cache.lock().await.get(url) {
            debug!("image cache hit for {url}");
            // A hit is still delivered on a later turn, like a miss.
            task::yield_now().await;
            return Some(cached);
        }

        let response = self.transport.get(url).await.ok()?;
        let image = image::load_from_memory(&response.body).ok()?;
        let image = Arc::new(image);
        self.cache
            .lock()
            .await
            .insert(url.clone(), Arc::clone(&image));
        Some(image)
    }
}
