//! A home page tied to a mount lifetime.
//!
//! Mounting starts the recipe fetch on the tokio runtime. The page applies the
//! result when [`MountedPage::settle`] is awaited. Dropping the mounted page
//! aborts a fetch that is still in flight, so a late response never reaches a
//! page that is gone.

use std::sync::Arc;

use log::{debug, warn};
use tokio::task::JoinHandle;

use crate::error::HomeError;
use crate::fetchers::RecipeSource;
use crate::model::Recipe;
use crate::page::HomePage;

pub struct MountedPage {
    page: HomePage,
    pending: Option<JoinHandle<Result<Vec<Recipe>, HomeError>>>,
}

impl MountedPage {
    /// Put `page` in the loading phase and start fetching from `source`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(mut page: HomePage, source: Arc<dyn RecipeSource>) -> Self {
        let pending = if page.begin_load() {
            Some(tokio::spawn(async move { source.fetch_all().await }))
        } else {
            None
        };

        Self { page, pending }
    }

    /// Wait for the fetch started at mount and apply its result.
    ///
    /// Returns immediately once the page has settled. Dropping this future
    /// early keeps the fetch running for a later call.
    pub async fn settle(&mut self) -> &mut HomePage {
        if let Some(handle) = self.pending.as_mut() {
            let joined = handle.await;
            self.pending = None;

            let result = joined.unwrap_or_else(|e| {
                warn!("Recipe load task failed: {}", e);
                Err(HomeError::Cancelled)
            });
            self.page.finish_load(result);
        }
        &mut self.page
    }

    /// Whether the fetch started at mount is still outstanding
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn page(&self) -> &HomePage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut HomePage {
        &mut self.page
    }

    /// Tear the page down, aborting any fetch still in flight.
    pub fn unmount(self) {}
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Unmounting with recipe load in flight, aborting it");
            handle.abort();
        }
    }
}
