//! # Listing Page
//!
//! Owns everything one directory page instance needs:
//! 1. The load state of the current activation (loading / loaded / failed)
//! 2. The filter criteria the user has chosen
//! 3. A generation counter that ties fetch results to the activation that
//!    started them
//!
//! Mounting bumps the generation and starts a single fetch. When the fetch
//! resolves, its result is applied only if the generation is unchanged; a
//! teardown or a newer mount in the meantime makes the result stale and it
//! is dropped. Derived output (visible subset, summary, options) is computed
//! on demand by [`ListingPage::view`].

use std::sync::Arc;

use data_loader::{LoadError, PerkCollection, PerkSource};
use parking_lot::Mutex;
use pipeline::{FilterCriteria, FilterPipeline, MerchantSelection};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::view::{Listing, PageView};

/// Token for one activation; returned by [`ListingPage::mount`].
///
/// [`ListingPage::load`] consumes it, so an activation can fetch only once:
///
/// ```compile_fail
/// # async fn reload(page: &page::ListingPage<data_loader::FilePerkSource>) {
/// let activation = page.mount();
/// page.load(activation).await;
/// page.load(activation).await;
/// # }
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Activation {
    generation: u64,
}

impl Activation {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
enum LoadState {
    Unmounted,
    Loading,
    Loaded(Arc<PerkCollection>),
    Failed(Arc<LoadError>),
}

#[derive(Debug)]
struct PageState {
    generation: u64,
    load: LoadState,
    criteria: FilterCriteria,
}

/// A perk directory page bound to one perk source.
///
/// Cloning is cheap and every clone drives the same page.
pub struct ListingPage<S> {
    source: Arc<S>,
    pipeline: Arc<FilterPipeline>,
    state: Arc<Mutex<PageState>>,
}

impl<S> Clone for ListingPage<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            pipeline: self.pipeline.clone(),
            state: self.state.clone(),
        }
    }
}

impl<S: PerkSource + 'static> ListingPage<S> {
    /// Create an unmounted page using the standard filter pipeline.
    pub fn new(source: S) -> Self {
        Self::with_pipeline(source, FilterPipeline::standard())
    }

    pub fn with_pipeline(source: S, pipeline: FilterPipeline) -> Self {
        Self {
            source: Arc::new(source),
            pipeline: Arc::new(pipeline),
            state: Arc::new(Mutex::new(PageState {
                generation: 0,
                load: LoadState::Unmounted,
                criteria: FilterCriteria::default(),
            })),
        }
    }

    /// Start a new activation: enter Loading and reset the criteria.
    ///
    /// Any fetch still in flight from an earlier activation becomes stale.
    pub fn mount(&self) -> Activation {
        let mut state = self.state.lock();
        state.generation += 1;
        state.load = LoadState::Loading;
        state.criteria = FilterCriteria::default();
        info!(
            "Mounted listing page (generation {}, source {})",
            state.generation,
            self.source.name()
        );
        Activation {
            generation: state.generation,
        }
    }

    /// Run the single fetch of `activation` and apply its outcome.
    ///
    /// Returns `false` when the result was discarded because the page was
    /// torn down or remounted while the fetch was pending.
    pub async fn load(&self, activation: Activation) -> bool {
        let result = self.source.fetch_all().await;

        let mut state = self.state.lock();
        if state.generation != activation.generation {
            debug!(
                "Discarding stale fetch result (generation {}, current {})",
                activation.generation, state.generation
            );
            return false;
        }

        state.load = match result {
            Ok(collection) => {
                info!("Loaded {} perks", collection.len());
                LoadState::Loaded(Arc::new(collection))
            }
            Err(err) => {
                warn!("Failed to load perks: {}", err);
                LoadState::Failed(Arc::new(err))
            }
        };
        true
    }

    /// Mount and load inline.
    pub async fn activate(&self) -> bool {
        let activation = self.mount();
        self.load(activation).await
    }

    /// Mount now and load on a background task.
    pub fn spawn_activation(&self) -> JoinHandle<bool> {
        let activation = self.mount();
        let page = self.clone();
        tokio::spawn(async move { page.load(activation).await })
    }

    /// Destroy the current activation's state. Late fetch results are dropped.
    pub fn teardown(&self) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.load = LoadState::Unmounted;
        state.criteria = FilterCriteria::default();
        info!("Tore down listing page (generation {})", state.generation);
    }

    /// Update the title query. Ignored while unmounted.
    pub fn set_name_query(&self, query: impl Into<String>) {
        let mut state = self.state.lock();
        if matches!(state.load, LoadState::Unmounted) {
            debug!("Ignoring name query on unmounted page");
            return;
        }
        state.criteria.name_query = query.into();
    }

    /// Update the merchant selection. Ignored while unmounted.
    pub fn select_merchant(&self, selection: MerchantSelection) {
        let mut state = self.state.lock();
        if matches!(state.load, LoadState::Unmounted) {
            debug!("Ignoring merchant selection on unmounted page");
            return;
        }
        state.criteria.merchant = selection;
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.state.lock().criteria.clone()
    }

    /// Generation of the current activation; 0 before the first mount.
    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    /// Derive the renderer's view from the current base state.
    pub fn view(&self) -> PageView {
        // Snapshot under the lock, derive outside it.
        let (collection, criteria) = {
            let state = self.state.lock();
            match &state.load {
                LoadState::Unmounted => return PageView::Unmounted,
                LoadState::Loading => return PageView::Loading,
                LoadState::Failed(err) => return PageView::Failed(err.clone()),
                LoadState::Loaded(collection) => (collection.clone(), state.criteria.clone()),
            }
        };

        PageView::Ready(Listing::derive(&collection, &criteria, &self.pipeline))
    }
}
