//! Search & list controller
//!
//! The top-level component the shell binds to page events. Composes the
//! gateway, the search coordinator, and the renderer behind four
//! operations: keystroke, clear, add, and managed-list refresh.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::client::CatalogClient;
use crate::coordinator::{DEBOUNCE, SearchCoordinator};
use crate::render;
use crate::view::{Region, Surface};

/// Optional controller capabilities
///
/// The two historical page variants differ only in whether results
/// carry add buttons and whether a clear-search control exists; both
/// are modeled as flags on one controller.
#[derive(Debug, Clone, Copy)]
pub struct Features {
    /// Render an `add` button on search results that have an identifier
    pub add_button: bool,
    /// Enable the clear-search control
    pub clear_button: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            add_button: true,
            clear_button: true,
        }
    }
}

/// The search & list controller
///
/// All operations degrade gracefully: network and rendering failures
/// are logged and leave the page in its current state. Nothing panics.
pub struct CatalogController {
    client: Arc<CatalogClient>,
    surface: Arc<dyn Surface>,
    features: Features,
    search: SearchCoordinator,
}

impl CatalogController {
    /// Create a controller with the standard 500 ms search debounce
    pub fn new(client: CatalogClient, surface: Arc<dyn Surface>, features: Features) -> Self {
        Self::with_debounce(client, surface, features, DEBOUNCE)
    }

    /// Create a controller with a custom search debounce
    pub fn with_debounce(
        client: CatalogClient,
        surface: Arc<dyn Surface>,
        features: Features,
        debounce: Duration,
    ) -> Self {
        let client = Arc::new(client);
        let search = SearchCoordinator::with_debounce(
            Arc::clone(&client),
            Arc::clone(&surface),
            features.add_button,
            debounce,
        );

        Self {
            client,
            surface,
            features,
            search,
        }
    }

    /// Startup hook: log and load the managed list
    ///
    /// The shell runs this once when the page becomes ready.
    pub async fn init(&self) {
        info!("Pomegranate initializing...");
        self.refresh_managed_list().await;
    }

    /// Forward a keystroke from the title input to the debounced search
    pub async fn keystroke(&self, text: &str) {
        self.search.on_keystroke(text).await;
    }

    /// Clear the search results and blank the title input
    pub async fn clear_search(&self) {
        if !self.features.clear_button {
            debug!("clear-search control is disabled");
            return;
        }

        self.search.execute("").await;

        if let Err(err) = self.surface.set_value(Region::TitleInput, "") {
            error!("cannot clear the movie title input: {}", err);
        }
    }

    /// Add a movie to the managed catalog by identifier
    ///
    /// On success the managed list is re-fetched and re-rendered from
    /// scratch; there is no optimistic local insert. Failures are logged
    /// and leave the page untouched.
    pub async fn add_movie(&self, identifier: &str) {
        if !self.features.add_button {
            debug!("add-movie control is disabled");
            return;
        }

        match self.client.add_movie(identifier).await {
            Ok(added) => {
                info!("{}: {}", added.message, added.title);
                self.refresh_managed_list().await;
            }
            Err(err) => warn!("adding movie {:?}: {}", identifier, err),
        }
    }

    /// Re-fetch and re-render the managed movie list
    pub async fn refresh_managed_list(&self) {
        if let Err(err) = self.surface.set_html(Region::ManagedList, render::LOADING) {
            error!("writing managed list placeholder: {}", err);
            return;
        }

        match self.client.list_managed().await {
            Ok(items) => {
                let html = render::managed_list(&items);
                if let Err(err) = self.surface.set_html(Region::ManagedList, &html) {
                    error!("rendering managed list: {}", err);
                }
            }
            // The placeholder stays on screen; only the log sees this.
            Err(err) => warn!("fetching managed list: {}", err),
        }
    }
}
