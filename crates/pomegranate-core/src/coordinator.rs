//! Debounced search coordination
//!
//! One search session is live at a time. Each keystroke cancels the
//! pending quiet-period timer and schedules a new one, so a burst of
//! typing executes a single search for its final value. Responses are
//! rendered only while their query is still the most recently requested
//! one; earlier-issued responses that arrive late are dropped. In-flight
//! requests are never aborted, their results just lose the comparison.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::client::CatalogClient;
use crate::render;
use crate::view::{Region, Surface};

/// Quiet period between the last keystroke and search execution
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Debounces keystrokes and serializes search result rendering
pub struct SearchCoordinator {
    state: Arc<SearchState>,
    debounce: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

struct SearchState {
    client: Arc<CatalogClient>,
    surface: Arc<dyn Surface>,
    add_button: bool,
    latest_query: Mutex<String>,
}

impl SearchCoordinator {
    /// Create a coordinator with the standard 500 ms quiet period
    pub fn new(client: Arc<CatalogClient>, surface: Arc<dyn Surface>, add_button: bool) -> Self {
        Self::with_debounce(client, surface, add_button, DEBOUNCE)
    }

    /// Create a coordinator with a custom quiet period
    pub fn with_debounce(
        client: Arc<CatalogClient>,
        surface: Arc<dyn Surface>,
        add_button: bool,
        debounce: Duration,
    ) -> Self {
        Self {
            state: Arc::new(SearchState {
                client,
                surface,
                add_button,
                latest_query: Mutex::new(String::new()),
            }),
            debounce,
            pending: Mutex::new(None),
        }
    }

    /// Handle a keystroke in the title input
    ///
    /// Cancels the pending timer, if any, and schedules a search for
    /// `text` once the quiet period elapses with no further keystrokes.
    pub async fn on_keystroke(&self, text: &str) {
        let mut pending = self.pending.lock().await;
        if let Some(timer) = pending.take() {
            timer.abort();
        }

        let state = Arc::clone(&self.state);
        let text = text.to_string();
        let delay = self.debounce;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.execute(&text).await;
        }));
    }

    /// Execute a search immediately, bypassing the debounce timer
    ///
    /// Used by the clear workflow (empty query) and available to shells
    /// that want an explicit search action.
    pub async fn execute(&self, query: &str) {
        self.state.execute(query).await;
    }
}

impl SearchState {
    async fn execute(&self, query: &str) {
        *self.latest_query.lock().await = query.to_string();

        if query.is_empty() {
            if let Err(err) = self.surface.set_html(Region::SearchResults, "") {
                error!("clearing search results: {}", err);
            }
            return;
        }

        if let Err(err) = self.surface.set_html(Region::SearchResults, render::LOADING) {
            error!("writing search placeholder: {}", err);
            return;
        }

        match self.client.search_movies(query).await {
            Ok(movies) => {
                // A newer query may have been issued while this request
                // was in flight; its session owns the results container.
                if *self.latest_query.lock().await != query {
                    debug!("discarding stale search response for {:?}", query);
                    return;
                }

                let html = render::search_results(&movies, self.add_button);
                if let Err(err) = self.surface.set_html(Region::SearchResults, &html) {
                    error!("rendering search results: {}", err);
                }
            }
            // The placeholder stays on screen until the next search.
            Err(err) => error!("movie search for {:?} failed: {}", query, err),
        }
    }
}
