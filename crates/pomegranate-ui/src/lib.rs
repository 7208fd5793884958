//! Pomegranate Tauri Integration
//!
//! Exposes the catalog controller to a webview frontend. The plugin
//! manages one controller instance, runs the startup managed-list load,
//! and forwards rendered fragments to the page as events.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(pomegranate_ui::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Wire the page to the plugin from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//! import { listen } from '@tauri-apps/api/event';
//!
//! // Apply rendered fragments to the elements the controller targets
//! // (#movie-title, #movie-search-results, #movies-list).
//! await listen('pomegranate://set-html', ({ payload }) => {
//!   document.getElementById(payload.element).innerHTML = payload.content;
//! });
//! await listen('pomegranate://set-value', ({ payload }) => {
//!   document.getElementById(payload.element).value = payload.content;
//! });
//!
//! // Input bindings.
//! document.getElementById('movie-title').addEventListener('keyup', (event) =>
//!   invoke('plugin:pomegranate|search_keystroke', { text: event.target.value }));
//! document.getElementById('clear-search').addEventListener('click', () =>
//!   invoke('plugin:pomegranate|clear_search'));
//! document.getElementById('movie-search-results').addEventListener('click', (event) => {
//!   const id = event.target.dataset?.imdbId;
//!   if (id) invoke('plugin:pomegranate|add_movie', { identifier: id });
//! });
//! ```

use std::sync::Arc;

use pomegranate_core::{
    CatalogClient, CatalogController, CatalogError, Features, Region, Surface,
};
use serde::Serialize;
use tauri::{
    AppHandle, Emitter, Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;

/// Event carrying a rendered HTML fragment for a page element
pub const SET_HTML_EVENT: &str = "pomegranate://set-html";

/// Event carrying a new value for an input element
pub const SET_VALUE_EVENT: &str = "pomegranate://set-value";

/// Payload of [`SET_HTML_EVENT`] and [`SET_VALUE_EVENT`]
#[derive(Debug, Clone, Serialize)]
pub struct FragmentPayload {
    /// id of the element to update
    pub element: &'static str,
    /// New innerHTML, or input value for [`SET_VALUE_EVENT`]
    pub content: String,
}

/// Surface implementation backed by webview events
///
/// Each write becomes one event; the frontend applies it to the element
/// named in the payload. An emit failure means no webview is around to
/// hold the element, which the controller treats like a missing region.
struct WebviewSurface<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> WebviewSurface<R> {
    fn forward(&self, event: &str, region: Region, content: &str) -> pomegranate_core::Result<()> {
        let payload = FragmentPayload {
            element: region.element_id(),
            content: content.to_string(),
        };
        self.app
            .emit(event, payload)
            .map_err(|_| CatalogError::ElementNotFound(region.element_id().to_string()))
    }
}

impl<R: Runtime> Surface for WebviewSurface<R> {
    fn set_html(&self, region: Region, html: &str) -> pomegranate_core::Result<()> {
        self.forward(SET_HTML_EVENT, region, html)
    }

    fn set_value(&self, region: Region, value: &str) -> pomegranate_core::Result<()> {
        self.forward(SET_VALUE_EVENT, region, value)
    }
}

/// Managed state holding the catalog controller
///
/// The controller is internally synchronized, so commands share it
/// through a plain Arc.
pub struct ControllerState {
    pub(crate) controller: Arc<CatalogController>,
}

/// Initialize the pomegranate plugin with default features
///
/// Both the add buttons and the clear-search control are enabled.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    init_with(Features::default())
}

/// Initialize the pomegranate plugin with explicit features
///
/// # Example
/// ```ignore
/// // Search-only page: no add buttons, no clear control.
/// tauri::Builder::default()
///     .plugin(pomegranate_ui::init_with(pomegranate_core::Features {
///         add_button: false,
///         clear_button: false,
///     }))
/// ```
pub fn init_with<R: Runtime>(features: Features) -> TauriPlugin<R> {
    Builder::new("pomegranate")
        .invoke_handler(tauri::generate_handler![
            commands::search_keystroke,
            commands::clear_search,
            commands::add_movie,
            commands::refresh_movie_list
        ])
        .setup(move |app, _api| {
            let surface = Arc::new(WebviewSurface { app: app.clone() });
            let client = CatalogClient::new().map_err(Box::<dyn std::error::Error>::from)?;
            let controller = Arc::new(CatalogController::new(client, surface, features));

            app.manage(ControllerState {
                controller: Arc::clone(&controller),
            });

            // Page-load behavior: render the managed list once at startup.
            tauri::async_runtime::spawn(async move { controller.init().await });

            Ok(())
        })
        .build()
}
