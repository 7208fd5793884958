//! Pomegranate Catalog UI Core
//!
//! Client-side search and list controller for the Pomegranate movie
//! catalog manager: debounced search against the catalog server,
//! add-by-identifier, and managed-list rendering.
//!
//! # Overview
//!
//! The crate is organized around four pieces:
//! - A thin HTTP gateway ([`CatalogClient`]) over the three server
//!   endpoints (`/movie/search`, `/movie/add`, `/movie/list`).
//! - A search coordinator that debounces keystrokes (500 ms quiet
//!   period) and drops responses that lose the race against a newer
//!   query.
//! - A renderer producing HTML fragments for the search results and the
//!   managed list.
//! - A [`Surface`] trait the controller writes fragments through; the
//!   desktop shell forwards them to the webview.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use pomegranate_core::{
//!     CatalogClient, CatalogController, Features, Region, Result, Surface,
//! };
//!
//! struct Console;
//!
//! impl Surface for Console {
//!     fn set_html(&self, region: Region, html: &str) -> Result<()> {
//!         println!("#{} <- {}", region.element_id(), html);
//!         Ok(())
//!     }
//!
//!     fn set_value(&self, region: Region, value: &str) -> Result<()> {
//!         println!("#{} value <- {:?}", region.element_id(), value);
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let controller =
//!         CatalogController::new(CatalogClient::new()?, Arc::new(Console), Features::default());
//!
//!     // Page load: render the managed list.
//!     controller.init().await;
//!
//!     // Typing in the title input; the search runs 500 ms after the
//!     // last keystroke.
//!     controller.keystroke("incep").await;
//!     controller.keystroke("inception").await;
//!
//!     // Accept a result into the managed catalog.
//!     controller.add_movie("tt1375666").await;
//!     Ok(())
//! }
//! ```

mod client;
mod controller;
mod coordinator;
mod error;
pub mod render;
mod types;
pub mod url;
mod view;

// Re-export gateway types
pub use client::{CatalogClient, ClientConfig};

// Re-export error types
pub use error::{CatalogError, Result};

// Re-export the controller API
pub use controller::{CatalogController, Features};
pub use coordinator::{DEBOUNCE, SearchCoordinator};

// Re-export data types
pub use types::{ManagedMovie, Movie, MovieAdded, MovieImages};

// Re-export the rendering surface
pub use view::{Region, Surface};
