//! Error types for the catalog controller
//!
//! Provides the error enum shared by the gateway, coordinator, and
//! rendering surface, with Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all catalog controller operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request or response decoding failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Expected page element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid movie identifier provided
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

impl Serialize for CatalogError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
