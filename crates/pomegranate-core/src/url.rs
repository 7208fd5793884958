//! URL helper functions for the movie API
//!
//! Builds the request paths for the three catalog endpoints.

/// Path of the managed movie list endpoint
pub const LIST_PATH: &str = "/movie/list";

/// Builds the search path for a given query
///
/// URL encodes the query and appends it as the `q` parameter.
///
/// # Example
/// ```
/// use pomegranate_core::url::search_path;
/// let path = search_path("doctor who");
/// assert_eq!(path, "/movie/search?q=doctor%20who");
/// ```
pub fn search_path(query: &str) -> String {
    format!("/movie/search?q={}", urlencoding::encode(query))
}

/// Builds the add path for a given movie identifier
///
/// URL encodes the identifier and appends it as the `identifier`
/// parameter.
///
/// # Example
/// ```
/// use pomegranate_core::url::add_path;
/// let path = add_path("tt1375666");
/// assert_eq!(path, "/movie/add?identifier=tt1375666");
/// ```
pub fn add_path(identifier: &str) -> String {
    format!("/movie/add?identifier={}", urlencoding::encode(identifier))
}
