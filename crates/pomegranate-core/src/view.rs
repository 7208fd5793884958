//! Rendering surface abstraction
//!
//! The controller never touches the page directly; it writes rendered
//! fragments into named regions through the [`Surface`] trait. The
//! desktop shell forwards fragments to the webview, tests collect them.

use crate::error::Result;

/// Page regions the controller writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Container for transient search results
    SearchResults,
    /// Container for the managed movie list
    ManagedList,
    /// The movie title search input
    TitleInput,
}

impl Region {
    /// The id of the page element backing this region
    pub fn element_id(self) -> &'static str {
        match self {
            Region::SearchResults => "movie-search-results",
            Region::ManagedList => "movies-list",
            Region::TitleInput => "movie-title",
        }
    }
}

/// Sink for rendered output
///
/// Implementations replace a region's content wholesale on every call;
/// there is no incremental diffing. A region whose backing element is
/// missing is reported as [`crate::CatalogError::ElementNotFound`];
/// callers log it and abort the operation without crashing.
pub trait Surface: Send + Sync {
    /// Replace the HTML content of `region`
    fn set_html(&self, region: Region, html: &str) -> Result<()>;

    /// Replace the value of the input element backing `region`
    fn set_value(&self, region: Region, value: &str) -> Result<()>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_element_ids() {
        assert_eq!(Region::SearchResults.element_id(), "movie-search-results");
        assert_eq!(Region::ManagedList.element_id(), "movies-list");
        assert_eq!(Region::TitleInput.element_id(), "movie-title");
    }
}
