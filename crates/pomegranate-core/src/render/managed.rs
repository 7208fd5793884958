//! Managed list fragment

use super::escape;
use crate::types::ManagedMovie;

/// Renders the managed movie list
///
/// One `<div>` per entry with the text `title (identifier)`. An empty
/// list renders an empty fragment, clearing the container.
pub fn managed_list(items: &[ManagedMovie]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "<div>{} ({})</div>",
                escape(&item.title),
                escape(&item.imdb_id)
            )
        })
        .collect()
}
