//! HTML fragment builders
//!
//! Turns wire records into the markup fragments the shell injects into
//! the page. Fragments replace their container's content wholesale on
//! every render.

pub mod managed;
pub mod search;

pub use managed::managed_list;
pub use search::{NO_RESULTS, search_results};

/// Placeholder shown while a request is in flight
pub const LOADING: &str = "Loading...";

/// Escapes text for interpolation into markup text and attribute
/// positions. Titles and dates come from the external catalog and are
/// not trusted markup.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("Inception"), "Inception");
    }

    #[test]
    fn test_escape_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Fast & Furious"</b>"#),
            "&lt;b&gt;&quot;Fast &amp; Furious&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_single_quote() {
        assert_eq!(escape("Ocean's Eleven"), "Ocean&#39;s Eleven");
    }
}
