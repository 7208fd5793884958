//! Search results fragment
//!
//! Builds the list markup for transient search results.

use super::escape;
use crate::types::Movie;

/// Literal placeholder for an empty result set
pub const NO_RESULTS: &str = "no results";

/// Renders search results as a list fragment
///
/// Every movie becomes one `<li>` carrying the canonical title, the
/// catalog identifier, and the release date. When `add_enabled` is set,
/// movies with an identifier also get an `add` button tagged with
/// `data-imdb-id` for the shell to wire to the add workflow. Entries
/// keep server order and are not deduplicated.
///
/// An empty slice renders the literal text [`NO_RESULTS`]; the gateway
/// already folds a `null` server payload into an empty slice.
pub fn search_results(movies: &[Movie], add_enabled: bool) -> String {
    if movies.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut html = String::from("<ul>");
    for movie in movies {
        html.push_str("<li class=\"movie-search-result\">");
        html.push_str(&format!(
            "<span class=\"title\">{}</span>",
            escape(movie.canonical_title())
        ));
        html.push_str(&format!(
            "<span class=\"imdb-id\">{}</span>",
            escape(&movie.imdb_id)
        ));
        html.push_str(&format!(
            "<span class=\"release-date\">{}</span>",
            escape(&movie.released)
        ));
        if add_enabled && let Some(id) = movie.imdb_id() {
            html.push_str(&format!(
                "<button class=\"add-movie\" data-imdb-id=\"{}\">add</button>",
                escape(id)
            ));
        }
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, imdb_id: &str, released: &str) -> Movie {
        Movie {
            titles: vec![title.to_string()],
            released: released.to_string(),
            imdb_id: imdb_id.to_string(),
            ..Movie::default()
        }
    }

    #[test]
    fn test_empty_results_render_placeholder() {
        assert_eq!(search_results(&[], true), "no results");
        assert_eq!(search_results(&[], false), "no results");
    }

    #[test]
    fn test_single_result_entry() {
        let movies = vec![movie("Inception", "tt1375666", "2010-07-16")];
        let html = search_results(&movies, false);

        assert!(html.starts_with("<ul>"));
        assert!(html.ends_with("</ul>"));
        assert!(html.contains("<li class=\"movie-search-result\">"));
        assert!(html.contains("<span class=\"title\">Inception</span>"));
        assert!(html.contains("<span class=\"imdb-id\">tt1375666</span>"));
        assert!(html.contains("<span class=\"release-date\">2010-07-16</span>"));
    }

    #[test]
    fn test_add_button_when_enabled() {
        let movies = vec![movie("Inception", "tt1375666", "2010-07-16")];
        let html = search_results(&movies, true);
        assert!(html.contains("<button class=\"add-movie\" data-imdb-id=\"tt1375666\">add</button>"));
    }

    #[test]
    fn test_no_add_button_when_disabled() {
        let movies = vec![movie("Inception", "tt1375666", "2010-07-16")];
        let html = search_results(&movies, false);
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_no_add_button_without_identifier() {
        let movies = vec![movie("Obscure", "", "1967-01-01")];
        let html = search_results(&movies, true);
        assert!(!html.contains("<button"));
        assert!(html.contains("<span class=\"imdb-id\"></span>"));
    }

    #[test]
    fn test_order_preserved_no_dedup() {
        let movies = vec![
            movie("Alien", "tt0078748", "1979-05-25"),
            movie("Aliens", "tt0090605", "1986-07-18"),
            movie("Alien", "tt0078748", "1979-05-25"),
        ];
        let html = search_results(&movies, false);

        assert_eq!(html.matches("<li").count(), 3);
        let first = html.find("tt0078748").unwrap();
        let second = html.find("tt0090605").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_title_is_escaped() {
        let movies = vec![movie("<script>alert(1)</script>", "tt0000001", "2000-01-01")];
        let html = search_results(&movies, false);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
