//! Wire types for the Pomegranate movie API
//!
//! Mirrors the JSON payloads served by the catalog backend. Fields the
//! server omits deserialize to their defaults, and unknown fields are
//! ignored, so the client stays tolerant of server-side additions.

use serde::{Deserialize, Serialize};

/// A single movie entry from a `/movie/search` response
///
/// Search results are immutable snapshots; they are fetched fresh for
/// every query and never persisted on the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display titles, ordered; the first one is canonical
    #[serde(default)]
    pub titles: Vec<String>,

    /// Release date as text, e.g. "2010-07-16"
    #[serde(default)]
    pub released: String,

    /// Runtime in minutes
    #[serde(default)]
    pub runtime: i32,

    /// External catalog identifier (e.g. "tt1375666"); empty string when
    /// the catalog has none for this movie
    #[serde(default)]
    pub imdb_id: String,

    /// Numeric rating-service identifier
    #[serde(default)]
    pub tmdb_id: i32,

    /// Release year
    #[serde(default)]
    pub year: i32,

    /// Genre tags
    #[serde(default)]
    pub genres: Vec<String>,

    /// Poster artwork
    #[serde(default)]
    pub images: MovieImages,
}

/// Poster image URLs attached to a search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieImages {
    #[serde(default)]
    pub posters: Vec<String>,
}

impl Movie {
    /// The canonical display title (first of `titles`), or the empty
    /// string when the server sent none.
    pub fn canonical_title(&self) -> &str {
        self.titles.first().map(String::as_str).unwrap_or_default()
    }

    /// The external catalog identifier, or `None` when the server sent
    /// an empty one. Movies without an identifier cannot be added to the
    /// managed list.
    pub fn imdb_id(&self) -> Option<&str> {
        if self.imdb_id.is_empty() {
            None
        } else {
            Some(&self.imdb_id)
        }
    }
}

/// One entry of the managed movie list (`/movie/list`)
///
/// The server marshals its full database records here; everything beyond
/// the identifier and title is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedMovie {
    #[serde(default)]
    pub imdb_id: String,
    #[serde(default)]
    pub title: String,
}

/// Response payload of `/movie/add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieAdded {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
}
