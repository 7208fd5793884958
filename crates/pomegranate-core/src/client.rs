//! HTTP gateway for the Pomegranate movie API
//!
//! Thin request/response wrappers over the three catalog endpoints.
//! Every operation is a single GET round trip: no retries, no request
//! timeout, no authentication. Transport and decode failures surface as
//! [`CatalogError::Http`] and are left to the caller to log or drop.

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::types::{ManagedMovie, Movie, MovieAdded};
use crate::url::{LIST_PATH, add_path, search_path};

/// Address of the development server
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration for the catalog gateway
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the catalog server (default: `http://localhost:3000`)
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    // The server marshals a nil slice as `null` when nothing matches.
    movies: Option<Vec<Movie>>,
}

/// Gateway to the catalog server
///
/// Wraps a [`reqwest::Client`] and exposes the three movie operations
/// as typed calls.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new gateway pointing at the development server
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new gateway with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(CatalogError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Search the external catalog for movies matching `query`
    ///
    /// # Returns
    /// Matching movies in server order; empty when nothing matched.
    ///
    /// # Errors
    /// `Http` on transport failure, non-success status, or a malformed
    /// response body.
    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        let payload: SearchResponse = self.get_json(&search_path(query)).await?;
        Ok(payload.movies.unwrap_or_default())
    }

    /// Ask the server to add a movie to the managed list
    ///
    /// # Arguments
    /// * `identifier` - external catalog identifier, e.g. "tt1375666"
    ///
    /// # Errors
    /// `InvalidId` if `identifier` is empty or whitespace only; `Http`
    /// on transport, status, or decode failure.
    pub async fn add_movie(&self, identifier: &str) -> Result<MovieAdded> {
        if identifier.trim().is_empty() {
            return Err(CatalogError::InvalidId(
                "identifier cannot be empty".to_string(),
            ));
        }

        self.get_json(&add_path(identifier)).await
    }

    /// Fetch the list of movies currently under management
    ///
    /// # Returns
    /// The managed entries; empty when the server has none (the server
    /// marshals an empty database as `null`).
    pub async fn list_managed(&self) -> Result<Vec<ManagedMovie>> {
        let payload: Option<Vec<ManagedMovie>> = self.get_json(LIST_PATH).await?;
        Ok(payload.unwrap_or_default())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(CatalogError::Http)?;

        response
            .error_for_status()
            .map_err(CatalogError::Http)?
            .json()
            .await
            .map_err(CatalogError::Http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> CatalogClient {
        CatalogClient::with_config(ClientConfig {
            base_url: server.uri(),
        })
        .expect("client should build")
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_creation() {
        assert!(CatalogClient::new().is_ok());
    }

    #[tokio::test]
    async fn test_search_movies_decodes_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/search"))
            .and(query_param("q", "inception"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "movies": [{
                    "titles": ["Inception"],
                    "released": "2010-07-16",
                    "imdb_id": "tt1375666",
                    "tmdb_id": 27205,
                    "runtime": 148,
                    "year": 2010,
                    "genres": ["Action"],
                    "images": {"posters": []}
                }]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let movies = client.search_movies("inception").await.unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].canonical_title(), "Inception");
        assert_eq!(movies[0].imdb_id(), Some("tt1375666"));
        assert_eq!(movies[0].released, "2010-07-16");
    }

    #[tokio::test]
    async fn test_search_movies_null_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"movies": null})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let movies = client.search_movies("nothing").await.unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_search_movies_encodes_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/search"))
            .and(query_param("q", "doctor who"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"movies": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let movies = client.search_movies("doctor who").await.unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_search_movies_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result = client.search_movies("inception").await;
        assert!(matches!(result, Err(CatalogError::Http(_))));
    }

    #[tokio::test]
    async fn test_add_movie() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/add"))
            .and(query_param("identifier", "tt1375666"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Movie added",
                "title": "Inception",
                "overview": "A thief who steals corporate secrets..."
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let added = client.add_movie("tt1375666").await.unwrap();
        assert_eq!(added.message, "Movie added");
        assert_eq!(added.title, "Inception");
    }

    #[tokio::test]
    async fn test_add_movie_empty_identifier() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        let result = client.add_movie("   ").await;
        match result {
            Err(CatalogError::InvalidId(msg)) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidId error, got {:?}", other),
        }
        assert_eq!(server.received_requests().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_list_managed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"imdb_id": "tt1375666", "title": "Inception", "overview": "...", "nzb_info": []},
                {"imdb_id": "tt0133093", "title": "The Matrix"}
            ])))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let list = client.list_managed().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "Inception");
        assert_eq!(list[1].imdb_id, "tt0133093");
    }

    #[tokio::test]
    async fn test_list_managed_null_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let list = client.list_managed().await.unwrap();
        assert!(list.is_empty());
    }
}
