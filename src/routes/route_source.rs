use super::{
    flights::{FlightsDocument, Route},
    http_client::HTTPClient,
    load_error::LoadError,
};
use crate::{info, warn};
use async_trait::async_trait;
use std::path::PathBuf;

/// A one-shot provider of flight routes.
#[async_trait]
pub trait RouteSource: Send + Sync {
    /// Human readable origin of the routes, used for logging.
    fn describe(&self) -> String;

    /// Loads the raw flights document.
    ///
    /// # Errors
    /// Returns a `LoadError` if the resource cannot be fetched or parsed.
    async fn load_document(&self) -> Result<FlightsDocument, LoadError>;

    /// Loads all well-formed routes, skipping malformed entries.
    ///
    /// # Errors
    /// Propagates the `LoadError` of `load_document`.
    async fn load_routes(&self) -> Result<Vec<Route>, LoadError> {
        let doc = self.load_document().await?;
        if doc.is_empty() {
            warn!("{} contains no flights", self.describe());
        } else {
            info!("Loaded {} flight entries from {}", doc.len(), self.describe());
        }
        Ok(doc.into_routes())
    }
}

/// Fetches the flights document over HTTP(S).
#[derive(Debug)]
pub struct HttpRouteSource {
    client: HTTPClient,
}

impl HttpRouteSource {
    /// Creates a source for the given URL.
    ///
    /// # Errors
    /// Returns a `LoadError` if the HTTP client cannot be built.
    pub fn new(url: &str) -> Result<Self, LoadError> { Ok(Self { client: HTTPClient::new(url)? }) }
}

#[async_trait]
impl RouteSource for HttpRouteSource {
    fn describe(&self) -> String { self.client.url().to_string() }

    async fn load_document(&self) -> Result<FlightsDocument, LoadError> {
        let body = self.client.fetch().await?;
        FlightsDocument::from_slice(&body)
    }
}

/// Reads the flights document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileRouteSource {
    path: PathBuf,
}

impl FileRouteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

#[async_trait]
impl RouteSource for FileRouteSource {
    fn describe(&self) -> String { self.path.display().to_string() }

    async fn load_document(&self) -> Result<FlightsDocument, LoadError> {
        let body = tokio::fs::read(&self.path).await?;
        FlightsDocument::from_slice(&body)
    }
}
