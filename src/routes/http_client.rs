use super::load_error::LoadError;

/// A simple wrapper around `reqwest::Client` used for the one-shot flights fetch.
///
/// It sets a fixed timeout and keeps the resource URL next to the client.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Absolute URL of the flights resource.
    url: String,
}

impl HTTPClient {
    /// Request timeout applied to every fetch.
    const TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

    /// Constructs a new `HTTPClient` for the given resource URL.
    ///
    /// # Arguments
    /// * `url` – The absolute URL of the flights JSON (e.g., `"https://example.org/flights.json"`).
    ///
    /// # Errors
    /// Returns `LoadError::Unknown` if the TLS backend cannot be initialized.
    pub(crate) fn new(url: &str) -> Result<HTTPClient, LoadError> {
        let client = reqwest::Client::builder().timeout(Self::TIMEOUT).build()?;
        Ok(HTTPClient { client, url: String::from(url) })
    }

    /// Returns the URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.url.as_str() }

    /// Performs the GET request and returns the raw body of a successful response.
    ///
    /// # Errors
    /// Connection failures, timeouts and non-success status codes map to the
    /// corresponding `LoadError` kind.
    pub(crate) async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::BadStatus(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
