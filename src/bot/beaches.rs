//! Client for the Beaches.ie nearby-beaches API.

use serde::Deserialize;
use tracing::info;

const DEFAULT_BASE_URL: &str = "https://api.beaches.ie";

/// Search radius passed to the nearme endpoint.
const NEARBY_RADIUS: u32 = 5;

/// One beach as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Beach {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "CountyName")]
    pub county: String,
}

#[derive(Debug)]
pub enum Error {
    Http(String),
    Decode(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Http(e) => write!(f, "network error: {e}"),
            Error::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the beaches closest to the given coordinates.
    ///
    /// One GET per call; no retry, no caching. Returns the decoded records
    /// in the order the API sent them, possibly none.
    pub async fn nearby(&self, latitude: f64, longitude: f64) -> Result<Vec<Beach>, Error> {
        let url = nearme_url(&self.base_url, latitude, longitude);
        info!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("unexpected status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;
        let beaches = decode(&body)?;

        info!("nearby beaches: {}", beaches.len());
        Ok(beaches)
    }
}

/// Coordinates are fixed-point with six decimals, matching the upstream
/// route format.
fn nearme_url(base_url: &str, latitude: f64, longitude: f64) -> String {
    format!("{base_url}/api/beach/nearme/{latitude:.6}/{longitude:.6}/{NEARBY_RADIUS}")
}

fn decode(body: &str) -> Result<Vec<Beach>, Error> {
    serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))
}
