use reqwest::Client;
use serde::Deserialize;

use crate::error::{PlannerError, Result};

const DEFAULT_LOOKUP_URL: &str = "https://ipapi.co/json/";

/// Payload returned by the IP lookup endpoint; only the continent code matters.
#[derive(Debug, Deserialize)]
struct GeoIpPayload {
    continent_code: String,
}

/// Unauthenticated client for a third-party IP geolocation endpoint.
#[derive(Debug, Clone)]
pub struct GeoIpClient {
    client: Client,
    lookup_url: String,
}

impl Default for GeoIpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoIpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
        }
    }

    pub fn set_lookup_url(&mut self, lookup_url: impl Into<String>) {
        self.lookup_url = lookup_url.into();
    }

    /// Fetch the two-letter continent code for the caller's IP address.
    pub async fn continent_code(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.lookup_url)
            .send()
            .await
            .map_err(|err| {
                PlannerError::LocationCheck(format!("IP lookup request failed: {err}"))
            })?;

        if !response.status().is_success() {
            return Err(PlannerError::LocationCheck(format!(
                "IP lookup returned status {}",
                response.status()
            )));
        }

        let payload: GeoIpPayload = response.json().await.map_err(|err| {
            PlannerError::LocationCheck(format!("Failed to decode IP lookup payload: {err}"))
        })?;

        Ok(payload.continent_code)
    }
}
