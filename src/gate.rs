//! Session access gate: one IP geolocation lookup decides whether the planner
//! is available in the caller's region.

use tracing::{info, warn};

use crate::services::GeoIpClient;

/// Continent code that is permitted to use the planner.
pub const ALLOWED_CONTINENT: &str = "NA";

/// Outcome of the region check.
///
/// The lookup's three distinct conditions stay distinct here; policy for the
/// indeterminate case belongs to the caller. The shipped policy is
/// fail-closed: anything but `Allowed` restricts the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Continent code matched the allowed region
    Allowed,
    /// Lookup succeeded but returned a different continent code
    Denied(String),
    /// Lookup could not be completed (network error, non-success status,
    /// malformed payload)
    Indeterminate,
}

impl AccessDecision {
    /// Fail-closed policy: only an affirmative `Allowed` admits the session.
    pub fn is_restricted(&self) -> bool {
        !matches!(self, AccessDecision::Allowed)
    }
}

/// Gate state for one session: `Checking` until the single lookup resolves,
/// then a terminal `Allowed` or `Restricted`. No re-check, no override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Checking,
    Allowed,
    Restricted,
}

impl GateState {
    pub fn from_decision(decision: &AccessDecision) -> Self {
        if decision.is_restricted() {
            GateState::Restricted
        } else {
            GateState::Allowed
        }
    }
}

/// Performs the once-per-session region check.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    client: GeoIpClient,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lookup_url(mut self, lookup_url: impl Into<String>) -> Self {
        self.client.set_lookup_url(lookup_url);
        self
    }

    /// Issue one lookup and classify the result. Lookup failures are logged
    /// but never surfaced as errors; they become `Indeterminate`.
    pub async fn check(&self) -> AccessDecision {
        match self.client.continent_code().await {
            Ok(code) => Self::decide(&code),
            Err(err) => {
                warn!("location check failed, treating as restricted: {err}");
                AccessDecision::Indeterminate
            }
        }
    }

    fn decide(continent_code: &str) -> AccessDecision {
        if continent_code == ALLOWED_CONTINENT {
            info!(continent = continent_code, "region check passed");
            AccessDecision::Allowed
        } else {
            info!(continent = continent_code, "region not supported");
            AccessDecision::Denied(continent_code.to_string())
        }
    }
}
