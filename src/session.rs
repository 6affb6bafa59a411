//! In-memory session state with submission sequencing.
//!
//! In-flight generation requests are never cancelled, so an earlier request
//! can resolve after a later one. Each submission takes a monotonically
//! increasing token and a result is stored only if its token is still the
//! latest issued, which keeps stale responses from overwriting newer ones.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::debug;

use crate::types::Itinerary;

/// Token identifying one submission. Ordering between tokens reflects
/// submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Owner of the ephemeral UI state: the latest itinerary, if any.
#[derive(Debug, Default)]
pub struct PlannerSession {
    next_token: AtomicU64,
    current: Mutex<SessionState>,
}

#[derive(Debug, Default)]
struct SessionState {
    latest_issued: u64,
    itinerary: Option<Itinerary>,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a token for a new submission. Issuing a token marks any prior
    /// in-flight submission as stale.
    pub fn begin_request(&self) -> RequestToken {
        let token = self.next_token.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.current.lock().unwrap();
        state.latest_issued = token;
        // a fresh submission discards the previously rendered result
        state.itinerary = None;
        RequestToken(token)
    }

    /// Store a completed itinerary if `token` is still the latest issued.
    /// Returns whether the result was applied.
    pub fn accept(&self, token: RequestToken, itinerary: Itinerary) -> bool {
        let mut state = self.current.lock().unwrap();
        if token.0 != state.latest_issued {
            debug!(
                token = token.0,
                latest = state.latest_issued,
                "discarding stale generation result"
            );
            return false;
        }
        state.itinerary = Some(itinerary);
        true
    }

    /// The currently rendered itinerary, if any.
    pub fn itinerary(&self) -> Option<Itinerary> {
        self.current.lock().unwrap().itinerary.clone()
    }
}
