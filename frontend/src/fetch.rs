//! Fetch lifecycle primitives for pages that load data from the API.

/// State of the single outstanding or completed request a page owns.
/// Exactly one variant is active at a time; a filter change supersedes a
/// terminal state by issuing a fresh request and moving back to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> FetchState<T> {
    /// True while there is nothing to show yet (before or during a request).
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    /// The state a resolved request outcome maps to.
    pub fn resolved(outcome: Result<T, String>) -> Self {
        match outcome {
            Ok(value) => FetchState::Success(value),
            Err(message) => FetchState::Failure(message),
        }
    }
}

/// Monotonic tag distinguishing the newest issued request from stale ones.
///
/// In-flight requests are never cancelled. Every request captures a ticket
/// at issue time, and a resolved outcome is applied only while its ticket is
/// still the current one, so a request superseded by a newer filter resolves
/// into a no-op regardless of arrival order.
#[derive(Debug, Default)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Registers a new request and returns its ticket.
    pub fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether `ticket` still identifies the newest issued request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}
