//! Ordering of overlapping async requests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    /// Monotonic sequence number.
    pub seq: u64,
    /// The query the request was issued for.
    pub query: String,
}

/// Hands out monotonic tickets so only the newest response is applied.
///
/// A response for an older keystroke that arrives after a newer one must
/// not overwrite the newer list. Cheap to clone; clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    /// Create a sequencer with no issued requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, superseding all earlier ones.
    pub fn issue(&self, query: impl Into<String>) -> SearchTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        SearchTicket {
            seq,
            query: query.into(),
        }
    }

    /// Returns `true` if no request was issued after `ticket`.
    pub fn is_latest(&self, ticket: &SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel_all(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue("a");
        assert!(sequencer.is_latest(&first));

        let second = sequencer.issue("ab");
        assert!(!sequencer.is_latest(&first));
        assert!(sequencer.is_latest(&second));
        assert!(second.seq > first.seq);
    }

    #[test]
    fn test_cancel_all() {
        let sequencer = RequestSequencer::new();
        let ticket = sequencer.issue("a");
        sequencer.cancel_all();
        assert!(!sequencer.is_latest(&ticket));
    }
}
