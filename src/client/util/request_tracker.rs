/// Ticket handed out when a request starts
///
/// Only the ticket of the most recent request is still accepted by the [`RequestTracker`] that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Latest-request-wins guard for overlapping fetches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every ticket issued before it
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Whether a response for `ticket` may still be applied
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests a single request.
    ///
    /// Verifies that the only ticket issued is accepted.
    ///
    /// Expected: is_latest returns true
    #[test]
    fn accepts_only_request() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();

        assert!(tracker.is_latest(ticket));
    }

    /// Tests overlapping requests.
    ///
    /// Verifies that starting a second request invalidates the first one even if the first
    /// response arrives last.
    ///
    /// Expected: first ticket rejected, second accepted
    #[test]
    fn newer_request_invalidates_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.is_latest(first));
        assert!(tracker.is_latest(second));
        assert!(first < second);
    }

    /// Tests a ticket from a different tracker.
    ///
    /// Verifies that tickets are only compared by sequence number, so a fresh tracker does not
    /// accept a ticket it never issued past its own latest.
    ///
    /// Expected: rejected
    #[test]
    fn rejects_ticket_from_future() {
        let mut other = RequestTracker::new();
        other.begin();
        let ahead = other.begin();

        let mut tracker = RequestTracker::new();
        tracker.begin();

        assert!(!tracker.is_latest(ahead));
    }
}
