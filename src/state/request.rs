//! Latest-request tracking for screens that reload a table.
//!
//! Every load takes a ticket from [`LatestRequest::begin`]. A response is
//! applied only while its ticket is still the newest, so a slow reply for
//! an earlier page or tab never overwrites the one the user asked for last.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatestRequest {
    ticket: u64,
}

impl LatestRequest {
    /// Start a request and return its ticket.
    pub fn begin(&mut self) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.ticket == ticket
    }
}
