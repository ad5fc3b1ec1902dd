//! Request sequencing for overlapping submissions
//!
//! Every submission gets a fresh [`RequestId`] from a monotonically increasing
//! counter. Only the most recently issued, still-pending id may settle;
//! responses carrying any other id are stale and must be discarded.

use std::fmt;

/// Identifier of one outbound generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues request ids and decides which response is allowed to apply.
#[derive(Debug, Default)]
pub struct RequestTracker {
    /// Last id handed out (0 = none yet)
    last_issued: u64,
    /// Latest issued id that has not settled or been cancelled
    pending: Option<RequestId>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new id. Any previously pending id becomes stale.
    pub fn issue(&mut self) -> RequestId {
        self.last_issued += 1;
        let id = RequestId(self.last_issued);
        self.pending = Some(id);
        id
    }

    /// The id whose response would currently be applied.
    pub fn pending(&self) -> Option<RequestId> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.pending == Some(id)
    }

    /// Settle `id`. Returns `false` (and changes nothing) when `id` is stale.
    pub fn settle(&mut self, id: RequestId) -> bool {
        if self.is_current(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending id so its eventual response is ignored.
    pub fn cancel(&mut self) -> Option<RequestId> {
        self.pending.take()
    }

    /// Total number of ids issued so far.
    pub fn issued_count(&self) -> u64 {
        self.last_issued
    }
}
