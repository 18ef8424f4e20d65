//! Core application types

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Event loop running
    #[default]
    Running,
    /// Shutdown requested; the loop exits after the current frame
    Quitting,
}

/// Identifier of one outbound request.
///
/// Ids are allocated from a per-resource [`RequestFence`] and only ever grow,
/// so comparing two ids tells which request was issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Orders overlapping requests against the same resource.
///
/// Responses may complete out of order. A response is accepted only when it
/// belongs to a request issued after the last accepted one; anything older is
/// stale and must be dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestFence {
    last_issued: u64,
    last_applied: u64,
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the id for a new request
    pub fn issue(&mut self) -> RequestId {
        self.last_issued += 1;
        RequestId(self.last_issued)
    }

    /// Returns true (and records the id) if the response for `id` is fresh
    pub fn accept(&mut self, id: RequestId) -> bool {
        if id.0 > self.last_applied && id.0 <= self.last_issued {
            self.last_applied = id.0;
            true
        } else {
            false
        }
    }

    /// True while the most recently issued request has not been accepted
    pub fn is_pending(&self) -> bool {
        self.last_issued > self.last_applied
    }
}
