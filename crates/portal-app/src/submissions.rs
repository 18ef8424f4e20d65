//! Submissions table state

use portal_core::{RequestFailure, RequestFence, RequestId, SubmissionRecord};

/// Rows of the submissions table plus refresh bookkeeping
#[derive(Debug, Clone, Default)]
pub struct SubmissionsTableState {
    rows: Vec<SubmissionRecord>,
    fence: RequestFence,
    /// Failure of the last refresh; cleared by the next successful one
    pub last_error: Option<RequestFailure>,
    /// First row drawn
    pub scroll: usize,
}

impl SubmissionsTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[SubmissionRecord] {
        &self.rows
    }

    /// Allocate the id for a new refresh
    pub fn begin_refresh(&mut self) -> RequestId {
        self.fence.issue()
    }

    pub fn is_refreshing(&self) -> bool {
        self.fence.is_pending()
    }

    /// Apply a refresh result if it is not stale.
    ///
    /// A successful result replaces every row. A failure leaves the rows alone
    /// and only records the error. Returns false if the result was dropped.
    pub fn apply(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<SubmissionRecord>, RequestFailure>,
    ) -> bool {
        if !self.fence.accept(request_id) {
            return false;
        }
        match result {
            Ok(records) => {
                self.rows = records;
                self.last_error = None;
                self.clamp_scroll();
            }
            Err(failure) => {
                self.last_error = Some(failure);
            }
        }
        true
    }

    pub fn scroll_down(&mut self) {
        self.scroll += 1;
        self.clamp_scroll();
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.rows.len().saturating_sub(1));
    }
}
