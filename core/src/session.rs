//! Submission ordering guard for overlapping requests.
//!
//! # Design
//! The component driving the form owns exactly one `ListSession`: the
//! current `ListResult` plus a monotonically increasing submission sequence.
//! Starting a submission discards the previous result and issues a token;
//! committing an outcome succeeds only when the token is still the latest.
//! A slow first request can therefore never overwrite a fast second
//! request's result, regardless of completion order, and no in-flight abort
//! is required for correctness.

use crate::types::ListResult;

/// Opaque handle identifying one submission. Compared against the session's
/// latest sequence at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionToken(u64);

/// Owner of the visible request state: the current result and the sequence
/// number of the most recent submission.
#[derive(Debug)]
pub struct ListSession {
    seq: u64,
    result: ListResult,
}

impl ListSession {
    pub fn new() -> Self {
        Self {
            seq: 0,
            result: ListResult::Idle,
        }
    }

    /// Start a new submission: the previous result is discarded, the visible
    /// state becomes `Pending`, and the returned token marks this submission
    /// as the latest.
    pub fn begin(&mut self) -> SubmissionToken {
        self.seq += 1;
        self.result = ListResult::Pending;
        SubmissionToken(self.seq)
    }

    /// Apply an outcome if `token` still identifies the latest submission.
    ///
    /// Returns whether the outcome was applied. Stale completions are
    /// dropped, leaving the visible state untouched.
    pub fn commit(&mut self, token: SubmissionToken, outcome: ListResult) -> bool {
        if token.0 != self.seq {
            return false;
        }
        self.result = outcome;
        true
    }

    /// The single value the presentation layer renders from.
    pub fn result(&self) -> &ListResult {
        &self.result
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, ListResult::Pending)
    }
}

impl Default for ListSession {
    fn default() -> Self {
        Self::new()
    }
}
