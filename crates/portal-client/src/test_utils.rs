//! Test utilities for portal flows
//!
//! [`FakePortalApi`] answers from scripted queues and counts calls per
//! endpoint, so flow tests can assert which endpoints were hit.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use portal_core::prelude::*;
use portal_core::{
    RequestFailure, SubmissionReceipt, SubmissionRecord, SubmitResult, SubmitStatus,
    ValidationResult,
};

use crate::api::PortalApi;

type Scripted<T> = Mutex<VecDeque<std::result::Result<T, RequestFailure>>>;

/// Scripted in-memory portal.
///
/// Each endpoint pops its next scripted answer; when the queue is empty it
/// falls back to a benign default (empty list, clean validation, successful
/// submit).
#[derive(Default)]
pub struct FakePortalApi {
    list_answers: Scripted<Vec<SubmissionRecord>>,
    check_answers: Scripted<ValidationResult>,
    submit_answers: Scripted<SubmitResult>,
    list_calls: AtomicUsize,
    check_calls: AtomicUsize,
    submit_calls: AtomicUsize,
    received_content: Mutex<Vec<String>>,
    latency: Mutex<Option<Duration>>,
}

impl FakePortalApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, answer: std::result::Result<Vec<SubmissionRecord>, RequestFailure>) {
        self.list_answers.lock().unwrap().push_back(answer);
    }

    pub fn push_check(&self, answer: std::result::Result<ValidationResult, RequestFailure>) {
        self.check_answers.lock().unwrap().push_back(answer);
    }

    pub fn push_submit(&self, answer: std::result::Result<SubmitResult, RequestFailure>) {
        self.submit_answers.lock().unwrap().push_back(answer);
    }

    /// Delay every answer, to keep requests in flight
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock().unwrap() = Some(latency);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn check_calls(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    /// Content strings passed to check/submit, in call order
    pub fn received_content(&self) -> Vec<String> {
        self.received_content.lock().unwrap().clone()
    }

    async fn simulate_latency(&self) {
        let latency = *self.latency.lock().unwrap();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn pop<T>(queue: &Scripted<T>, default: impl FnOnce() -> T) -> Result<T> {
        match queue.lock().unwrap().pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(failure)) => Err(failure_to_error(failure)),
            None => Ok(default()),
        }
    }
}

impl PortalApi for FakePortalApi {
    async fn list_submissions(&self) -> Result<Vec<SubmissionRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        Self::pop(&self.list_answers, Vec::new)
    }

    async fn check_submission(&self, content: &str) -> Result<ValidationResult> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        self.received_content
            .lock()
            .unwrap()
            .push(content.to_string());
        self.simulate_latency().await;
        Self::pop(&self.check_answers, ValidationResult::ok)
    }

    async fn submit(&self, content: &str) -> Result<SubmitResult> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.received_content
            .lock()
            .unwrap()
            .push(content.to_string());
        self.simulate_latency().await;
        Self::pop(&self.submit_answers, || {
            test_submit_result(SubmitStatus::Success, "Team", "SIG")
        })
    }
}

fn failure_to_error(failure: RequestFailure) -> Error {
    match failure.status {
        Some(status) => Error::http(status, failure.detail),
        None => Error::transport(failure.detail),
    }
}

/// Builds a submit answer with an empty verification object
pub fn test_submit_result(status: SubmitStatus, name: &str, signature: &str) -> SubmitResult {
    SubmitResult {
        status,
        issues: Vec::new(),
        response: SubmissionReceipt {
            submission_name: name.to_string(),
            signature: signature.to_string(),
            tsp_verification_data: serde_json::json!({}),
        },
    }
}

/// Builds `count` records named `Team0..TeamN`
pub fn test_records(count: usize) -> Vec<SubmissionRecord> {
    (0..count)
        .map(|i| {
            SubmissionRecord::new(
                format!("2025-03-01 10:00:{:02}", i),
                format!("Team{}", i),
                format!("SIG{}", i),
            )
        })
        .collect()
}
