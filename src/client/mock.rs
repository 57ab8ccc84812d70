//! Mock search client for controller tests
//!
//! Records every request it receives so tests can assert on call counts and
//! request keys without touching the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::models::{Candidate, SearchPage};
use super::SearchApi;
use crate::error::SearchError;

/// Canned outcome for one search call
type Outcome = Result<SearchPage, SearchError>;

/// Mock search client returning queued outcomes in order.
///
/// When the queue runs dry it returns an empty page, which keeps simple
/// tests short.
pub struct MockSearchClient {
    outcomes: Mutex<Vec<Outcome>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, u32)>>,
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue an outcome for the next unanswered search call
    pub fn push_outcome(&self, outcome: Outcome) {
        self.outcomes.lock().unwrap().push(outcome);
    }

    pub fn push_page(&self, candidates: Vec<Candidate>, total_count: u64) {
        self.push_outcome(Ok(SearchPage {
            candidates,
            total_count,
        }));
    }

    /// Number of search calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// All `(query, page)` pairs requested so far
    pub fn requests(&self) -> Vec<(String, u32)> {
        self.requests.lock().unwrap().clone()
    }

    /// Build `n` bare candidates, ids `c-1..c-n`
    pub fn candidates(n: usize) -> Vec<Candidate> {
        (1..=n)
            .map(|i| Candidate {
                id: format!("c-{}", i),
                name: Some(format!("Candidate {}", i)),
                email: None,
                company: None,
                location: None,
                website_url: None,
                skills: Vec::new(),
                github_url: None,
                avatar_url: None,
                profile_text: None,
            })
            .collect()
    }
}

impl Default for MockSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchApi for MockSearchClient {
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((query.to_string(), page));

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            Ok(SearchPage {
                candidates: Vec::new(),
                total_count: 0,
            })
        } else {
            outcomes.remove(0)
        }
    }
}
