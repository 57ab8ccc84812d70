//! URL-synchronized search controller
//!
//! Owns the search view state and keeps it consistent with the navigable
//! route and with in-flight fetches. All transitions happen on discrete
//! events; the one real hazard is a fetch completing after a newer one was
//! issued, which is guarded by tagging every fetch with its request key and
//! discarding responses whose key is no longer the latest.

use std::sync::Arc;

use super::route::SearchRoute;
use crate::client::{Candidate, SearchApi, SearchPage};
use crate::error::SearchError;
use crate::session::SessionStore;

/// Identifies which in-flight fetch a response belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestKey {
    pub query: String,
    pub page: u32,
}

/// Lifecycle phase of the search view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No query yet
    Idle,
    /// Fetch in flight
    Loading,
    /// Results present
    Loaded,
    /// Error present
    Failed,
}

/// The search view state, recreated per session and re-derived from the
/// route parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query_text: String,
    pub page_number: u32,
    pub results: Vec<Candidate>,
    pub total_pages: u32,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub is_initial: bool,
}

impl SearchState {
    fn initial() -> Self {
        Self {
            query_text: String::new(),
            page_number: 1,
            results: Vec::new(),
            total_pages: 0,
            is_loading: false,
            error_message: None,
            is_initial: true,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error_message.is_some() {
            Phase::Failed
        } else if self.is_initial {
            Phase::Idle
        } else {
            Phase::Loaded
        }
    }
}

/// State machine driving the candidate search view.
///
/// Fetches are only ever triggered by route application or page navigation,
/// never by query-text edits, so typing stays free of network cost.
pub struct SearchController<A: SearchApi> {
    api: Arc<A>,
    session: Arc<SessionStore>,
    items_per_page: u32,
    state: SearchState,
    /// Key of the most recently issued fetch; responses for any other key
    /// are stale and get dropped.
    latest_key: Option<RequestKey>,
}

impl<A: SearchApi> SearchController<A> {
    pub fn new(api: Arc<A>, session: Arc<SessionStore>, items_per_page: u32) -> Self {
        Self {
            api,
            session,
            items_per_page: items_per_page.max(1),
            state: SearchState::initial(),
            latest_key: None,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Update the query text without fetching
    pub fn set_query_text(&mut self, text: &str) {
        self.state.query_text = text.to_string();
    }

    /// Validate the live query text and produce the page-1 route for it.
    ///
    /// This is the search-button path: it does not fetch by itself, the
    /// resulting route still has to be applied.
    pub fn submit(&self) -> Result<SearchRoute, SearchError> {
        if self.session.current_identity().is_none() {
            return Err(SearchError::NotAuthenticated);
        }

        let query = self.state.query_text.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        Ok(SearchRoute::new(query, 1))
    }

    /// Apply an external route change.
    ///
    /// An idle route resets the view and returns `Ok(None)`. A route with a
    /// query requires a current identity, moves the view to `Loading`, and
    /// returns the request key the caller must fetch. No network happens
    /// here.
    pub fn apply_route(&mut self, route: &SearchRoute) -> Result<Option<RequestKey>, SearchError> {
        if route.is_idle() {
            self.state = SearchState::initial();
            self.latest_key = None;
            return Ok(None);
        }

        if self.session.current_identity().is_none() {
            return Err(SearchError::NotAuthenticated);
        }

        self.state.query_text = route.query.clone();
        self.state.page_number = route.page;
        self.state.is_loading = true;
        self.state.error_message = None;
        self.state.is_initial = false;

        let key = RequestKey {
            query: route.query.clone(),
            page: route.page,
        };
        self.latest_key = Some(key.clone());
        Ok(Some(key))
    }

    /// Apply a fetch completion for `key`.
    ///
    /// Returns `false` when the response was stale (a newer key has been
    /// issued since) and was discarded without touching the state.
    pub fn apply_outcome(&mut self, key: &RequestKey, outcome: Result<SearchPage, SearchError>) -> bool {
        if self.latest_key.as_ref() != Some(key) {
            log::debug!(
                "Discarding stale search response for ({:?}, {})",
                key.query,
                key.page
            );
            return false;
        }

        self.state.is_loading = false;
        match outcome {
            Ok(page) => {
                self.state.results = page.candidates;
                self.state.total_pages = total_pages(page.total_count, self.items_per_page);
                self.state.error_message = None;
                // The backend may report fewer pages than the route asked for
                if self.state.total_pages > 0 && self.state.page_number > self.state.total_pages {
                    self.state.page_number = self.state.total_pages;
                }
            }
            Err(err) => {
                self.state.results = Vec::new();
                self.state.total_pages = 0;
                self.state.error_message = Some(err.to_string());
            }
        }
        true
    }

    /// Request navigation to `new_page`.
    ///
    /// A no-op (`None`) while a fetch is in flight, when no query is active,
    /// or when `new_page` falls outside `[1, total_pages]`; out-of-range
    /// pages are refused locally instead of fetched. A result set with zero
    /// pages has nothing to navigate to.
    pub fn change_page(&self, new_page: u32) -> Option<SearchRoute> {
        if self.state.is_loading {
            return None;
        }

        let active = self.latest_key.as_ref()?;
        if !(1..=self.state.total_pages).contains(&new_page) {
            return None;
        }

        Some(SearchRoute::new(active.query.clone(), new_page))
    }

    /// Whether a previous page exists and navigation is currently allowed
    pub fn has_prev_page(&self) -> bool {
        self.state.page_number > 1 && self.change_page(self.state.page_number - 1).is_some()
    }

    /// Whether a next page exists and navigation is currently allowed
    pub fn has_next_page(&self) -> bool {
        self.change_page(self.state.page_number + 1).is_some()
    }

    /// The shareable route for the current view, if a query is active
    pub fn current_route(&self) -> Option<SearchRoute> {
        self.latest_key
            .as_ref()
            .map(|key| SearchRoute::new(key.query.clone(), self.state.page_number))
    }

    /// Apply a route and drive the resulting fetch to completion.
    ///
    /// Convenience for sequential callers; concurrent callers fetch the key
    /// themselves and feed [`apply_outcome`](Self::apply_outcome).
    pub async fn navigate(&mut self, route: &SearchRoute) -> Result<(), SearchError> {
        if let Some(key) = self.apply_route(route)? {
            let api = Arc::clone(&self.api);
            let outcome = api.search(&key.query, key.page).await;
            self.apply_outcome(&key, outcome);
        }
        Ok(())
    }
}

/// `ceil(total_count / items_per_page)`
fn total_pages(total_count: u64, items_per_page: u32) -> u32 {
    let per = items_per_page.max(1) as u64;
    ((total_count + per - 1) / per) as u32
}
