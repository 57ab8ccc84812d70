//! Wire models for the candidate search backend
//!
//! Response shapes are validated here at the boundary; a body that does not
//! parse becomes a `MalformedResponse` instead of a field-access failure
//! somewhere downstream.

use serde::{Deserialize, Serialize};

/// A single search result describing a prospective hire.
///
/// Only `id` is mandatory; every other field may be absent and renders as
/// "not provided".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Free-form profile text (candidate README)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_text: Option<String>,
}

/// One page of search results as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Total matches across all pages
    #[serde(default)]
    pub total_count: u64,
}

/// Error payload shape for non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
