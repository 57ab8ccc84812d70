//! Candidate display models for table/JSON output

use serde::Serialize;
use tabled::Tabled;

use crate::client::Candidate;

/// Placeholder for fields the backend did not supply
const NOT_PROVIDED: &str = "not provided";

/// Profile text is truncated to this many characters in table output
const PROFILE_PREVIEW_LEN: usize = 150;

/// Candidate display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CandidateDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "COMPANY")]
    pub company: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    #[tabled(rename = "SKILLS")]
    pub skills: String,

    #[tabled(rename = "GITHUB")]
    pub github: String,
}

impl From<&Candidate> for CandidateDisplay {
    fn from(candidate: &Candidate) -> Self {
        Self {
            name: text_or_placeholder(candidate.name.as_deref()),
            email: text_or_placeholder(candidate.email.as_deref()),
            company: text_or_placeholder(candidate.company.as_deref()),
            location: text_or_placeholder(candidate.location.as_deref()),
            skills: if candidate.skills.is_empty() {
                NOT_PROVIDED.to_string()
            } else {
                candidate.skills.join(", ")
            },
            github: text_or_placeholder(candidate.github_url.as_deref()),
        }
    }
}

fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_PROVIDED.to_string(),
    }
}

/// Short preview of the profile text for card output
pub fn profile_preview(candidate: &Candidate) -> Option<String> {
    let text = candidate.profile_text.as_deref()?.trim();
    if text.is_empty() {
        return None;
    }

    let preview: String = text.chars().take(PROFILE_PREVIEW_LEN).collect();
    if text.chars().count() > PROFILE_PREVIEW_LEN {
        Some(format!("{}...", preview))
    } else {
        Some(preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_candidate() -> Candidate {
        Candidate {
            id: "c-1".to_string(),
            name: None,
            email: None,
            company: None,
            location: None,
            website_url: None,
            skills: Vec::new(),
            github_url: None,
            avatar_url: None,
            profile_text: None,
        }
    }

    #[test]
    fn test_absent_fields_render_as_not_provided() {
        let display = CandidateDisplay::from(&bare_candidate());
        assert_eq!(display.name, "not provided");
        assert_eq!(display.email, "not provided");
        assert_eq!(display.skills, "not provided");
        assert_eq!(display.github, "not provided");
    }

    #[test]
    fn test_present_fields_pass_through() {
        let candidate = Candidate {
            name: Some("Ada".to_string()),
            skills: vec!["rust".to_string(), "go".to_string()],
            ..bare_candidate()
        };
        let display = CandidateDisplay::from(&candidate);
        assert_eq!(display.name, "Ada");
        assert_eq!(display.skills, "rust, go");
    }

    #[test]
    fn test_whitespace_only_field_counts_as_absent() {
        let candidate = Candidate {
            company: Some("   ".to_string()),
            ..bare_candidate()
        };
        let display = CandidateDisplay::from(&candidate);
        assert_eq!(display.company, "not provided");
    }

    #[test]
    fn test_profile_preview_truncates() {
        let candidate = Candidate {
            profile_text: Some("x".repeat(200)),
            ..bare_candidate()
        };
        let preview = profile_preview(&candidate).unwrap();
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_profile_preview_short_text_untouched() {
        let candidate = Candidate {
            profile_text: Some("Short bio".to_string()),
            ..bare_candidate()
        };
        assert_eq!(profile_preview(&candidate).as_deref(), Some("Short bio"));
    }

    #[test]
    fn test_profile_preview_absent() {
        assert!(profile_preview(&bare_candidate()).is_none());
        let blank = Candidate {
            profile_text: Some("   ".to_string()),
            ..bare_candidate()
        };
        assert!(profile_preview(&blank).is_none());
    }
}
