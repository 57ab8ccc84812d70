//! Table rendering of candidate results

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table,
};

use crate::client::Candidate;
use crate::models::CandidateDisplay;

/// Render candidates as a rounded table, one row each.
///
/// Absent fields come through as "not provided" via [`CandidateDisplay`];
/// callers handle the empty case with their own messaging.
pub fn candidate_table(candidates: &[Candidate]) -> String {
    let rows: Vec<CandidateDisplay> = candidates.iter().map(CandidateDisplay::from).collect();

    let mut table = Table::new(&rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: Option<&str>) -> Candidate {
        Candidate {
            id: "c-1".to_string(),
            name: name.map(str::to_string),
            email: Some("ada@example.com".to_string()),
            company: None,
            location: None,
            website_url: None,
            skills: vec!["rust".to_string()],
            github_url: None,
            avatar_url: None,
            profile_text: None,
        }
    }

    #[test]
    fn test_candidate_table_headers_and_values() {
        let result = candidate_table(&[candidate(Some("Ada Lovelace"))]);

        assert!(result.contains("NAME"));
        assert!(result.contains("EMAIL"));
        assert!(result.contains("SKILLS"));
        assert!(result.contains("Ada Lovelace"));
        assert!(result.contains("ada@example.com"));
        assert!(result.contains("rust"));
    }

    #[test]
    fn test_candidate_table_placeholder_for_absent_fields() {
        let result = candidate_table(&[candidate(None)]);
        assert!(result.contains("not provided"));
    }
}
