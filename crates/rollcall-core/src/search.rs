//! # Search Filter
//!
//! Free-text filtering over the member list.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      filter(members, query)                             │
//! │                                                                         │
//! │  A member matches when the query (case-insensitive) is a substring of:  │
//! │                                                                         │
//! │    • full_name (case-insensitive), OR                                   │
//! │    • the decimal string form of national_id                             │
//! │                                                                         │
//! │  "sal"      matches  "Amira Salem"                                      │
//! │  "3000"     matches  national_id 30001234                               │
//! │  ""         matches  EVERYTHING (empty query = no filter)               │
//! │                                                                         │
//! │  Results preserve registry order (most-recently-added first).           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure function, no side effects, recomputed on demand.

use crate::types::Member;

/// Filters members by free-text query.
///
/// ## Example
/// ```rust
/// use rollcall_core::search::filter;
///
/// let members = vec![];
/// assert!(filter(&members, "anything").is_empty());
/// ```
pub fn filter<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return members.iter().collect();
    }

    members
        .iter()
        .filter(|m| {
            m.full_name.to_lowercase().contains(&needle)
                || m.national_id.to_string().contains(&needle)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegistrationRequest;

    fn member(name: &str, national_id: u32) -> Member {
        Member::enroll(&RegistrationRequest {
            full_name: name.to_string(),
            national_id: Some(national_id),
            age: Some(25),
            ..Default::default()
        })
    }

    fn roster() -> Vec<Member> {
        vec![
            member("Amira Salem", 30_001_234),
            member("Dana Whitfield", 45_600_000),
            member("Omar Saleh", 30_009_999),
        ]
    }

    #[test]
    fn test_empty_query_matches_all_in_order() {
        let members = roster();
        let hits = filter(&members, "");
        assert_eq!(hits.len(), 3);
        let names: Vec<&str> = hits.iter().map(|m| m.full_name.as_str()).collect();
        assert_eq!(names, vec!["Amira Salem", "Dana Whitfield", "Omar Saleh"]);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let members = roster();
        let hits = filter(&members, "SAL");
        let names: Vec<&str> = hits.iter().map(|m| m.full_name.as_str()).collect();
        assert_eq!(names, vec!["Amira Salem", "Omar Saleh"]);

        assert_eq!(filter(&members, "whitfield").len(), 1);
    }

    #[test]
    fn test_national_id_substring_match() {
        let members = roster();
        let hits = filter(&members, "3000");
        assert_eq!(hits.len(), 2); // 30001234 and 30009999

        let hits = filter(&members, "456");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_name, "Dana Whitfield");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let members = roster();
        assert!(filter(&members, "zzz").is_empty());
        assert!(filter(&members, "99999999").is_empty());
    }

    #[test]
    fn test_order_preserved_on_partial_match() {
        let members = roster();
        let hits = filter(&members, "a");
        // All three names contain an 'a'; order must match the input
        let names: Vec<&str> = hits.iter().map(|m| m.full_name.as_str()).collect();
        assert_eq!(names, vec!["Amira Salem", "Dana Whitfield", "Omar Saleh"]);
    }
}
