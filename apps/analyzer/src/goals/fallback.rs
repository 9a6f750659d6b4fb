//! Fallbacks — fill fields the model left empty using only official-looking search hits.
//!
//! Each field is filled independently and only when absent. The first qualifying
//! result wins. `has_goal` is never touched here.

use std::sync::OnceLock;

use regex::Regex;

use crate::matcher::is_official_source;
use crate::models::goal::GoalAnswer;
use crate::models::search::SearchResult;

pub const MAX_DESCRIPTION_CHARS: usize = 250;

const GOAL_TERMS: &[&str] = &["decarbon", "net zero"];

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(20\d{2})\b").expect("year regex must compile"))
}

/// Applies the source URL, target date and description fallbacks, in that order.
pub fn apply_fallbacks(
    org_name: &str,
    mut answer: GoalAnswer,
    results: &[SearchResult],
) -> GoalAnswer {
    if answer.source_url.is_none() {
        answer.source_url = fallback_source_url(org_name, results);
    }
    if answer.target_date.is_none() {
        answer.target_date = fallback_target_date(org_name, results);
    }
    if answer.description.is_none() {
        answer.description = fallback_description(org_name, results);
    }
    answer
}

pub fn fallback_source_url(org_name: &str, results: &[SearchResult]) -> Option<String> {
    results
        .iter()
        .find(|r| !r.url.is_empty() && is_official_source(org_name, r))
        .map(|r| r.url.clone())
}

/// First `20xx` year in the description of the first official hit that has one.
pub fn fallback_target_date(org_name: &str, results: &[SearchResult]) -> Option<String> {
    results
        .iter()
        .filter(|r| is_official_source(org_name, r))
        .find_map(|r| {
            year_re()
                .captures(&r.description)
                .map(|caps| caps[1].to_string())
        })
}

pub fn fallback_description(org_name: &str, results: &[SearchResult]) -> Option<String> {
    results
        .iter()
        .find(|r| mentions_goal(&r.description) && is_official_source(org_name, r))
        .map(|r| truncate_chars(r.description.trim(), MAX_DESCRIPTION_CHARS))
}

fn mentions_goal(text: &str) -> bool {
    let text = text.to_lowercase();
    GOAL_TERMS.iter().any(|term| text.contains(term))
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme_press() -> SearchResult {
        SearchResult::new(
            "Acme decarbonization",
            "Acme targets net zero by 2035",
            "https://acme.com/press",
        )
    }

    fn third_party() -> SearchResult {
        SearchResult::new(
            "Acme pledges net zero by 2030",
            "Analysts doubt Acme's 2030 decarbonization pledge",
            "https://news.example.com/acme",
        )
    }

    #[test]
    fn test_all_fields_filled_from_official_hit() {
        let answer = apply_fallbacks("Acme Corp", GoalAnswer::default(), &[acme_press()]);
        assert_eq!(answer.source_url.as_deref(), Some("https://acme.com/press"));
        assert_eq!(answer.target_date.as_deref(), Some("2035"));
        assert_eq!(
            answer.description.as_deref(),
            Some("Acme targets net zero by 2035")
        );
        assert_eq!(answer.has_goal, None);
    }

    #[test]
    fn test_third_party_hits_are_skipped() {
        let answer = apply_fallbacks("Acme Corp", GoalAnswer::default(), &[third_party()]);
        assert_eq!(answer, GoalAnswer::default());

        let answer = apply_fallbacks(
            "Acme Corp",
            GoalAnswer::default(),
            &[third_party(), acme_press()],
        );
        assert_eq!(answer.target_date.as_deref(), Some("2035"));
        assert_eq!(answer.source_url.as_deref(), Some("https://acme.com/press"));
    }

    #[test]
    fn test_existing_fields_are_kept() {
        let answer = GoalAnswer {
            has_goal: Some("Yes".to_string()),
            target_date: Some("2050".to_string()),
            source_url: Some("https://acme.com/sustainability".to_string()),
            description: Some("Model summary".to_string()),
        };
        assert_eq!(
            apply_fallbacks("Acme Corp", answer.clone(), &[acme_press()]),
            answer
        );
    }

    #[test]
    fn test_target_date_takes_first_year_of_first_hit_with_one() {
        let results = vec![
            SearchResult::new("Acme careers", "Work at Acme", "https://acme.com/jobs"),
            SearchResult::new(
                "Acme climate plan",
                "Acme cuts emissions 50% by 2030 and reaches net zero by 2045",
                "https://acme.com/climate",
            ),
            SearchResult::new("Acme 2025", "Acme report 2025", "https://acme.com/report"),
        ];
        assert_eq!(
            fallback_target_date("Acme Corp", &results).as_deref(),
            Some("2030")
        );
        // The first official hit has no year, so the source URL still comes from it.
        assert_eq!(
            fallback_source_url("Acme Corp", &results).as_deref(),
            Some("https://acme.com/jobs")
        );
    }

    #[test]
    fn test_target_date_requires_word_boundary() {
        let results = vec![SearchResult::new(
            "Acme",
            "Acme order 120305 and model A2040X",
            "https://acme.com/",
        )];
        assert_eq!(fallback_target_date("Acme", &results), None);
    }

    #[test]
    fn test_description_requires_goal_term() {
        let results = vec![
            SearchResult::new("Acme", "Acme quarterly results 2024", "https://acme.com/q"),
            SearchResult::new(
                "Acme",
                "  Acme is DECARBONIZING its fleet.  ",
                "https://acme.com/fleet",
            ),
        ];
        assert_eq!(
            fallback_description("Acme", &results).as_deref(),
            Some("Acme is DECARBONIZING its fleet.")
        );
    }

    #[test]
    fn test_description_is_truncated_to_250_chars() {
        let long = format!("Acme net zero {}", "é".repeat(400));
        let results = vec![SearchResult::new("Acme", long, "https://acme.com/")];
        let description = fallback_description("Acme", &results).unwrap();
        assert_eq!(description.chars().count(), MAX_DESCRIPTION_CHARS);
        assert!(description.starts_with("Acme net zero "));
    }

    #[test]
    fn test_source_url_skips_empty_urls() {
        let results = vec![SearchResult::new("Acme", "Acme net zero", "")];
        assert_eq!(fallback_source_url("Acme", &results), None);
    }

    #[test]
    fn test_fallbacks_are_deterministic() {
        let results = vec![third_party(), acme_press()];
        let partial = GoalAnswer {
            has_goal: Some("Yes".to_string()),
            ..GoalAnswer::default()
        };
        let first = apply_fallbacks("Acme Corp", partial.clone(), &results);
        let second = apply_fallbacks("Acme Corp", partial, &results);
        assert_eq!(first, second);
        assert_eq!(apply_fallbacks("Acme Corp", first.clone(), &results), first);
    }
}
