// src/classify.rs
use crate::listing::{Listing, Requirement};
use regex::Regex;
use std::sync::OnceLock;

pub const EXPERIENCE_NOT_SET: &str = "Not Set";

const TITLE_KEYWORDS: [&str; 4] = ["fullstack", "senior", "engineer", "lead"];
const QUALIFYING_HEADLINE: &str = "who you are";

/// Matches a years-of-experience token: "5", "5+", "3-5", "3-5+".
fn years_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(\d+\s?(?:-\d+)?\+?)\s*(years?)").expect("years pattern is valid")
    })
}

/// Assign `experience` and `requirement` to an enriched listing.
///
/// Only headline blocks labeled "Who you are" are scanned for a years token;
/// when several qualify, the last match wins. Classifier state starts fresh
/// for every listing, so one listing's signals never leak into the next.
/// Pure text analysis, idempotent.
pub fn classify(listing: &mut Listing) {
    let mut experience = EXPERIENCE_NOT_SET.to_string();
    let mut professional_match = false;

    let title = listing.text.to_lowercase();

    for headline in listing.headlines.iter().flatten() {
        if !headline.text.to_lowercase().contains(QUALIFYING_HEADLINE) {
            continue;
        }

        if let Some(captures) = years_pattern().captures(&headline.content) {
            experience = captures[1].trim().to_string();
        }

        if title.contains("professional experience") {
            professional_match = true;
        }
    }

    let keyword_hit = TITLE_KEYWORDS.iter().any(|kw| title.contains(kw));
    let requirement = if keyword_hit || experience != EXPERIENCE_NOT_SET || professional_match {
        Requirement::Experienced
    } else {
        Requirement::NotExperienced
    };

    listing.experience = Some(experience);
    listing.requirement = Some(requirement);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{ContentBlock, JobId};
    use serde_json::Map;

    fn listing(text: &str, headlines: Vec<ContentBlock>) -> Listing {
        Listing {
            id: JobId::Text("j1".to_string()),
            text: text.to_string(),
            extra: Map::new(),
            urls: Some(Map::new()),
            headlines: Some(headlines),
            description: Some(String::new()),
            experience: None,
            requirement: None,
        }
    }

    fn block(text: &str, content: &str) -> ContentBlock {
        ContentBlock {
            text: text.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_title_keywords_imply_experienced() {
        for title in [
            "Fullstack Developer",
            "SENIOR Product Manager",
            "Backend Engineer",
            "Tech Lead, Platform",
        ] {
            let mut l = listing(title, vec![]);
            classify(&mut l);
            assert_eq!(l.requirement, Some(Requirement::Experienced), "{title}");
            assert_eq!(l.experience.as_deref(), Some(EXPERIENCE_NOT_SET));
        }
    }

    #[test]
    fn test_years_token_is_captured() {
        let mut l = listing(
            "Backend Developer",
            vec![block("Who you are", "You have 3+ years of experience with Rust.")],
        );
        classify(&mut l);
        assert_eq!(l.experience.as_deref(), Some("3+"));
        assert_eq!(l.requirement, Some(Requirement::Experienced));
    }

    #[test]
    fn test_range_token_is_captured() {
        let mut l = listing(
            "Backend Developer",
            vec![block("WHO YOU ARE", "3-5 Years working with distributed systems")],
        );
        classify(&mut l);
        assert_eq!(l.experience.as_deref(), Some("3-5"));
        assert_eq!(l.requirement, Some(Requirement::Experienced));
    }

    #[test]
    fn test_no_signal_means_not_experienced() {
        let mut l = listing(
            "Backend Developer",
            vec![block("What you'll do", "You have 5 years of experience.")],
        );
        classify(&mut l);
        assert_eq!(l.experience.as_deref(), Some(EXPERIENCE_NOT_SET));
        assert_eq!(l.requirement, Some(Requirement::NotExperienced));
    }

    #[test]
    fn test_last_qualifying_match_wins() {
        let mut l = listing(
            "Backend Developer",
            vec![
                block("Who you are", "2+ years of backend work"),
                block("Who you are, continued", "7 years shipping production systems"),
            ],
        );
        classify(&mut l);
        assert_eq!(l.experience.as_deref(), Some("7"));
    }

    #[test]
    fn test_professional_experience_in_title() {
        let mut l = listing(
            "Backend Developer with professional experience",
            vec![block("Who you are", "You enjoy collaborating.")],
        );
        classify(&mut l);
        assert_eq!(l.experience.as_deref(), Some(EXPERIENCE_NOT_SET));
        assert_eq!(l.requirement, Some(Requirement::Experienced));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let mut l = listing(
            "Senior Data Scientist",
            vec![block("Who you are", "4+ years of applied ML")],
        );
        classify(&mut l);
        let first = l.clone();
        classify(&mut l);
        assert_eq!(l, first);
    }
}
