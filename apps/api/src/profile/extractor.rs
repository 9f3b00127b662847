//! Profile Extractor: turns raw résumé text into a structured `Profile`.
//!
//! Best-effort and total: sparse input degrades to empty fields and the
//! "Candidate" placeholder name, never to an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::vocabulary::SKILL_PATTERNS;
use crate::profile::{Education, Experience, Profile};

pub const PLACEHOLDER_NAME: &str = "Candidate";

const NAME_SCAN_LINES: usize = 6;
const MAX_EDUCATION: usize = 2;
const MAX_EXPERIENCE: usize = 3;
const EDUCATION_MAX_CHARS: usize = 80;
const EXPERIENCE_MAX_CHARS: usize = 60;

static NAME_REJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[@\d|•\-+/\\]").unwrap());

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.\-+]+@[\w.-]+\.\w+").unwrap());

// Deliberately loose: any 10–15 char run of digits, spaces, dashes and parens.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?[\d\s\-()]{10,15}").unwrap());

static EDUCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(B\.?Tech|B\.?E\.?|B\.?Sc|M\.?Tech|M\.?Sc|MBA|PhD|Bachelor|Master|Diploma|B\.?C\.?A|M\.?C\.?A)[^\n]{0,80}",
    )
    .unwrap()
});

static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(Software|Senior|Junior|Full[\s-]?Stack|Backend|Frontend|Data|ML|DevOps|Cloud|Security|Product|UX)[\w\s]*?(Developer|Engineer|Analyst|Designer|Manager|Intern|Lead|Architect)[^\n]{0,60}",
    )
    .unwrap()
});

/// Extracts a `Profile` from plain résumé text.
pub fn extract(text: &str) -> Profile {
    Profile {
        name: extract_name(text),
        email: first_match(&EMAIL_RE, text),
        phone: first_match(&PHONE_RE, text).trim().to_string(),
        skills: extract_skills(text),
        education: EDUCATION_RE
            .find_iter(text)
            .take(MAX_EDUCATION)
            .map(|m| Education {
                degree: clip(m.as_str(), EDUCATION_MAX_CHARS),
                institution: String::new(),
            })
            .collect(),
        experience: EXPERIENCE_RE
            .find_iter(text)
            .take(MAX_EXPERIENCE)
            .map(|m| Experience {
                title: clip(m.as_str(), EXPERIENCE_MAX_CHARS),
                company: String::new(),
            })
            .collect(),
        projects: Vec::new(),
    }
}

fn extract_name(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| {
            let tokens = line.split_whitespace().count();
            !NAME_REJECT_RE.is_match(line) && (2..=5).contains(&tokens)
        })
        .map(title_case)
        .unwrap_or_else(|| PLACEHOLDER_NAME.to_string())
}

fn extract_skills(text: &str) -> Vec<String> {
    SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(term, _)| term.to_string())
        .collect()
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Trims, then keeps at most `max_chars` characters.
fn clip(raw: &str, max_chars: usize) -> String {
    raw.trim().chars().take(max_chars).collect()
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
fn title_case(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut prev_is_letter = false;
    for c in line.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::vocabulary::SKILL_VOCABULARY;

    const SAMPLE_RESUME: &str = "\
PRIYA SHARMA
priya.sharma@example.com | +91 98765 43210
Bangalore, India

SUMMARY
Full Stack Developer with 2 years building React and Node services on AWS.

EXPERIENCE
Software Engineer at Acme Corp, 2022 - present
Frontend Intern at Nova Labs

EDUCATION
B.Tech in Computer Science, VIT University, 2022

SKILLS
Python, JavaScript, react, Docker, git, PostgreSQL
";

    #[test]
    fn test_name_is_first_clean_line_title_cased() {
        let profile = extract(SAMPLE_RESUME);
        assert_eq!(profile.name, "Priya Sharma");
    }

    #[test]
    fn test_name_skips_lines_with_rejected_characters() {
        let text = "john-doe\nCall 555 0100\njane q public\nmore text here";
        assert_eq!(extract(text).name, "Jane Q Public");
    }

    #[test]
    fn test_name_requires_two_to_five_tokens() {
        let text = "Resume\none two three four five six\nAda Lovelace";
        assert_eq!(extract(text).name, "Ada Lovelace");
    }

    #[test]
    fn test_name_only_scans_first_six_nonblank_lines() {
        let text = "1\n2\n3\n\n\n4\n5\n6\nGrace Hopper";
        assert_eq!(extract(text).name, PLACEHOLDER_NAME);
    }

    #[test]
    fn test_name_placeholder_when_nothing_qualifies() {
        let text = "a@b.com\n+1 555 010 0000\nhttps://x.dev/me";
        assert_eq!(extract(text).name, PLACEHOLDER_NAME);
    }

    #[test]
    fn test_email_first_match() {
        let text = "first: a.b+c@mail.example.org second: z@y.io";
        assert_eq!(extract(text).email, "a.b+c@mail.example.org");
    }

    #[test]
    fn test_email_empty_when_absent() {
        assert_eq!(extract("no contact details here").email, "");
    }

    #[test]
    fn test_phone_is_trimmed_loose_match() {
        let profile = extract(SAMPLE_RESUME);
        assert!(profile.phone.starts_with("+91 98765"));
        assert_eq!(profile.phone, profile.phone.trim());
    }

    #[test]
    fn test_phone_empty_when_absent() {
        assert_eq!(extract("Ada Lovelace\nanalyst").phone, "");
    }

    #[test]
    fn test_skills_follow_vocabulary_order_not_document_order() {
        let profile = extract("I use Docker, then Python, then docker again.");
        assert_eq!(profile.skills, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_skills_are_case_insensitive_whole_words() {
        let profile = extract("Experienced with REACT and kubernetes; loves Gopher toys");
        assert!(profile.skills.contains(&"React".to_string()));
        assert!(profile.skills.contains(&"Kubernetes".to_string()));
        // "Gopher" must not produce "Go".
        assert!(!profile.skills.contains(&"Go".to_string()));
    }

    #[test]
    fn test_skills_subset_of_vocabulary_without_duplicates() {
        let profile = extract(SAMPLE_RESUME);
        let mut last_index = None;
        for skill in &profile.skills {
            let idx = SKILL_VOCABULARY
                .iter()
                .position(|t| *t == skill.as_str())
                .expect("skill comes from vocabulary");
            if let Some(prev) = last_index {
                assert!(idx > prev, "skills must be a strictly ordered subsequence");
            }
            last_index = Some(idx);
        }
    }

    #[test]
    fn test_skills_empty_when_no_term_present() {
        assert!(extract("Gardening enthusiast who bakes bread").skills.is_empty());
    }

    #[test]
    fn test_education_captures_degree_line() {
        let profile = extract(SAMPLE_RESUME);
        assert_eq!(profile.education.len(), 1);
        assert!(profile.education[0].degree.starts_with("B.Tech in Computer Science"));
        assert_eq!(profile.education[0].institution, "");
    }

    #[test]
    fn test_education_capped_at_two() {
        let text = "MBA Finance\nMaster of Science\nPhD Physics\n";
        let profile = extract(text);
        assert_eq!(profile.education.len(), 2);
        assert_eq!(profile.education[0].degree, "MBA Finance");
        assert_eq!(profile.education[1].degree, "Master of Science");
    }

    #[test]
    fn test_experience_titles_capped_at_three() {
        let text = "Senior Engineer\nData Analyst\nUX Designer\nProduct Manager\n";
        let profile = extract(text);
        assert_eq!(profile.experience.len(), 3);
        assert_eq!(profile.experience[0].title, "Senior Engineer");
        assert!(profile.experience.iter().all(|e| e.company.is_empty()));
    }

    #[test]
    fn test_experience_clipped_to_sixty_chars() {
        let tail = "x".repeat(100);
        let text = format!("Software Engineer {tail}");
        let profile = extract(&text);
        assert_eq!(profile.experience[0].title.chars().count(), 60);
    }

    #[test]
    fn test_projects_always_empty() {
        assert!(extract(SAMPLE_RESUME).projects.is_empty());
    }

    #[test]
    fn test_extract_is_deterministic() {
        assert_eq!(extract(SAMPLE_RESUME), extract(SAMPLE_RESUME));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("mary o'neil"), "Mary O'Neil");
        assert_eq!(title_case("ALAN TURING"), "Alan Turing");
    }
}
