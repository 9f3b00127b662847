//! Gap Scorer: compares a `Profile` against a role's weighted requirements.
//!
//! Pure and total: every empty input degrades to a placeholder instead of an error,
//! and the only data read besides the arguments is the static role table.
//!
//! Algorithm:
//! 1. A requirement is satisfied when its lower-cased name equals, contains, or is
//!    contained in any lower-cased profile skill (deliberately fuzzy).
//! 2. score = round(satisfied_weight / total_weight × 100), weights 3/2/1,
//!    clamped to [20, 95]; experienced candidates under 80 get +8, capped at 85.
//! 3. Gaps: every missed critical, up to 3 moderate, up to 2 minor; first 6 returned.

use serde::{Deserialize, Serialize};

use crate::analysis::roles::{CourseSpec, RoleRequirement};
use crate::profile::Profile;

pub const MIN_SCORE: u32 = 20;
pub const MAX_SCORE: u32 = 95;
const EXPERIENCE_BOOST: u32 = 8;
const EXPERIENCE_BOOST_BELOW: u32 = 80;
const EXPERIENCE_BOOST_CEILING: u32 = 85;
/// Experience levels that earn the score boost.
pub const EXPERIENCED_LEVELS: &[&str] = &["1-3 years", "3+ years"];

const MAX_MODERATE_GAPS: usize = 3;
const MAX_MINOR_GAPS: usize = 2;
const MAX_GAPS: usize = 6;
const MAX_STRENGTHS: usize = 5;
const MAX_SKILL_BARS: usize = 6;
const MAX_COURSES: usize = 3;
const MAX_MISSING_SKILLS: usize = 5;

const PLACEHOLDER_SKILL: &str = "Programming";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Moderate,
    Minor,
}

impl Severity {
    pub fn weight(self) -> u32 {
        match self {
            Severity::Critical => 3,
            Severity::Moderate => 2,
            Severity::Minor => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub severity: Severity,
    pub reason: String,
}

/// Display-only bar; never feeds back into scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBar {
    pub name: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    Immediate,
    Short,
    Long,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: u8,
    pub title: String,
    pub description: String,
    pub timeframe: String,
    #[serde(rename = "type")]
    pub horizon: Horizon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub platform: String,
    pub duration: String,
    pub why: String,
    pub url: String,
}

impl From<&CourseSpec> for Course {
    fn from(spec: &CourseSpec) -> Self {
        Course {
            title: spec.title.to_string(),
            platform: spec.platform.to_string(),
            duration: spec.duration.to_string(),
            why: spec.why.to_string(),
            url: spec.url.to_string(),
        }
    }
}

/// Scored comparison of a profile against a role, with a remediation roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    pub summary: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<SkillGap>,
    #[serde(rename = "skillBars")]
    pub skill_bars: Vec<SkillBar>,
    pub roadmap: Vec<RoadmapStep>,
    pub courses: Vec<Course>,
    pub missing_skills: Vec<String>,
}

impl GapReport {
    pub fn gap_skills(&self, limit: usize) -> Vec<&str> {
        self.gaps.iter().take(limit).map(|g| g.skill.as_str()).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// Lower-cased view of a profile's skills for fuzzy requirement checks.
struct SkillMatcher {
    skills: Vec<String>,
}

impl SkillMatcher {
    fn new(profile: &Profile) -> Self {
        Self {
            skills: profile.skills.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Equality is the substring case in both directions, so one check covers all three.
    fn has(&self, required: &str) -> bool {
        let required = required.to_lowercase();
        self.skills
            .iter()
            .any(|s| s.contains(&required) || required.contains(s.as_str()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores `profile` against `target_role`, falling back to the default
/// requirements for unknown roles.
pub fn score(profile: &Profile, target_role: &str, experience_level: &str) -> GapReport {
    let req = RoleRequirement::lookup(target_role);
    let matcher = SkillMatcher::new(profile);

    let match_score = compute_match_score(req, &matcher, experience_level);
    let all_gaps = collect_gaps(req, &matcher, target_role);

    let critical_missing: Vec<&str> = all_gaps
        .iter()
        .filter(|g| g.severity == Severity::Critical)
        .map(|g| g.skill.as_str())
        .collect();

    let strengths = collect_strengths(req, &matcher, profile);
    let summary = build_summary(match_score, target_role, &strengths, &critical_missing);
    let first_gap = all_gaps.first().map(|g| g.skill.as_str());
    let roadmap = build_roadmap(target_role, &critical_missing, first_gap, &profile.skills);
    let skill_bars = build_skill_bars(req, &profile.skills);
    let missing_skills = critical_missing
        .iter()
        .take(MAX_MISSING_SKILLS)
        .map(|s| s.to_string())
        .collect();

    let mut gaps = all_gaps;
    gaps.truncate(MAX_GAPS);

    GapReport {
        match_score,
        summary,
        strengths,
        gaps,
        skill_bars,
        roadmap,
        courses: req.courses.iter().take(MAX_COURSES).map(Course::from).collect(),
        missing_skills,
    }
}

fn compute_match_score(
    req: &RoleRequirement,
    matcher: &SkillMatcher,
    experience_level: &str,
) -> u32 {
    let tiers = [
        (req.critical, Severity::Critical),
        (req.moderate, Severity::Moderate),
        (req.minor, Severity::Minor),
    ];

    let mut total_weight = 0_u32;
    let mut satisfied_weight = 0_u32;
    for (skills, severity) in tiers {
        for skill in skills {
            total_weight += severity.weight();
            if matcher.has(skill) {
                satisfied_weight += severity.weight();
            }
        }
    }

    let raw = (satisfied_weight as f64 / total_weight.max(1) as f64 * 100.0).round() as u32;
    let mut score = raw.clamp(MIN_SCORE, MAX_SCORE);

    if EXPERIENCED_LEVELS.contains(&experience_level) && score < EXPERIENCE_BOOST_BELOW {
        score = (score + EXPERIENCE_BOOST).min(EXPERIENCE_BOOST_CEILING);
    }
    score
}

/// Builds the untruncated gap list: critical first, then capped moderate and minor.
fn collect_gaps(req: &RoleRequirement, matcher: &SkillMatcher, target_role: &str) -> Vec<SkillGap> {
    let mut gaps: Vec<SkillGap> = req
        .critical
        .iter()
        .filter(|s| !matcher.has(s))
        .map(|s| SkillGap {
            skill: s.to_string(),
            severity: Severity::Critical,
            reason: format!("Core requirement for {target_role}, listed in 95%+ of job postings"),
        })
        .collect();

    gaps.extend(
        req.moderate
            .iter()
            .filter(|s| !matcher.has(s))
            .take(MAX_MODERATE_GAPS)
            .map(|s| SkillGap {
                skill: s.to_string(),
                severity: Severity::Moderate,
                reason: format!("Highly preferred for {target_role} roles"),
            }),
    );

    gaps.extend(
        req.minor
            .iter()
            .filter(|s| !matcher.has(s))
            .take(MAX_MINOR_GAPS)
            .map(|s| SkillGap {
                skill: s.to_string(),
                severity: Severity::Minor,
                reason: "Nice-to-have that boosts your profile".to_string(),
            }),
    );

    gaps
}

fn collect_strengths(
    req: &RoleRequirement,
    matcher: &SkillMatcher,
    profile: &Profile,
) -> Vec<String> {
    let satisfied: Vec<String> = req
        .critical
        .iter()
        .chain(req.moderate.iter())
        .filter(|s| matcher.has(s))
        .take(MAX_STRENGTHS)
        .map(|s| s.to_string())
        .collect();

    if !satisfied.is_empty() {
        return satisfied;
    }
    if !profile.skills.is_empty() {
        return profile.skills.iter().take(3).cloned().collect();
    }
    vec![PLACEHOLDER_SKILL.to_string()]
}

fn build_skill_bars(req: &RoleRequirement, skills: &[String]) -> Vec<SkillBar> {
    if skills.is_empty() {
        return vec![SkillBar {
            name: PLACEHOLDER_SKILL.to_string(),
            percentage: 50,
        }];
    }

    skills
        .iter()
        .take(MAX_SKILL_BARS)
        .enumerate()
        .map(|(idx, skill)| {
            let base = if req.critical.contains(&skill.as_str()) {
                75
            } else if req.moderate.contains(&skill.as_str()) {
                55
            } else {
                45
            };
            SkillBar {
                name: skill.clone(),
                percentage: (base + 3 * idx as u32).min(90),
            }
        })
        .collect()
}

fn build_summary(
    score: u32,
    role: &str,
    strengths: &[String],
    critical_missing: &[&str],
) -> String {
    let top_strengths = strengths.iter().take(2).cloned().collect::<Vec<_>>().join(", ");

    if score >= 75 {
        let strengths_phrase = non_empty_or(top_strengths, "your current skills");
        let focus = critical_missing.first().copied().unwrap_or("advanced topics");
        format!(
            "Strong match for {role}! Solid foundation with {strengths_phrase}. \
             Focus on {focus} to go fully job-ready."
        )
    } else if score >= 50 {
        let strengths_phrase = non_empty_or(top_strengths, "Your skills");
        let closing = match critical_missing.len() {
            0 => "Polish the remaining nice-to-have skills to boost your chances.".to_string(),
            1 => "Close 1 critical gap to boost your chances.".to_string(),
            n => format!("Close {n} critical gaps to boost your chances."),
        };
        format!("Good potential for {role}. {strengths_phrase} are valuable. {closing}")
    } else {
        let focus = non_empty_or(
            critical_missing.iter().take(2).copied().collect::<Vec<_>>().join(", "),
            "required skills",
        );
        format!(
            "You're on your way to {role}. Focus intensively on {focus}; \
             these appear in 90%+ of job postings."
        )
    }
}

/// The three fixed roadmap steps; only the interpolated names vary.
fn build_roadmap(
    role: &str,
    critical_missing: &[&str],
    first_gap: Option<&str>,
    skills: &[String],
) -> Vec<RoadmapStep> {
    let focus = non_empty_or(
        critical_missing.iter().take(2).copied().collect::<Vec<_>>().join(", "),
        first_gap.unwrap_or("core skills"),
    );
    let known = non_empty_or(
        skills.iter().take(2).cloned().collect::<Vec<_>>().join(", "),
        "your skills",
    );

    vec![
        RoadmapStep {
            step: 1,
            title: "Close Critical Gaps".to_string(),
            description: format!("Focus on {focus}. Spend 2-3 hours daily."),
            timeframe: "0-1 month".to_string(),
            horizon: Horizon::Immediate,
        },
        RoadmapStep {
            step: 2,
            title: "Build Real Projects".to_string(),
            description: format!(
                "Create 2-3 portfolio projects using {known}. Push to GitHub."
            ),
            timeframe: "1-3 months".to_string(),
            horizon: Horizon::Short,
        },
        RoadmapStep {
            step: 3,
            title: "Apply & Network".to_string(),
            description: format!(
                "Apply to 10 {role} positions/week. Attend meetups, expand LinkedIn."
            ),
            timeframe: "3-6 months".to_string(),
            horizon: Horizon::Long,
        },
    ]
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
