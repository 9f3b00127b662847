//! Curated fallback board, personalized by role and gap score.

use crate::jobs::{JobListing, JobQuery};

const MAX_MATCH: i64 = 99;
const MIN_MATCH: i64 = 50;
const SKILLS_SHOWN: usize = 3;

struct MockJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    kind: &'static str,
    logo: &'static str,
    apply_url: &'static str,
    posted: &'static str,
    base_match: u32,
}

/// Always-available listings used when no live board is configured or the live
/// board fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockJobBoard;

impl MockJobBoard {
    /// Listings for the role (or the generic board), each shifted one point per
    /// five points of gap score above or below 70, best match first.
    pub fn listings(&self, query: &JobQuery) -> Vec<JobListing> {
        let board = BOARDS
            .iter()
            .find(|(role, _)| *role == query.role)
            .map(|(_, jobs)| *jobs)
            .unwrap_or(DEFAULT_JOBS);
        let shift = (i64::from(query.match_score_or_neutral()) - 70).div_euclid(5);
        let skills: Vec<String> = query.top_skills.iter().take(SKILLS_SHOWN).cloned().collect();

        let mut listings: Vec<JobListing> = board
            .iter()
            .take(query.num_results)
            .map(|job| {
                let personalized = (i64::from(job.base_match) + shift).clamp(MIN_MATCH, MAX_MATCH);
                JobListing {
                    title: job.title.to_string(),
                    company: job.company.to_string(),
                    location: job.location.to_string(),
                    salary: job.salary.to_string(),
                    kind: job.kind.to_string(),
                    logo: job.logo.to_string(),
                    apply_url: job.apply_url.to_string(),
                    posted: job.posted.to_string(),
                    description: None,
                    match_percent: personalized as u32,
                    skills_matched: Some(skills.clone()),
                    source: "mock".to_string(),
                }
            })
            .collect();
        // Stable: equal matches keep board order.
        listings.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
        listings
    }
}

const FULL_STACK_DEVELOPER_JOBS: &[MockJob] = &[
    MockJob {
        title: "Senior Full Stack Developer",
        company: "Razorpay",
        location: "Bangalore, India",
        salary: "₹18–35 LPA",
        kind: "Full-time",
        logo: "🟣",
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=full+stack+developer&location=Bangalore",
        posted: "2 days ago",
        base_match: 94,
    },
    MockJob {
        title: "Full Stack Engineer (React + Node)",
        company: "Swiggy",
        location: "Bangalore, India",
        salary: "₹20–40 LPA",
        kind: "Full-time",
        logo: "🟠",
        apply_url: "https://careers.swiggy.com",
        posted: "1 day ago",
        base_match: 91,
    },
    MockJob {
        title: "Full Stack Developer",
        company: "Freshworks",
        location: "Chennai, India",
        salary: "₹15–28 LPA",
        kind: "Full-time",
        logo: "🟢",
        apply_url: "https://www.freshworks.com/company/careers/",
        posted: "3 days ago",
        base_match: 88,
    },
    MockJob {
        title: "Software Engineer – Full Stack",
        company: "Atlassian",
        location: "Remote",
        salary: "$100–140K USD",
        kind: "Remote",
        logo: "🔵",
        apply_url: "https://www.atlassian.com/company/careers",
        posted: "Today",
        base_match: 85,
    },
    MockJob {
        title: "Full Stack Intern",
        company: "Zepto",
        location: "Mumbai, India",
        salary: "₹40–60K/month",
        kind: "Internship",
        logo: "🟡",
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=full+stack+intern",
        posted: "4 days ago",
        base_match: 79,
    },
];

const DATA_SCIENTIST_JOBS: &[MockJob] = &[
    MockJob {
        title: "Data Scientist II",
        company: "Amazon",
        location: "Hyderabad, India",
        salary: "₹25–45 LPA",
        kind: "Full-time",
        logo: "🟠",
        apply_url: "https://www.amazon.jobs/en/search?base_query=data+scientist",
        posted: "1 day ago",
        base_match: 95,
    },
    MockJob {
        title: "Senior Data Scientist",
        company: "Flipkart",
        location: "Bangalore, India",
        salary: "₹20–38 LPA",
        kind: "Full-time",
        logo: "🟡",
        apply_url: "https://www.flipkartcareers.com",
        posted: "2 days ago",
        base_match: 90,
    },
    MockJob {
        title: "Data Scientist – Fraud Analytics",
        company: "PhonePe",
        location: "Bangalore, India",
        salary: "₹18–32 LPA",
        kind: "Full-time",
        logo: "🟣",
        apply_url: "https://careers.phonepe.com",
        posted: "3 days ago",
        base_match: 87,
    },
    MockJob {
        title: "Machine Learning Scientist",
        company: "Fractal Analytics",
        location: "Mumbai, India",
        salary: "₹12–22 LPA",
        kind: "Full-time",
        logo: "🔷",
        apply_url: "https://fractal.ai/careers",
        posted: "Today",
        base_match: 83,
    },
    MockJob {
        title: "Data Scientist Intern",
        company: "CRED",
        location: "Bangalore, India",
        salary: "₹50–80K/month",
        kind: "Internship",
        logo: "⚫",
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=data+scientist+intern+bangalore",
        posted: "5 days ago",
        base_match: 78,
    },
];

const ML_ENGINEER_JOBS: &[MockJob] = &[
    MockJob {
        title: "ML Engineer – NLP",
        company: "Google",
        location: "Hyderabad, India",
        salary: "₹30–55 LPA",
        kind: "Full-time",
        logo: "🔵",
        apply_url: "https://careers.google.com/jobs/results/?q=machine+learning+engineer",
        posted: "Today",
        base_match: 96,
    },
    MockJob {
        title: "Senior MLOps Engineer",
        company: "Microsoft",
        location: "Bangalore, India",
        salary: "₹28–50 LPA",
        kind: "Full-time",
        logo: "🔵",
        apply_url: "https://careers.microsoft.com/us/en/search-results?keywords=ml+engineer",
        posted: "2 days ago",
        base_match: 92,
    },
    MockJob {
        title: "ML Infrastructure Engineer",
        company: "ShareChat",
        location: "Bangalore, India",
        salary: "₹22–40 LPA",
        kind: "Full-time",
        logo: "🟣",
        apply_url: "https://sharechat.com/careers",
        posted: "1 day ago",
        base_match: 89,
    },
    MockJob {
        title: "Research Engineer – ML",
        company: "Sarvam AI",
        location: "Bangalore, India",
        salary: "₹20–45 LPA",
        kind: "Full-time",
        logo: "🤖",
        apply_url: "https://www.sarvam.ai/careers",
        posted: "3 days ago",
        base_match: 85,
    },
    MockJob {
        title: "ML Engineer (Computer Vision)",
        company: "Ola",
        location: "Bangalore, India",
        salary: "₹18–35 LPA",
        kind: "Full-time",
        logo: "🟡",
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=ml+engineer+computer+vision+bangalore",
        posted: "4 days ago",
        base_match: 80,
    },
];

const DEVOPS_CLOUD_ENGINEER_JOBS: &[MockJob] = &[
    MockJob {
        title: "Senior DevOps Engineer",
        company: "Infosys",
        location: "Bangalore, India",
        salary: "₹12–22 LPA",
        kind: "Full-time",
        logo: "🔷",
        apply_url: "https://www.infosys.com/careers/apply.html",
        posted: "1 day ago",
        base_match: 88,
    },
    MockJob {
        title: "Cloud Infrastructure Engineer",
        company: "Walmart Labs",
        location: "Bangalore, India",
        salary: "₹20–38 LPA",
        kind: "Full-time",
        logo: "🔵",
        apply_url: "https://careers.walmart.com/results?q=devops",
        posted: "Today",
        base_match: 91,
    },
    MockJob {
        title: "SRE / DevOps Engineer",
        company: "Razorpay",
        location: "Bangalore, India",
        salary: "₹18–32 LPA",
        kind: "Full-time",
        logo: "🟣",
        apply_url: "https://razorpay.com/jobs",
        posted: "2 days ago",
        base_match: 89,
    },
    MockJob {
        title: "AWS Cloud Engineer",
        company: "TCS",
        location: "Mumbai, India",
        salary: "₹8–16 LPA",
        kind: "Full-time",
        logo: "🔵",
        apply_url: "https://www.tcs.com/careers",
        posted: "3 days ago",
        base_match: 82,
    },
    MockJob {
        title: "DevOps Intern",
        company: "Freshworks",
        location: "Chennai, India",
        salary: "₹30–50K/month",
        kind: "Internship",
        logo: "🟢",
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=devops+intern+india",
        posted: "4 days ago",
        base_match: 76,
    },
];

const PRODUCT_MANAGER_JOBS: &[MockJob] = &[
    MockJob {
        title: "Product Manager – Growth",
        company: "CRED",
        location: "Bangalore, India",
        salary: "₹20–38 LPA",
        kind: "Full-time",
        logo: "⚫",
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=product+manager+cred",
        posted: "Today",
        base_match: 93,
    },
    MockJob {
        title: "Senior Product Manager",
        company: "Swiggy",
        location: "Bangalore, India",
        salary: "₹25–45 LPA",
        kind: "Full-time",
        logo: "🟠",
        apply_url: "https://careers.swiggy.com",
        posted: "2 days ago",
        base_match: 90,
    },
    MockJob {
        title: "Associate PM",
        company: "Razorpay",
        location: "Bangalore, India",
        salary: "₹18–30 LPA",
        kind: "Full-time",
        logo: "🟣",
        apply_url: "https://razorpay.com/jobs",
        posted: "1 day ago",
        base_match: 87,
    },
    MockJob {
        title: "Product Manager – Payments",
        company: "PhonePe",
        location: "Bangalore, India",
        salary: "₹22–40 LPA",
        kind: "Full-time",
        logo: "🟣",
        apply_url: "https://careers.phonepe.com",
        posted: "3 days ago",
        base_match: 84,
    },
    MockJob {
        title: "APM / PM Intern",
        company: "Meesho",
        location: "Bangalore, India",
        salary: "₹60–80K/month",
        kind: "Internship",
        logo: "🟡",
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=product+manager+intern+bangalore",
        posted: "5 days ago",
        base_match: 78,
    },
];

const CYBERSECURITY_ANALYST_JOBS: &[MockJob] = &[
    MockJob {
        title: "Security Analyst L2",
        company: "IBM",
        location: "Bangalore, India",
        salary: "₹8–16 LPA",
        kind: "Full-time",
        logo: "🔵",
        apply_url: "https://www.ibm.com/employment/",
        posted: "2 days ago",
        base_match: 88,
    },
    MockJob {
        title: "Cybersecurity Engineer",
        company: "TCS",
        location: "Mumbai, India",
        salary: "₹7–14 LPA",
        kind: "Full-time",
        logo: "🔵",
        apply_url: "https://www.tcs.com/careers",
        posted: "1 day ago",
        base_match: 84,
    },
    MockJob {
        title: "Penetration Tester",
        company: "HackerOne",
        location: "Remote",
        salary: "$70–110K USD",
        kind: "Remote",
        logo: "🔴",
        apply_url: "https://www.hackerone.com/careers",
        posted: "Today",
        base_match: 91,
    },
    MockJob {
        title: "SOC Analyst",
        company: "Wipro",
        location: "Hyderabad, India",
        salary: "₹6–12 LPA",
        kind: "Full-time",
        logo: "🟡",
        apply_url: "https://careers.wipro.com",
        posted: "3 days ago",
        base_match: 80,
    },
    MockJob {
        title: "Security Intern",
        company: "Razorpay",
        location: "Bangalore, India",
        salary: "₹35–55K/month",
        kind: "Internship",
        logo: "🟣",
        apply_url: "https://www.linkedin.com/jobs/search/?keywords=security+intern+bangalore",
        posted: "4 days ago",
        base_match: 75,
    },
];

const DEFAULT_JOBS: &[MockJob] = &[
    MockJob {
        title: "Software Engineer",
        company: "Google",
        location: "Hyderabad, India",
        salary: "₹20–45 LPA",
        kind: "Full-time",
        logo: "🔵",
        apply_url: "https://careers.google.com",
        posted: "Today",
        base_match: 88,
    },
    MockJob {
        title: "Software Developer",
        company: "Microsoft",
        location: "Bangalore, India",
        salary: "₹22–48 LPA",
        kind: "Full-time",
        logo: "🔵",
        apply_url: "https://careers.microsoft.com",
        posted: "2 days ago",
        base_match: 85,
    },
    MockJob {
        title: "Full Stack Engineer",
        company: "Razorpay",
        location: "Bangalore, India",
        salary: "₹18–35 LPA",
        kind: "Full-time",
        logo: "🟣",
        apply_url: "https://razorpay.com/jobs",
        posted: "1 day ago",
        base_match: 82,
    },
    MockJob {
        title: "Backend Engineer",
        company: "Swiggy",
        location: "Bangalore, India",
        salary: "₹15–30 LPA",
        kind: "Full-time",
        logo: "🟠",
        apply_url: "https://careers.swiggy.com",
        posted: "3 days ago",
        base_match: 79,
    },
    MockJob {
        title: "Software Engineer Intern",
        company: "Freshworks",
        location: "Chennai, India",
        salary: "₹40–60K/month",
        kind: "Internship",
        logo: "🟢",
        apply_url: "https://www.freshworks.com/company/careers/",
        posted: "4 days ago",
        base_match: 75,
    },
];

static BOARDS: &[(&str, &[MockJob])] = &[
    ("Full Stack Developer", FULL_STACK_DEVELOPER_JOBS),
    ("Data Scientist", DATA_SCIENTIST_JOBS),
    ("ML Engineer", ML_ENGINEER_JOBS),
    ("DevOps / Cloud Engineer", DEVOPS_CLOUD_ENGINEER_JOBS),
    ("Product Manager", PRODUCT_MANAGER_JOBS),
    ("Cybersecurity Analyst", CYBERSECURITY_ANALYST_JOBS),
];
