//! Closed skill vocabulary recognized by the extractor.
//!
//! Order matters: extracted skills are reported in this order, not résumé order.

use once_cell::sync::Lazy;
use regex::Regex;

pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "Python", "JavaScript", "TypeScript", "React", "Node", "Angular", "Vue", "Java", "C", "C++",
    "C#", "Go", "Rust", "Swift", "Kotlin", "PHP", "Ruby", "Scala", "R", "MATLAB",
    // Data stores
    "SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "Cassandra", "SQLite", "Firebase",
    "Supabase",
    // Infra
    "Docker", "Kubernetes", "AWS", "Azure", "GCP", "Terraform", "Ansible", "Jenkins", "Linux",
    "Bash", "Git", "GitHub", "GitLab", "CI/CD", "Nginx", "Apache",
    // Web
    "HTML", "CSS", "Tailwind", "Bootstrap", "Sass", "Webpack", "Vite", "FastAPI", "Django",
    "Flask", "Spring", "Express", "Next.js", "Nest.js", "Laravel",
    // ML / data
    "TensorFlow", "PyTorch", "Keras", "scikit-learn", "pandas", "numpy", "OpenCV",
    "Machine Learning", "Deep Learning", "NLP", "Computer Vision", "Data Science",
    // Architecture & process
    "REST", "GraphQL", "gRPC", "WebSocket", "Microservices", "Agile", "Scrum",
    // Design
    "Figma", "Photoshop", "Adobe XD", "Sketch",
    // Web3
    "Solidity", "Web3", "Ethereum", "Blockchain", "Smart Contracts",
    // Security
    "Penetration Testing", "Networking", "Cybersecurity", "Cryptography",
];

/// One compiled case-insensitive whole-word matcher per vocabulary term.
pub static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|term| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            // Escaped literals between word boundaries always compile.
            let re = Regex::new(&pattern).expect("vocabulary term compiles");
            (*term, re)
        })
        .collect()
});
