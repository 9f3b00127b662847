//! Static role knowledge base: weighted skill requirements and course picks per role.

/// A course recommendation as stored in the role table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseSpec {
    pub title: &'static str,
    pub platform: &'static str,
    pub duration: &'static str,
    pub why: &'static str,
    pub url: &'static str,
}

/// Skill requirements for one target role, split by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRequirement {
    pub role: &'static str,
    pub critical: &'static [&'static str],
    pub moderate: &'static [&'static str],
    pub minor: &'static [&'static str],
    pub courses: &'static [CourseSpec],
}

impl RoleRequirement {
    /// Exact, case-sensitive lookup; unknown roles get `DEFAULT_ROLE`.
    pub fn lookup(role: &str) -> &'static RoleRequirement {
        ROLE_REQUIREMENTS
            .iter()
            .find(|r| r.role == role)
            .unwrap_or(&DEFAULT_ROLE)
    }
}

pub static DEFAULT_ROLE: RoleRequirement = RoleRequirement {
    role: "",
    critical: &["Communication", "Problem Solving", "Teamwork", "Git", "Python"],
    moderate: &["SQL", "Linux", "Docker", "REST APIs"],
    minor: &["Cloud", "CI/CD", "Agile"],
    courses: &[
        CourseSpec {
            title: "Complete Python Bootcamp",
            platform: "Udemy",
            duration: "22hrs",
            why: "Python is foundational for any tech role",
            url: "https://www.udemy.com/course/complete-python-bootcamp/",
        },
        CourseSpec {
            title: "Git & GitHub Crash Course",
            platform: "freeCodeCamp",
            duration: "1 week",
            why: "Essential for every developer",
            url: "https://www.youtube.com/watch?v=RGOj5yH7evk",
        },
    ],
};

pub static ROLE_REQUIREMENTS: &[RoleRequirement] = &[
    RoleRequirement {
        role: "Full Stack Developer",
        critical: &[
            "React",
            "Node",
            "JavaScript",
            "TypeScript",
            "SQL",
            "REST",
            "Git",
            "HTML",
            "CSS",
        ],
        moderate: &["Docker", "MongoDB", "PostgreSQL", "AWS", "Redis", "GraphQL", "Testing"],
        minor: &["CI/CD", "Kubernetes", "Microservices", "Linux"],
        courses: &[
            CourseSpec {
                title: "The Complete Web Developer Bootcamp",
                platform: "Udemy",
                duration: "60hrs",
                why: "HTML,CSS,JS,Node,React end-to-end",
                url: "https://www.udemy.com/course/the-complete-web-development-bootcamp/",
            },
            CourseSpec {
                title: "Full Stack Open 2024",
                platform: "University of Helsinki (Free)",
                duration: "13 weeks",
                why: "Modern React + Node + TypeScript + GraphQL",
                url: "https://fullstackopen.com",
            },
            CourseSpec {
                title: "Docker & Kubernetes Guide",
                platform: "Udemy",
                duration: "20hrs",
                why: "Close the DevOps gap that most FS roles require",
                url: "https://www.udemy.com/course/docker-and-kubernetes-the-complete-guide/",
            },
        ],
    },
    RoleRequirement {
        role: "Data Scientist",
        critical: &[
            "Python",
            "pandas",
            "numpy",
            "scikit-learn",
            "SQL",
            "Statistics",
            "Machine Learning",
        ],
        moderate: &[
            "TensorFlow",
            "PyTorch",
            "Data Visualization",
            "Feature Engineering",
            "Jupyter",
        ],
        minor: &["Spark", "Hadoop", "Tableau", "PowerBI", "NLP"],
        courses: &[
            CourseSpec {
                title: "Python for Data Science Bootcamp",
                platform: "Udemy",
                duration: "25hrs",
                why: "Best beginner-to-advanced data science course",
                url: "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/",
            },
            CourseSpec {
                title: "Machine Learning Specialization",
                platform: "Coursera",
                duration: "3 months",
                why: "Andrew Ng — industry gold standard ML course",
                url: "https://www.coursera.org/specializations/machine-learning-introduction",
            },
            CourseSpec {
                title: "SQL for Data Analysis",
                platform: "Mode Analytics",
                duration: "2 weeks",
                why: "SQL is critical for every DS role",
                url: "https://mode.com/sql-tutorial/",
            },
        ],
    },
    RoleRequirement {
        role: "ML Engineer",
        critical: &[
            "Python",
            "TensorFlow",
            "PyTorch",
            "Machine Learning",
            "Deep Learning",
            "SQL",
            "Git",
        ],
        moderate: &[
            "Docker",
            "Kubernetes",
            "MLflow",
            "AWS",
            "Feature Engineering",
            "NLP",
            "Computer Vision",
        ],
        minor: &["Spark", "Kafka", "FastAPI", "CI/CD"],
        courses: &[
            CourseSpec {
                title: "Deep Learning Specialization",
                platform: "Coursera",
                duration: "4 months",
                why: "Covers all DL fundamentals by Andrew Ng",
                url: "https://www.coursera.org/specializations/deep-learning",
            },
            CourseSpec {
                title: "MLOps Specialization",
                platform: "Coursera",
                duration: "4 months",
                why: "Deploy ML models to production",
                url: "https://www.coursera.org/specializations/machine-learning-engineering-for-production-mlops",
            },
            CourseSpec {
                title: "Hands-On Machine Learning",
                platform: "O'Reilly",
                duration: "Self-paced",
                why: "Best practical ML reference book",
                url: "https://www.oreilly.com/library/view/hands-on-machine-learning/9781098125967/",
            },
        ],
    },
    RoleRequirement {
        role: "DevOps / Cloud Engineer",
        critical: &["Docker", "Kubernetes", "Linux", "CI/CD", "AWS", "Git", "Bash", "Terraform"],
        moderate: &["Ansible", "Jenkins", "Prometheus", "Grafana", "Python", "Networking"],
        minor: &["Azure", "GCP", "Helm", "ArgoCD"],
        courses: &[
            CourseSpec {
                title: "Docker and Kubernetes Complete Guide",
                platform: "Udemy",
                duration: "22hrs",
                why: "Most comprehensive DevOps course",
                url: "https://www.udemy.com/course/docker-and-kubernetes-the-complete-guide/",
            },
            CourseSpec {
                title: "AWS Solutions Architect",
                platform: "A Cloud Guru",
                duration: "40hrs",
                why: "Industry standard cloud certification",
                url: "https://acloudguru.com/course/aws-certified-solutions-architect-associate",
            },
            CourseSpec {
                title: "Linux Foundation Sysadmin",
                platform: "Linux Foundation",
                duration: "Self-paced",
                why: "Essential Linux skills for DevOps",
                url: "https://training.linuxfoundation.org/certification/lfcs/",
            },
        ],
    },
    RoleRequirement {
        role: "Product Manager",
        critical: &[
            "Product Strategy",
            "User Research",
            "Agile",
            "Scrum",
            "Data Analysis",
            "Roadmapping",
        ],
        moderate: &["SQL", "Figma", "A/B Testing", "Stakeholder Management", "Python"],
        minor: &["Jira", "Confluence", "OKRs", "Go-to-Market"],
        courses: &[
            CourseSpec {
                title: "Product Management Fundamentals",
                platform: "Coursera",
                duration: "4 weeks",
                why: "Core PM skills and frameworks",
                url: "https://www.coursera.org/learn/uva-darden-digital-product-management",
            },
            CourseSpec {
                title: "SQL for Product Managers",
                platform: "Mode Analytics",
                duration: "2 weeks",
                why: "Data-driven PM decisions",
                url: "https://mode.com/sql-tutorial/",
            },
            CourseSpec {
                title: "Become a Product Manager",
                platform: "Udemy",
                duration: "12hrs",
                why: "End-to-end PM career guide",
                url: "https://www.udemy.com/course/become-a-product-manager-learn-the-skills-get-a-job/",
            },
        ],
    },
    RoleRequirement {
        role: "UX Designer",
        critical: &[
            "Figma",
            "User Research",
            "Wireframing",
            "Prototyping",
            "Design Thinking",
            "Usability Testing",
        ],
        moderate: &[
            "Adobe XD",
            "Sketch",
            "HTML",
            "CSS",
            "Information Architecture",
            "Accessibility",
        ],
        minor: &["Motion Design", "Framer", "Design Systems", "React"],
        courses: &[
            CourseSpec {
                title: "Google UX Design Certificate",
                platform: "Coursera",
                duration: "6 months",
                why: "Industry recognized UX certification",
                url: "https://www.coursera.org/professional-certificates/google-ux-design",
            },
            CourseSpec {
                title: "UI/UX Design Bootcamp",
                platform: "Udemy",
                duration: "30hrs",
                why: "Covers Figma + full design process",
                url: "https://www.udemy.com/course/ui-ux-web-design-using-adobe-xd/",
            },
            CourseSpec {
                title: "Interaction Design Foundation",
                platform: "IDF",
                duration: "Self-paced",
                why: "Deep UX theory and practice",
                url: "https://www.interaction-design.org/",
            },
        ],
    },
    RoleRequirement {
        role: "Cybersecurity Analyst",
        critical: &[
            "Networking",
            "Linux",
            "Python",
            "Security Fundamentals",
            "SIEM",
            "Incident Response",
        ],
        moderate: &[
            "Penetration Testing",
            "Wireshark",
            "Metasploit",
            "SQL",
            "Cryptography",
            "Firewalls",
        ],
        minor: &["OSCP", "CEH", "AWS Security", "Forensics"],
        courses: &[
            CourseSpec {
                title: "Google Cybersecurity Certificate",
                platform: "Coursera",
                duration: "6 months",
                why: "Best entry-level security certification",
                url: "https://www.coursera.org/professional-certificates/google-cybersecurity",
            },
            CourseSpec {
                title: "CompTIA Security+ Prep",
                platform: "Udemy",
                duration: "20hrs",
                why: "Most recognized security cert",
                url: "https://www.udemy.com/course/securityplus/",
            },
            CourseSpec {
                title: "Practical Ethical Hacking",
                platform: "TCM Security",
                duration: "25hrs",
                why: "Hands-on penetration testing",
                url: "https://academy.tcm-sec.com/p/practical-ethical-hacking-the-complete-course",
            },
        ],
    },
    RoleRequirement {
        role: "Blockchain Developer",
        critical: &["Solidity", "Ethereum", "JavaScript", "Web3.js", "Smart Contracts", "Git"],
        moderate: &["React", "Node", "Hardhat", "Truffle", "DeFi", "IPFS"],
        minor: &["Rust", "Polkadot", "Solana", "NFT Standards"],
        courses: &[
            CourseSpec {
                title: "Blockchain Developer Bootcamp",
                platform: "Udemy",
                duration: "24hrs",
                why: "Complete Solidity + Web3 course",
                url: "https://www.udemy.com/course/blockchain-developer/",
            },
            CourseSpec {
                title: "Ethereum and Solidity Guide",
                platform: "Udemy",
                duration: "20hrs",
                why: "Best Solidity course with real projects",
                url: "https://www.udemy.com/course/ethereum-and-solidity-the-complete-developers-guide/",
            },
            CourseSpec {
                title: "CryptoZombies",
                platform: "CryptoZombies (Free)",
                duration: "2 weeks",
                why: "Fun interactive Solidity learning",
                url: "https://cryptozombies.io/",
            },
        ],
    },
];
