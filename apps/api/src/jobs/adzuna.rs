//! Live listings from the Adzuna search API.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::jobs::{JobListing, JobQuery, JobSearchError, JobSource};

const ADZUNA_API_BASE: &str = "https://api.adzuna.com/v1/api/jobs";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DESCRIPTION_PREVIEW_CHARS: usize = 120;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AdzunaJob {
    title: Option<String>,
    company: Option<DisplayName>,
    location: Option<DisplayName>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    redirect_url: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DisplayName {
    display_name: Option<String>,
}

#[derive(Clone)]
pub struct AdzunaJobBoard {
    client: Client,
    app_id: String,
    app_key: String,
    country: String,
}

impl AdzunaJobBoard {
    pub fn new(app_id: &str, app_key: &str, country: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build Adzuna HTTP client")?;
        Ok(Self {
            client,
            app_id: app_id.to_string(),
            app_key: app_key.to_string(),
            country: country.to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{ADZUNA_API_BASE}/{}/search/1", self.country)
    }
}

#[async_trait]
impl JobSource for AdzunaJobBoard {
    fn name(&self) -> &'static str {
        "adzuna"
    }

    async fn search(&self, query: &JobQuery) -> Result<Vec<JobListing>, JobSearchError> {
        let per_page = query.num_results.to_string();
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("results_per_page", per_page.as_str()),
                ("what", query.role.as_str()),
                ("where", query.location.as_str()),
                ("content-type", "application/json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobSearchError::Status(status.as_u16()));
        }

        let body: SearchResponse = response.json().await?;
        debug!(results = body.results.len(), "Adzuna search returned");

        let match_percent = query.match_score_or_neutral().max(70);
        Ok(body
            .results
            .into_iter()
            .take(query.num_results)
            .map(|job| to_listing(job, match_percent))
            .collect())
    }
}

fn to_listing(job: AdzunaJob, match_percent: u32) -> JobListing {
    let salary = match job.salary_min {
        Some(min) if min != 0.0 => format!(
            "£{}–£{}",
            format_thousands(min),
            format_thousands(job.salary_max.unwrap_or(0.0))
        ),
        _ => "Competitive".to_string(),
    };
    let description = match job.description.as_deref() {
        Some(text) if !text.is_empty() => {
            let preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{preview}...")
        }
        _ => String::new(),
    };

    JobListing {
        title: job.title.unwrap_or_default(),
        company: job.company.and_then(|c| c.display_name).unwrap_or_default(),
        location: job.location.and_then(|l| l.display_name).unwrap_or_default(),
        salary,
        kind: "Full-time".to_string(),
        logo: "🏢".to_string(),
        apply_url: job.redirect_url.unwrap_or_else(|| "#".to_string()),
        posted: "Recently".to_string(),
        description: Some(description),
        match_percent,
        skills_matched: None,
        source: "Adzuna".to_string(),
    }
}

/// Rounds to a whole number and groups digits in threes: `42500.6` → `42,501`.
fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(42500.6), "42,501");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
    }

    #[test]
    fn test_to_listing_full_record() {
        let job: AdzunaJob = serde_json::from_str(
            r#"{"title":"Data Scientist","company":{"display_name":"Acme"},
                "location":{"display_name":"Pune, Maharashtra"},
                "salary_min":1200000,"salary_max":1800000.4,
                "redirect_url":"https://adzuna.example/job/1",
                "description":"Build models."}"#,
        )
        .unwrap();
        let listing = to_listing(job, 82);
        assert_eq!(listing.company, "Acme");
        assert_eq!(listing.location, "Pune, Maharashtra");
        assert_eq!(listing.salary, "£1,200,000–£1,800,000");
        assert_eq!(listing.description.as_deref(), Some("Build models...."));
        assert_eq!(listing.match_percent, 82);
        assert_eq!(listing.source, "Adzuna");
        assert_eq!(listing.kind, "Full-time");
    }

    #[test]
    fn test_to_listing_sparse_record() {
        let job: AdzunaJob =
            serde_json::from_str(r#"{"title":"Intern","salary_min":0}"#).unwrap();
        let listing = to_listing(job, 70);
        assert_eq!(listing.salary, "Competitive");
        assert_eq!(listing.apply_url, "#");
        assert_eq!(listing.company, "");
        assert_eq!(listing.description.as_deref(), Some(""));
    }

    #[test]
    fn test_null_fields_do_not_reject_the_page() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"results":[
                {"title":null,"company":{"display_name":null},"location":null,"salary_min":null},
                {"title":"Data Engineer","company":{"display_name":"Acme"}}
            ]}"#,
        )
        .unwrap();
        let listings: Vec<JobListing> =
            body.results.into_iter().map(|job| to_listing(job, 75)).collect();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "");
        assert_eq!(listings[0].company, "");
        assert_eq!(listings[0].salary, "Competitive");
        assert_eq!(listings[1].title, "Data Engineer");
        assert_eq!(listings[1].company, "Acme");
    }

    #[test]
    fn test_description_preview_is_clipped() {
        let job = AdzunaJob {
            description: Some("d".repeat(300)),
            ..Default::default()
        };
        let listing = to_listing(job, 70);
        let description = listing.description.unwrap();
        assert_eq!(description.len(), 123);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_search_url_uses_country() {
        let board = AdzunaJobBoard::new("id", "key", "gb").unwrap();
        assert_eq!(board.search_url(), "https://api.adzuna.com/v1/api/jobs/gb/search/1");
        assert_eq!(board.name(), "adzuna");
    }
}
