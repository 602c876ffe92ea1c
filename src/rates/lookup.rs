use std::path::PathBuf;
use std::time::Duration;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

use crate::decimal::Rate;
use crate::errors::{PlanError, Result};

/// countries with a published mortgage rate series
pub const SUPPORTED_COUNTRIES: [&str; 27] = [
    "Italy",
    "Austria",
    "Belgium",
    "Bulgaria",
    "Croatia",
    "Cyprus",
    "Czech_Republic",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hungary",
    "Ireland",
    "Latvia",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Netherlands",
    "Poland",
    "Portugal",
    "Romania",
    "Slovakia",
    "Slovenia",
    "Spain",
    "Sweden",
];

/// the upstream page announces the series as "recent value is <number> percent"
const RATE_PATTERN: &str = r"(?i)recent\s+value\s+is\s+([0-9]+(?:\.[0-9]+)?)\s+percent";

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// how much of a page that failed to parse gets kept for inspection
const DEBUG_DUMP_LIMIT: usize = 2000;

/// client for the market mortgage rate lookup
pub struct RateClient {
    http: reqwest::Client,
    debug_dump: PathBuf,
}

impl RateClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            debug_dump: PathBuf::from("debug_rate.html"),
        }
    }

    /// redirect the failed-scrape page dump
    pub fn with_debug_dump(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_dump = path.into();
        self
    }

    /// check a country against the supported catalog, slug form
    pub fn is_supported(country: &str) -> bool {
        let slug = slugify(country);
        SUPPORTED_COUNTRIES.iter().any(|c| *c == slug)
    }

    /// fetch the current mortgage rate for a country
    ///
    /// one GET, no retry; a page that loads but does not match the pattern is
    /// dumped for inspection and reported as not found
    pub async fn fetch_mortgage_rate(&self, country: &str) -> Result<Rate> {
        let slug = slugify(country);
        if !Self::is_supported(&slug) {
            return Err(PlanError::UnsupportedCountry {
                country: country.to_string(),
            });
        }

        let url = format!("https://www.theglobaleconomy.com/{slug}/mortgage_interest_rate/");
        let response = self
            .http
            .get(&url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        match extract_rate(&body) {
            Some(percent) => Ok(Rate::from_percentage(percent)),
            None => {
                self.dump_page(&slug, &body);
                Err(PlanError::RateNotFound {
                    country: country.to_string(),
                })
            }
        }
    }

    /// best-effort snapshot of an unparseable page
    fn dump_page(&self, country: &str, body: &str) {
        let mut end = DEBUG_DUMP_LIMIT.min(body.len());
        while !body.is_char_boundary(end) {
            end -= 1;
        }

        match std::fs::write(&self.debug_dump, &body[..end]) {
            Ok(()) => warn!(
                country,
                dump = %self.debug_dump.display(),
                "rate pattern not found, page head saved"
            ),
            Err(err) => warn!(
                country,
                error = %err,
                "rate pattern not found and page dump failed"
            ),
        }
    }

}

impl Default for RateClient {
    fn default() -> Self {
        Self::new()
    }
}

/// pull the percentage out of the page text
fn extract_rate(body: &str) -> Option<Decimal> {
    let pattern = Regex::new(RATE_PATTERN).ok()?;
    let capture = pattern.captures(body)?;
    capture.get(1)?.as_str().parse().ok()
}

fn slugify(country: &str) -> String {
    country.trim().replace(' ', "_")
}
