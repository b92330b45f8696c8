// src/job_listings/mod.rs
use serde::{Deserialize, Serialize};

pub mod job_scraper;

pub use job_scraper::JobScraper;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_LINK: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    Linkedin,
}

/// One posting from a results page. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub source: ListingSource,
}
