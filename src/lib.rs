pub mod career_analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod job_listings;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;

pub use career_analysis::{GeminiClient, ResumeAnalyzer, TextGenerator};
pub use config::AppConfig;
pub use job_listings::{JobListing, JobScraper};
pub use web::start_web_server;
