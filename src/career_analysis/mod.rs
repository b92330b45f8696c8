// src/career_analysis/mod.rs
use thiserror::Error;

pub mod fence;
pub mod model_client;
pub mod prompts;
pub mod resume_analyzer;
pub mod types;

pub use model_client::{GeminiClient, TextGenerator};
pub use resume_analyzer::ResumeAnalyzer;
pub use types::{AnalysisResult, ResumeAnalysis, RoadmapOutcome, RoadmapResult};

/// Failure modes of a single model round trip, from least to most degraded.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("No response text received")]
    EmptyResponse,

    #[error("response was not in the expected JSON format: {reason}")]
    Format {
        reason: String,
        raw: String,
        cleaned: String,
    },

    #[error("{0}")]
    Transport(String),
}

/// The request URL is dropped from the message; callers see it verbatim.
impl From<reqwest::Error> for ModelError {
    fn from(e: reqwest::Error) -> Self {
        ModelError::Transport(e.without_url().to_string())
    }
}
