// src/career_analysis/types.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of a resume analysis.
///
/// Serializes untagged: a success is the model's own object, a degraded
/// result is the minimal `{score, suggestions, field_of_interest}` payload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResumeAnalysis {
    Success(Map<String, Value>),
    Degraded(AnalysisResult),
}

impl ResumeAnalysis {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ResumeAnalysis::Degraded(_))
    }

    pub fn score(&self) -> Option<i64> {
        match self {
            ResumeAnalysis::Success(object) => object.get("score").and_then(Value::as_i64),
            ResumeAnalysis::Degraded(result) => Some(result.score),
        }
    }

    pub fn field_of_interest(&self) -> Option<&str> {
        match self {
            ResumeAnalysis::Success(object) => {
                object.get("field_of_interest").and_then(Value::as_str)
            }
            ResumeAnalysis::Degraded(result) => Some(result.field_of_interest.as_str()),
        }
    }

    /// Typed view of the payload. Keys the model left out come back as
    /// defaults; this never fails for a degraded result.
    pub fn typed(&self) -> serde_json::Result<AnalysisResult> {
        match self {
            ResumeAnalysis::Success(object) => {
                serde_json::from_value(Value::Object(object.clone()))
            }
            ResumeAnalysis::Degraded(result) => Ok(result.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: i64,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub field_of_interest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_analysis: Option<DetailedAnalysis>,
}

impl AnalysisResult {
    pub fn fallback(score: i64, suggestion: String, field_of_interest: &str) -> Self {
        Self {
            score,
            suggestions: vec![suggestion],
            field_of_interest: field_of_interest.to_string(),
            detailed_analysis: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    #[serde(default)]
    pub overall_assessment: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub reasoning_for_field: String,
}

/// Outcome of roadmap generation. Failures carry only an `error` key.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RoadmapOutcome {
    Success(Map<String, Value>),
    Failure { error: String },
}

impl RoadmapOutcome {
    pub fn error(&self) -> Option<&str> {
        match self {
            RoadmapOutcome::Success(_) => None,
            RoadmapOutcome::Failure { error } => Some(error.as_str()),
        }
    }

    pub fn typed(&self) -> Option<serde_json::Result<RoadmapResult>> {
        match self {
            RoadmapOutcome::Success(object) => {
                Some(serde_json::from_value(Value::Object(object.clone())))
            }
            RoadmapOutcome::Failure { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadmapResult {
    #[serde(default)]
    pub tutorials: Vec<Tutorial>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}
