// src/career_analysis/resume_analyzer.rs
use super::fence::strip_code_fences;
use super::model_client::TextGenerator;
use super::prompts::{resume_analysis_prompt, roadmap_prompt};
use super::types::{AnalysisResult, ResumeAnalysis, RoadmapOutcome};
use super::ModelError;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

const SCORE_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// Prompt-driven structured extraction over an untrusted text generator.
///
/// Every operation returns a value; backend and parsing failures are folded
/// into fallback payloads.
#[derive(Clone)]
pub struct ResumeAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl ResumeAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn analyze_resume(&self, resume_text: &str, job_title: &str) -> ResumeAnalysis {
        info!("Analyzing resume for job title: {}", job_title);

        let prompt = resume_analysis_prompt(resume_text, job_title);
        let object = self
            .extract_json(&prompt)
            .await
            .and_then(validate_analysis);

        match object {
            Ok(object) => ResumeAnalysis::Success(object),
            Err(ModelError::Format { .. }) => ResumeAnalysis::Degraded(AnalysisResult::fallback(
                50,
                "response was not in the expected JSON format".to_string(),
                "Unknown",
            )),
            Err(ModelError::EmptyResponse) => ResumeAnalysis::Degraded(AnalysisResult::fallback(
                50,
                "No response text received".to_string(),
                "Unknown",
            )),
            Err(ModelError::Transport(message)) => {
                ResumeAnalysis::Degraded(AnalysisResult::fallback(
                    30,
                    format!("An error occurred while calling the API: {}", message),
                    "Error",
                ))
            }
        }
    }

    pub async fn generate_roadmap(&self, field_of_interest: &str) -> RoadmapOutcome {
        info!("Generating roadmap for field: {}", field_of_interest);

        let prompt = roadmap_prompt(field_of_interest);
        let error = match self.extract_json(&prompt).await {
            Ok(object) => return RoadmapOutcome::Success(object),
            Err(ModelError::Format { .. }) => "Invalid JSON response for roadmap.".to_string(),
            Err(ModelError::EmptyResponse) => {
                "No response text received for roadmap.".to_string()
            }
            Err(ModelError::Transport(message)) => format!(
                "An error occurred while calling the API for roadmap: {}",
                message
            ),
        };

        RoadmapOutcome::Failure { error }
    }

    /// Shared invoke, clean and parse routine. The reply must be a JSON object.
    async fn extract_json(&self, prompt: &str) -> Result<Map<String, Value>, ModelError> {
        let raw = match self.generator.generate(prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("Model returned no text part");
                return Err(ModelError::EmptyResponse);
            }
            Err(e) => {
                error!("Model API error: {}", e);
                return Err(e);
            }
        };

        let cleaned = strip_code_fences(&raw);

        let parsed = match serde_json::from_str::<Value>(&cleaned) {
            Ok(Value::Object(object)) => Ok(object),
            Ok(other) => Err(format!("expected a JSON object, got {}", json_kind(&other))),
            Err(e) => Err(e.to_string()),
        };

        parsed.map_err(|reason| {
            warn!("JSON decode error: {}", reason);
            warn!("Raw model response: {}", raw);
            warn!("Processed JSON string: {}", cleaned);
            ModelError::Format {
                reason,
                raw,
                cleaned,
            }
        })
    }
}

/// Requires an integer `score` and clamps it into 0..=100.
fn validate_analysis(mut object: Map<String, Value>) -> Result<Map<String, Value>, ModelError> {
    let score = match object.get("score") {
        Some(Value::Number(n)) => n.as_i64(),
        _ => None,
    };

    let Some(score) = score else {
        let reason = "missing integer \"score\"".to_string();
        warn!("Analysis rejected: {}", reason);
        let raw = Value::Object(object).to_string();
        return Err(ModelError::Format {
            reason,
            cleaned: raw.clone(),
            raw,
        });
    };

    if !SCORE_RANGE.contains(&score) {
        let clamped = score.clamp(*SCORE_RANGE.start(), *SCORE_RANGE.end());
        warn!("Score {} out of range, clamped to {}", score, clamped);
        object.insert("score".to_string(), Value::from(clamped));
    }

    Ok(object)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    enum Reply {
        Text(&'static str),
        Nothing,
        Fail(&'static str),
    }

    struct StubGenerator {
        reply: Reply,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<Option<String>, ModelError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match self.reply {
                Reply::Text(text) => Ok(Some(text.trim().to_string())),
                Reply::Nothing => Ok(None),
                Reply::Fail(message) => Err(ModelError::Transport(message.to_string())),
            }
        }
    }

    fn stub_analyzer(reply: Reply) -> (ResumeAnalyzer, Arc<StubGenerator>) {
        let stub = Arc::new(StubGenerator {
            reply,
            prompts: Mutex::new(Vec::new()),
        });
        (ResumeAnalyzer::new(stub.clone()), stub)
    }

    fn analysis_value(analysis: &ResumeAnalysis) -> Value {
        serde_json::to_value(analysis).unwrap()
    }

    const PLAIN: &str =
        r#"{"score": 77, "suggestions": ["a","b","c"], "field_of_interest": "Data Science"}"#;
    const FENCED: &str = "```json\n{\"score\": 77, \"suggestions\": [\"a\",\"b\",\"c\"], \"field_of_interest\": \"Data Science\"}\n```";

    #[tokio::test]
    async fn test_unfenced_reply_passes_through_unchanged() {
        let (analyzer, stub) = stub_analyzer(Reply::Text(PLAIN));
        let analysis = analyzer.analyze_resume("resume body", "Data Analyst").await;

        assert!(!analysis.is_degraded());
        assert_eq!(analysis.score(), Some(77));
        assert_eq!(
            analysis_value(&analysis),
            serde_json::from_str::<Value>(PLAIN).unwrap()
        );

        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("resume body"));
        assert!(prompts[0].contains("Data Analyst"));
    }

    #[tokio::test]
    async fn test_fenced_reply_parses_like_unfenced() {
        let (plain, _) = stub_analyzer(Reply::Text(PLAIN));
        let (fenced, _) = stub_analyzer(Reply::Text(FENCED));

        let plain = plain.analyze_resume("r", "t").await;
        let fenced = fenced.analyze_resume("r", "t").await;
        assert_eq!(analysis_value(&plain), analysis_value(&fenced));

        let (plain, _) = stub_analyzer(Reply::Text(r#"{"tutorials": [], "projects": []}"#));
        let (fenced, _) =
            stub_analyzer(Reply::Text("```\n{\"tutorials\": [], \"projects\": []}\n```"));
        let plain = serde_json::to_value(plain.generate_roadmap("Rust").await).unwrap();
        let fenced = serde_json::to_value(fenced.generate_roadmap("Rust").await).unwrap();
        assert_eq!(plain, fenced);
    }

    #[tokio::test]
    async fn test_extra_keys_are_kept() {
        let (analyzer, _) = stub_analyzer(Reply::Text(
            r#"{"score": 64, "suggestions": [], "field_of_interest": "QA", "confidence": "high"}"#,
        ));
        let value = analysis_value(&analyzer.analyze_resume("r", "t").await);
        assert_eq!(value["confidence"], json!("high"));
    }

    #[tokio::test]
    async fn test_invalid_json_falls_back_to_unknown() {
        let (analyzer, _) = stub_analyzer(Reply::Text("Sure! Score: 80/100"));
        let analysis = analyzer.analyze_resume("r", "t").await;

        assert!(analysis.is_degraded());
        assert_eq!(
            analysis_value(&analysis),
            json!({
                "score": 50,
                "suggestions": ["response was not in the expected JSON format"],
                "field_of_interest": "Unknown"
            })
        );
    }

    #[tokio::test]
    async fn test_missing_text_falls_back_with_distinct_message() {
        let (analyzer, _) = stub_analyzer(Reply::Nothing);
        let analysis = analyzer.analyze_resume("r", "t").await;

        assert_eq!(analysis.score(), Some(50));
        assert_eq!(analysis.field_of_interest(), Some("Unknown"));
        let typed = analysis.typed().unwrap();
        assert_eq!(typed.suggestions, vec!["No response text received".to_string()]);
    }

    #[tokio::test]
    async fn test_transport_error_is_most_degraded() {
        let (analyzer, _) = stub_analyzer(Reply::Fail("quota exceeded"));
        let analysis = analyzer.analyze_resume("r", "t").await;

        assert_eq!(analysis.score(), Some(30));
        assert_eq!(analysis.field_of_interest(), Some("Error"));
        let typed = analysis.typed().unwrap();
        assert_eq!(
            typed.suggestions,
            vec!["An error occurred while calling the API: quota exceeded".to_string()]
        );
    }

    #[tokio::test]
    async fn test_non_object_or_scoreless_reply_is_format_error() {
        for reply in [
            "[1, 2, 3]",
            r#"{"suggestions": ["a"]}"#,
            r#"{"score": "eighty"}"#,
            r#"{"score": 72.5}"#,
        ] {
            let (analyzer, _) = stub_analyzer(Reply::Text(reply));
            let analysis = analyzer.analyze_resume("r", "t").await;
            assert_eq!(analysis.score(), Some(50), "reply: {}", reply);
            assert_eq!(analysis.field_of_interest(), Some("Unknown"));
        }
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_clamped() {
        let (high, _) = stub_analyzer(Reply::Text(r#"{"score": 140, "field_of_interest": "Ops"}"#));
        assert_eq!(high.analyze_resume("r", "t").await.score(), Some(100));

        let (low, _) = stub_analyzer(Reply::Text(r#"{"score": -5, "field_of_interest": "Ops"}"#));
        assert_eq!(low.analyze_resume("r", "t").await.score(), Some(0));
    }

    #[tokio::test]
    async fn test_roadmap_success_is_returned_as_is() {
        let reply = r#"{"tutorials": [{"title": "T", "link": "https://x", "platform": "P", "description": "D"}], "certifications": [], "projects": []}"#;
        let (analyzer, stub) = stub_analyzer(Reply::Text(reply));
        let outcome = analyzer.generate_roadmap("Cloud Computing").await;

        assert!(outcome.error().is_none());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::from_str::<Value>(reply).unwrap()
        );
        assert!(stub.prompts.lock().unwrap()[0].contains("\"Cloud Computing\""));
    }

    #[tokio::test]
    async fn test_roadmap_failures_carry_only_error() {
        let cases = [
            (Reply::Fail("connection reset"), "An error occurred while calling the API for roadmap: connection reset"),
            (Reply::Nothing, "No response text received for roadmap."),
            (Reply::Text("not json"), "Invalid JSON response for roadmap."),
        ];

        for (reply, expected) in cases {
            let (analyzer, _) = stub_analyzer(reply);
            let value = serde_json::to_value(analyzer.generate_roadmap("Rust").await).unwrap();
            assert_eq!(value, json!({ "error": expected }));
            assert!(value.get("tutorials").is_none());
        }
    }
}
