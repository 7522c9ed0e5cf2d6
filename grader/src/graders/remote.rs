//! # Remote Grading Strategy
//!
//! This module implements the [`Grader`] trait against the grading gateway. It builds the
//! grading prompt, POSTs it to the gateway's `/api/evaluate` endpoint, and parses the raw model
//! text out of the `{"aiText": ...}` envelope.
//!
//! The gateway performs no interpretation of the model output, so all parsing happens here via
//! [`parse_model_reply`]. Any transport failure, non-success status, or malformed body is
//! returned as a [`GraderError`] for the caller to absorb with the local fallback.

use crate::error::GraderError;
use crate::parser::parse_model_reply;
use crate::prompt::build_grading_prompt;
use crate::traits::grader::Grader;
use crate::types::{Evaluation, Question};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Model-backed strategy: grades through the gateway.
pub struct RemoteGrader {
    http: reqwest::Client,
    gateway_url: String,
}

/// Request body for the gateway.
#[derive(Serialize)]
struct EvaluateRequest<'a> {
    /// The assembled grading prompt, forwarded verbatim to the model.
    prompt: &'a str,
}

/// Success body returned by the gateway.
#[derive(Deserialize)]
struct EvaluateResponse {
    /// Raw model output. Absent or null is treated as an empty reply, which
    /// parses to all defaults.
    #[serde(rename = "aiText")]
    ai_text: Option<String>,
}

impl RemoteGrader {
    /// Creates a grader pointed at an explicit gateway URL.
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            gateway_url: gateway_url.into(),
        }
    }

    /// Creates a grader pointed at the configured `GATEWAY_URL`.
    pub fn from_config() -> Self {
        Self::new(util::config::gateway_url())
    }
}

#[async_trait]
impl Grader for RemoteGrader {
    async fn grade(
        &self,
        user_answer: &str,
        question: &Question,
    ) -> Result<Evaluation, GraderError> {
        let prompt = build_grading_prompt(question, user_answer);

        let response = self
            .http
            .post(&self.gateway_url)
            .json(&EvaluateRequest { prompt: &prompt })
            .send()
            .await
            .map_err(|e| GraderError::Upstream(format!("gateway unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(GraderError::Upstream(format!(
                "gateway returned {}",
                response.status()
            )));
        }

        let body: EvaluateResponse = response
            .json()
            .await
            .map_err(|e| GraderError::InvalidJson(format!("invalid gateway body: {e}")))?;

        Ok(parse_model_reply(&body.ai_text.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EvaluationJob;
    use crate::types::AccuracyBand;
    use axum::routing::post;
    use axum::{Json, Router, http::StatusCode};

    /// Binds a throwaway gateway on a free local port and returns its evaluate URL.
    async fn spawn_stub_gateway(status: StatusCode, body: serde_json::Value) -> String {
        let app = Router::new().route(
            "/api/evaluate",
            post(move || async move { (status, Json(body)) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/evaluate")
    }

    fn sample_question() -> Question {
        Question {
            id: 2,
            question: "Jelaskan perbedaan antara class dan object dalam PHP?".to_string(),
            context: "Class adalah blueprint, object adalah instance.".to_string(),
            ideal_answer: "Class adalah cetak biru, object adalah instance nyata.".to_string(),
        }
    }

    #[tokio::test]
    async fn parses_the_text_behind_a_successful_gateway_reply() {
        let url = spawn_stub_gateway(
            StatusCode::OK,
            serde_json::json!({ "aiText": "AKURASI: good\nPOIN: 17\nFEEDBACK: Cukup baik." }),
        )
        .await;

        let evaluation = RemoteGrader::new(url)
            .grade("object dibuat dari class", &sample_question())
            .await
            .unwrap();
        assert_eq!(evaluation.accuracy, AccuracyBand::Good);
        assert_eq!(evaluation.points, 17);
        assert_eq!(evaluation.feedback, "Cukup baik.");
    }

    #[tokio::test]
    async fn missing_ai_text_parses_to_defaults() {
        let url = spawn_stub_gateway(StatusCode::OK, serde_json::json!({})).await;

        let evaluation = RemoteGrader::new(url)
            .grade("jawaban", &sample_question())
            .await
            .unwrap();
        assert_eq!(evaluation.accuracy, AccuracyBand::Fair);
        assert_eq!(evaluation.points, 10);
    }

    #[tokio::test]
    async fn failure_status_is_an_upstream_error() {
        let url = spawn_stub_gateway(
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({ "error": "Upstream model request failed" }),
        )
        .await;

        let result = RemoteGrader::new(url)
            .grade("jawaban", &sample_question())
            .await;
        assert!(matches!(result, Err(GraderError::Upstream(_))));
    }

    #[tokio::test]
    async fn gateway_failure_degrades_to_the_overlap_fallback() {
        let url = spawn_stub_gateway(
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({ "error": "Upstream model request failed" }),
        )
        .await;

        let question = sample_question();
        let answer = question.ideal_answer.clone();
        let evaluation = EvaluationJob::with_gateway(url).evaluate(&answer, &question).await;
        // Graded purely from token overlap against the ideal answer.
        assert_eq!(evaluation.accuracy, AccuracyBand::Excellent);
        assert_eq!(evaluation.points, 23);
    }
}
