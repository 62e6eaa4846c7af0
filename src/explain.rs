//! Natural-language explanation of a verdict
//!
//! Sends the input, its verdict and the mode to a Gemini-style
//! `generateContent` endpoint and returns the prose it produces. Every
//! failure collapses to [`FAILURE_MESSAGE`] at the [`Explainer::explain`]
//! boundary; the typed [`ExplainError`] is only logged.
//!
//! The HTTP call is blocking, so the TUI runs it through [`spawn_explanation`]
//! on a worker thread and polls the returned channel.

use crate::config::ExplainConfig;
use crate::error::ExplainError;
use crate::trace::Mode;
use serde::Deserialize;
use std::sync::mpsc;
use std::thread;

pub const FAILURE_MESSAGE: &str =
    "Failed to fetch AI explanation. Please check your internet connection or try again later.";

/// What the explanation is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationRequest {
    pub input: String,
    pub is_valid: bool,
    pub mode: Mode,
}

impl ExplanationRequest {
    pub fn prompt(&self) -> String {
        let verdict = if self.is_valid { "VALID" } else { "INVALID" };
        format!(
            "Explain why the string \"{input}\" is {verdict} when processed using a {upper} ({long}) data structure.\n\
             \n\
             The problem is \"Valid Parentheses\":\n\
             - Open brackets must be closed by the same type of brackets.\n\
             - Open brackets must be closed in the correct order.\n\
             \n\
             Crucially, note that while a Stack is the standard solution, a Queue behaves differently.\n\
             Explain if the {mode} logic successfully handles nesting or if it fails because of its FIFO/LIFO nature.\n\
             \n\
             Provide a concise, friendly, and educational explanation.",
            input = self.input,
            verdict = verdict,
            upper = self.mode.upper(),
            long = self.mode.long_name(),
            mode = self.mode,
        )
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Concatenate the text parts of the first candidate
fn extract_text(body: GenerateContentResponse) -> Result<String, ExplainError> {
    let text: String = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ExplainError::EmptyResponse);
    }
    Ok(text)
}

/// Parse a raw `generateContent` response body
pub fn parse_response(body: &str) -> Result<String, ExplainError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;
    extract_text(parsed)
}

/// Blocking client for the text-generation service
#[derive(Debug, Clone)]
pub struct Explainer {
    client: reqwest::blocking::Client,
    config: ExplainConfig,
}

impl Explainer {
    pub fn new(config: ExplainConfig) -> Result<Self, ExplainError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Fetch an explanation, surfacing the typed error
    pub fn try_explain(&self, request: &ExplanationRequest) -> Result<String, ExplainError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ExplainError::MissingApiKey)?;

        tracing::info!(
            input = %request.input,
            mode = %request.mode,
            model = %self.config.model,
            "requesting explanation"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&serde_json::json!({
                "contents": [{ "parts": [{ "text": request.prompt() }] }]
            }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExplainError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json()?;
        extract_text(body)
    }

    /// Fetch an explanation, or the fixed failure message
    pub fn explain(&self, request: &ExplanationRequest) -> String {
        match self.try_explain(request) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "explanation request failed");
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}

/// Run [`Explainer::explain`] on a worker thread.
///
/// The receiver yields exactly one message. Dropping it early is harmless.
pub fn spawn_explanation(
    config: ExplainConfig,
    request: ExplanationRequest,
) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let text = match Explainer::new(config) {
            Ok(explainer) => explainer.explain(&request),
            Err(e) => {
                tracing::warn!(error = %e, "could not build HTTP client");
                FAILURE_MESSAGE.to_string()
            }
        };
        let _ = tx.send(text);
    });
    rx
}
