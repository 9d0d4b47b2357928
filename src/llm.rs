//! Text-completion integration
//!
//! This module handles communication with the Claude API and defines the
//! narrow completion capability the AI contracts depend on. Contracts
//! take a `TextCompletion` so tests can substitute canned responses.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

const CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";
const CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
const API_VERSION: &str = "2023-06-01";

/// Response budget for contract calls made through the trait.
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

/// Transport-level failures from the completion service.
#[derive(Error, Debug, Serialize)]
pub enum LlmError {
  #[error("API key not configured")]
  MissingApiKey,

  #[error("Request failed: {0}")]
  Request(String),

  #[error("API error: {0}")]
  Api(String),

  #[error("Parse error: {0}")]
  Parse(String),
}

/// Failures of an AI contract call, distinguishing the conditions a
/// caller presents differently: not configured, empty response,
/// malformed/invalid payload, transport failure, and bad input.
#[derive(Error, Debug)]
pub enum ContractError {
  #[error("AI is not configured")]
  NotConfigured,

  #[error("AI returned an empty response")]
  EmptyResponse,

  #[error("AI returned invalid data: {0}")]
  InvalidData(String),

  #[error("AI request failed: {0}")]
  RequestFailed(String),

  #[error("Invalid input: {0}")]
  InvalidInput(String),
}

impl From<LlmError> for ContractError {
  fn from(err: LlmError) -> Self {
    match err {
      LlmError::MissingApiKey => ContractError::NotConfigured,
      LlmError::Request(msg) | LlmError::Api(msg) | LlmError::Parse(msg) => {
        ContractError::RequestFailed(msg)
      }
    }
  }
}

/// ---------------------------------------------------------------------------
/// Completion Capability
/// ---------------------------------------------------------------------------

/// The one operation the AI contracts need from a completion service.
#[async_trait]
pub trait TextCompletion: Send + Sync {
  async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError>;
}

/// ---------------------------------------------------------------------------
/// Claude API Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ClaudeRequest {
  model: String,
  max_tokens: u32,
  system: String,
  messages: Vec<ClaudeMessage>,
}

#[derive(Debug, Serialize)]
struct ClaudeMessage {
  role: String,
  content: String,
}

#[derive(Debug, Deserialize)]
struct ClaudeResponse {
  content: Vec<ContentBlock>,
  #[allow(dead_code)]
  model: String,
  #[allow(dead_code)]
  stop_reason: Option<String>,
  usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
  #[serde(rename = "type")]
  content_type: String,
  text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
  pub input_tokens: u32,
  pub output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ClaudeErrorResponse {
  error: ClaudeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ClaudeErrorDetail {
  message: String,
}

/// ---------------------------------------------------------------------------
/// Claude Client
/// ---------------------------------------------------------------------------

pub struct ClaudeClient {
  client: Client,
  api_key: String,
  api_url: String,
}

impl ClaudeClient {
  /// Create a new Claude client, loading the API key from the
  /// environment (`.env` is honored).
  pub fn from_env() -> Result<Self, LlmError> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| LlmError::MissingApiKey)?;

    Ok(Self::new(api_key))
  }

  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      client: Client::new(),
      api_key: api_key.into(),
      api_url: CLAUDE_API_URL.to_string(),
    }
  }

  /// Override the API endpoint. Used by tests to point at a mock server.
  pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
    self.api_url = api_url.into();
    self
  }

  /// Call Claude with a system prompt and user message
  pub async fn complete_with_budget(
    &self,
    system_prompt: &str,
    user_message: &str,
    max_tokens: u32,
  ) -> Result<(String, Usage), LlmError> {
    let request = ClaudeRequest {
      model: CLAUDE_MODEL.to_string(),
      max_tokens,
      system: system_prompt.to_string(),
      messages: vec![ClaudeMessage {
        role: "user".to_string(),
        content: user_message.to_string(),
      }],
    };

    let response = self
      .client
      .post(&self.api_url)
      .header("x-api-key", &self.api_key)
      .header("anthropic-version", API_VERSION)
      .header("content-type", "application/json")
      .json(&request)
      .send()
      .await
      .map_err(|e| LlmError::Request(e.to_string()))?;

    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(|e| LlmError::Request(e.to_string()))?;

    if !status.is_success() {
      // Try to parse error response
      if let Ok(error_resp) = serde_json::from_str::<ClaudeErrorResponse>(&body) {
        return Err(LlmError::Api(error_resp.error.message));
      }
      return Err(LlmError::Api(format!("HTTP {}: {}", status, body)));
    }

    let claude_response: ClaudeResponse =
      serde_json::from_str(&body).map_err(|e| LlmError::Parse(e.to_string()))?;

    // Extract text from the first text content block
    let text = claude_response
      .content
      .iter()
      .find(|c| c.content_type == "text")
      .and_then(|c| c.text.clone())
      .ok_or_else(|| LlmError::Parse("No text content in response".to_string()))?;

    Ok((text, claude_response.usage))
  }
}

#[async_trait]
impl TextCompletion for ClaudeClient {
  async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError> {
    let (text, _usage) = self
      .complete_with_budget(system_prompt, user_message, DEFAULT_MAX_TOKENS)
      .await?;
    Ok(text)
  }
}

/// ---------------------------------------------------------------------------
/// Response Extraction
/// ---------------------------------------------------------------------------

/// Extract JSON from a completion response (handles markdown code blocks)
pub(crate) fn extract_json(text: &str) -> Result<String, LlmError> {
  // Try direct parse first
  if text.trim().starts_with('{') {
    return Ok(text.trim().to_string());
  }

  // Look for JSON in code blocks
  if let Some(start) = text.find("```json") {
    let start = start + 7;
    if let Some(end) = text[start..].find("```") {
      return Ok(text[start..start + end].trim().to_string());
    }
  }

  // Look for plain code blocks
  if let Some(start) = text.find("```") {
    let start = start + 3;
    // Skip language identifier if present
    let content_start = text[start..]
      .find('\n')
      .map(|i| start + i + 1)
      .unwrap_or(start);
    if let Some(end) = text[content_start..].find("```") {
      return Ok(text[content_start..content_start + end].trim().to_string());
    }
  }

  // Last resort: find first { to last }
  if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
    return Ok(text[start..=end].to_string());
  }

  Err(LlmError::Parse("Could not extract JSON from response".to_string()))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
