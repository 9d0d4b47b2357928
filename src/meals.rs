//! AI meal analysis
//!
//! Estimates calories and macros from a free-text meal description via
//! the text-completion service, with the same parse-then-validate
//! pipeline as workout adaptation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::llm::{extract_json, ContractError, TextCompletion};

const MAX_SUMMARY_CHARS: usize = 80;

/// ---------------------------------------------------------------------------
/// Meal Analysis
/// ---------------------------------------------------------------------------

/// Estimated nutritional content of one meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealAnalysis {
  pub calories: u32,
  pub protein: f64,
  pub carbs: f64,
  pub fats: f64,
  pub summary: String,
}

impl MealAnalysis {
  fn validate(&self) -> Result<(), String> {
    if self.summary.trim().is_empty() {
      return Err("summary is empty".to_string());
    }
    if self.summary.chars().count() > MAX_SUMMARY_CHARS {
      return Err(format!("summary exceeds {} chars", MAX_SUMMARY_CHARS));
    }
    if self.protein < 0.0 || self.carbs < 0.0 || self.fats < 0.0 {
      return Err("macro estimates must be non-negative".to_string());
    }

    Ok(())
  }
}

/// ---------------------------------------------------------------------------
/// Analysis Contract
/// ---------------------------------------------------------------------------

/// Analyze a meal description into calorie and macro estimates.
///
/// A blank description is rejected before any request is made; an
/// unconfigured service fails fast with `NotConfigured`.
pub async fn analyze_meal(
  client: Option<&dyn TextCompletion>,
  description: &str,
) -> Result<MealAnalysis, ContractError> {
  if description.trim().is_empty() {
    return Err(ContractError::InvalidInput(
      "meal description is empty".to_string(),
    ));
  }

  let client = client.ok_or(ContractError::NotConfigured)?;

  debug!(chars = description.len(), "requesting meal analysis");

  let response_text = client
    .complete(include_str!("prompts/nutritionist_system.txt"), description)
    .await?;

  if response_text.trim().is_empty() {
    return Err(ContractError::EmptyResponse);
  }

  let json_str =
    extract_json(&response_text).map_err(|e| ContractError::InvalidData(e.to_string()))?;

  let analysis: MealAnalysis =
    serde_json::from_str(&json_str).map_err(|e| ContractError::InvalidData(e.to_string()))?;

  if let Err(reason) = analysis.validate() {
    warn!(%reason, "rejecting meal analysis");
    return Err(ContractError::InvalidData(reason));
  }

  Ok(analysis)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
