//! Condition-based workout adaptation
//!
//! Restructures a planned workout for the user's reported condition.
//! The `great` path is a pure local passthrough; the other conditions
//! delegate to a text-completion service and trust nothing that has not
//! survived parse-then-validate.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::generator::PlanEntry;
use crate::llm::{extract_json, ContractError, TextCompletion};

/// ---------------------------------------------------------------------------
/// User Condition
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserCondition {
  Great,
  Tired,
  ShortOnTime,
  Injured,
}

/// ---------------------------------------------------------------------------
/// Contract Types
/// ---------------------------------------------------------------------------

/// A planned exercise as sent to the completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
  pub name: String,
  pub muscle_group: String,
  pub equipment: String,
  pub sets: u32,
  pub reps: u32,
  pub rest_seconds: u32,
}

impl From<&PlanEntry> for WorkoutExercise {
  fn from(entry: &PlanEntry) -> Self {
    Self {
      name: entry.exercise.name.clone(),
      muscle_group: entry.exercise.muscle_group.clone(),
      equipment: entry.exercise.equipment_required.clone(),
      sets: entry.sets,
      reps: entry.reps,
      rest_seconds: entry.rest_seconds,
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptedExercise {
  pub name: String,
  pub muscle_group: String,
  pub equipment: String,
  pub sets: u32,
  pub reps: u32,
  pub rest_seconds: u32,
  #[serde(default)]
  pub is_superset_with: Option<String>,
  #[serde(default)]
  pub note: Option<String>,
}

/// The adapted plan handed back to the caller. Ephemeral; the caller
/// decides whether to persist or merely display it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptedWorkout {
  pub exercises: Vec<AdaptedExercise>,
  pub message: String,
}

impl AdaptedWorkout {
  /// Field-by-field schema check applied to every service response
  /// before it is trusted.
  fn validate(&self) -> Result<(), String> {
    if self.exercises.is_empty() {
      return Err("adapted plan contains no exercises".to_string());
    }

    for (i, ex) in self.exercises.iter().enumerate() {
      if ex.name.trim().is_empty() {
        return Err(format!("exercise {} has an empty name", i));
      }
      if ex.sets == 0 || ex.reps == 0 || ex.rest_seconds == 0 {
        return Err(format!(
          "exercise '{}' has non-positive sets/reps/rest",
          ex.name
        ));
      }
    }

    Ok(())
  }
}

/// ---------------------------------------------------------------------------
/// Great: Offline Passthrough
/// ---------------------------------------------------------------------------

const GREAT_MESSAGE: &str = "Standard workout - let's go!";

/// Echo the plan unchanged with an encouraging message. Pure and local;
/// the `great` condition never touches the completion service.
pub fn passthrough_plan(exercises: &[WorkoutExercise]) -> AdaptedWorkout {
  AdaptedWorkout {
    exercises: exercises
      .iter()
      .map(|ex| AdaptedExercise {
        name: ex.name.clone(),
        muscle_group: ex.muscle_group.clone(),
        equipment: ex.equipment.clone(),
        sets: ex.sets,
        reps: ex.reps,
        rest_seconds: ex.rest_seconds,
        is_superset_with: None,
        note: None,
      })
      .collect(),
    message: GREAT_MESSAGE.to_string(),
  }
}

/// ---------------------------------------------------------------------------
/// Condition Instructions
/// ---------------------------------------------------------------------------

fn condition_instruction(condition: UserCondition, injury_description: Option<&str>) -> String {
  match condition {
    UserCondition::Great => String::new(),

    UserCondition::Tired => "The user is feeling TIRED today. Modify the workout:
- Reduce the number of sets by 1-2 per exercise (minimum 2 sets)
- Keep the same weight/intensity (don't reduce reps)
- Keep rest periods the same or slightly increase them
- Keep all the same exercises"
      .to_string(),

    UserCondition::ShortOnTime => {
      "The user is SHORT ON TIME and wants to finish in ~30 minutes. Modify the workout:
- Create superset pairings where possible (pair opposing muscle groups)
- Reduce rest periods to 45-60 seconds
- Keep 3 sets per exercise
- Use the \"is_superset_with\" field to indicate superset partners (use the exercise name)
- Keep all the same exercises but reorganize for efficiency"
        .to_string()
    }

    UserCondition::Injured => {
      let description = injury_description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or("unspecified");

      format!(
        "The user has reported an INJURY: \"{}\".
CRITICAL SAFETY RULES:
- Remove any exercise that could aggravate the injured area
- Replace removed exercises with safe alternatives for the same or nearby muscle group
- Use the \"note\" field to explain why an exercise was replaced
- If the injury involves shoulders: remove overhead presses, lateral raises, and upright rows
- If the injury involves back: remove deadlifts, bent-over rows
- If the injury involves knees: remove squats, lunges, leg press
- Prefer machine or cable alternatives which are generally safer
- Reduce intensity slightly (1 fewer set per exercise)",
        description
      )
    }
  }
}

/// ---------------------------------------------------------------------------
/// Adaptation Contract
/// ---------------------------------------------------------------------------

/// Adapt a workout to the user's condition.
///
/// `great` succeeds locally and ignores the client entirely. The other
/// conditions require a configured completion service: `None` fails fast
/// with `NotConfigured` before any request is built. The service
/// response is schema-validated before being returned; the caller may
/// fall back to the unmodified plan on any failure.
pub async fn adapt_workout(
  client: Option<&dyn TextCompletion>,
  condition: UserCondition,
  exercises: &[WorkoutExercise],
  injury_description: Option<&str>,
) -> Result<AdaptedWorkout, ContractError> {
  if condition == UserCondition::Great {
    return Ok(passthrough_plan(exercises));
  }

  let client = client.ok_or(ContractError::NotConfigured)?;

  let plan_json = serde_json::to_string_pretty(exercises)
    .map_err(|e| ContractError::InvalidInput(e.to_string()))?;

  let user_message = format!(
    "{}\n\nCurrent workout plan:\n{}\n\nRespond with valid JSON matching the OUTPUT FORMAT specified in your instructions.",
    condition_instruction(condition, injury_description),
    plan_json
  );

  debug!(?condition, exercises = exercises.len(), "requesting workout adaptation");

  let response_text = client
    .complete(include_str!("prompts/trainer_system.txt"), &user_message)
    .await?;

  parse_adapted_workout(&response_text)
}

/// Parse and validate a raw completion response into an adapted plan.
fn parse_adapted_workout(response_text: &str) -> Result<AdaptedWorkout, ContractError> {
  if response_text.trim().is_empty() {
    return Err(ContractError::EmptyResponse);
  }

  let json_str =
    extract_json(response_text).map_err(|e| ContractError::InvalidData(e.to_string()))?;

  let adapted: AdaptedWorkout =
    serde_json::from_str(&json_str).map_err(|e| ContractError::InvalidData(e.to_string()))?;

  if let Err(reason) = adapted.validate() {
    warn!(%reason, "rejecting adapted workout");
    return Err(ContractError::InvalidData(reason));
  }

  Ok(adapted)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
