//! Test utilities and helpers
//!
//! Mock data factories for the exercise catalog and plan entries, plus
//! canned completion fakes for exercising the AI contracts without a
//! network.

use async_trait::async_trait;

use crate::adaptation::WorkoutExercise;
use crate::llm::{LlmError, TextCompletion};
use crate::models::{Difficulty, Exercise, ExerciseType};

/// ---------------------------------------------------------------------------
/// Catalog Factories
/// ---------------------------------------------------------------------------

/// Build a catalog entry with sensible defaults for the fields the core
/// never branches on.
pub fn exercise(
  id: &str,
  name: &str,
  muscle_group: &str,
  equipment: &str,
  exercise_type: ExerciseType,
) -> Exercise {
  Exercise {
    id: id.to_string(),
    name: name.to_string(),
    muscle_group: muscle_group.to_string(),
    secondary_muscles: Vec::new(),
    equipment_required: equipment.to_string(),
    difficulty: Difficulty::Intermediate,
    exercise_type,
  }
}

/// A small realistic catalog covering every muscle group in the stock
/// splits, in a fixed order tests can rely on.
pub fn catalog() -> Vec<Exercise> {
  vec![
    exercise("chest-bench", "Bench Press", "chest", "barbell", ExerciseType::Compound),
    exercise("chest-pushup", "Push-Up", "chest", "bodyweight", ExerciseType::Compound),
    exercise("chest-fly", "Cable Fly", "chest", "cables", ExerciseType::Isolation),
    exercise("back-row", "Barbell Row", "back", "barbell", ExerciseType::Compound),
    exercise("back-pullup", "Pull-Up", "back", "bodyweight", ExerciseType::Compound),
    exercise("back-pulldown", "Straight-Arm Pulldown", "back", "cables", ExerciseType::Isolation),
    exercise("shoulders-ohp", "Overhead Press", "shoulders", "barbell", ExerciseType::Compound),
    exercise("shoulders-lateral", "Lateral Raise", "shoulders", "dumbbells", ExerciseType::Isolation),
    exercise("legs-squat", "Back Squat", "legs", "barbell", ExerciseType::Compound),
    exercise("legs-lunge", "Walking Lunge", "legs", "dumbbells", ExerciseType::Compound),
    exercise("legs-extension", "Leg Extension", "legs", "machines", ExerciseType::Isolation),
    exercise("biceps-curl", "Dumbbell Curl", "biceps", "dumbbells", ExerciseType::Isolation),
    exercise("triceps-pushdown", "Triceps Pushdown", "triceps", "cables", ExerciseType::Isolation),
    exercise("triceps-dip", "Dip", "triceps", "bodyweight", ExerciseType::Compound),
    exercise("core-plank", "Plank", "core", "bodyweight", ExerciseType::Isolation),
  ]
}

/// A short planned workout in contract form.
pub fn plan_exercises() -> Vec<WorkoutExercise> {
  vec![
    WorkoutExercise {
      name: "Bench Press".to_string(),
      muscle_group: "chest".to_string(),
      equipment: "barbell".to_string(),
      sets: 4,
      reps: 10,
      rest_seconds: 90,
    },
    WorkoutExercise {
      name: "Cable Fly".to_string(),
      muscle_group: "chest".to_string(),
      equipment: "cables".to_string(),
      sets: 4,
      reps: 10,
      rest_seconds: 90,
    },
  ]
}

/// ---------------------------------------------------------------------------
/// Completion Fakes
/// ---------------------------------------------------------------------------

/// Always answers with the configured text.
pub struct CannedCompletion {
  response: String,
}

impl CannedCompletion {
  pub fn new(response: impl Into<String>) -> Self {
    Self {
      response: response.into(),
    }
  }
}

#[async_trait]
impl TextCompletion for CannedCompletion {
  async fn complete(&self, _system_prompt: &str, _user_message: &str) -> Result<String, LlmError> {
    Ok(self.response.clone())
  }
}

/// Always fails as if the service were down.
pub struct FailingCompletion;

#[async_trait]
impl TextCompletion for FailingCompletion {
  async fn complete(&self, _system_prompt: &str, _user_message: &str) -> Result<String, LlmError> {
    Err(LlmError::Api("service unavailable".to_string()))
  }
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_catalog_covers_standard_split_groups() {
    let catalog = catalog();
    let groups: std::collections::HashSet<&str> = catalog
      .iter()
      .map(|e| e.muscle_group.as_str())
      .collect();

    for group in ["chest", "back", "shoulders", "legs", "biceps", "triceps", "core"] {
      assert!(groups.contains(group), "catalog missing group {}", group);
    }
  }

  #[tokio::test]
  async fn test_canned_completion_echoes_response() {
    let fake = CannedCompletion::new("{}");
    assert_eq!(fake.complete("s", "u").await.unwrap(), "{}");
  }
}
