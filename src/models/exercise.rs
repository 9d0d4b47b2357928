use serde::{Deserialize, Serialize};

/// Multi-joint vs single-muscle classification; drives selection order
/// in workout generation (compounds are programmed first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
  Compound,
  Isolation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Beginner,
  Intermediate,
  Advanced,
}

/// Catalog entry supplied by the exercise catalog collaborator.
///
/// Immutable reference data: the core reads catalogs, it never creates or
/// mutates entries. `muscle_group` and `equipment_required` are free-form
/// lower-case tags ("chest", "barbell", "bodyweight").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
  pub id: String,
  pub name: String,
  pub muscle_group: String,
  pub secondary_muscles: Vec<String>,
  pub equipment_required: String,
  pub difficulty: Difficulty,
  pub exercise_type: ExerciseType,
}
