//! Energy and nutrition target calculator
//!
//! Mifflin-St Jeor BMR, activity-scaled TDEE, macro split, hydration
//! target, and goal-based calorie adjustment. All operations are pure;
//! callers gate on `BodyMetrics::from_parts` before invoking.

use serde::{Deserialize, Serialize};

use crate::models::{BodyMetrics, Gender, TrainingGoal};

/// Moderate exercise, 3-5 days/week
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.55;

/// ---------------------------------------------------------------------------
/// TDEE Result
/// ---------------------------------------------------------------------------

/// Derived energy targets. Ephemeral: recomputed on every call, never
/// persisted by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdeeResult {
  pub bmr: i32,
  pub tdee: i32,
  pub protein_g: i32,
  pub carbs_g: i32,
  pub fat_g: i32,
}

/// ---------------------------------------------------------------------------
/// Calculator
/// ---------------------------------------------------------------------------

/// Compute BMR and daily energy targets from body metrics.
///
/// BMR uses the Mifflin-St Jeor equation. The `other` gender bucket
/// shares the female coefficient. Macro split: protein at 1 g per pound
/// of body weight, 40% of calories from carbs, 25% from fat.
pub fn compute_tdee(metrics: &BodyMetrics, activity_multiplier: f64) -> TdeeResult {
  let gender_term = match metrics.gender {
    Gender::Male => 5.0,
    Gender::Female | Gender::Other => -161.0,
  };

  let bmr_raw =
    10.0 * metrics.weight_kg + 6.25 * metrics.height_cm - 5.0 * metrics.age as f64 + gender_term;

  let bmr = bmr_raw.round() as i32;
  let tdee = (bmr as f64 * activity_multiplier).round() as i32;

  TdeeResult {
    bmr,
    tdee,
    protein_g: (metrics.weight_kg * 2.2).round() as i32,
    carbs_g: (tdee as f64 * 0.4 / 4.0).round() as i32,
    fat_g: (tdee as f64 * 0.25 / 9.0).round() as i32,
  }
}

/// Daily water intake target: 30 ml per kg of body weight.
pub fn water_target_ml(weight_kg: f64) -> i32 {
  (weight_kg * 30.0).round() as i32
}

/// Calorie target adjusted for the training goal: +10% surplus for
/// hypertrophy, +5% for strength, -20% deficit for weight loss.
pub fn adjusted_calories(goal: TrainingGoal, tdee: i32) -> i32 {
  let factor = match goal {
    TrainingGoal::Hypertrophy => 1.10,
    TrainingGoal::Strength => 1.05,
    TrainingGoal::WeightLoss => 0.80,
  };
  (tdee as f64 * factor).round() as i32
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
