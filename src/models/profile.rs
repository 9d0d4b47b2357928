use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
  Male,
  Female,
  Other,
}

/// Training goal. Closed set: every goal has exactly one entry in the
/// set/rep/rest table and one calorie adjustment, enforced by `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
  Hypertrophy,
  Strength,
  WeightLoss,
}

impl std::fmt::Display for TrainingGoal {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Hypertrophy => write!(f, "hypertrophy"),
      Self::Strength => write!(f, "strength"),
      Self::WeightLoss => write!(f, "weight_loss"),
    }
  }
}

impl std::str::FromStr for TrainingGoal {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "hypertrophy" => Ok(Self::Hypertrophy),
      "strength" => Ok(Self::Strength),
      "weight_loss" => Ok(Self::WeightLoss),
      _ => Err(format!("Unknown training goal: {}", s)),
    }
  }
}

/// Preferred display system for weights, heights and volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
  Metric,
  Imperial,
}

/// Body metrics required for energy calculations.
///
/// All fields are mandatory: profiles with missing measurements must not
/// reach the calculator. `from_parts` is the gate for callers holding
/// nullable profile columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyMetrics {
  pub weight_kg: f64,
  pub height_cm: f64,
  pub age: u32,
  pub gender: Gender,
}

impl BodyMetrics {
  /// Assemble metrics from nullable profile fields. Returns `None` when
  /// any field is absent or non-positive, meaning "TDEE unavailable".
  pub fn from_parts(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    gender: Option<Gender>,
  ) -> Option<Self> {
    let weight_kg = weight_kg.filter(|w| *w > 0.0)?;
    let height_cm = height_cm.filter(|h| *h > 0.0)?;
    let age = age.filter(|a| *a > 0)?;
    let gender = gender?;

    Some(Self {
      weight_kg,
      height_cm,
      age,
      gender,
    })
  }
}
