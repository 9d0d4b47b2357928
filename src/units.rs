//! Metric/imperial unit conversion and display formatting
//!
//! Pure, total functions. Weight and volume conversions round to one
//! decimal place; height conversions round inches to the nearest integer
//! and carry a full 12 inches into the feet component.

use crate::models::UnitSystem;

const LBS_PER_KG: f64 = 2.20462;
const ML_PER_FL_OZ: f64 = 29.5735;
const CM_PER_INCH: f64 = 2.54;

/// ---------------------------------------------------------------------------
/// Weight
/// ---------------------------------------------------------------------------

pub fn kg_to_lbs(kg: f64) -> f64 {
  (kg * LBS_PER_KG * 10.0).round() / 10.0
}

pub fn lbs_to_kg(lbs: f64) -> f64 {
  (lbs / LBS_PER_KG * 10.0).round() / 10.0
}

/// ---------------------------------------------------------------------------
/// Height
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeetInches {
  pub feet: u32,
  pub inches: u32,
}

pub fn cm_to_ft_in(cm: f64) -> FeetInches {
  let total_inches = cm / CM_PER_INCH;
  let mut feet = (total_inches / 12.0).floor() as u32;
  let mut inches = (total_inches % 12.0).round() as u32;

  // Rounding can produce a twelfth inch (182 cm -> 5 ft 11.65 in); carry
  // it so the result reads 6'0", not 5'12".
  if inches == 12 {
    feet += 1;
    inches = 0;
  }

  FeetInches { feet, inches }
}

pub fn ft_in_to_cm(feet: u32, inches: u32) -> u32 {
  ((feet * 12 + inches) as f64 * CM_PER_INCH).round() as u32
}

/// ---------------------------------------------------------------------------
/// Volume
/// ---------------------------------------------------------------------------

pub fn ml_to_oz(ml: f64) -> f64 {
  (ml / ML_PER_FL_OZ * 10.0).round() / 10.0
}

pub fn oz_to_ml(oz: f64) -> f64 {
  (oz * ML_PER_FL_OZ).round()
}

/// ---------------------------------------------------------------------------
/// Display Formatting
/// ---------------------------------------------------------------------------

pub fn format_weight(kg: f64, units: UnitSystem) -> String {
  match units {
    UnitSystem::Imperial => format!("{} lbs", kg_to_lbs(kg)),
    UnitSystem::Metric => format!("{} kg", kg),
  }
}

pub fn format_height(cm: f64, units: UnitSystem) -> String {
  match units {
    UnitSystem::Imperial => {
      let FeetInches { feet, inches } = cm_to_ft_in(cm);
      format!("{}'{}\"", feet, inches)
    }
    UnitSystem::Metric => format!("{} cm", cm),
  }
}

pub fn format_water(ml: f64, units: UnitSystem) -> String {
  match units {
    UnitSystem::Imperial => format!("{} oz", ml_to_oz(ml)),
    UnitSystem::Metric => format!("{} ml", ml),
  }
}

pub fn weight_unit_label(units: UnitSystem) -> &'static str {
  match units {
    UnitSystem::Imperial => "lbs",
    UnitSystem::Metric => "kg",
  }
}

pub fn water_unit_label(units: UnitSystem) -> &'static str {
  match units {
    UnitSystem::Imperial => "oz",
    UnitSystem::Metric => "ml",
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
