//! Weekly split scheduling
//!
//! Maps a split type and a day index to the muscle groups trained that
//! day. Day lookup wraps modulo the number of days in the split, so any
//! non-negative index is valid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
  PushPullLegs,
  UpperLower,
  FullBody,
}

/// One training day within a split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitDay {
  pub key: String,
  pub muscle_groups: Vec<String>,
}

impl SplitDay {
  fn new(key: &str, muscle_groups: &[&str]) -> Self {
    Self {
      key: key.to_string(),
      muscle_groups: muscle_groups.iter().map(|g| g.to_string()).collect(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Split Table
/// ---------------------------------------------------------------------------

/// Ordered day definitions per split type. Static configuration, not
/// user data; tests may substitute an alternate table.
#[derive(Debug, Clone)]
pub struct SplitTable {
  pub push_pull_legs: Vec<SplitDay>,
  pub upper_lower: Vec<SplitDay>,
  pub full_body: Vec<SplitDay>,
}

impl SplitTable {
  pub fn standard() -> Self {
    Self {
      push_pull_legs: vec![
        SplitDay::new("push", &["chest", "shoulders", "triceps"]),
        SplitDay::new("pull", &["back", "biceps"]),
        SplitDay::new("legs", &["legs", "core"]),
      ],
      upper_lower: vec![
        SplitDay::new("upper", &["chest", "back", "shoulders", "biceps", "triceps"]),
        SplitDay::new("lower", &["legs", "core"]),
      ],
      full_body: vec![SplitDay::new(
        "full",
        &["chest", "back", "shoulders", "legs", "biceps", "triceps", "core"],
      )],
    }
  }

  fn days(&self, split: SplitType) -> &[SplitDay] {
    match split {
      SplitType::PushPullLegs => &self.push_pull_legs,
      SplitType::UpperLower => &self.upper_lower,
      SplitType::FullBody => &self.full_body,
    }
  }

  /// Muscle groups trained on `day_index` of the split. The index wraps,
  /// so week 2 of push/pull/legs starts again at push.
  pub fn day_muscle_groups(&self, split: SplitType, day_index: usize) -> &[String] {
    let days = self.days(split);
    if days.is_empty() {
      return &[];
    }

    &days[day_index % days.len()].muscle_groups
  }
}

impl Default for SplitTable {
  fn default() -> Self {
    Self::standard()
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_push_pull_legs_day_zero() {
    let table = SplitTable::standard();
    assert_eq!(
      table.day_muscle_groups(SplitType::PushPullLegs, 0),
      &["chest", "shoulders", "triceps"]
    );
  }

  #[test]
  fn test_day_index_wraps() {
    let table = SplitTable::standard();
    assert_eq!(
      table.day_muscle_groups(SplitType::PushPullLegs, 3),
      table.day_muscle_groups(SplitType::PushPullLegs, 0)
    );
    assert_eq!(
      table.day_muscle_groups(SplitType::UpperLower, 5),
      table.day_muscle_groups(SplitType::UpperLower, 1)
    );
    // Arbitrarily large indexes still resolve
    assert_eq!(
      table.day_muscle_groups(SplitType::FullBody, 1000),
      table.day_muscle_groups(SplitType::FullBody, 0)
    );
  }

  #[test]
  fn test_upper_lower_days() {
    let table = SplitTable::standard();
    assert_eq!(
      table.day_muscle_groups(SplitType::UpperLower, 0),
      &["chest", "back", "shoulders", "biceps", "triceps"]
    );
    assert_eq!(
      table.day_muscle_groups(SplitType::UpperLower, 1),
      &["legs", "core"]
    );
  }

  #[test]
  fn test_full_body_covers_all_groups() {
    let table = SplitTable::standard();
    let groups = table.day_muscle_groups(SplitType::FullBody, 0);
    assert_eq!(groups.len(), 7);
    assert!(groups.contains(&"core".to_string()));
  }

  #[test]
  fn test_substituted_table_with_empty_split_yields_no_groups() {
    let mut table = SplitTable::standard();
    table.full_body.clear();
    assert!(table.day_muscle_groups(SplitType::FullBody, 0).is_empty());
  }
}
