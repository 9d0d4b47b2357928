//! Equipment inventory normalization and catalog filtering
//!
//! Users declare equipment as free text ("Barbell", "Smith Machine").
//! A static name map turns known names into catalog equipment tags;
//! unknown names pass through lower-cased, so they only match exercises
//! whose catalog tag equals that exact string.

use std::collections::{HashMap, HashSet};

use crate::models::Exercise;

/// ---------------------------------------------------------------------------
/// Equipment Map
/// ---------------------------------------------------------------------------

/// Equipment name -> equipment_required tags used in the exercise catalog.
#[derive(Debug, Clone)]
pub struct EquipmentMap {
  entries: HashMap<String, Vec<String>>,
}

impl EquipmentMap {
  /// The standard name map for the stock catalog.
  pub fn standard() -> Self {
    let names = [
      "barbell",
      "dumbbells",
      "cables",
      "machines",
      "bodyweight",
      "bands",
      "kettlebell",
    ];

    Self {
      entries: names
        .iter()
        .map(|n| (n.to_string(), vec![n.to_string()]))
        .collect(),
    }
  }

  /// Build a map from explicit name -> tags pairs. Used by tests and by
  /// callers with a customized catalog.
  pub fn from_entries<I, S>(entries: I) -> Self
  where
    I: IntoIterator<Item = (S, Vec<S>)>,
    S: Into<String>,
  {
    Self {
      entries: entries
        .into_iter()
        .map(|(name, tags)| {
          (
            name.into().to_lowercase(),
            tags.into_iter().map(|t| t.into().to_lowercase()).collect(),
          )
        })
        .collect(),
    }
  }

  /// Resolve a user inventory to the set of usable equipment tags.
  ///
  /// `bodyweight` is always available. Known names expand through the
  /// map; unknown names fall through lower-cased as their own tag.
  pub fn available_tags(&self, user_equipment: &[String]) -> HashSet<String> {
    let mut tags = HashSet::new();
    tags.insert("bodyweight".to_string());

    for name in user_equipment {
      let key = name.to_lowercase();
      match self.entries.get(&key) {
        Some(mapped) => tags.extend(mapped.iter().cloned()),
        None => {
          tags.insert(key);
        }
      }
    }

    tags
  }
}

impl Default for EquipmentMap {
  fn default() -> Self {
    Self::standard()
  }
}

/// ---------------------------------------------------------------------------
/// Catalog Filtering
/// ---------------------------------------------------------------------------

/// Return the exercises performable with the user's equipment.
pub fn filter_by_equipment(
  exercises: &[Exercise],
  user_equipment: &[String],
  map: &EquipmentMap,
) -> Vec<Exercise> {
  let available = map.available_tags(user_equipment);

  exercises
    .iter()
    .filter(|ex| available.contains(&ex.equipment_required.to_lowercase()))
    .cloned()
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::exercise;
  use crate::models::ExerciseType;

  fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
  }

  #[test]
  fn test_bodyweight_always_available() {
    let catalog = vec![
      exercise("e1", "Bench Press", "chest", "barbell", ExerciseType::Compound),
      exercise("e2", "Push-Up", "chest", "bodyweight", ExerciseType::Compound),
    ];

    let filtered = filter_by_equipment(&catalog, &[], &EquipmentMap::standard());

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "e2");
  }

  #[test]
  fn test_known_equipment_matches_case_insensitively() {
    let catalog = vec![exercise(
      "e1",
      "Bench Press",
      "chest",
      "barbell",
      ExerciseType::Compound,
    )];

    let filtered = filter_by_equipment(&catalog, &owned(&["Barbell"]), &EquipmentMap::standard());

    assert_eq!(filtered.len(), 1);
  }

  #[test]
  fn test_unknown_equipment_passes_through_lowercased() {
    let catalog = vec![
      exercise("e1", "Smith Squat", "legs", "smith machine", ExerciseType::Compound),
      exercise("e2", "Hack Squat", "legs", "hack machine", ExerciseType::Compound),
    ];

    let filtered = filter_by_equipment(
      &catalog,
      &owned(&["Smith Machine"]),
      &EquipmentMap::standard(),
    );

    // "Smith Machine" is not in the map, so it matches only the exercise
    // whose tag equals "smith machine" exactly
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "e1");
  }

  #[test]
  fn test_substituted_map_expands_to_multiple_tags() {
    let map = EquipmentMap::from_entries([("home gym", vec!["dumbbells", "bands"])]);
    let catalog = vec![
      exercise("e1", "Curl", "biceps", "dumbbells", ExerciseType::Isolation),
      exercise("e2", "Band Pull-Apart", "back", "bands", ExerciseType::Isolation),
      exercise("e3", "Bench Press", "chest", "barbell", ExerciseType::Compound),
    ];

    let filtered = filter_by_equipment(&catalog, &owned(&["Home Gym"]), &map);

    assert_eq!(filtered.len(), 2);
  }
}
