//! Rule-based workout programming
//!
//! Selects exercises for a list of target muscle groups from an
//! equipment-filtered catalog, parameterized by training goal. Selection
//! prefers one compound then one isolation movement per group, backfilling
//! in catalog order when a group runs short. Catalog order is part of the
//! contract: generation and substitution are deterministic.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equipment::{filter_by_equipment, EquipmentMap};
use crate::models::{Exercise, ExerciseType, TrainingGoal};

/// ---------------------------------------------------------------------------
/// Goal Parameters
/// ---------------------------------------------------------------------------

/// Sets/reps/rest prescription shared by every exercise in a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScheme {
  pub sets: u32,
  pub reps: u32,
  pub rest_seconds: u32,
}

/// Per-goal training parameters. One field per goal keeps the table
/// total: a goal without an entry does not compile.
#[derive(Debug, Clone, Copy)]
pub struct GoalParams {
  pub hypertrophy: SetScheme,
  pub strength: SetScheme,
  pub weight_loss: SetScheme,
}

impl GoalParams {
  pub fn standard() -> Self {
    Self {
      hypertrophy: SetScheme {
        sets: 4,
        reps: 10,
        rest_seconds: 90,
      },
      strength: SetScheme {
        sets: 5,
        reps: 5,
        rest_seconds: 180,
      },
      weight_loss: SetScheme {
        sets: 3,
        reps: 15,
        rest_seconds: 60,
      },
    }
  }

  pub fn for_goal(&self, goal: TrainingGoal) -> SetScheme {
    match goal {
      TrainingGoal::Hypertrophy => self.hypertrophy,
      TrainingGoal::Strength => self.strength,
      TrainingGoal::WeightLoss => self.weight_loss,
    }
  }
}

impl Default for GoalParams {
  fn default() -> Self {
    Self::standard()
  }
}

/// ---------------------------------------------------------------------------
/// Program Configuration
/// ---------------------------------------------------------------------------

/// Immutable programming tables injected into generation so tests can
/// substitute alternates without touching the selection logic.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
  pub equipment_map: EquipmentMap,
  pub goal_params: GoalParams,
  pub exercises_per_group: usize,
}

impl Default for ProgramConfig {
  fn default() -> Self {
    Self {
      equipment_map: EquipmentMap::standard(),
      goal_params: GoalParams::standard(),
      exercises_per_group: 2,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Plan Entries
/// ---------------------------------------------------------------------------

/// One programmed exercise. Transient output; persistence is the
/// caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
  pub exercise: Exercise,
  pub sets: u32,
  pub reps: u32,
  pub rest_seconds: u32,
}

/// ---------------------------------------------------------------------------
/// Workout Generation
/// ---------------------------------------------------------------------------

/// Build a workout for the given muscle groups.
///
/// Groups are processed in caller order, duplicates included. A group
/// with no equipment-compatible exercises contributes no entries; an
/// entirely empty plan is the caller's condition to surface.
pub fn generate_workout(
  catalog: &[Exercise],
  user_equipment: &[String],
  goal: TrainingGoal,
  muscle_groups: &[String],
  config: &ProgramConfig,
) -> Vec<PlanEntry> {
  let available = filter_by_equipment(catalog, user_equipment, &config.equipment_map);
  let scheme = config.goal_params.for_goal(goal);
  let mut plan = Vec::new();

  for group in muscle_groups {
    let group_exercises: Vec<&Exercise> = available
      .iter()
      .filter(|ex| ex.muscle_group.eq_ignore_ascii_case(group))
      .collect();

    let selected = select_for_group(&group_exercises, config.exercises_per_group);
    if selected.is_empty() {
      debug!(group = %group, "no equipment-compatible exercises for muscle group");
    }

    for exercise in selected {
      plan.push(PlanEntry {
        exercise: exercise.clone(),
        sets: scheme.sets,
        reps: scheme.reps,
        rest_seconds: scheme.rest_seconds,
      });
    }
  }

  plan
}

/// Pick up to `limit` exercises for one muscle group: first compound,
/// then first isolation, then backfill in catalog order.
fn select_for_group<'a>(group_exercises: &[&'a Exercise], limit: usize) -> Vec<&'a Exercise> {
  let mut selected: Vec<&Exercise> = Vec::new();

  if let Some(compound) = group_exercises
    .iter()
    .copied()
    .find(|ex| ex.exercise_type == ExerciseType::Compound)
  {
    selected.push(compound);
  }
  if let Some(isolation) = group_exercises
    .iter()
    .copied()
    .find(|ex| ex.exercise_type == ExerciseType::Isolation)
  {
    selected.push(isolation);
  }
  selected.truncate(limit);

  for ex in group_exercises.iter().copied() {
    if selected.len() >= limit {
      break;
    }
    if !selected.iter().any(|s| s.id == ex.id) {
      selected.push(ex);
    }
  }

  selected
}

/// ---------------------------------------------------------------------------
/// Exercise Substitution
/// ---------------------------------------------------------------------------

/// Find a same-muscle-group alternative for `current`, excluding the
/// current exercise and anything already used. Deterministic: returns
/// the first candidate in catalog order, or `None` when the group is
/// exhausted.
pub fn get_substitute(
  current: &Exercise,
  catalog: &[Exercise],
  user_equipment: &[String],
  used_exercise_ids: &[String],
  map: &EquipmentMap,
) -> Option<Exercise> {
  filter_by_equipment(catalog, user_equipment, map)
    .into_iter()
    .find(|ex| {
      ex.muscle_group == current.muscle_group
        && ex.id != current.id
        && !used_exercise_ids.iter().any(|id| *id == ex.id)
    })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
