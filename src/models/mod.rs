pub mod exercise;
pub mod profile;

pub use exercise::{Difficulty, Exercise, ExerciseType};
pub use profile::{BodyMetrics, Gender, TrainingGoal, UnitSystem};
