//! Fitness coaching core
//!
//! Pure workout-programming and nutrition logic plus the AI contracts
//! built on a narrow text-completion capability. Persistence, auth and
//! UI live in the calling application; every operation here takes
//! fully-formed inputs and returns fully-formed outputs.

pub mod adaptation;
pub mod equipment;
pub mod generator;
pub mod llm;
pub mod meals;
pub mod models;
pub mod nutrition;
pub mod split;
pub mod units;

#[cfg(test)]
mod test_utils;
