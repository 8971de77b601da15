//! Achievement system module.
//!
//! A fixed catalog of one-shot goals with energy rewards. Evaluation is pure;
//! the engine records unlocked ids and credits rewards.

pub mod data;
pub mod evaluator;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use evaluator::evaluate;
pub use types::{AchievementDef, AchievementId, AchievementSnapshot, Condition, Unlock};
