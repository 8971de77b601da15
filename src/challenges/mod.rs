//! Daily challenges: one date-scoped objective with a one-time reward.

pub mod data;
pub mod tracker;
pub mod types;

pub use data::ALL_CHALLENGES;
pub use tracker::{pick_challenge, ChallengeTracker};
pub use types::{ChallengeDef, DailyChallenge, ObjectiveKind};
