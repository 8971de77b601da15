//! Galactic Explorer - idle space-exploration progression engine
//!
//! The crate is the simulation core: accrual, costs, modifiers, prestige,
//! offline catch-up, achievements, daily challenges and persistence. It has
//! no presentation layer; hosts drive a [`core::ProgressionEngine`] with a
//! [`core::GameClock`] and render the [`core::GameEvent`]s it emits.

pub mod achievements;
pub mod catalog;
pub mod challenges;
pub mod core;
pub mod modifiers;
pub mod save;
pub mod utils;

pub use crate::core::{EngineError, GameEvent, GameState, NotificationSink, ProgressionEngine};
pub use save::{SaveError, SaveManager};
