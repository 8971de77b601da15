//! Core game state and logic.

pub mod constants;
pub mod cost_curve;
pub mod engine;
pub mod game_loop;
pub mod game_state;
pub mod offline;
pub mod prestige;
pub mod production;

pub use cost_curve::CostCurve;
pub use engine::{EngineError, GameEvent, NotificationSink, ProgressionEngine, TickResult};
pub use game_loop::{GameClock, LoopStep};
pub use game_state::{GameState, PlayerStats, PrestigeState};
pub use offline::{calculate_offline_earnings, offline_report, OfflineReport};
pub use prestige::{can_prestige, prestige_points_for, prestige_threshold};
pub use production::{compute_click_power, compute_rate};
