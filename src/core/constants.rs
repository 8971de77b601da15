// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const AUTOSAVE_INTERVAL_MS: u64 = 30_000;
/// Longest wall-clock gap a single loop step will turn into ticks.
pub const MAX_FRAME_DELTA_MS: u64 = 500;

// Cost curve
pub const COST_MULTIPLIER: f64 = 1.15;

// Prestige
pub const PRESTIGE_THRESHOLDS: [f64; 4] = [1_000_000.0, 10_000_000.0, 100_000_000.0, 1_000_000_000.0];
pub const PRESTIGE_POINTS_DIVISOR: f64 = 1_000_000.0;
pub const PRESTIGE_RATE_BONUS_PER_LEVEL: f64 = 0.1;
pub const PRESTIGE_CLICK_BONUS_PER_LEVEL: f64 = 0.05;

// Clicking
pub const BASE_CLICK_POWER: f64 = 1.0;

// Offline progression
pub const OFFLINE_MIN_MS: i64 = 60_000;
pub const MAX_OFFLINE_SECONDS: f64 = 2.0 * 60.0 * 60.0;

// Persistence
pub const SAVE_KEY: &str = "galactic-explorer-v1";
pub const SCHEMA_VERSION: &str = "1.1";
