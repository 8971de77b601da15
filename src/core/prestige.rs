use super::constants::{PRESTIGE_POINTS_DIVISOR, PRESTIGE_THRESHOLDS};
use super::game_state::GameState;
use crate::catalog::starting_generators;

/// Lifetime earnings needed to prestige out of `level`.
///
/// Levels past the end of the threshold table keep using the last entry.
pub fn prestige_threshold(level: u32) -> f64 {
    let last = PRESTIGE_THRESHOLDS.len() - 1;
    PRESTIGE_THRESHOLDS[(level as usize).min(last)]
}

/// Checks if the player can prestige
///
/// # Arguments
/// * `state` - The current game state
///
/// # Returns
/// true if total earnings this run meet the threshold for the current level
pub fn can_prestige(state: &GameState) -> bool {
    state.stats.total_earned >= prestige_threshold(state.prestige.level)
}

/// Prestige points awarded for a run that earned `total_earned`.
///
/// `floor(sqrt(total_earned / 1e6))`: 1M gives 1, 4M gives 2, 100M gives 10.
pub fn prestige_points_for(total_earned: f64) -> u64 {
    if total_earned <= 0.0 {
        return 0;
    }
    (total_earned / PRESTIGE_POINTS_DIVISOR).sqrt().floor() as u64
}

/// Performs a prestige, wiping the run and bumping the prestige level.
///
/// The caller must have checked [`can_prestige`]. Achievements, lifetime
/// clicks, the save epoch and the daily challenge carry over.
///
/// # Returns
/// Points gained by this prestige
pub fn perform_prestige(state: &mut GameState, now_ms: i64) -> u64 {
    let gained = prestige_points_for(state.stats.total_earned);

    state.currency = 0.0;
    state.generators = starting_generators();
    state.owned_modifiers.clear();
    state.explored_sites.clear();

    state.stats.total_earned = 0.0;
    state.stats.total_spent = 0.0;
    state.stats.total_purchases = 0;
    state.stats.begin_session(now_ms);

    state.prestige.level += 1;
    state.prestige.points += gained;

    gained
}
