//! Offline progression system.
//!
//! Estimates the energy a save would have produced while nobody was playing.
//! The estimate is reported, never credited automatically; the player claims
//! or dismisses it.

use super::constants::{MAX_OFFLINE_SECONDS, OFFLINE_MIN_MS};
use super::game_state::GameState;

/// Energy earned while away and the gap it covers.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OfflineReport {
    pub elapsed_ms: i64,
    pub earnings: f64,
    /// Rate the estimate was computed with.
    pub rate: f64,
    /// True when the gap exceeded the cap and earnings were clipped.
    pub capped: bool,
}

/// Energy produced at `rate` per second over `elapsed_ms`, capped at
/// [`MAX_OFFLINE_SECONDS`] worth of production.
///
/// Gaps of [`OFFLINE_MIN_MS`] or less produce nothing.
pub fn calculate_offline_earnings(rate: f64, elapsed_ms: i64) -> f64 {
    if elapsed_ms <= OFFLINE_MIN_MS {
        return 0.0;
    }
    let uncapped = rate * elapsed_ms as f64 / 1000.0;
    uncapped.min(rate * MAX_OFFLINE_SECONDS)
}

/// Builds the offline report for `state` as of `now_ms`, using the state's
/// `last_save_time`. Returns `None` when there is nothing to claim.
pub fn offline_report(state: &GameState, now_ms: i64) -> Option<OfflineReport> {
    let elapsed_ms = now_ms.saturating_sub(state.stats.last_save_time);
    let rate = state.rate();
    let earnings = calculate_offline_earnings(rate, elapsed_ms);
    if earnings <= 0.0 {
        return None;
    }
    Some(OfflineReport {
        elapsed_ms,
        earnings,
        rate,
        capped: elapsed_ms as f64 / 1000.0 > MAX_OFFLINE_SECONDS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GeneratorId;

    #[test]
    fn test_short_gap_earns_nothing() {
        assert_eq!(calculate_offline_earnings(10.0, 0), 0.0);
        assert_eq!(calculate_offline_earnings(10.0, 60_000), 0.0);
        assert_eq!(calculate_offline_earnings(10.0, -5_000), 0.0);
    }

    #[test]
    fn test_linear_below_cap() {
        let earned = calculate_offline_earnings(2.0, 120_000);
        assert!((earned - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_capped_at_two_hours() {
        let three_hours = 3 * 60 * 60 * 1000;
        let earned = calculate_offline_earnings(10.0, three_hours);
        assert!((earned - 72_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_ancient_save_time_saturates() {
        let mut state = GameState::new(0);
        state.generator_mut(GeneratorId::Solar).unwrap().owned = 1;
        state.stats.last_save_time = i64::MIN;
        let report = offline_report(&state, 1_000).unwrap();
        assert_eq!(report.elapsed_ms, i64::MAX);
        assert!(report.capped);
    }

    #[test]
    fn test_zero_rate_yields_no_report() {
        let state = GameState::new(0);
        assert!(offline_report(&state, 10 * 60 * 1000).is_none());
    }

    #[test]
    fn test_report_uses_last_save_time() {
        let mut state = GameState::new(1_000);
        state.generator_mut(GeneratorId::Satellite).unwrap().owned = 1;
        let report = offline_report(&state, 1_000 + 600_000).unwrap();
        assert_eq!(report.elapsed_ms, 600_000);
        assert!((report.earnings - 600.0).abs() < 1e-9);
        assert!(!report.capped);
    }

    #[test]
    fn test_report_flags_capped_gap() {
        let mut state = GameState::new(0);
        state.generator_mut(GeneratorId::Satellite).unwrap().owned = 1;
        let report = offline_report(&state, 10 * 60 * 60 * 1000).unwrap();
        assert!(report.capped);
        assert!((report.earnings - 7_200.0).abs() < 1e-9);
    }
}
