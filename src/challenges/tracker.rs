//! Progress tracking for the current daily challenge.

use super::data::ALL_CHALLENGES;
use super::types::{ChallengeDef, DailyChallenge, ObjectiveKind};
use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Picks the challenge for `date`.
///
/// The RNG is seeded from a SHA-256 of the ISO date, so re-deriving the
/// challenge for the same day (e.g. after a crash before the save landed)
/// always gives the same answer. Returns `None` for an empty catalog.
pub fn pick_challenge(date: NaiveDate, catalog: &[ChallengeDef]) -> Option<DailyChallenge> {
    if catalog.is_empty() {
        return None;
    }
    let mut rng = ChaCha8Rng::seed_from_u64(date_seed(date));
    let index = rng.gen_range(0..catalog.len());
    Some(DailyChallenge::from_def(&catalog[index], date))
}

fn date_seed(date: NaiveDate) -> u64 {
    let digest = Sha256::digest(date.format("%Y-%m-%d").to_string().as_bytes());
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed)
}

/// The active challenge, its progress counters and whether it has paid out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeTracker {
    pub challenge: Option<DailyChallenge>,
    pub progress: BTreeMap<ObjectiveKind, f64>,
    pub completed: bool,
}

impl ChallengeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current challenge and clears all progress.
    pub fn issue(&mut self, challenge: DailyChallenge) {
        self.challenge = Some(challenge);
        self.progress.clear();
        self.completed = false;
    }

    /// Issues the challenge for `today` if the stored one is from another
    /// day (or there is none). Returns the newly issued challenge.
    pub fn refresh(&mut self, today: NaiveDate) -> Option<&DailyChallenge> {
        let current = self.challenge.as_ref().map(|c| c.issue_date);
        if current == Some(today) {
            return None;
        }
        let challenge = pick_challenge(today, ALL_CHALLENGES)?;
        self.issue(challenge);
        self.challenge.as_ref()
    }

    /// Adds `amount` to the counter for `kind` if that is what the active
    /// challenge measures. Anything else is dropped.
    pub fn record_delta(&mut self, kind: ObjectiveKind, amount: f64) {
        let Some(challenge) = &self.challenge else {
            return;
        };
        if challenge.objective != kind {
            return;
        }
        *self.progress.entry(kind).or_insert(0.0) += amount;
    }

    /// Returns the reward the first time the target is reached; `None` on
    /// every later call for the same challenge.
    pub fn check_completion(&mut self) -> Option<f64> {
        if self.completed {
            return None;
        }
        let challenge = self.challenge.as_ref()?;
        if self.progress_of(challenge.objective) >= challenge.target {
            self.completed = true;
            return Some(challenge.reward);
        }
        None
    }

    pub fn progress_of(&self, kind: ObjectiveKind) -> f64 {
        self.progress.get(&kind).copied().unwrap_or(0.0)
    }

    /// Fraction of the target reached, clamped to `[0, 1]`.
    pub fn completion_ratio(&self) -> f64 {
        match &self.challenge {
            Some(c) if c.target > 0.0 => (self.progress_of(c.objective) / c.target).min(1.0),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn click_challenge(issue_date: NaiveDate) -> DailyChallenge {
        DailyChallenge {
            id: "click_challenge".to_string(),
            name: "Click Master".to_string(),
            objective: ObjectiveKind::Clicks,
            target: 500.0,
            reward: 50_000.0,
            issue_date,
        }
    }

    #[test]
    fn test_pick_challenge_is_deterministic_per_date() {
        let day = date(2026, 10, 19);
        let first = pick_challenge(day, ALL_CHALLENGES).unwrap();
        for _ in 0..10 {
            assert_eq!(pick_challenge(day, ALL_CHALLENGES).unwrap(), first);
        }
        assert_eq!(first.issue_date, day);
    }

    #[test]
    fn test_pick_challenge_covers_catalog() {
        let start = date(2026, 1, 1);
        let mut seen = std::collections::HashSet::new();
        for offset in 0..365 {
            let day = start + chrono::Duration::days(offset);
            seen.insert(pick_challenge(day, ALL_CHALLENGES).unwrap().id);
        }
        assert_eq!(seen.len(), ALL_CHALLENGES.len());
    }

    #[test]
    fn test_pick_challenge_empty_catalog() {
        assert!(pick_challenge(date(2026, 1, 1), &[]).is_none());
    }

    #[test]
    fn test_challenge_fires_exactly_once() {
        let mut tracker = ChallengeTracker::new();
        tracker.issue(click_challenge(date(2026, 10, 19)));

        for _ in 0..499 {
            tracker.record_delta(ObjectiveKind::Clicks, 1.0);
            assert_eq!(tracker.check_completion(), None);
        }
        tracker.record_delta(ObjectiveKind::Clicks, 1.0);
        assert_eq!(tracker.check_completion(), Some(50_000.0));

        tracker.record_delta(ObjectiveKind::Clicks, 100.0);
        assert_eq!(tracker.check_completion(), None);
        assert!(tracker.completed);
    }

    #[test]
    fn test_other_kinds_are_dropped() {
        let mut tracker = ChallengeTracker::new();
        tracker.issue(click_challenge(date(2026, 10, 19)));
        tracker.record_delta(ObjectiveKind::Earn, 1_000_000.0);
        tracker.record_delta(ObjectiveKind::Purchases, 50.0);
        assert_eq!(tracker.progress_of(ObjectiveKind::Earn), 0.0);
        assert_eq!(tracker.progress_of(ObjectiveKind::Purchases), 0.0);
        assert!(tracker.progress.is_empty());
    }

    #[test]
    fn test_no_challenge_records_nothing() {
        let mut tracker = ChallengeTracker::new();
        tracker.record_delta(ObjectiveKind::Clicks, 5.0);
        assert!(tracker.progress.is_empty());
        assert_eq!(tracker.check_completion(), None);
    }

    #[test]
    fn test_refresh_same_day_keeps_progress() {
        let day = date(2026, 10, 19);
        let mut tracker = ChallengeTracker::new();
        tracker.issue(click_challenge(day));
        tracker.record_delta(ObjectiveKind::Clicks, 42.0);

        assert!(tracker.refresh(day).is_none());
        assert_eq!(tracker.progress_of(ObjectiveKind::Clicks), 42.0);
    }

    #[test]
    fn test_refresh_new_day_clears_progress_and_flag() {
        let mut tracker = ChallengeTracker::new();
        tracker.issue(click_challenge(date(2026, 10, 18)));
        tracker.record_delta(ObjectiveKind::Clicks, 500.0);
        assert!(tracker.check_completion().is_some());

        let today = date(2026, 10, 19);
        let issued = tracker.refresh(today).cloned().expect("new challenge issued");
        assert_eq!(issued.issue_date, today);
        assert!(!tracker.completed);
        assert!(tracker.progress.is_empty());
    }

    #[test]
    fn test_completion_ratio() {
        let mut tracker = ChallengeTracker::new();
        assert_eq!(tracker.completion_ratio(), 0.0);
        tracker.issue(click_challenge(date(2026, 10, 19)));
        tracker.record_delta(ObjectiveKind::Clicks, 250.0);
        assert!((tracker.completion_ratio() - 0.5).abs() < 1e-12);
        tracker.record_delta(ObjectiveKind::Clicks, 1_000.0);
        assert_eq!(tracker.completion_ratio(), 1.0);
    }
}
