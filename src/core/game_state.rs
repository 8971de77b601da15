use crate::achievements::AchievementId;
use crate::catalog::{starting_generators, Generator, GeneratorId, SiteId};
use crate::challenges::ChallengeTracker;
use crate::modifiers::ModifierId;
use std::collections::BTreeSet;

/// Lifetime and session counters. Timestamps are Unix milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub total_clicks: u64,
    pub total_earned: f64,
    pub total_spent: f64,
    pub total_purchases: u64,
    pub epoch_start: i64,
    pub last_save_time: i64,
    /// Session-scoped: reset on every load.
    pub session_start: i64,
    pub session_earned: f64,
    pub session_clicks: u64,
}

impl PlayerStats {
    pub fn new(current_time: i64) -> Self {
        Self {
            total_clicks: 0,
            total_earned: 0.0,
            total_spent: 0.0,
            total_purchases: 0,
            epoch_start: current_time,
            last_save_time: current_time,
            session_start: current_time,
            session_earned: 0.0,
            session_clicks: 0,
        }
    }

    /// Starts a fresh session at `current_time`.
    pub fn begin_session(&mut self, current_time: i64) {
        self.session_start = current_time;
        self.session_earned = 0.0;
        self.session_clicks = 0;
    }

    /// Books `amount` as earned for both lifetime and session totals.
    pub fn record_earned(&mut self, amount: f64) {
        self.total_earned += amount;
        self.session_earned += amount;
    }

    pub fn record_clicks(&mut self, clicks: u64) {
        self.total_clicks += clicks;
        self.session_clicks += clicks;
    }
}

/// Prestige rank and the meta-currency earned by resetting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrestigeState {
    pub level: u32,
    pub points: u64,
}

/// Main game state containing all player progress
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub currency: f64,
    /// One entry per catalog generator, in catalog order.
    pub generators: Vec<Generator>,
    pub owned_modifiers: BTreeSet<ModifierId>,
    pub explored_sites: BTreeSet<SiteId>,
    pub prestige: PrestigeState,
    /// Append-only; survives prestige.
    pub achievements: BTreeSet<AchievementId>,
    pub stats: PlayerStats,
    pub challenge: ChallengeTracker,
}

impl GameState {
    /// Creates a new game state with default values
    pub fn new(current_time: i64) -> Self {
        Self {
            currency: 0.0,
            generators: starting_generators(),
            owned_modifiers: BTreeSet::new(),
            explored_sites: BTreeSet::new(),
            prestige: PrestigeState::default(),
            achievements: BTreeSet::new(),
            stats: PlayerStats::new(current_time),
            challenge: ChallengeTracker::new(),
        }
    }

    pub fn generator(&self, id: GeneratorId) -> Option<&Generator> {
        self.generators.iter().find(|g| g.id == id)
    }

    pub fn generator_mut(&mut self, id: GeneratorId) -> Option<&mut Generator> {
        self.generators.iter_mut().find(|g| g.id == id)
    }

    pub fn owned_count(&self, id: GeneratorId) -> u32 {
        self.generator(id).map(|g| g.owned).unwrap_or(0)
    }

    /// Energy per second under the current state.
    pub fn rate(&self) -> f64 {
        super::production::compute_rate(
            &self.generators,
            &self.owned_modifiers,
            &self.explored_sites,
            self.prestige.level,
        )
    }

    pub fn click_power(&self) -> f64 {
        super::production::compute_click_power(&self.owned_modifiers, self.prestige.level)
    }
}
