//! The progression engine: sole owner and mutator of [`GameState`].
//!
//! Every mutating operation validates first and mutates second, so a failed
//! call leaves the state exactly as it was. Anything the presentation layer
//! may want to react to is queued as a [`GameEvent`].

use super::cost_curve::CostCurve;
use super::game_state::GameState;
use super::offline::OfflineReport;
use super::prestige::{can_prestige, perform_prestige, prestige_threshold};
use super::production::{click_power_with_effects, rate_with_effects};
use crate::achievements::{evaluate, AchievementId, AchievementSnapshot, Unlock};
use crate::catalog::{GeneratorId, SiteId};
use crate::challenges::ObjectiveKind;
use crate::modifiers::{ModifierId, ModifierRegistry};
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Why an engine operation was declined. The state is untouched in every case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("insufficient funds: need {cost}, have {available}")]
    InsufficientFunds { cost: f64, available: f64 },
    #[error("already owned")]
    AlreadyOwned,
    #[error("prestige requires {required} total earned, have {total_earned}")]
    PrestigeNotEligible { total_earned: f64, required: f64 },
    #[error("purchase quantity must be at least 1")]
    InvalidQuantity,
    #[error("generator {0:?} is not part of this game")]
    GeneratorUnavailable(GeneratorId),
}

/// Something worth telling the player about.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    AchievementUnlocked { id: AchievementId, reward: f64 },
    ChallengeCompleted { reward: f64 },
    ChallengeIssued { id: String },
    PrestigeCompleted { points_gained: u64 },
    GeneratorPurchased { id: GeneratorId, quantity: u32 },
    UpgradePurchased { id: ModifierId },
    PlanetExplored { id: SiteId },
    OfflineProgressClaimed { earnings: f64 },
}

/// Receives engine events. Implementations must not block.
pub trait NotificationSink {
    fn notify(&mut self, event: &GameEvent);
}

impl NotificationSink for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Result of one engine tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Passive production credited this tick
    pub passive_earned: f64,
    /// Energy credited by auto-clickers this tick
    pub auto_click_earned: f64,
    /// Number of automated clicks performed
    pub auto_clicks: u32,
    /// Achievements unlocked this tick
    pub unlocked: Vec<Unlock>,
    /// Reward paid if the daily challenge completed this tick
    pub challenge_reward: Option<f64>,
    /// A new daily challenge was issued this tick
    pub challenge_issued: bool,
}

#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    state: GameState,
    now_ms: i64,
    curve: CostCurve,
    modifiers: ModifierRegistry,
    pending_offline: Option<OfflineReport>,
    events: Vec<GameEvent>,
}

impl ProgressionEngine {
    /// Starts a brand new game at `now_ms`.
    pub fn new(now_ms: i64) -> Self {
        Self::from_state(GameState::new(now_ms), now_ms)
    }

    /// Wraps a loaded state. The daily challenge is rotated if it is stale.
    pub fn from_state(state: GameState, now_ms: i64) -> Self {
        let mut engine = Self {
            state,
            now_ms,
            curve: CostCurve::default(),
            modifiers: ModifierRegistry::standard(),
            pending_offline: None,
            events: Vec::new(),
        };
        engine.rotate_challenge();
        engine
    }

    /// Uses a different cost curve for generator purchases.
    pub fn with_cost_curve(mut self, curve: CostCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Offers `report` to the player as a pending, unclaimed credit.
    pub fn with_pending_offline(mut self, report: Option<OfflineReport>) -> Self {
        self.pending_offline = report;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the engine, returning its state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    pub fn cost_curve(&self) -> &CostCurve {
        &self.curve
    }

    pub fn modifier_registry(&self) -> &ModifierRegistry {
        &self.modifiers
    }

    pub fn rate(&self) -> f64 {
        let effects = self.modifiers.effects(&self.state.owned_modifiers);
        rate_with_effects(
            &self.state.generators,
            &effects,
            &self.state.explored_sites,
            self.state.prestige.level,
        )
    }

    pub fn click_power(&self) -> f64 {
        let effects = self.modifiers.effects(&self.state.owned_modifiers);
        click_power_with_effects(&effects, self.state.prestige.level)
    }

    /// Price of the next `quantity` units of `id`.
    pub fn generator_cost(&self, id: GeneratorId, quantity: u32) -> f64 {
        let quantity = quantity.max(1);
        match self.state.generator(id) {
            Some(generator) => generator.cost_for(&self.curve, quantity),
            None => self.curve.batch_cost(id.def().base_cost, 0, quantity),
        }
    }

    /// Advances the logical clock by `elapsed_ms` and runs one round of
    /// production, automation, achievement and challenge evaluation.
    pub fn tick(&mut self, elapsed_ms: u64) -> TickResult {
        let mut result = TickResult::default();
        self.now_ms += elapsed_ms as i64;
        result.challenge_issued = self.rotate_challenge();

        let effects = self.modifiers.effects(&self.state.owned_modifiers);
        let level = self.state.prestige.level;

        let rate = rate_with_effects(
            &self.state.generators,
            &effects,
            &self.state.explored_sites,
            level,
        );
        let gained = rate * elapsed_ms as f64 / 1000.0;
        if gained > 0.0 {
            self.credit(gained);
            self.state.challenge.record_delta(ObjectiveKind::Earn, gained);
            result.passive_earned = gained;
        }

        // Automation is booked separately from passive production.
        if effects.auto_clicks > 0 {
            let clicks = effects.auto_clicks;
            let earned = clicks as f64 * click_power_with_effects(&effects, level);
            self.credit(earned);
            self.state.stats.record_clicks(clicks as u64);
            self.state
                .challenge
                .record_delta(ObjectiveKind::Clicks, clicks as f64);
            self.state.challenge.record_delta(ObjectiveKind::Earn, earned);
            result.auto_clicks = clicks;
            result.auto_click_earned = earned;
        }

        let unlocked = {
            let snapshot = AchievementSnapshot {
                currency: self.state.currency,
                stats: &self.state.stats,
                generators: &self.state.generators,
                rate,
                explored_count: self.state.explored_sites.len(),
                now_ms: self.now_ms,
            };
            evaluate(&snapshot, &self.state.achievements)
        };
        for unlock in &unlocked {
            self.state.currency += unlock.reward;
            self.state.achievements.insert(unlock.id);
            log::debug!("Achievement unlocked: {}", unlock.id.key());
            self.events.push(GameEvent::AchievementUnlocked {
                id: unlock.id,
                reward: unlock.reward,
            });
        }
        result.unlocked = unlocked;

        if let Some(reward) = self.state.challenge.check_completion() {
            self.state.currency += reward;
            log::info!("Daily challenge completed, reward {}", reward);
            self.events.push(GameEvent::ChallengeCompleted { reward });
            result.challenge_reward = Some(reward);
        }

        result
    }

    /// A manual click. Returns the energy it produced.
    ///
    /// Achievements are checked on the next tick, not here.
    pub fn click(&mut self) -> f64 {
        let power = self.click_power();
        self.credit(power);
        self.state.stats.record_clicks(1);
        self.state.challenge.record_delta(ObjectiveKind::Clicks, 1.0);
        self.state.challenge.record_delta(ObjectiveKind::Earn, power);
        power
    }

    /// Buys `quantity` units of a generator at the current batch price.
    ///
    /// # Returns
    /// The amount spent
    pub fn purchase_generator(&mut self, id: GeneratorId, quantity: u32) -> Result<f64, EngineError> {
        if quantity == 0 {
            return Err(EngineError::InvalidQuantity);
        }
        let Some(generator) = self.state.generator(id) else {
            return Err(EngineError::GeneratorUnavailable(id));
        };
        let cost = generator.cost_for(&self.curve, quantity);
        self.ensure_affordable(cost)?;

        if let Some(generator) = self.state.generator_mut(id) {
            generator.owned += quantity;
        }
        self.state.currency -= cost;
        self.state.stats.total_spent += cost;
        self.state.stats.total_purchases += quantity as u64;
        self.state
            .challenge
            .record_delta(ObjectiveKind::Purchases, quantity as f64);

        log::debug!("Bought {} x {} for {}", quantity, id.key(), cost);
        self.events
            .push(GameEvent::GeneratorPurchased { id, quantity });
        Ok(cost)
    }

    /// Buys a one-time modifier.
    pub fn purchase_modifier(&mut self, id: ModifierId) -> Result<f64, EngineError> {
        if self.state.owned_modifiers.contains(&id) {
            return Err(EngineError::AlreadyOwned);
        }
        let cost = self
            .modifiers
            .get(id)
            .map(|def| def.cost)
            .unwrap_or(f64::INFINITY);
        self.ensure_affordable(cost)?;

        self.state.currency -= cost;
        self.state.stats.total_spent += cost;
        self.state.owned_modifiers.insert(id);

        log::debug!("Bought upgrade {} for {}", id.key(), cost);
        self.events.push(GameEvent::UpgradePurchased { id });
        Ok(cost)
    }

    /// Explores a site, adding its bonus for the rest of this prestige run.
    pub fn explore_site(&mut self, id: SiteId) -> Result<f64, EngineError> {
        if self.state.explored_sites.contains(&id) {
            return Err(EngineError::AlreadyOwned);
        }
        let cost = id.def().cost;
        self.ensure_affordable(cost)?;

        self.state.currency -= cost;
        self.state.stats.total_spent += cost;
        self.state.explored_sites.insert(id);

        log::debug!("Explored {} for {}", id.key(), cost);
        self.events.push(GameEvent::PlanetExplored { id });
        Ok(cost)
    }

    pub fn can_prestige(&self) -> bool {
        can_prestige(&self.state)
    }

    /// Resets the run for a permanent bonus. Returns the points gained.
    pub fn prestige(&mut self) -> Result<u64, EngineError> {
        if !self.can_prestige() {
            return Err(EngineError::PrestigeNotEligible {
                total_earned: self.state.stats.total_earned,
                required: prestige_threshold(self.state.prestige.level),
            });
        }
        let points_gained = perform_prestige(&mut self.state, self.now_ms);
        log::info!(
            "Prestiged to level {} (+{} points)",
            self.state.prestige.level,
            points_gained
        );
        self.events
            .push(GameEvent::PrestigeCompleted { points_gained });
        Ok(points_gained)
    }

    pub fn pending_offline(&self) -> Option<&OfflineReport> {
        self.pending_offline.as_ref()
    }

    /// Credits the pending offline earnings. Returns what was credited.
    pub fn claim_offline_progress(&mut self) -> Option<f64> {
        let report = self.pending_offline.take()?;
        self.state.currency += report.earnings;
        self.state.stats.total_earned += report.earnings;
        self.events.push(GameEvent::OfflineProgressClaimed {
            earnings: report.earnings,
        });
        Some(report.earnings)
    }

    /// Drops the pending offline earnings without crediting them.
    pub fn dismiss_offline_progress(&mut self) {
        self.pending_offline = None;
    }

    /// Hands every queued event to `sink` in order and clears the queue.
    pub fn publish_events<N: NotificationSink>(&mut self, sink: &mut N) {
        for event in self.events.drain(..) {
            sink.notify(&event);
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// UTC calendar day of the engine clock.
    pub fn today(&self) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp_millis(self.now_ms).map(|dt| dt.date_naive())
    }

    fn credit(&mut self, amount: f64) {
        self.state.currency += amount;
        self.state.stats.record_earned(amount);
    }

    fn ensure_affordable(&self, cost: f64) -> Result<(), EngineError> {
        if self.state.currency < cost {
            return Err(EngineError::InsufficientFunds {
                cost,
                available: self.state.currency,
            });
        }
        Ok(())
    }

    fn rotate_challenge(&mut self) -> bool {
        let Some(today) = self.today() else {
            return false;
        };
        let Some(issued) = self.state.challenge.refresh(today).map(|c| c.id.clone()) else {
            return false;
        };
        log::info!("Daily challenge for {}: {}", today, issued);
        self.events.push(GameEvent::ChallengeIssued { id: issued });
        true
    }
}
