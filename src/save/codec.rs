//! Versioned JSON save format.
//!
//! ## Versioning
//!
//! Every field defaults when absent, so older saves load into the current
//! layout. Bump `SCHEMA_VERSION` when adding fields; only a change to the
//! meaning of an existing field needs a migration.
//!
//! ## 1.1 changes
//! - generators are `{id, ownedCount}` (`qty` still accepted)
//! - challenge issue date is an ISO date
//! - `ownedModifierIds`, `unlockedAchievementIds`, `exploredSiteIds` replace
//!   the 1.0 `upgrades`, `achievements` and `explored` lists

use super::error::SaveError;
use crate::achievements::AchievementId;
use crate::catalog::{starting_generators, GeneratorId, SiteId};
use crate::challenges::{ChallengeTracker, DailyChallenge, ObjectiveKind};
use crate::core::constants::SCHEMA_VERSION;
use crate::core::game_state::{GameState, PlayerStats, PrestigeState};
use crate::core::offline::{offline_report, OfflineReport};
use crate::core::ProgressionEngine;
use crate::modifiers::ModifierId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// On-disk shape of a save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveRecord {
    pub currency: f64,
    pub generators: Vec<GeneratorRecord>,
    pub owned_modifier_ids: Vec<String>,
    /// 1.0 upgrade list, read for migration and never written.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub upgrades: Vec<LegacyUpgrade>,
    #[serde(alias = "achievements")]
    pub unlocked_achievement_ids: Vec<String>,
    #[serde(alias = "explored")]
    pub explored_site_ids: Vec<String>,
    pub prestige_level: u32,
    pub prestige_points: u64,
    pub stats: StatsRecord,
    pub daily_challenge: Option<ChallengeRecord>,
    pub challenge_progress: ProgressRecord,
    #[serde(alias = "version")]
    pub schema_version: String,
}

/// A 1.0 upgrade entry: either a bare id or the full upgrade object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyUpgrade {
    Id(String),
    Object { id: String },
}

impl LegacyUpgrade {
    pub fn id(&self) -> &str {
        match self {
            LegacyUpgrade::Id(id) | LegacyUpgrade::Object { id } => id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorRecord {
    pub id: String,
    #[serde(alias = "qty")]
    pub owned_count: u32,
}

/// Timestamps are optional so a save without them counts as "just now".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsRecord {
    pub total_clicks: u64,
    pub total_earned: f64,
    pub total_spent: f64,
    pub total_purchases: u64,
    #[serde(alias = "startTime")]
    pub epoch_start: Option<i64>,
    #[serde(alias = "lastSave")]
    pub last_save_time: Option<i64>,
    pub session_start: Option<i64>,
    pub session_earned: f64,
    pub session_clicks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeRecord {
    pub id: String,
    pub name: String,
    #[serde(alias = "type")]
    pub objective: String,
    pub target: f64,
    pub reward: f64,
    pub issue_date: String,
}

/// Progress counters keyed by objective (`clicks`, `earn`, `purchases`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub completed: bool,
    #[serde(flatten)]
    pub counters: BTreeMap<String, f64>,
}

/// A decoded save plus the offline earnings it is owed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGame {
    pub state: GameState,
    /// Pending credit, never applied automatically.
    pub offline: Option<OfflineReport>,
    pub schema_version: String,
    pub loaded_at: i64,
}

impl LoadedGame {
    pub fn into_engine(self) -> ProgressionEngine {
        ProgressionEngine::from_state(self.state, self.loaded_at).with_pending_offline(self.offline)
    }
}

impl SaveRecord {
    pub fn from_state(state: &GameState, saved_at_ms: i64) -> Self {
        let stats = &state.stats;
        Self {
            currency: state.currency,
            generators: state
                .generators
                .iter()
                .map(|g| GeneratorRecord {
                    id: g.id.key().to_string(),
                    owned_count: g.owned,
                })
                .collect(),
            owned_modifier_ids: state
                .owned_modifiers
                .iter()
                .map(|id| id.key().to_string())
                .collect(),
            upgrades: Vec::new(),
            unlocked_achievement_ids: state
                .achievements
                .iter()
                .map(|id| id.key().to_string())
                .collect(),
            explored_site_ids: state
                .explored_sites
                .iter()
                .map(|id| id.key().to_string())
                .collect(),
            prestige_level: state.prestige.level,
            prestige_points: state.prestige.points,
            stats: StatsRecord {
                total_clicks: stats.total_clicks,
                total_earned: stats.total_earned,
                total_spent: stats.total_spent,
                total_purchases: stats.total_purchases,
                epoch_start: Some(stats.epoch_start),
                last_save_time: Some(saved_at_ms),
                session_start: Some(stats.session_start),
                session_earned: stats.session_earned,
                session_clicks: stats.session_clicks,
            },
            daily_challenge: state.challenge.challenge.as_ref().map(|c| ChallengeRecord {
                id: c.id.clone(),
                name: c.name.clone(),
                objective: c.objective.key().to_string(),
                target: c.target,
                reward: c.reward,
                issue_date: c.issue_date.format("%Y-%m-%d").to_string(),
            }),
            challenge_progress: ProgressRecord {
                completed: state.challenge.completed,
                counters: state
                    .challenge
                    .progress
                    .iter()
                    .map(|(kind, amount)| (kind.key().to_string(), *amount))
                    .collect(),
            },
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    /// Rebuilds a game state. Session counters start fresh at `now_ms`.
    pub fn into_state(self, now_ms: i64) -> GameState {
        let mut generators = starting_generators();
        for record in &self.generators {
            match GeneratorId::from_key(&record.id) {
                Some(id) => {
                    if let Some(g) = generators.iter_mut().find(|g| g.id == id) {
                        g.owned = record.owned_count;
                    }
                }
                None => log::warn!("Dropping unknown generator '{}' from save", record.id),
            }
        }

        let mut stats = PlayerStats::new(now_ms);
        stats.total_clicks = self.stats.total_clicks;
        stats.total_earned = self.stats.total_earned;
        stats.total_spent = self.stats.total_spent;
        stats.total_purchases = self.stats.total_purchases;
        stats.epoch_start = self.stats.epoch_start.unwrap_or(now_ms);
        stats.last_save_time = self.stats.last_save_time.unwrap_or(now_ms);

        let modifier_keys: Vec<String> = self
            .owned_modifier_ids
            .iter()
            .cloned()
            .chain(self.upgrades.iter().map(|u| u.id().to_string()))
            .collect();

        GameState {
            currency: self.currency.max(0.0),
            generators,
            owned_modifiers: parse_ids(&modifier_keys, ModifierId::from_key, "upgrade"),
            explored_sites: parse_ids(&self.explored_site_ids, SiteId::from_key, "planet"),
            prestige: PrestigeState {
                level: self.prestige_level,
                points: self.prestige_points,
            },
            achievements: parse_ids(
                &self.unlocked_achievement_ids,
                AchievementId::from_key,
                "achievement",
            ),
            stats,
            challenge: restore_challenge(self.daily_challenge, self.challenge_progress),
        }
    }
}

fn parse_ids<T: Ord>(keys: &[String], parse: fn(&str) -> Option<T>, what: &str) -> BTreeSet<T> {
    keys.iter()
        .filter_map(|key| {
            let parsed = parse(key);
            if parsed.is_none() {
                log::warn!("Dropping unknown {} '{}' from save", what, key);
            }
            parsed
        })
        .collect()
}

fn restore_challenge(record: Option<ChallengeRecord>, progress: ProgressRecord) -> ChallengeTracker {
    let Some(record) = record else {
        return ChallengeTracker::new();
    };
    let objective = ObjectiveKind::from_key(&record.objective);
    let issue_date = NaiveDate::parse_from_str(&record.issue_date, "%Y-%m-%d").ok();
    let (Some(objective), Some(issue_date)) = (objective, issue_date) else {
        // A fresh challenge is issued once the engine starts.
        log::warn!("Discarding unreadable daily challenge '{}'", record.id);
        return ChallengeTracker::new();
    };

    ChallengeTracker {
        challenge: Some(DailyChallenge {
            id: record.id,
            name: record.name,
            objective,
            target: record.target,
            reward: record.reward,
            issue_date,
        }),
        progress: progress
            .counters
            .iter()
            .filter_map(|(key, amount)| ObjectiveKind::from_key(key).map(|kind| (kind, *amount)))
            .collect(),
        completed: progress.completed,
    }
}

/// Encodes `state` as pretty JSON, stamping `saved_at_ms` as the save time.
pub fn serialize(state: &GameState, saved_at_ms: i64) -> Result<Vec<u8>, SaveError> {
    let record = SaveRecord::from_state(state, saved_at_ms);
    Ok(serde_json::to_vec_pretty(&record)?)
}

/// Parses a blob without building a state. Used to vet imports.
pub fn parse_record(bytes: &[u8]) -> Result<SaveRecord, SaveError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decodes a save and works out the offline earnings owed as of `now_ms`.
pub fn deserialize(bytes: &[u8], now_ms: i64) -> Result<LoadedGame, SaveError> {
    let record = parse_record(bytes)?;
    let schema_version = record.schema_version.clone();
    let state = record.into_state(now_ms);
    let offline = offline_report(&state, now_ms);
    if let Some(report) = &offline {
        log::info!(
            "Offline for {} ms, {} energy waiting to be claimed",
            report.elapsed_ms,
            report.earnings
        );
    }
    Ok(LoadedGame {
        state,
        offline,
        schema_version,
        loaded_at: now_ms,
    })
}
