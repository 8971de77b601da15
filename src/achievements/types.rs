//! Achievement system types and data structures.

use crate::catalog::Generator;
use crate::core::game_state::PlayerStats;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AchievementId {
    // Clicking
    FirstSpark,
    ClickingNovice,
    ClickMaster,
    // Banked energy
    FuelForLaunch,
    EnergyTycoon,
    MillionaireExplorer,
    // Production rate
    EnginesOnline,
    PowerGrid,
    StellarNetwork,
    // Generator counts
    FleetCommander,
    IndustrialScale,
    // Lifetime
    LifetimeAchiever,
    DedicatedExplorer,
    // Exploration
    GalacticCartographer,
}

impl AchievementId {
    pub const ALL: [AchievementId; 14] = [
        AchievementId::FirstSpark,
        AchievementId::ClickingNovice,
        AchievementId::ClickMaster,
        AchievementId::FuelForLaunch,
        AchievementId::EnergyTycoon,
        AchievementId::MillionaireExplorer,
        AchievementId::EnginesOnline,
        AchievementId::PowerGrid,
        AchievementId::StellarNetwork,
        AchievementId::FleetCommander,
        AchievementId::IndustrialScale,
        AchievementId::LifetimeAchiever,
        AchievementId::DedicatedExplorer,
        AchievementId::GalacticCartographer,
    ];

    /// Stable key used in save files.
    pub fn key(&self) -> &'static str {
        match self {
            AchievementId::FirstSpark => "a_first_click",
            AchievementId::ClickingNovice => "a_100_clicks",
            AchievementId::ClickMaster => "a_1k_clicks",
            AchievementId::FuelForLaunch => "a_1k",
            AchievementId::EnergyTycoon => "a_100k",
            AchievementId::MillionaireExplorer => "a_1m",
            AchievementId::EnginesOnline => "a_cps_50",
            AchievementId::PowerGrid => "a_cps_1k",
            AchievementId::StellarNetwork => "a_cps_100k",
            AchievementId::FleetCommander => "a_gen10",
            AchievementId::IndustrialScale => "a_gen100",
            AchievementId::LifetimeAchiever => "a_total_1m",
            AchievementId::DedicatedExplorer => "a_playtime_1h",
            AchievementId::GalacticCartographer => "a_all_planets",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.key() == key)
    }
}

/// Predicate an achievement unlocks on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    TotalClicksAtLeast(u64),
    CurrencyAtLeast(f64),
    RateAtLeast(f64),
    AnyGeneratorOwnedAtLeast(u32),
    TotalEarnedAtLeast(f64),
    /// Milliseconds since the save was first created.
    PlayTimeAtLeast(i64),
    SitesExploredAtLeast(usize),
}

impl Condition {
    pub fn is_met(&self, snapshot: &AchievementSnapshot<'_>) -> bool {
        match *self {
            Condition::TotalClicksAtLeast(n) => snapshot.stats.total_clicks >= n,
            Condition::CurrencyAtLeast(n) => snapshot.currency >= n,
            Condition::RateAtLeast(n) => snapshot.rate >= n,
            Condition::AnyGeneratorOwnedAtLeast(n) => {
                snapshot.generators.iter().any(|g| g.owned >= n)
            }
            Condition::TotalEarnedAtLeast(n) => snapshot.stats.total_earned >= n,
            Condition::PlayTimeAtLeast(ms) => {
                snapshot.now_ms.saturating_sub(snapshot.stats.epoch_start) >= ms
            }
            Condition::SitesExploredAtLeast(n) => snapshot.explored_count >= n,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub condition: Condition,
    pub reward: f64,
}

/// Read-only view of the state achievements are judged against.
#[derive(Debug, Clone, Copy)]
pub struct AchievementSnapshot<'a> {
    pub currency: f64,
    pub stats: &'a PlayerStats,
    pub generators: &'a [Generator],
    pub rate: f64,
    pub explored_count: usize,
    pub now_ms: i64,
}

/// A newly unlocked achievement and the energy it pays out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unlock {
    pub id: AchievementId,
    pub reward: f64,
}
