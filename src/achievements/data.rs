//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId, Condition};

const ONE_HOUR_MS: i64 = 60 * 60 * 1000;

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstSpark,
        name: "First Spark",
        description: "Click for the first time",
        condition: Condition::TotalClicksAtLeast(1),
        reward: 10.0,
    },
    AchievementDef {
        id: AchievementId::ClickingNovice,
        name: "Clicking Novice",
        description: "Click 100 times",
        condition: Condition::TotalClicksAtLeast(100),
        reward: 100.0,
    },
    AchievementDef {
        id: AchievementId::ClickMaster,
        name: "Click Master",
        description: "Click 1,000 times",
        condition: Condition::TotalClicksAtLeast(1_000),
        reward: 1_000.0,
    },
    AchievementDef {
        id: AchievementId::FuelForLaunch,
        name: "Fuel for Launch",
        description: "Accumulate 1,000 energy",
        condition: Condition::CurrencyAtLeast(1_000.0),
        reward: 100.0,
    },
    AchievementDef {
        id: AchievementId::EnergyTycoon,
        name: "Energy Tycoon",
        description: "Accumulate 100,000 energy",
        condition: Condition::CurrencyAtLeast(100_000.0),
        reward: 10_000.0,
    },
    AchievementDef {
        id: AchievementId::MillionaireExplorer,
        name: "Millionaire Explorer",
        description: "Accumulate 1,000,000 energy",
        condition: Condition::CurrencyAtLeast(1_000_000.0),
        reward: 100_000.0,
    },
    AchievementDef {
        id: AchievementId::EnginesOnline,
        name: "Engines Online",
        description: "Reach 50 energy per second",
        condition: Condition::RateAtLeast(50.0),
        reward: 500.0,
    },
    AchievementDef {
        id: AchievementId::PowerGrid,
        name: "Power Grid",
        description: "Reach 1,000 energy per second",
        condition: Condition::RateAtLeast(1_000.0),
        reward: 5_000.0,
    },
    AchievementDef {
        id: AchievementId::StellarNetwork,
        name: "Stellar Network",
        description: "Reach 100,000 energy per second",
        condition: Condition::RateAtLeast(100_000.0),
        reward: 500_000.0,
    },
    AchievementDef {
        id: AchievementId::FleetCommander,
        name: "Fleet Commander",
        description: "Own 10 of any generator",
        condition: Condition::AnyGeneratorOwnedAtLeast(10),
        reward: 1_000.0,
    },
    AchievementDef {
        id: AchievementId::IndustrialScale,
        name: "Industrial Scale",
        description: "Own 100 of any generator",
        condition: Condition::AnyGeneratorOwnedAtLeast(100),
        reward: 50_000.0,
    },
    AchievementDef {
        id: AchievementId::LifetimeAchiever,
        name: "Lifetime Achiever",
        description: "Earn 1M energy total",
        condition: Condition::TotalEarnedAtLeast(1_000_000.0),
        reward: 100_000.0,
    },
    AchievementDef {
        id: AchievementId::DedicatedExplorer,
        name: "Dedicated Explorer",
        description: "Play for 1 hour",
        condition: Condition::PlayTimeAtLeast(ONE_HOUR_MS),
        reward: 10_000.0,
    },
    AchievementDef {
        id: AchievementId::GalacticCartographer,
        name: "Galactic Cartographer",
        description: "Explore all planets",
        condition: Condition::SitesExploredAtLeast(5),
        reward: 1_000_000.0,
    },
];

/// Get the definition for an achievement.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}
