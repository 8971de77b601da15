use super::types::{ChallengeDef, ObjectiveKind};

/// Objectives the daily rotation picks from.
pub const ALL_CHALLENGES: &[ChallengeDef] = &[
    ChallengeDef {
        id: "click_challenge",
        name: "Click Master",
        description: "Click 500 times",
        objective: ObjectiveKind::Clicks,
        target: 500.0,
        reward: 50_000.0,
    },
    ChallengeDef {
        id: "earn_challenge",
        name: "Energy Harvester",
        description: "Earn 100K energy",
        objective: ObjectiveKind::Earn,
        target: 100_000.0,
        reward: 100_000.0,
    },
    ChallengeDef {
        id: "buy_challenge",
        name: "Shopping Spree",
        description: "Buy 20 generators",
        objective: ObjectiveKind::Purchases,
        target: 20.0,
        reward: 75_000.0,
    },
];
