//! Static modifier definitions, in shop order.

use super::types::{ModifierDef, ModifierId, ModifierKind};
use crate::catalog::GeneratorId;

pub const ALL_MODIFIERS: &[ModifierDef] = &[
    ModifierDef {
        id: ModifierId::EnhancedClickers,
        name: "Enhanced Clickers",
        effect: "2x click power",
        cost: 500.0,
        kind: ModifierKind::ClickMultiplier { magnitude: 2.0 },
    },
    ModifierDef {
        id: ModifierId::SolarEfficiency,
        name: "Solar Efficiency",
        effect: "2x Solar Panel production",
        cost: 1_000.0,
        kind: ModifierKind::GeneratorMultiplier {
            target: GeneratorId::Solar,
            magnitude: 2.0,
        },
    },
    ModifierDef {
        id: ModifierId::QuantumFingers,
        name: "Quantum Fingers",
        effect: "5x click power",
        cost: 5_000.0,
        kind: ModifierKind::ClickMultiplier { magnitude: 5.0 },
    },
    ModifierDef {
        id: ModifierId::EnergyCrystals,
        name: "Energy Crystals",
        effect: "+15% all production",
        cost: 25_000.0,
        kind: ModifierKind::GlobalMultiplier { magnitude: 1.15 },
    },
    ModifierDef {
        id: ModifierId::AdvancedSatellites,
        name: "Advanced Satellites",
        effect: "3x Satellite production",
        cost: 50_000.0,
        kind: ModifierKind::GeneratorMultiplier {
            target: GeneratorId::Satellite,
            magnitude: 3.0,
        },
    },
    ModifierDef {
        id: ModifierId::RealityManipulation,
        name: "Reality Manipulation",
        effect: "10x click power",
        cost: 100_000.0,
        kind: ModifierKind::ClickMultiplier { magnitude: 10.0 },
    },
    ModifierDef {
        id: ModifierId::DarkMatterInfusion,
        name: "Dark Matter Infusion",
        effect: "+25% all production",
        cost: 500_000.0,
        kind: ModifierKind::GlobalMultiplier { magnitude: 1.25 },
    },
    ModifierDef {
        id: ModifierId::AutoClicker,
        name: "Auto Clicker",
        effect: "Clicks automatically",
        cost: 1_000_000.0,
        kind: ModifierKind::AutoClicker,
    },
];
