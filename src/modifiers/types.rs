//! Modifier (upgrade) types.

use crate::catalog::GeneratorId;

/// Unique identifier for each purchasable modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModifierId {
    EnhancedClickers,
    SolarEfficiency,
    QuantumFingers,
    EnergyCrystals,
    AdvancedSatellites,
    RealityManipulation,
    DarkMatterInfusion,
    AutoClicker,
}

impl ModifierId {
    pub const ALL: [ModifierId; 8] = [
        ModifierId::EnhancedClickers,
        ModifierId::SolarEfficiency,
        ModifierId::QuantumFingers,
        ModifierId::EnergyCrystals,
        ModifierId::AdvancedSatellites,
        ModifierId::RealityManipulation,
        ModifierId::DarkMatterInfusion,
        ModifierId::AutoClicker,
    ];

    /// Stable key used in save files.
    pub fn key(&self) -> &'static str {
        match self {
            ModifierId::EnhancedClickers => "click_2x",
            ModifierId::SolarEfficiency => "solar_2x",
            ModifierId::QuantumFingers => "click_5x",
            ModifierId::EnergyCrystals => "global_15",
            ModifierId::AdvancedSatellites => "satellite_3x",
            ModifierId::RealityManipulation => "click_10x",
            ModifierId::DarkMatterInfusion => "global_25",
            ModifierId::AutoClicker => "auto_clicker",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.key() == key)
    }
}

/// What a modifier does once owned. Each kind carries only its own fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModifierKind {
    /// Multiplies click power.
    ClickMultiplier { magnitude: f64 },
    /// Multiplies one generator's output.
    GeneratorMultiplier { target: GeneratorId, magnitude: f64 },
    /// Multiplies total passive output.
    GlobalMultiplier { magnitude: f64 },
    /// Performs one click per tick.
    AutoClicker,
}

/// Static definition of a modifier.
#[derive(Debug, Clone)]
pub struct ModifierDef {
    pub id: ModifierId,
    pub name: &'static str,
    pub effect: &'static str,
    pub cost: f64,
    pub kind: ModifierKind,
}
