//! Generator catalog: the things that produce energy every second.

use crate::core::cost_curve::CostCurve;

/// Unique identifier for each generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeneratorId {
    Solar,
    Satellite,
    Miner,
    MoonBase,
    StarForge,
    Wormhole,
    Dyson,
    Quasar,
    Universe,
}

impl GeneratorId {
    /// All generators in shop order.
    pub const ALL: [GeneratorId; 9] = [
        GeneratorId::Solar,
        GeneratorId::Satellite,
        GeneratorId::Miner,
        GeneratorId::MoonBase,
        GeneratorId::StarForge,
        GeneratorId::Wormhole,
        GeneratorId::Dyson,
        GeneratorId::Quasar,
        GeneratorId::Universe,
    ];

    /// Stable key used in save files.
    pub fn key(&self) -> &'static str {
        match self {
            GeneratorId::Solar => "solar",
            GeneratorId::Satellite => "satellite",
            GeneratorId::Miner => "miner",
            GeneratorId::MoonBase => "moonbase",
            GeneratorId::StarForge => "forge",
            GeneratorId::Wormhole => "wormhole",
            GeneratorId::Dyson => "dyson",
            GeneratorId::Quasar => "quasar",
            GeneratorId::Universe => "universe",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.key() == key)
    }

    pub fn def(&self) -> &'static GeneratorDef {
        // ALL_GENERATORS is declared in variant order.
        &ALL_GENERATORS[*self as usize]
    }
}

/// Static definition of a generator.
#[derive(Debug, Clone)]
pub struct GeneratorDef {
    pub id: GeneratorId,
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: f64,
    /// Energy per second per owned unit.
    pub base_rate: f64,
}

pub const ALL_GENERATORS: &[GeneratorDef] = &[
    GeneratorDef {
        id: GeneratorId::Solar,
        name: "Solar Panel",
        description: "Harnesses solar energy",
        base_cost: 15.0,
        base_rate: 0.1,
    },
    GeneratorDef {
        id: GeneratorId::Satellite,
        name: "Satellite",
        description: "Orbital energy collector",
        base_cost: 100.0,
        base_rate: 1.0,
    },
    GeneratorDef {
        id: GeneratorId::Miner,
        name: "Asteroid Miner",
        description: "Extracts energy from asteroids",
        base_cost: 550.0,
        base_rate: 5.0,
    },
    GeneratorDef {
        id: GeneratorId::MoonBase,
        name: "Moon Base",
        description: "Lunar energy facility",
        base_cost: 3_000.0,
        base_rate: 25.0,
    },
    GeneratorDef {
        id: GeneratorId::StarForge,
        name: "Star Forge",
        description: "Stellar energy manipulation",
        base_cost: 15_000.0,
        base_rate: 120.0,
    },
    GeneratorDef {
        id: GeneratorId::Wormhole,
        name: "Wormhole Generator",
        description: "Interdimensional energy tap",
        base_cost: 95_000.0,
        base_rate: 800.0,
    },
    GeneratorDef {
        id: GeneratorId::Dyson,
        name: "Dyson Sphere",
        description: "Ultimate stellar energy collector",
        base_cost: 1_000_000.0,
        base_rate: 5_000.0,
    },
    GeneratorDef {
        id: GeneratorId::Quasar,
        name: "Quasar Engine",
        description: "Galactic core energy harvester",
        base_cost: 10_000_000.0,
        base_rate: 50_000.0,
    },
    GeneratorDef {
        id: GeneratorId::Universe,
        name: "Universe Generator",
        description: "Reality-bending energy source",
        base_cost: 100_000_000.0,
        base_rate: 500_000.0,
    },
];

/// An owned stack of one generator type.
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    pub id: GeneratorId,
    pub owned: u32,
}

impl Generator {
    pub fn new(id: GeneratorId) -> Self {
        Self { id, owned: 0 }
    }

    pub fn name(&self) -> &'static str {
        self.id.def().name
    }

    pub fn base_cost(&self) -> f64 {
        self.id.def().base_cost
    }

    pub fn base_rate(&self) -> f64 {
        self.id.def().base_rate
    }

    /// Price of the next `quantity` units on the given curve.
    pub fn cost_for(&self, curve: &CostCurve, quantity: u32) -> f64 {
        curve.batch_cost(self.base_cost(), self.owned, quantity)
    }
}

/// One zero-count entry per catalog generator, in shop order.
pub fn starting_generators() -> Vec<Generator> {
    GeneratorId::ALL.iter().map(|id| Generator::new(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_generator_has_def() {
        for id in GeneratorId::ALL {
            assert_eq!(id.def().id, id, "{:?} resolves to the wrong definition", id);
        }
        assert_eq!(ALL_GENERATORS.len(), GeneratorId::ALL.len());
    }

    #[test]
    fn test_keys_round_trip_and_are_unique() {
        let keys: HashSet<_> = GeneratorId::ALL.iter().map(|id| id.key()).collect();
        assert_eq!(keys.len(), GeneratorId::ALL.len());
        for id in GeneratorId::ALL {
            assert_eq!(GeneratorId::from_key(id.key()), Some(id));
        }
        assert_eq!(GeneratorId::from_key("toaster"), None);
    }

    #[test]
    fn test_catalog_costs_ascend() {
        for pair in ALL_GENERATORS.windows(2) {
            assert!(pair[1].base_cost > pair[0].base_cost);
            assert!(pair[1].base_rate > pair[0].base_rate);
        }
    }

    #[test]
    fn test_starting_generators_empty() {
        let gens = starting_generators();
        assert_eq!(gens.len(), 9);
        assert!(gens.iter().all(|g| g.owned == 0));
        assert_eq!(gens[0].name(), "Solar Panel");
    }

    #[test]
    fn test_cost_for_uses_owned_count() {
        let curve = CostCurve::default();
        let mut solar = Generator::new(GeneratorId::Solar);
        assert_eq!(solar.cost_for(&curve, 1), 15.0);
        solar.owned = 1;
        assert!((solar.cost_for(&curve, 1) - 17.25).abs() < 1e-9);
    }
}
