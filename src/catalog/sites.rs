//! Exploration sites (planets). Each adds a flat fraction to the global
//! multiplier until the next prestige.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SiteId {
    Moon,
    Mars,
    Jupiter,
    Saturn,
    AlphaCentauri,
}

impl SiteId {
    pub const ALL: [SiteId; 5] = [
        SiteId::Moon,
        SiteId::Mars,
        SiteId::Jupiter,
        SiteId::Saturn,
        SiteId::AlphaCentauri,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SiteId::Moon => "moon",
            SiteId::Mars => "mars",
            SiteId::Jupiter => "jupiter",
            SiteId::Saturn => "saturn",
            SiteId::AlphaCentauri => "alpha",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.key() == key)
    }

    pub fn def(&self) -> &'static SiteDef {
        &ALL_SITES[*self as usize]
    }
}

#[derive(Debug, Clone)]
pub struct SiteDef {
    pub id: SiteId,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: f64,
    pub bonus_fraction: f64,
}

pub const ALL_SITES: &[SiteDef] = &[
    SiteDef {
        id: SiteId::Moon,
        name: "Moon",
        description: "Lunar mining operations",
        cost: 5_000.0,
        bonus_fraction: 0.1,
    },
    SiteDef {
        id: SiteId::Mars,
        name: "Mars",
        description: "Red planet colonies",
        cost: 50_000.0,
        bonus_fraction: 0.25,
    },
    SiteDef {
        id: SiteId::Jupiter,
        name: "Jupiter",
        description: "Gas giant research stations",
        cost: 250_000.0,
        bonus_fraction: 0.5,
    },
    SiteDef {
        id: SiteId::Saturn,
        name: "Saturn",
        description: "Ring system energy harvesting",
        cost: 1_000_000.0,
        bonus_fraction: 1.0,
    },
    SiteDef {
        id: SiteId::AlphaCentauri,
        name: "Alpha Centauri",
        description: "Interstellar expansion",
        cost: 10_000_000.0,
        bonus_fraction: 2.0,
    },
];
