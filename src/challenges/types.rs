//! Daily challenge types.

use chrono::NaiveDate;

/// Counter a daily challenge measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectiveKind {
    Clicks,
    Earn,
    Purchases,
}

impl ObjectiveKind {
    pub const ALL: [ObjectiveKind; 3] = [
        ObjectiveKind::Clicks,
        ObjectiveKind::Earn,
        ObjectiveKind::Purchases,
    ];

    /// Key used in the persisted progress map.
    pub fn key(&self) -> &'static str {
        match self {
            ObjectiveKind::Clicks => "clicks",
            ObjectiveKind::Earn => "earn",
            ObjectiveKind::Purchases => "purchases",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key() == key)
    }
}

/// Static definition of a challenge the daily rotation can pick.
#[derive(Debug, Clone)]
pub struct ChallengeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub objective: ObjectiveKind,
    pub target: f64,
    pub reward: f64,
}

/// The challenge issued for a particular calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyChallenge {
    pub id: String,
    pub name: String,
    pub objective: ObjectiveKind,
    pub target: f64,
    pub reward: f64,
    pub issue_date: NaiveDate,
}

impl DailyChallenge {
    pub fn from_def(def: &ChallengeDef, issue_date: NaiveDate) -> Self {
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            objective: def.objective,
            target: def.target,
            reward: def.reward,
            issue_date,
        }
    }
}
