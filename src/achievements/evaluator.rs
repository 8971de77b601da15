//! Stateless evaluation of the achievement catalog against a snapshot.

use super::data::ALL_ACHIEVEMENTS;
use super::types::{AchievementDef, AchievementId, AchievementSnapshot, Unlock};
use std::collections::BTreeSet;

/// Returns every achievement whose condition holds and that is not already
/// unlocked, in catalog order. Never mutates anything; the caller credits
/// rewards and records ids.
pub fn evaluate(
    snapshot: &AchievementSnapshot<'_>,
    already_unlocked: &BTreeSet<AchievementId>,
) -> Vec<Unlock> {
    evaluate_catalog(ALL_ACHIEVEMENTS, snapshot, already_unlocked)
}

pub fn evaluate_catalog(
    catalog: &[AchievementDef],
    snapshot: &AchievementSnapshot<'_>,
    already_unlocked: &BTreeSet<AchievementId>,
) -> Vec<Unlock> {
    catalog
        .iter()
        .filter(|def| !already_unlocked.contains(&def.id))
        .filter(|def| def.condition.is_met(snapshot))
        .map(|def| Unlock {
            id: def.id,
            reward: def.reward,
        })
        .collect()
}
