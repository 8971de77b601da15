//! Passive accrual rate and click power.
//!
//! Ordering matters: generator multipliers apply per generator, global
//! multipliers compose multiplicatively, exploration bonuses add up to a
//! single `1 + Σ bonus` factor, and the prestige bonus is folded in last.

use super::constants::{
    BASE_CLICK_POWER, PRESTIGE_CLICK_BONUS_PER_LEVEL, PRESTIGE_RATE_BONUS_PER_LEVEL,
};
use crate::catalog::{Generator, SiteId};
use crate::modifiers::{ModifierEffects, ModifierId, ModifierRegistry};
use std::collections::BTreeSet;

/// Energy per second from owned generators under the given modifiers,
/// explored sites and prestige level.
pub fn compute_rate(
    generators: &[Generator],
    owned_modifiers: &BTreeSet<ModifierId>,
    explored_sites: &BTreeSet<SiteId>,
    prestige_level: u32,
) -> f64 {
    let effects = ModifierRegistry::standard().effects(owned_modifiers);
    rate_with_effects(generators, &effects, explored_sites, prestige_level)
}

/// Same as [`compute_rate`] with modifier effects already folded.
pub fn rate_with_effects(
    generators: &[Generator],
    effects: &ModifierEffects,
    explored_sites: &BTreeSet<SiteId>,
    prestige_level: u32,
) -> f64 {
    let base_total: f64 = generators
        .iter()
        .map(|g| g.owned as f64 * g.base_rate() * effects.generator_multiplier(g.id))
        .sum();

    let exploration_bonus: f64 = explored_sites
        .iter()
        .map(|site| site.def().bonus_fraction)
        .sum();

    let global_multiplier = effects.global
        * (1.0 + exploration_bonus)
        * prestige_rate_multiplier(prestige_level);

    base_total * global_multiplier
}

/// Energy gained per click.
pub fn compute_click_power(owned_modifiers: &BTreeSet<ModifierId>, prestige_level: u32) -> f64 {
    let effects = ModifierRegistry::standard().effects(owned_modifiers);
    click_power_with_effects(&effects, prestige_level)
}

pub fn click_power_with_effects(effects: &ModifierEffects, prestige_level: u32) -> f64 {
    BASE_CLICK_POWER * effects.click * prestige_click_multiplier(prestige_level)
}

pub fn prestige_rate_multiplier(level: u32) -> f64 {
    1.0 + level as f64 * PRESTIGE_RATE_BONUS_PER_LEVEL
}

pub fn prestige_click_multiplier(level: u32) -> f64 {
    1.0 + level as f64 * PRESTIGE_CLICK_BONUS_PER_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{starting_generators, GeneratorId};

    fn with_owned(pairs: &[(GeneratorId, u32)]) -> Vec<Generator> {
        let mut gens = starting_generators();
        for (id, owned) in pairs {
            if let Some(g) = gens.iter_mut().find(|g| g.id == *id) {
                g.owned = *owned;
            }
        }
        gens
    }

    #[test]
    fn test_no_generators_no_rate() {
        let rate = compute_rate(&starting_generators(), &BTreeSet::new(), &BTreeSet::new(), 0);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_empty_generator_list_no_rate() {
        assert_eq!(compute_rate(&[], &BTreeSet::new(), &BTreeSet::new(), 3), 0.0);
    }

    #[test]
    fn test_five_solar_panels() {
        let gens = with_owned(&[(GeneratorId::Solar, 5)]);
        let rate = compute_rate(&gens, &BTreeSet::new(), &BTreeSet::new(), 0);
        assert!((rate - 0.5).abs() < 1e-12, "expected 0.5, got {}", rate);
    }

    #[test]
    fn test_generator_multiplier_applies_to_target_only() {
        let gens = with_owned(&[(GeneratorId::Solar, 10), (GeneratorId::Satellite, 1)]);
        let mods: BTreeSet<_> = [ModifierId::SolarEfficiency].into_iter().collect();
        let rate = compute_rate(&gens, &mods, &BTreeSet::new(), 0);
        // 10 * 0.1 * 2 + 1 * 1
        assert!((rate - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_exploration_bonuses_add_before_multiplying() {
        let gens = with_owned(&[(GeneratorId::Satellite, 10)]);
        let mods: BTreeSet<_> = [ModifierId::EnergyCrystals].into_iter().collect();
        let sites: BTreeSet<_> = [SiteId::Moon, SiteId::Mars].into_iter().collect();
        let rate = compute_rate(&gens, &mods, &sites, 0);
        // 10 * 1.15 * (1 + 0.1 + 0.25)
        let expected = 10.0 * 1.15 * 1.35;
        assert!((rate - expected).abs() < 1e-9);
        // Multiplying the bonuses separately would give a different answer.
        let multiplicative = 10.0 * 1.15 * 1.1 * 1.25;
        assert!((rate - multiplicative).abs() > 1e-3);
    }

    #[test]
    fn test_prestige_rate_bonus() {
        let gens = with_owned(&[(GeneratorId::Satellite, 10)]);
        let rate = compute_rate(&gens, &BTreeSet::new(), &BTreeSet::new(), 3);
        assert!((rate - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_click_power_base_is_one() {
        assert_eq!(compute_click_power(&BTreeSet::new(), 0), 1.0);
    }

    #[test]
    fn test_click_power_with_modifiers_and_prestige() {
        let mods: BTreeSet<_> = [ModifierId::EnhancedClickers, ModifierId::QuantumFingers]
            .into_iter()
            .collect();
        let power = compute_click_power(&mods, 2);
        assert!((power - 10.0 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_click_power_never_below_one() {
        for level in 0..50 {
            assert!(compute_click_power(&BTreeSet::new(), level) >= 1.0);
        }
    }
}
