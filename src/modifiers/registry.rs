//! Modifier lookup and the rules for folding owned modifiers into multipliers.

use super::data::ALL_MODIFIERS;
use super::types::{ModifierDef, ModifierId, ModifierKind};
use crate::catalog::GeneratorId;
use std::collections::{BTreeMap, BTreeSet};

/// Catalog of purchasable modifiers.
#[derive(Debug, Clone, Copy)]
pub struct ModifierRegistry {
    defs: &'static [ModifierDef],
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ModifierRegistry {
    /// The shipped modifier catalog.
    pub const fn standard() -> Self {
        Self {
            defs: ALL_MODIFIERS,
        }
    }

    pub const fn new(defs: &'static [ModifierDef]) -> Self {
        Self { defs }
    }

    pub fn all(&self) -> &'static [ModifierDef] {
        self.defs
    }

    pub fn get(&self, id: ModifierId) -> Option<&'static ModifierDef> {
        self.defs.iter().find(|d| d.id == id)
    }

    /// Definitions of every owned modifier, in catalog order.
    pub fn owned<'a>(
        &self,
        owned: &'a BTreeSet<ModifierId>,
    ) -> impl Iterator<Item = &'static ModifierDef> + 'a {
        self.defs.iter().filter(move |d| owned.contains(&d.id))
    }

    /// Folds the owned set into the multipliers the production model needs.
    pub fn effects(&self, owned: &BTreeSet<ModifierId>) -> ModifierEffects {
        let mut effects = ModifierEffects::default();
        for def in self.owned(owned) {
            match def.kind {
                ModifierKind::ClickMultiplier { magnitude } => effects.click *= magnitude,
                ModifierKind::GeneratorMultiplier { target, magnitude } => {
                    *effects.per_generator.entry(target).or_insert(1.0) *= magnitude;
                }
                ModifierKind::GlobalMultiplier { magnitude } => effects.global *= magnitude,
                ModifierKind::AutoClicker => effects.auto_clicks += 1,
            }
        }
        effects
    }
}

/// Combined effect of a set of owned modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierEffects {
    /// Product of click multipliers.
    pub click: f64,
    /// Product of global multipliers.
    pub global: f64,
    /// Product of generator-specific multipliers, by target.
    pub per_generator: BTreeMap<GeneratorId, f64>,
    /// Number of owned auto-clickers.
    pub auto_clicks: u32,
}

impl Default for ModifierEffects {
    fn default() -> Self {
        Self {
            click: 1.0,
            global: 1.0,
            per_generator: BTreeMap::new(),
            auto_clicks: 0,
        }
    }
}

impl ModifierEffects {
    pub fn generator_multiplier(&self, id: GeneratorId) -> f64 {
        self.per_generator.get(&id).copied().unwrap_or(1.0)
    }
}
