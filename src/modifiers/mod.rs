//! One-time upgrades that change click power, a single generator's output,
//! total output, or add automatic clicking.

pub mod data;
pub mod registry;
pub mod types;

pub use data::ALL_MODIFIERS;
pub use registry::{ModifierEffects, ModifierRegistry};
pub use types::{ModifierDef, ModifierId, ModifierKind};
