//! Static content: generators and exploration sites.

pub mod generators;
pub mod sites;

pub use generators::{starting_generators, Generator, GeneratorDef, GeneratorId, ALL_GENERATORS};
pub use sites::{SiteDef, SiteId, ALL_SITES};
