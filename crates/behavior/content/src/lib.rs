//! Static behavior content and its loaders.
//!
//! Loaders read RON/TOML data files into behavior-core entry types:
//! - Ability catalog (range data)
//! - Creature catalog (activation chains, special abilities)
//! - Interaction catalog (session kinds and chains)
//! - Prerequisite rules
//! - Engine configuration (TOML)
//!
//! Content is consumed by runtime oracles and is never mutated after load.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, ConfigLoader, ContentBundle, ContentFactory, CreatureLoader, InteractionLoader,
    LoadResult, PrerequisiteLoader,
};
