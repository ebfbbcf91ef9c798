//! Declarative prerequisite rules.
//!
//! A rule is a [`crate::env::PrerequisiteEntry`] holding up to three typed
//! checks. The [`PrerequisiteEngine`] dispatches each check to the predicate
//! the [`PrerequisiteRegistry`] binds to its rule type. Predicates may evaluate
//! other rules, so rules compose.
//!
//! Configuration problems (unknown rule, unknown or unbound rule type, runaway
//! nesting) surface as [`PrerequisiteError`]. A comparison operator a rule type
//! does not interpret is logged and answered with that type's default.
mod checks;
mod engine;
mod error;
mod registry;
mod types;

pub use checks::COSMIC_REWARDS_LTE_MEANS_AT_LEAST;
pub use engine::{CheckContext, PrerequisiteEngine};
pub use error::PrerequisiteError;
pub use registry::{CheckFn, PrerequisiteRegistry};
pub use types::{Comparison, PrerequisitePlayer, PrerequisiteType};
