//! Player activation sessions chaining prerequisite ability casts.
mod error;
mod session;

pub use error::InteractionError;
pub use session::{
    ActivationTarget, ChainStep, InteractionContext, InteractionSession, SessionState,
};
