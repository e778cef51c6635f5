//! Core lifecycle types.
//!
//! This module contains the pure pieces every lifecycle is built from:
//! - Status definitions via the `State` trait
//! - Guard predicates over states and records
//! - Immutable transition history

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
