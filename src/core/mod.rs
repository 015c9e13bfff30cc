//! Core state machine types.
//!
//! This module contains the pure building blocks of the machine:
//! - State definitions via the `State` trait
//! - Guard predicates for opt-in transition validation
//! - Entry/exit hooks supplied per transition request
//! - Immutable history tracking
//!
//! Everything here is a value type or a wrapped caller function; the
//! runtime driver lives in [`crate::machine`].

mod guard;
mod history;
mod hook;
mod macros;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use hook::{Hook, HookError};
pub use state::State;
