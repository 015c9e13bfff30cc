//! Pivot: a lightweight runtime state machine
//!
//! Pivot holds exactly one current state and serializes every state
//! change through one guarded entry point, so a caller can never observe
//! or induce a half-applied transition. It is a transition *executor*,
//! not a validator: the caller supplies the target state and the
//! entry/exit hooks per request, and any legality rules are layered on
//! top with guard predicates or current-state checks.
//!
//! # Core Concepts
//!
//! - **State**: type-safe state representation via the `State` trait
//! - **Hooks**: caller-supplied exit/entry actions run around the commit
//! - **Guards**: opt-in pure predicates that can reject a request
//! - **History**: immutable record of committed transitions
//!
//! # Example
//!
//! ```rust
//! use pivot::machine::StateMachine;
//! use pivot::core::Hook;
//! use pivot::state_enum;
//!
//! state_enum! {
//!     enum PlayerState {
//!         Idle,
//!         Walking,
//!     }
//! }
//!
//! let mut machine = StateMachine::new(PlayerState::Idle);
//!
//! machine
//!     .transition_to(PlayerState::Walking)
//!     .on_exit(Hook::from_fn(|| println!("stop idle animation")))
//!     .on_enter(Hook::from_fn(|| println!("start walk animation")))
//!     .commit()
//!     .unwrap();
//!
//! assert_eq!(machine.current_state(), &PlayerState::Walking);
//!
//! // Requesting the current state again is a no-op: no hook fires.
//! machine.transition(PlayerState::Walking).unwrap();
//! ```

pub mod core;
pub mod machine;

// Re-export commonly used types
pub use core::{Guard, Hook, HookError, State, StateHistory, StateTransition};
pub use machine::{StateMachine, TransitionError, TransitionRequest};
