//! Runtime state machine driver.
//!
//! [`StateMachine`] serializes all state changes through one guarded
//! entry point. It is a transition *executor*, not a validator: it holds
//! no table of legal edges, and the base operation accepts any target
//! state. Legality rules belong to the caller, either by checking
//! [`current_state`](StateMachine::current_state) before requesting, or
//! by attaching a [`Guard`] to the request.

mod error;
mod request;

pub use error::TransitionError;
pub use request::TransitionRequest;

use crate::core::{Guard, Hook, State, StateHistory, StateTransition};
use chrono::Utc;

/// A machine holding exactly one current state.
///
/// Created with an explicit initial state, mutated only through the
/// transition operation, owned and dropped like any other value. The
/// design assumes one logical thread drives the machine (a per-frame
/// update tick or any single-threaded event loop); transitions are
/// synchronous and run to completion before the call returns.
///
/// # Example
///
/// ```rust
/// use pivot::machine::StateMachine;
/// use pivot::state_enum;
///
/// state_enum! {
///     enum GameState {
///         Playing,
///         Paused,
///     }
/// }
///
/// let mut machine = StateMachine::new(GameState::Playing);
/// machine.transition(GameState::Paused).unwrap();
/// assert_eq!(machine.current_state(), &GameState::Paused);
/// ```
pub struct StateMachine<S: State> {
    current: S,
    history: StateHistory<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a new machine in the given initial state.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            history: StateHistory::new(),
        }
    }

    /// Get the current state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the machine is in a final state (pure).
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get the history of committed transitions (pure).
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Request a transition with no guard and no hooks.
    ///
    /// Same-state requests are a no-op; with no hooks attached this form
    /// cannot fail, but it returns `Result` so call sites read the same
    /// as the full form.
    pub fn transition(&mut self, target: S) -> Result<(), TransitionError> {
        self.execute(target, None, None, None)
    }

    /// Begin a transition request toward `target`.
    ///
    /// Returns a [`TransitionRequest`] builder; nothing happens until
    /// [`commit`](TransitionRequest::commit). The committed operation
    /// follows this order:
    ///
    /// 1. If `target` equals the current state the request is a no-op:
    ///    no guard check, no hook runs, `Ok(())`. Repeated external
    ///    triggers (an input held across frames) therefore never
    ///    re-enter the current state.
    /// 2. The guard, if attached, is evaluated against the current
    ///    state; `false` fails the request with
    ///    [`TransitionError::GuardRejected`].
    /// 3. The exit hook, if attached, runs. A failure surfaces as
    ///    [`TransitionError::ExitHookFailed`] with the state not yet
    ///    mutated.
    /// 4. The state is set to `target` and the transition is recorded
    ///    in the history.
    /// 5. The entry hook, if attached, runs. A failure surfaces as
    ///    [`TransitionError::EntryHookFailed`] with the new state
    ///    already committed.
    ///
    /// Exit-of-old strictly precedes the mutation, which strictly
    /// precedes entry-of-new; a hook never observes a half-applied
    /// transition. Hook failures are surfaced once and never retried.
    pub fn transition_to(&mut self, target: S) -> TransitionRequest<'_, S> {
        TransitionRequest::new(self, target)
    }

    pub(crate) fn execute(
        &mut self,
        target: S,
        guard: Option<Guard<S>>,
        on_exit: Option<Hook>,
        on_enter: Option<Hook>,
    ) -> Result<(), TransitionError> {
        // Same-state no-op: nothing fires, nothing is recorded.
        if self.current == target {
            return Ok(());
        }

        if let Some(guard) = guard {
            if !guard.check(&self.current) {
                return Err(TransitionError::GuardRejected {
                    from: self.current.name().to_string(),
                    to: target.name().to_string(),
                });
            }
        }

        let from = self.current.clone();

        if let Some(hook) = on_exit {
            hook.run()
                .map_err(|source| TransitionError::ExitHookFailed {
                    state: from.name().to_string(),
                    source,
                })?;
        }

        // Commit point: from here on the machine holds the new state.
        self.current = target;
        self.history = self.history.record(StateTransition {
            from,
            to: self.current.clone(),
            timestamp: Utc::now(),
        });

        if let Some(hook) = on_enter {
            hook.run()
                .map_err(|source| TransitionError::EntryHookFailed {
                    state: self.current.name().to_string(),
                    source,
                })?;
        }

        Ok(())
    }
}
