//! Fluent builder for a single transition request.

use crate::core::{Guard, Hook, HookError, State};
use crate::machine::error::TransitionError;
use crate::machine::StateMachine;

/// A pending transition request borrowed from a machine.
///
/// Created by [`StateMachine::transition_to`]; configured with optional
/// hooks and a guard, then executed with [`commit`](TransitionRequest::commit).
/// Dropping a request without committing does nothing.
///
/// The request holds the machine's exclusive borrow for its whole
/// lifetime, so a hook closure can never reach back into the same machine
/// mid-transition; reentrant transitions are a compile error rather than
/// undefined behavior.
///
/// # Example
///
/// ```rust
/// use pivot::machine::StateMachine;
/// use pivot::core::Hook;
/// use pivot::state_enum;
///
/// state_enum! {
///     enum PlayerState {
///         Idle,
///         Walking,
///     }
/// }
///
/// let mut machine = StateMachine::new(PlayerState::Idle);
///
/// machine
///     .transition_to(PlayerState::Walking)
///     .on_exit(Hook::from_fn(|| println!("leaving Idle")))
///     .on_enter(Hook::from_fn(|| println!("entering Walking")))
///     .commit()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), &PlayerState::Walking);
/// ```
pub struct TransitionRequest<'m, S: State> {
    machine: &'m mut StateMachine<S>,
    target: S,
    guard: Option<Guard<S>>,
    on_exit: Option<Hook>,
    on_enter: Option<Hook>,
}

impl<'m, S: State> TransitionRequest<'m, S> {
    pub(crate) fn new(machine: &'m mut StateMachine<S>, target: S) -> Self {
        Self {
            machine,
            target,
            guard: None,
            on_exit: None,
            on_enter: None,
        }
    }

    /// Attach an exit action, bound to the state being left (optional).
    pub fn on_exit(mut self, hook: Hook) -> Self {
        self.on_exit = Some(hook);
        self
    }

    /// Attach an exit action from a fallible closure (optional).
    pub fn on_exit_fn<F>(self, action: F) -> Self
    where
        F: FnOnce() -> Result<(), HookError> + Send + 'static,
    {
        self.on_exit(Hook::new(action))
    }

    /// Attach an entry action, bound to the state being entered (optional).
    pub fn on_enter(mut self, hook: Hook) -> Self {
        self.on_enter = Some(hook);
        self
    }

    /// Attach an entry action from a fallible closure (optional).
    pub fn on_enter_fn<F>(self, action: F) -> Self
    where
        F: FnOnce() -> Result<(), HookError> + Send + 'static,
    {
        self.on_enter(Hook::new(action))
    }

    /// Attach a guard predicate (optional).
    ///
    /// Evaluated against the current state before any hook runs. Never
    /// evaluated for a same-state request, which short-circuits first.
    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Attach a guard using a closure (optional).
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Execute the request.
    ///
    /// Ordering: same-state no-op check, guard, exit hook, state
    /// mutation (committed and recorded), entry hook. See
    /// [`StateMachine::transition_to`] for the full contract.
    pub fn commit(self) -> Result<(), TransitionError> {
        self.machine
            .execute(self.target, self.guard, self.on_exit, self.on_enter)
    }
}
