//! Guard predicates for opt-in transition validation.
//!
//! Guards are pure boolean functions evaluated against the current state
//! before a transition executes. The machine itself validates nothing; a
//! guard is how a caller layers legality rules on top of the executor.

use super::state::State;

/// Pure predicate that determines if a transition may execute.
///
/// A guard is attached to a single transition request and evaluated
/// against the state being left. If it returns `false` the request fails
/// with [`TransitionError::GuardRejected`](crate::machine::TransitionError::GuardRejected)
/// and neither hook runs.
///
/// # Example
///
/// ```rust
/// use pivot::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum GameState {
///     Playing,
///     Paused,
///     GameOver,
/// }
///
/// impl State for GameState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Playing => "Playing",
///             Self::Paused => "Paused",
///             Self::GameOver => "GameOver",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::GameOver)
///     }
/// }
///
/// // Only allow leaving states that are not terminal
/// let not_over = Guard::new(|s: &GameState| !s.is_final());
///
/// assert!(not_over.check(&GameState::Playing));
/// assert!(not_over.check(&GameState::Paused));
/// assert!(!not_over.check(&GameState::GameOver));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate should be deterministic and free of side effects;
    /// the machine may evaluate it at most once per request, but nothing
    /// stops a caller from reusing the same guard across requests.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows a transition away from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Playing,
        Paused,
        GameOver,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Playing => "Playing",
                Self::Paused => "Paused",
                Self::GameOver => "GameOver",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::GameOver)
        }
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::Playing));

        assert!(guard.check(&TestState::Playing));
        assert!(!guard.check(&TestState::Paused));
    }

    #[test]
    fn guard_checks_non_final_states() {
        let guard = Guard::new(|s: &TestState| !s.is_final());

        assert!(guard.check(&TestState::Playing));
        assert!(guard.check(&TestState::Paused));
        assert!(!guard.check(&TestState::GameOver));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = TestState::Paused;
        let guard = Guard::new(|s: &TestState| !s.is_final());

        let result1 = guard.check(&state);
        let result2 = guard.check(&state);

        assert_eq!(result1, result2);
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard =
            Guard::new(|s: &TestState| matches!(s, TestState::Playing | TestState::Paused));

        assert!(guard.check(&TestState::Playing));
        assert!(guard.check(&TestState::Paused));
        assert!(!guard.check(&TestState::GameOver));
    }
}
