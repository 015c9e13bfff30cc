//! State transition history tracking.
//!
//! Provides immutable tracking of committed transitions over time. Only
//! transitions that actually commit are recorded: same-state no-ops,
//! guard rejections, and exit-hook failures never appear here.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed state transition.
///
/// Transitions are immutable values representing a move from one state
/// to another at a specific point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state that was left
    pub from: S,
    /// The state that was entered
    pub to: S,
    /// When the transition committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// History is immutable - [`record`](StateHistory::record) returns a new
/// history with the transition added, leaving the original unchanged.
///
/// # Example
///
/// ```rust
/// use pivot::core::{State, StateHistory, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Idle,
///     Walking,
///     Running,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Walking => "Walking",
///             Self::Running => "Running",
///         }
///     }
/// }
///
/// let history = StateHistory::new();
/// let history = history.record(StateTransition {
///     from: Phase::Idle,
///     to: Phase::Walking,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(StateTransition {
///     from: Phase::Walking,
///     to: Phase::Running,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![&Phase::Idle, &Phase::Walking, &Phase::Running]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// Pure: the existing history is not mutated.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references in order: the first transition's `from` state,
    /// then the `to` state of each transition. Empty when nothing has
    /// been recorded.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Walking,
        Running,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Walking => "Walking",
                Self::Running => "Running",
            }
        }
    }

    fn step(from: TestState, to: TestState) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_returns_new_history() {
        let history = StateHistory::new();
        let updated = history.record(step(TestState::Idle, TestState::Walking));

        assert_eq!(updated.len(), 1);
        assert!(history.is_empty());
    }

    #[test]
    fn path_starts_with_first_from_state() {
        let history = StateHistory::new()
            .record(step(TestState::Idle, TestState::Walking))
            .record(step(TestState::Walking, TestState::Running));

        let path = history.path();
        assert_eq!(
            path,
            vec![&TestState::Idle, &TestState::Walking, &TestState::Running]
        );
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let later = start + chrono::Duration::seconds(5);

        let history = StateHistory::new()
            .record(StateTransition {
                from: TestState::Idle,
                to: TestState::Walking,
                timestamp: start,
            })
            .record(StateTransition {
                from: TestState::Walking,
                to: TestState::Running,
                timestamp: later,
            });

        assert_eq!(history.duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn history_round_trips_through_json() {
        let history = StateHistory::new().record(step(TestState::Idle, TestState::Walking));

        let json = serde_json::to_string(&history).unwrap();
        let restored: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.transitions()[0].from, TestState::Idle);
        assert_eq!(restored.transitions()[0].to, TestState::Walking);
    }
}
