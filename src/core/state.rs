//! Core State trait for state machine states.
//!
//! Every state a machine can hold implements this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine. A machine
/// holds exactly one state value at any instant.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for the same-state no-op guard
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for snapshots
///
/// # Example
///
/// ```rust
/// use pivot::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum PlayerState {
///     Idle,
///     Walking,
///     Running,
/// }
///
/// impl State for PlayerState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Walking => "Walking",
///             Self::Running => "Running",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states represent completion points in the state machine
    /// where no further transitions are expected. The machine does not
    /// enforce this; it is advisory for callers.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
