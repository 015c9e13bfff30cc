//! Transition error types.

use crate::core::HookError;
use thiserror::Error;

/// Errors a transition request can fail with.
///
/// Hook failures carry the caller's original error unchanged as `source`.
/// The variant identifies which side of the commit the failure happened
/// on: after [`ExitHookFailed`](TransitionError::ExitHookFailed) the
/// machine still holds the old state, after
/// [`EntryHookFailed`](TransitionError::EntryHookFailed) the new state is
/// already committed.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The request's guard returned false; state unchanged, no hook ran.
    #[error("Guard rejected transition from '{from}' to '{to}'")]
    GuardRejected { from: String, to: String },

    /// The exit hook failed; the state mutation was not applied.
    #[error("Exit hook failed while leaving '{state}'")]
    ExitHookFailed {
        state: String,
        #[source]
        source: HookError,
    },

    /// The entry hook failed; the state mutation was already applied.
    #[error("Entry hook failed while entering '{state}'")]
    EntryHookFailed {
        state: String,
        #[source]
        source: HookError,
    },
}
