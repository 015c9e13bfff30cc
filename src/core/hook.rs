//! Entry/exit hooks: caller-supplied actions run at transition boundaries.
//!
//! Hooks are opaque to the machine. It invokes them at the defined points
//! (exit before the state mutation, entry after) and surfaces any failure
//! unchanged; it never catches, retries, or inspects their outcome.

use std::error::Error;

/// Error type hooks may fail with. Surfaced to the caller unchanged as the
/// `source` of the wrapping [`TransitionError`](crate::machine::TransitionError).
pub type HookError = Box<dyn Error + Send + Sync + 'static>;

/// A one-shot caller-supplied action bound to entering or leaving a state.
///
/// Hooks take no arguments and return nothing the machine inspects beyond
/// success or failure. They may have arbitrary external effects - logging,
/// UI updates, starting or stopping subsystems.
///
/// # Example
///
/// ```rust
/// use pivot::core::Hook;
///
/// // Infallible action
/// let announce = Hook::from_fn(|| println!("entering Walking"));
///
/// // Fallible action
/// let load = Hook::new(|| {
///     std::fs::metadata("assets/walk.anim")?;
///     Ok(())
/// });
/// # let _ = (announce, load);
/// ```
pub struct Hook {
    action: Box<dyn FnOnce() -> Result<(), HookError> + Send>,
}

impl Hook {
    /// Create a hook from a fallible action.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> Result<(), HookError> + Send + 'static,
    {
        Hook {
            action: Box::new(action),
        }
    }

    /// Create a hook from an infallible action.
    pub fn from_fn<F>(action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Hook {
            action: Box::new(move || {
                action();
                Ok(())
            }),
        }
    }

    /// Run the hook, consuming it.
    pub fn run(self) -> Result<(), HookError> {
        (self.action)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn fallible_hook_propagates_error() {
        let hook = Hook::new(|| Err("subsystem unavailable".into()));

        let err = hook.run().unwrap_err();
        assert_eq!(err.to_string(), "subsystem unavailable");
    }

    #[test]
    fn infallible_hook_runs_action() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let hook = Hook::from_fn(move || flag.store(true, Ordering::SeqCst));

        assert!(hook.run().is_ok());
        assert!(fired.load(Ordering::SeqCst));
    }

    #[test]
    fn hook_runs_at_most_once() {
        // FnOnce consumption: the type system enforces this, the test
        // just demonstrates the successful path.
        let hook = Hook::new(|| Ok(()));
        assert!(hook.run().is_ok());
    }
}
