//! Status transition tables.
//!
//! Every status enum lists the states it may move to. Re-applying the current status is
//! always accepted as a no-op; any move missing from the table is rejected.

use std::fmt::Debug;

use crate::server::error::AppError;

pub trait Lifecycle: Copy + PartialEq + Debug + 'static {
    /// Stored and displayed name of the state.
    fn name(self) -> &'static str;

    /// States reachable from `self` in one step.
    fn next_states(self) -> &'static [Self];

    fn can_transition_to(self, next: Self) -> bool {
        self == next || self.next_states().contains(&next)
    }

    fn is_terminal(self) -> bool {
        self.next_states().is_empty()
    }
}

/// Checks a transition against the table of `S`.
///
/// # Arguments
/// - `label` - Resource name used in the error message
/// - `from` - Current state
/// - `to` - Requested state
///
/// # Returns
/// - `Ok(())` - Transition is allowed (or `from == to`)
/// - `Err(AppError::Conflict)` - Transition is not in the table
pub fn ensure_transition<S: Lifecycle>(label: &str, from: S, to: S) -> Result<(), AppError> {
    if from.can_transition_to(to) {
        return Ok(());
    }

    if from.is_terminal() {
        return Err(AppError::Conflict(format!(
            "{} is '{}' and can no longer change status",
            label,
            from.name()
        )));
    }

    Err(AppError::Conflict(format!(
        "{} cannot move from '{}' to '{}'",
        label,
        from.name(),
        to.name()
    )))
}
