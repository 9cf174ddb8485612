//! Invariant checking for the mutable structures built during tree construction.

use crate::mincut_error::GomoryHuError;

/// Structures that can check their own structural invariants.
///
/// `validate_invariants` is always available and returns the first violation found.
/// `debug_assert_invariants` turns a violation into a panic, but only in debug builds
/// or when the `check-invariants` / `strict-invariants` features are enabled.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), GomoryHuError>;

    /// Panic on the first invariant violation when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }
}

/// Run a fallible invariant check and panic on error when invariant checking
/// is enabled. Expands to nothing in release builds without the features.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
