//! Guard predicates over records and states.
//!
//! Guards are pure boolean functions. Lifecycle rules use them as extra
//! preconditions on a state, registries use them to select records.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over a value of type `T`.
///
/// Cloning a guard shares the underlying closure.
///
/// # Example
///
/// ```rust
/// use carrental::core::Guard;
///
/// let pricey = Guard::new(|rate: &f64| *rate > 40.0);
///
/// assert!(pricey.check(&50.0));
/// assert!(!pricey.check(&30.0));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T: ?Sized> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Guard {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
