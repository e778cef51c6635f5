//! Core State trait for entity status values.
//!
//! Every status enumeration driven by a [`Lifecycle`](crate::lifecycle::Lifecycle)
//! implements this trait. All methods are pure.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle states.
///
/// States are small immutable values describing where a record sits in
/// its lifecycle. `name` doubles as the wire label (`"PENDING"`,
/// `"SELECTED"`, ...), so it must be stable.
///
/// # Example
///
/// ```rust
/// use carrental::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum PermitState {
///     Requested,
///     Granted,
///     Denied,
/// }
///
/// impl State for PermitState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Requested => "REQUESTED",
///             Self::Granted => "GRANTED",
///             Self::Denied => "DENIED",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Granted | Self::Denied)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Denied)
///     }
/// }
///
/// assert!(PermitState::Denied.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Stable label used for display, logging and serialization.
    fn name(&self) -> &str;

    /// Terminal states accept no further transitions.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Exception states (rejected, revoked, damaged...).
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
