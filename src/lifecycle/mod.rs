//! Declarative lifecycles.
//!
//! A [`Lifecycle`] is a table of [`Rule`]s naming which operation moves a
//! status where. Evaluating a rule is pure; persisting the result is the
//! ledger's job.

mod error;
mod machine;
mod rule;
mod tables;

pub use error::{BuildError, LifecycleError};
pub use machine::{Lifecycle, LifecycleBuilder};
pub use rule::{Rule, RuleBuilder};
pub use tables::{
    car_lifecycle, license_lifecycle, APPROVE, DELIVER, INSPECT, REJECT, RETURN, SELECT,
};
