//! Carrental: license and car rental lifecycles as guarded state machines
//!
//! Carrental follows Stillwater's "pure core, imperative shell" split. The
//! lifecycles are declarative rule tables evaluated by pure functions; the
//! ledger is the shell that reads records from a registry, advances them,
//! and commits the result with a versioned write.
//!
//! # Core Concepts
//!
//! - **State**: statuses implement the `State` trait via `status_enum!`
//! - **Lifecycle**: operation rules mapping allowed source statuses to a target
//! - **Registry**: pluggable versioned storage for licenses, cars and participants
//! - **Ledger**: the operations customers and staff perform
//! - **Transactions**: validated serde records run as effects against a ledger
//!
//! # Example
//!
//! ```rust
//! use carrental::config::RentalConfig;
//! use carrental::ledger::RentalLedger;
//! use carrental::model::CarStatus;
//!
//! let ledger = RentalLedger::in_memory(RentalConfig::default());
//! ledger.upload_license("L1", "alice").unwrap();
//! ledger.approve_license("L1").unwrap();
//! ledger.create_car("C1", "Toyota", "Camry", "Blue", 2022, 50.0).unwrap();
//!
//! let car = ledger.select_car("alice", "C1").unwrap();
//! assert_eq!(car.status, CarStatus::Selected);
//! assert!(!car.available());
//! ```

mod macros;

pub mod config;
pub mod core;
pub mod demo;
pub mod error;
pub mod events;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod store;
pub mod transactions;
pub mod validation;

// Re-export commonly used types
pub use config::{BatchPolicy, RentalConfig};
pub use core::{Guard, State, StateHistory, StateTransition};
pub use error::{EntityKind, RentalError};
pub use ledger::{BatchReport, RentalLedger};
pub use model::{Car, CarStatus, License, LicenseStatus, Participant, Role};
pub use transactions::{submit, Transaction, TransactionOutcome};
