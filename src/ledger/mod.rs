//! The rental ledger: License and Car lifecycles bound to registries.
//!
//! Every operation reads the current record, asks the lifecycle where the
//! operation leads, runs any cross-record checks, and commits the full
//! updated record with a versioned write. Nothing is persisted unless every
//! check passed, and the notifier only hears about committed changes.

mod batch;
mod car;
mod journal;
mod license;

pub use batch::BatchReport;
pub use journal::Journal;

use crate::config::RentalConfig;
use crate::core::{State, StateHistory};
use crate::error::{EntityKind, RentalError, Result};
use crate::events::{LogNotifier, Notifier, RentalEvent};
use crate::lifecycle::Lifecycle;
use crate::model::{Car, CarStatus, License, LicenseStatus, Participant};
use crate::store::{InMemoryRegistry, Record, Registry, StoreError, Versioned};
use crate::validation::Validate;
use log::*;
use std::sync::Arc;

const LOG_TARGET: &str = "carrental::ledger";

/// Entry point for every rental operation.
///
/// Cloning is cheap; clones share registries, notifier and journal.
#[derive(Clone)]
pub struct RentalLedger {
    licenses: Arc<dyn Registry<License>>,
    cars: Arc<dyn Registry<Car>>,
    participants: Arc<dyn Registry<Participant>>,
    notifier: Arc<dyn Notifier>,
    license_journal: Arc<Journal<LicenseStatus>>,
    car_journal: Arc<Journal<CarStatus>>,
    config: RentalConfig,
}

impl RentalLedger {
    pub fn builder() -> RentalLedgerBuilder {
        RentalLedgerBuilder::default()
    }

    /// Ledger over fresh in-memory registries, logging its events.
    pub fn in_memory(config: RentalConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn config(&self) -> &RentalConfig {
        &self.config
    }

    pub fn get_license(&self, license_id: &str) -> Result<License> {
        self.licenses
            .fetch(license_id)
            .map_err(|e| RentalError::from_store(EntityKind::License, e))
    }

    pub fn get_car(&self, car_id: &str) -> Result<Car> {
        self.cars
            .fetch(car_id)
            .map_err(|e| RentalError::from_store(EntityKind::Car, e))
    }

    pub fn get_participant(&self, participant_id: &str) -> Result<Participant> {
        self.participants
            .fetch(participant_id)
            .map_err(|e| RentalError::from_store(EntityKind::Participant, e))
    }

    pub fn license_history(&self, license_id: &str) -> StateHistory<LicenseStatus> {
        self.license_journal.history(license_id)
    }

    pub fn car_history(&self, car_id: &str) -> StateHistory<CarStatus> {
        self.car_journal.history(car_id)
    }

    /// Add a participant to the network.
    pub fn register_participant(&self, participant: Participant) -> Result<Participant> {
        participant.validated(&self.config)?;
        self.participants
            .add(participant.clone())
            .map_err(|e| RentalError::from_store(EntityKind::Participant, e))?;
        info!(
            target: LOG_TARGET,
            "Registered {:?} {}",
            participant.role,
            participant.participant_id
        );
        Ok(participant)
    }

    /// Fails unless `customer_id` is a registered customer, when the
    /// configuration asks for it.
    fn ensure_customer(&self, customer_id: &str) -> Result<()> {
        if !self.config.require_registered_customer {
            return Ok(());
        }
        let participant = self.get_participant(customer_id)?;
        if !participant.is_customer() {
            return Err(RentalError::invalid_argument(format!(
                "participant '{}' is a {:?}, not a customer",
                customer_id, participant.role
            )));
        }
        Ok(())
    }

    fn notify(&self, event: RentalEvent) {
        self.notifier.emit(&event);
    }
}

/// Read `id`, advance its status through `operation`, run `check`, and
/// commit the result. Returns the status before the step and the stored
/// record after it.
#[allow(clippy::too_many_arguments)]
fn advance_record<T, S>(
    registry: &dyn Registry<T>,
    kind: EntityKind,
    lifecycle: &Lifecycle<S>,
    operation: &str,
    id: &str,
    status_of: impl Fn(&T) -> S,
    check: impl FnOnce(&T) -> Result<()>,
    apply: impl FnOnce(&T, S) -> T,
) -> Result<(S, T)>
where
    T: Record,
    S: State + 'static,
{
    let Versioned { record, version } = registry
        .get(id)
        .map_err(|e| RentalError::from_store(kind, e))?;
    let from = status_of(&record);

    let to = lifecycle.advance(operation, &from).map_err(|e| {
        debug!(target: LOG_TARGET, "{} {} refused {}: {}", kind, id, operation, e);
        RentalError::from_lifecycle(kind, id, e)
    })?;

    check(&record)?;

    let updated = apply(&record, to);
    match registry.update_versioned(updated.clone(), version) {
        Ok(_) => Ok((from, updated)),
        Err(conflict @ StoreError::VersionMismatch { .. }) => {
            // Someone committed first; report against what they left behind.
            let fresh = registry
                .fetch(id)
                .map_err(|e| RentalError::from_store(kind, e))?;
            match lifecycle.advance(operation, &status_of(&fresh)) {
                Err(e) => Err(RentalError::from_lifecycle(kind, id, e)),
                Ok(_) => Err(RentalError::Store(conflict)),
            }
        }
        Err(e) => Err(RentalError::from_store(kind, e)),
    }
}

/// Builder for [`RentalLedger`]; unset collaborators default to in-memory
/// registries and a [`LogNotifier`].
#[derive(Default)]
pub struct RentalLedgerBuilder {
    licenses: Option<Arc<dyn Registry<License>>>,
    cars: Option<Arc<dyn Registry<Car>>>,
    participants: Option<Arc<dyn Registry<Participant>>>,
    notifier: Option<Arc<dyn Notifier>>,
    config: RentalConfig,
}

impl RentalLedgerBuilder {
    pub fn licenses(mut self, registry: Arc<dyn Registry<License>>) -> Self {
        self.licenses = Some(registry);
        self
    }

    pub fn cars(mut self, registry: Arc<dyn Registry<Car>>) -> Self {
        self.cars = Some(registry);
        self
    }

    pub fn participants(mut self, registry: Arc<dyn Registry<Participant>>) -> Self {
        self.participants = Some(registry);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn config(mut self, config: RentalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> RentalLedger {
        let notifier: Arc<dyn Notifier> = match self.notifier {
            Some(notifier) => notifier,
            None => Arc::new(LogNotifier::new(self.config.namespace.clone())),
        };
        RentalLedger {
            licenses: self.licenses.unwrap_or_else(in_memory),
            cars: self.cars.unwrap_or_else(in_memory),
            participants: self.participants.unwrap_or_else(in_memory),
            notifier,
            license_journal: Arc::new(Journal::default()),
            car_journal: Arc::new(Journal::default()),
            config: self.config,
        }
    }
}

fn in_memory<T: Record>() -> Arc<dyn Registry<T>> {
    Arc::new(InMemoryRegistry::new())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::events::RecordingNotifier;

    pub fn ledger_with(config: RentalConfig) -> (RentalLedger, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new(config.namespace.clone()));
        let ledger = RentalLedger::builder()
            .config(config)
            .notifier(notifier.clone())
            .build();
        (ledger, notifier)
    }

    pub fn ledger() -> (RentalLedger, Arc<RecordingNotifier>) {
        ledger_with(RentalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::config::RentalConfig;
    use crate::model::Role;

    #[test]
    fn participants_register_once() {
        let (ledger, _) = ledger();
        let alice = Participant::new("alice", "Alice", "Hamilton", "UK", Role::Customer);

        ledger.register_participant(alice.clone()).unwrap();
        assert_eq!(ledger.get_participant("alice").unwrap(), alice);
        assert_eq!(
            ledger.register_participant(alice).unwrap_err(),
            RentalError::AlreadyExists {
                kind: EntityKind::Participant,
                id: "alice".to_string()
            }
        );
    }

    #[test]
    fn customer_check_is_opt_in() {
        let (open, _) = ledger();
        assert!(open.ensure_customer("nobody").is_ok());

        let (strict, _) = ledger_with(
            RentalConfig::builder()
                .require_registered_customer(true)
                .build(),
        );
        assert!(strict.ensure_customer("nobody").unwrap_err().is_not_found());

        strict
            .register_participant(Participant::new(
                "matias", "Matias", "Manager", "UK", Role::Manager,
            ))
            .unwrap();
        assert!(matches!(
            strict.ensure_customer("matias"),
            Err(RentalError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn blank_participant_is_rejected() {
        let (ledger, _) = ledger();
        let err = ledger
            .register_participant(Participant::new("", "Bob", "", "UK", Role::Customer))
            .unwrap_err();

        assert_eq!(
            err,
            RentalError::InvalidArgument {
                violations: vec![
                    "participant_id is required".to_string(),
                    "last_name is required".to_string(),
                ],
            }
        );
    }
}
