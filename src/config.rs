//! Ledger configuration.

use serde::{Deserialize, Serialize};

/// What a batch operation does when one item fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Keep going and report failed items alongside the successes
    #[default]
    BestEffort,
    /// Stop at the first failure; items already processed stay processed
    AbortOnFirstError,
}

/// Settings shared by every ledger operation.
///
/// # Example
///
/// ```rust
/// use carrental::config::{BatchPolicy, RentalConfig};
///
/// let config = RentalConfig::from_json(r#"{ "batch_policy": "abort_on_first_error" }"#).unwrap();
/// assert_eq!(config.batch_policy, BatchPolicy::AbortOnFirstError);
/// assert_eq!(config.namespace, "org.example.carrental");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalConfig {
    /// Prefix of emitted event names
    pub namespace: String,
    pub batch_policy: BatchPolicy,
    /// Require customers to exist in the participant registry
    pub require_registered_customer: bool,
    /// Oldest model year accepted by car creation
    pub min_model_year: u16,
    /// Highest rental rate accepted by car creation
    pub max_rental_rate: f64,
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            namespace: "org.example.carrental".to_string(),
            batch_policy: BatchPolicy::BestEffort,
            require_registered_customer: false,
            min_model_year: 1886,
            max_rental_rate: 10_000.0,
        }
    }
}

impl RentalConfig {
    pub fn builder() -> RentalConfigBuilder {
        RentalConfigBuilder::new()
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Fluent builder for [`RentalConfig`].
#[derive(Debug, Clone, Default)]
pub struct RentalConfigBuilder {
    config: RentalConfig,
}

impl RentalConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RentalConfig::default(),
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    pub fn batch_policy(mut self, policy: BatchPolicy) -> Self {
        self.config.batch_policy = policy;
        self
    }

    pub fn require_registered_customer(mut self, required: bool) -> Self {
        self.config.require_registered_customer = required;
        self
    }

    pub fn min_model_year(mut self, year: u16) -> Self {
        self.config.min_model_year = year;
        self
    }

    pub fn max_rental_rate(mut self, rate: f64) -> Self {
        self.config.max_rental_rate = rate;
        self
    }

    pub fn build(self) -> RentalConfig {
        self.config
    }
}
