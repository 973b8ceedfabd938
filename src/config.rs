use serde::{Deserialize, Serialize};

use crate::errors::{Result, ScheduleError};
use crate::types::{LoanParameters, TermPolicy};

/// simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub loan: LoanParameters,
    #[serde(default)]
    pub term_policy: TermPolicy,
}

impl SimulationConfig {
    pub fn new(loan: LoanParameters) -> Self {
        Self {
            loan,
            term_policy: TermPolicy::default(),
        }
    }

    pub fn with_term_policy(mut self, policy: TermPolicy) -> Self {
        self.term_policy = policy;
        self
    }

    /// parse and validate a json configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.loan.initial_capital.is_positive() {
            return Err(ScheduleError::InvalidConfiguration {
                message: format!(
                    "initial capital must be positive, got {}",
                    self.loan.initial_capital
                ),
            });
        }
        self.loan.validate(self.term_policy)
    }
}
