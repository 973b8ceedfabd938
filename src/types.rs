use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};

/// loan parameters supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// principal outstanding at month 0
    pub initial_capital: Money,
    /// nominal annual rate as a percentage (2.7 means 2.7%)
    pub annual_interest_rate: Decimal,
    /// months the loan was contracted over
    pub original_term: u32,
    /// months the borrower wants to be done in
    pub desired_term: u32,
    /// proportional fee per unit of extra principal (0.005 means 0.5%)
    #[serde(default)]
    pub extra_amortization_cost_factor: Decimal,
}

impl LoanParameters {
    pub fn new(
        initial_capital: Money,
        annual_interest_rate: Decimal,
        original_term: u32,
        desired_term: u32,
        extra_amortization_cost_factor: Decimal,
    ) -> Self {
        Self {
            initial_capital,
            annual_interest_rate,
            original_term,
            desired_term,
            extra_amortization_cost_factor,
        }
    }

    /// monthly rate, `annual_interest_rate / 12 / 100`
    pub fn monthly_rate(&self) -> Rate {
        Rate::from_percentage(self.annual_interest_rate).monthly_rate()
    }

    /// multiplier applied to each extra payment, `1 + cost factor`
    pub fn extra_cost_multiplier(&self) -> Decimal {
        Decimal::ONE + self.extra_amortization_cost_factor
    }

    /// same loan, repaid over its original term
    pub fn at_original_term(&self) -> Self {
        Self {
            desired_term: self.original_term,
            ..self.clone()
        }
    }

    /// reject terms that cannot produce a schedule, and term extensions under
    /// [`TermPolicy::Strict`]
    pub fn validate(&self, policy: TermPolicy) -> Result<()> {
        if self.original_term == 0 {
            return Err(ScheduleError::InvalidTerm {
                months: self.original_term,
            });
        }
        if self.desired_term == 0 {
            return Err(ScheduleError::InvalidTerm {
                months: self.desired_term,
            });
        }
        if policy == TermPolicy::Strict && self.desired_term > self.original_term {
            return Err(ScheduleError::TermExtension {
                original_term: self.original_term,
                desired_term: self.desired_term,
            });
        }
        Ok(())
    }
}

/// how a desired term longer than the original term is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TermPolicy {
    /// reject term extensions
    #[default]
    Strict,
    /// simulate anyway; the extra amortization goes negative and the schedule
    /// runs for up to the desired term
    Permissive,
}

/// one month of the payoff ledger, monetary fields rounded to cents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub month_index: u32,
    pub remaining_balance: Money,
    pub interest_paid: Money,
    pub scheduled_principal_paid: Money,
    pub extra_principal_paid: Money,
    pub total_scheduled_payment: Money,
}

impl MonthlyRecord {
    /// build a record, rounding every figure once
    pub fn emit(
        month_index: u32,
        remaining_balance: Money,
        interest_paid: Money,
        scheduled_principal_paid: Money,
        extra_principal_paid: Money,
        total_scheduled_payment: Money,
    ) -> Self {
        Self {
            month_index,
            remaining_balance: remaining_balance.round_to_cents(),
            interest_paid: interest_paid.round_to_cents(),
            scheduled_principal_paid: scheduled_principal_paid.round_to_cents(),
            extra_principal_paid: extra_principal_paid.round_to_cents(),
            total_scheduled_payment: total_scheduled_payment.round_to_cents(),
        }
    }
}

/// where the schedule ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoffStatus {
    /// balance reached zero in this month
    PaidOff { month: u32 },
    /// horizon elapsed with debt left
    Outstanding { remaining_balance: Money },
}

/// accelerated schedule measured against the plain one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffComparison {
    pub baseline_months: u32,
    pub accelerated_months: u32,
    /// zero when the accelerated schedule runs longer
    pub months_saved: u32,
    pub baseline_total_interest: Money,
    pub accelerated_total_interest: Money,
    /// signed; negative when a term extension costs more interest
    pub interest_saved: Money,
    pub total_extra_principal: Money,
    pub total_extra_cost: Money,
}

impl PayoffComparison {
    /// interest saved less the fees paid on the extra principal
    pub fn net_savings(&self) -> Money {
        self.interest_saved - self.total_extra_cost
    }
}
