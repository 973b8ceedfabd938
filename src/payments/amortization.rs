use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};
use crate::types::{LoanParameters, MonthlyRecord, PayoffStatus};

use super::annuity::annuity_payment;
use super::extra::extra_amortization;

/// full precision running totals over a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScheduleTotals {
    pub interest: Money,
    pub scheduled_principal: Money,
    pub extra_principal: Money,
    /// fee paid on top of the extra principal
    pub extra_cost: Money,
}

impl ScheduleTotals {
    /// everything that left the borrower's pocket
    pub fn total_outlay(&self) -> Money {
        self.interest + self.scheduled_principal + self.extra_principal + self.extra_cost
    }
}

/// month by month payoff ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub parameters: LoanParameters,
    pub monthly_rate: Rate,
    /// installment over the original term, unrounded
    pub scheduled_payment: Money,
    /// extra principal paid every month, unrounded
    pub extra_monthly: Money,
    pub records: Vec<MonthlyRecord>,
    pub totals: ScheduleTotals,
    /// balance after the last simulated month, unrounded
    pub final_balance: Money,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// record for a 1-based month
    pub fn record(&self, month_index: u32) -> Option<&MonthlyRecord> {
        let idx = month_index.checked_sub(1)?;
        self.records.get(idx as usize)
    }

    pub fn last_record(&self) -> Option<&MonthlyRecord> {
        self.records.last()
    }

    /// true when the final balance rounds to zero cents
    pub fn is_paid_off(&self) -> bool {
        self.final_balance.round_to_cents().is_zero()
    }

    /// month in which the balance reached zero
    pub fn payoff_month(&self) -> Option<u32> {
        if !self.is_paid_off() {
            return None;
        }
        self.last_record().map(|r| r.month_index)
    }

    pub fn status(&self) -> PayoffStatus {
        match self.payoff_month() {
            Some(month) => PayoffStatus::PaidOff { month },
            None => PayoffStatus::Outstanding {
                remaining_balance: self.final_balance,
            },
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a MonthlyRecord;
    type IntoIter = std::slice::Iter<'a, MonthlyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// accelerated schedule with the extra amortization sized for the desired term
pub fn simulate_schedule(params: &LoanParameters) -> Result<Schedule> {
    let extra = extra_amortization(params)?;
    simulate_with_extra(params, extra)
}

/// the loan repaid over its original term with no extra payments
pub fn plain_schedule(params: &LoanParameters) -> Result<Schedule> {
    simulate_with_extra(&params.at_original_term(), Money::ZERO)
}

/// walk the balance forward for at most `desired_term` months with a fixed
/// extra principal payment
///
/// The scheduled installment is always the original term's annuity. The extra
/// payment is deducted gross of its cost, and the balance is clamped at zero,
/// ending the schedule in the month it is cleared.
pub fn simulate_with_extra(params: &LoanParameters, extra_monthly: Money) -> Result<Schedule> {
    if params.desired_term == 0 {
        return Err(ScheduleError::InvalidTerm {
            months: params.desired_term,
        });
    }

    let monthly_rate = params.monthly_rate();
    let scheduled_payment =
        annuity_payment(params.initial_capital, monthly_rate, params.original_term)?;
    let gross_extra = extra_monthly * params.extra_cost_multiplier();
    let extra_cost = extra_monthly * params.extra_amortization_cost_factor;

    let mut balance = params.initial_capital;
    let mut records = Vec::new();
    let mut totals = ScheduleTotals::default();

    for month in 1..=params.desired_term {
        let interest = balance.interest_at(monthly_rate);
        let scheduled_principal = scheduled_payment - interest;

        balance -= scheduled_principal;
        balance -= gross_extra;

        if balance <= Money::ZERO {
            balance = Money::ZERO;
        }

        totals.interest += interest;
        totals.scheduled_principal += scheduled_principal;
        totals.extra_principal += extra_monthly;
        totals.extra_cost += extra_cost;

        log::trace!(
            "month {month}: interest {interest}, principal {scheduled_principal}, balance {balance}"
        );

        records.push(MonthlyRecord::emit(
            month,
            balance,
            interest,
            scheduled_principal,
            extra_monthly,
            scheduled_payment,
        ));

        if balance.is_zero() {
            break;
        }
    }

    log::debug!(
        "simulated {} of {} months, final balance {}",
        records.len(),
        params.desired_term,
        balance
    );

    Ok(Schedule {
        parameters: params.clone(),
        monthly_rate,
        scheduled_payment,
        extra_monthly,
        records,
        totals,
        final_balance: balance,
    })
}
