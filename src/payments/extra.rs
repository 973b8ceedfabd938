use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::types::LoanParameters;

use super::annuity::annuity_payment;

/// breakdown of the extra amortization needed to hit the desired term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraAmortizationQuote {
    /// installment over the original term
    pub original_payment: Money,
    /// installment that would repay the loan over the desired term
    pub desired_payment: Money,
    /// `desired_payment - original_payment`
    pub gross_extra: Money,
    /// gross extra net of the per-payment cost, the amount paid each month
    pub net_extra: Money,
}

/// flat extra monthly principal that compresses the payoff to the desired term
///
/// Returns zero without touching the payment formula when both terms match.
/// The result is negative when the desired term is longer than the original.
pub fn extra_amortization(params: &LoanParameters) -> Result<Money> {
    if params.original_term == params.desired_term {
        return Ok(Money::ZERO);
    }
    Ok(quote_extra_amortization(params)?.net_extra)
}

/// full breakdown behind [`extra_amortization`]
pub fn quote_extra_amortization(params: &LoanParameters) -> Result<ExtraAmortizationQuote> {
    let monthly_rate = params.monthly_rate();

    let original_payment =
        annuity_payment(params.initial_capital, monthly_rate, params.original_term)?;

    if params.original_term == params.desired_term {
        return Ok(ExtraAmortizationQuote {
            original_payment,
            desired_payment: original_payment,
            gross_extra: Money::ZERO,
            net_extra: Money::ZERO,
        });
    }

    let desired_payment =
        annuity_payment(params.initial_capital, monthly_rate, params.desired_term)?;
    let gross_extra = desired_payment - original_payment;

    let net_extra = gross_extra
        .as_decimal()
        .checked_div(params.extra_cost_multiplier())
        .map(Money::from_decimal)
        .ok_or_else(|| ScheduleError::CalculationError {
            message: format!(
                "extra amortization cost factor {} leaves nothing to amortize",
                params.extra_amortization_cost_factor
            ),
        })?;

    Ok(ExtraAmortizationQuote {
        original_payment,
        desired_payment,
        gross_extra,
        net_extra,
    })
}
