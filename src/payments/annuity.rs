use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ScheduleError};

/// fixed monthly payment that fully amortizes `principal` over `months`
///
/// `PMT = P * r / (1 - (1 + r)^-n)`, evaluated as `P * r * c / (c - 1)` with
/// `c = (1 + r)^n`. A zero rate amortizes linearly. When `c` exceeds the
/// decimal range, `(1 + r)^-n` is below 28 significant digits and the payment
/// is the interest alone. The result is not rounded.
pub fn annuity_payment(principal: Money, monthly_rate: Rate, months: u32) -> Result<Money> {
    if months == 0 {
        return Err(ScheduleError::InvalidTerm { months });
    }

    let n = Decimal::from(months);
    let r = monthly_rate.as_decimal();

    if monthly_rate.is_zero() {
        return Ok(principal / n);
    }

    let interest = principal
        .as_decimal()
        .checked_mul(r)
        .ok_or_else(|| ScheduleError::CalculationError {
            message: format!("interest overflows for principal {principal} at rate {r}"),
        })?;

    let Some(compound) = (Decimal::ONE + r).checked_powu(u64::from(months)) else {
        log::debug!("compounding factor out of range at {monthly_rate} over {months} months");
        return Ok(Money::from_decimal(interest));
    };
    let denominator = compound - Decimal::ONE;

    // rate too small to register in 28 significant digits
    if denominator.is_zero() {
        return Ok(principal / n);
    }

    let payment = match interest.checked_mul(compound) {
        Some(numerator) => numerator / denominator,
        None => interest
            .checked_mul(compound / denominator)
            .ok_or_else(|| ScheduleError::CalculationError {
                message: format!("payment overflows for principal {principal}"),
            })?,
    };

    Ok(Money::from_decimal(payment))
}
