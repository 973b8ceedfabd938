use crate::errors::Result;
use crate::types::{LoanParameters, PayoffComparison};

use super::amortization::{plain_schedule, simulate_schedule, Schedule};

/// measure an accelerated schedule against the plain one for the same loan
pub fn compare_schedules(baseline: &Schedule, accelerated: &Schedule) -> PayoffComparison {
    let baseline_months = baseline.len() as u32;
    let accelerated_months = accelerated.len() as u32;

    PayoffComparison {
        baseline_months,
        accelerated_months,
        months_saved: baseline_months.saturating_sub(accelerated_months),
        baseline_total_interest: baseline.totals.interest,
        accelerated_total_interest: accelerated.totals.interest,
        interest_saved: baseline.totals.interest - accelerated.totals.interest,
        total_extra_principal: accelerated.totals.extra_principal,
        total_extra_cost: accelerated.totals.extra_cost,
    }
}

/// run both schedules for a loan and compare them
pub fn compare_payoff(params: &LoanParameters) -> Result<(Schedule, Schedule, PayoffComparison)> {
    let baseline = plain_schedule(params)?;
    let accelerated = simulate_schedule(params)?;
    let comparison = compare_schedules(&baseline, &accelerated);
    Ok((baseline, accelerated, comparison))
}
