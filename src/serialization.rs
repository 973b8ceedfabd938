//! serialization support for schedules
//!
//! Every monetary field is rendered as a fixed-point string with exactly two
//! fractional digits, e.g. `"611.14"` or `"0.00"`.
use serde::{Deserialize, Serialize};

use crate::payments::{Schedule, ScheduleTotals};
use crate::types::{MonthlyRecord, PayoffComparison, PayoffStatus};

/// serializable view of one schedule month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    pub month_index: u32,
    pub remaining_balance: String,
    pub interest_paid: String,
    pub scheduled_principal_paid: String,
    pub extra_principal_paid: String,
    pub total_scheduled_payment: String,
}

impl From<&MonthlyRecord> for RecordView {
    fn from(record: &MonthlyRecord) -> Self {
        RecordView {
            month_index: record.month_index,
            remaining_balance: record.remaining_balance.to_fixed(),
            interest_paid: record.interest_paid.to_fixed(),
            scheduled_principal_paid: record.scheduled_principal_paid.to_fixed(),
            extra_principal_paid: record.extra_principal_paid.to_fixed(),
            total_scheduled_payment: record.total_scheduled_payment.to_fixed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsView {
    pub interest: String,
    pub scheduled_principal: String,
    pub extra_principal: String,
    pub extra_cost: String,
    pub total_outlay: String,
}

impl From<&ScheduleTotals> for TotalsView {
    fn from(totals: &ScheduleTotals) -> Self {
        TotalsView {
            interest: totals.interest.to_fixed(),
            scheduled_principal: totals.scheduled_principal.to_fixed(),
            extra_principal: totals.extra_principal.to_fixed(),
            extra_cost: totals.extra_cost.to_fixed(),
            total_outlay: totals.total_outlay().to_fixed(),
        }
    }
}

/// serializable view of a whole schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleView {
    pub scheduled_payment: String,
    pub extra_monthly: String,
    pub months_simulated: usize,
    pub paid_off_in: Option<u32>,
    pub remaining_balance: String,
    pub totals: TotalsView,
    pub records: Vec<RecordView>,
}

impl ScheduleView {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let remaining_balance = match schedule.status() {
            PayoffStatus::PaidOff { .. } => "0.00".to_string(),
            PayoffStatus::Outstanding { remaining_balance } => remaining_balance.to_fixed(),
        };

        ScheduleView {
            scheduled_payment: schedule.scheduled_payment.to_fixed(),
            extra_monthly: schedule.extra_monthly.to_fixed(),
            months_simulated: schedule.len(),
            paid_off_in: schedule.payoff_month(),
            remaining_balance,
            totals: TotalsView::from(&schedule.totals),
            records: schedule.iter().map(RecordView::from).collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// serializable view of a payoff comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub baseline_months: u32,
    pub accelerated_months: u32,
    pub months_saved: u32,
    pub baseline_total_interest: String,
    pub accelerated_total_interest: String,
    pub interest_saved: String,
    pub total_extra_principal: String,
    pub total_extra_cost: String,
    pub net_savings: String,
}

impl From<&PayoffComparison> for ComparisonView {
    fn from(comparison: &PayoffComparison) -> Self {
        ComparisonView {
            baseline_months: comparison.baseline_months,
            accelerated_months: comparison.accelerated_months,
            months_saved: comparison.months_saved,
            baseline_total_interest: comparison.baseline_total_interest.to_fixed(),
            accelerated_total_interest: comparison.accelerated_total_interest.to_fixed(),
            interest_saved: comparison.interest_saved.to_fixed(),
            total_extra_principal: comparison.total_extra_principal.to_fixed(),
            total_extra_cost: comparison.total_extra_cost.to_fixed(),
            net_savings: comparison.net_savings().to_fixed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::payments::{compare_payoff, simulate_with_extra};
    use crate::types::LoanParameters;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_view_pads_to_two_decimals() {
        let record = MonthlyRecord::emit(
            3,
            Money::ZERO,
            Money::from_major(12),
            Money::from_decimal(dec!(100.5)),
            Money::from_decimal(dec!(0.004)),
            Money::from_decimal(dec!(112.499)),
        );

        assert_eq!(
            RecordView::from(&record),
            RecordView {
                month_index: 3,
                remaining_balance: "0.00".to_string(),
                interest_paid: "12.00".to_string(),
                scheduled_principal_paid: "100.50".to_string(),
                extra_principal_paid: "0.00".to_string(),
                total_scheduled_payment: "112.50".to_string(),
            }
        );
    }

    #[test]
    fn test_schedule_view_outstanding_balance() {
        let params = LoanParameters::new(Money::from_major(10_000), dec!(6), 120, 12, dec!(0));
        let schedule = simulate_with_extra(&params, Money::from_major(10)).unwrap();
        let view = ScheduleView::from_schedule(&schedule);

        assert_eq!(view.months_simulated, 12);
        assert_eq!(view.paid_off_in, None);
        assert_eq!(view.remaining_balance, schedule.final_balance.to_fixed());
        assert_eq!(view.records.len(), 12);
        assert_eq!(view.extra_monthly, "10.00");
    }

    #[test]
    fn test_schedule_view_paid_off() {
        let params = LoanParameters::new(Money::from_major(10_000), dec!(6), 12, 12, dec!(0));
        let schedule = simulate_with_extra(&params, Money::from_major(2_000)).unwrap();
        let view = ScheduleView::from_schedule(&schedule);

        assert_eq!(view.paid_off_in, Some(4));
        assert_eq!(view.remaining_balance, "0.00");
        assert_eq!(view.totals.extra_principal, "8000.00");
        assert_eq!(view.totals.extra_cost, "0.00");
    }

    fn is_fixed_two_decimals(s: &str) -> bool {
        let digits = s.strip_prefix('-').unwrap_or(s);
        match digits.split_once('.') {
            Some((whole, frac)) => {
                !whole.is_empty()
                    && whole.chars().all(|c| c.is_ascii_digit())
                    && frac.len() == 2
                    && frac.chars().all(|c| c.is_ascii_digit())
            }
            None => false,
        }
    }

    #[test]
    fn test_every_amount_is_fixed_point() {
        let params = LoanParameters::new(Money::from_major(100_000), dec!(12), 12, 12, dec!(0));
        let schedule = simulate_with_extra(&params, Money::ZERO).unwrap();
        let view = ScheduleView::from_schedule(&schedule);

        for record in &view.records {
            for amount in [
                &record.remaining_balance,
                &record.interest_paid,
                &record.scheduled_principal_paid,
                &record.extra_principal_paid,
                &record.total_scheduled_payment,
            ] {
                assert!(is_fixed_two_decimals(amount), "not fixed point: {amount}");
            }
        }
        assert_eq!(view.records.last().unwrap().remaining_balance, "0.00");

        let json = view.to_json_pretty().unwrap();
        assert!(json.contains("\"remaining_balance\": \"0.00\""));
    }

    #[test]
    fn test_comparison_view_net_savings() {
        let params = LoanParameters::new(Money::from_major(20_000), dec!(5), 60, 30, dec!(0.02));
        let (_, _, comparison) = compare_payoff(&params).unwrap();
        let view = ComparisonView::from(&comparison);

        assert_eq!(view.months_saved, comparison.months_saved);
        assert_eq!(view.net_savings, comparison.net_savings().to_fixed());
        assert_eq!(view.interest_saved, comparison.interest_saved.to_fixed());
    }
}
