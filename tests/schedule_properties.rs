use loan_prepayment_rs::{
    annuity_payment, extra_amortization, plain_schedule, simulate_schedule, simulate_with_extra,
    Decimal, LoanParameters, Money, PayoffStatus, Rate,
};
use proptest::prelude::*;

fn arb_params() -> impl Strategy<Value = LoanParameters> {
    (
        1_000i64..=2_000_000,
        0u32..=1_500,
        1u32..=480,
        0u32..=100,
    )
        .prop_flat_map(|(capital, rate_bps, original_term, cost_bps)| {
            (1u32..=original_term).prop_map(move |desired_term| {
                LoanParameters::new(
                    Money::from_major(capital),
                    // annual percentage with two decimals, 0.00% ..= 15.00%
                    Decimal::new(i64::from(rate_bps), 2),
                    original_term,
                    desired_term,
                    Decimal::new(i64::from(cost_bps), 4),
                )
            })
        })
}

fn tolerance() -> Money {
    Money::from_decimal(Decimal::new(1, 6))
}

proptest! {
    #[test]
    fn prop_balance_is_non_increasing_and_non_negative(params in arb_params()) {
        let schedule = simulate_schedule(&params).unwrap();

        let mut previous = params.initial_capital;
        for record in &schedule {
            prop_assert!(record.remaining_balance <= previous.round_to_cents());
            prop_assert!(!record.remaining_balance.is_negative());
            previous = record.remaining_balance;
        }
    }

    #[test]
    fn prop_length_bounded_by_desired_term(params in arb_params()) {
        let schedule = simulate_schedule(&params).unwrap();

        prop_assert!(!schedule.is_empty());
        prop_assert!(schedule.len() <= params.desired_term as usize);
        for (idx, record) in schedule.iter().enumerate() {
            prop_assert_eq!(record.month_index, idx as u32 + 1);
        }
    }

    #[test]
    fn prop_sized_extra_pays_off_by_desired_term(params in arb_params()) {
        let schedule = simulate_schedule(&params).unwrap();

        prop_assert!(schedule.final_balance.abs() < tolerance());
        let last = schedule.last_record().unwrap();
        prop_assert_eq!(last.remaining_balance.to_fixed(), "0.00");
        prop_assert!(schedule.is_paid_off());
        prop_assert_eq!(schedule.payoff_month(), Some(schedule.len() as u32));
        prop_assert_eq!(
            schedule.status(),
            PayoffStatus::PaidOff { month: schedule.len() as u32 }
        );
    }

    #[test]
    fn prop_plain_schedule_pays_off_at_original_term(params in arb_params()) {
        let schedule = plain_schedule(&params).unwrap();

        prop_assert_eq!(schedule.len(), params.original_term as usize);
        prop_assert!(schedule.is_paid_off());
        prop_assert_eq!(schedule.payoff_month(), Some(params.original_term));
    }

    #[test]
    fn prop_simulation_is_idempotent(params in arb_params()) {
        prop_assert_eq!(simulate_schedule(&params).unwrap(), simulate_schedule(&params).unwrap());
    }

    #[test]
    fn prop_equal_terms_need_no_extra(params in arb_params()) {
        let same_term = params.at_original_term();
        prop_assert_eq!(extra_amortization(&same_term).unwrap(), Money::ZERO);
        prop_assert_eq!(simulate_schedule(&same_term).unwrap(), plain_schedule(&params).unwrap());
    }

    #[test]
    fn prop_zero_rate_is_linear(capital in 1i64..=10_000_000, months in 1u32..=600) {
        let payment = annuity_payment(Money::from_major(capital), Rate::ZERO, months).unwrap();
        prop_assert_eq!(payment, Money::from_major(capital) / Decimal::from(months));
    }

    #[test]
    fn prop_extra_beyond_sizing_never_lengthens(params in arb_params(), bump in 1i64..=5_000) {
        let sized = simulate_schedule(&params).unwrap();
        let extra = sized.extra_monthly + Money::from_major(bump);
        let bumped = simulate_with_extra(&params, extra).unwrap();
        prop_assert!(bumped.len() <= sized.len());
        prop_assert!(bumped.is_paid_off());
    }
}
