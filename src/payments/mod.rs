pub mod amortization;
pub mod annuity;
pub mod comparison;
pub mod extra;

pub use amortization::{
    plain_schedule, simulate_schedule, simulate_with_extra, Schedule, ScheduleTotals,
};
pub use annuity::annuity_payment;
pub use comparison::{compare_payoff, compare_schedules};
pub use extra::{extra_amortization, quote_extra_amortization, ExtraAmortizationQuote};
