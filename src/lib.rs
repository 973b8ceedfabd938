pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod events;
pub mod payments;
pub mod serialization;
pub mod types;

// re-export key types
pub use config::SimulationConfig;
pub use decimal::{Money, Rate};
pub use engine::{AmortizationEngine, EngineBuilder};
pub use errors::{Result, ScheduleError};
pub use events::{Event, EventStore};
pub use payments::{
    annuity_payment, compare_payoff, compare_schedules, extra_amortization, plain_schedule,
    quote_extra_amortization, simulate_schedule, simulate_with_extra, ExtraAmortizationQuote,
    Schedule, ScheduleTotals,
};
pub use serialization::{ComparisonView, RecordView, ScheduleView, TotalsView};
pub use types::{LoanParameters, MonthlyRecord, PayoffComparison, PayoffStatus, TermPolicy};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
