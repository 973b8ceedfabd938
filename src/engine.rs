use rust_decimal::Decimal;

use crate::config::SimulationConfig;
use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::events::{Event, EventStore};
use crate::payments::{
    compare_schedules, plain_schedule, quote_extra_amortization, simulate_with_extra,
    ExtraAmortizationQuote, Schedule,
};
use crate::serialization::{ComparisonView, ScheduleView};
use crate::types::{LoanParameters, PayoffComparison, PayoffStatus, TermPolicy};

/// validated entry point around the schedule math, collecting events as it runs
///
/// The configuration is fixed once validated:
///
/// ```compile_fail
/// use loan_prepayment_rs::{AmortizationEngine, Decimal, Money};
///
/// let mut engine = AmortizationEngine::builder()
///     .initial_capital(Money::from_major(1_000))
///     .annual_interest_rate(Decimal::from(3))
///     .original_term(12)
///     .build()
///     .unwrap();
/// engine.config.loan.desired_term = 0;
/// ```
#[derive(Debug)]
pub struct AmortizationEngine {
    config: SimulationConfig,
    events: EventStore,
}

impl AmortizationEngine {
    /// create a new engine, validating the configuration
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            events: EventStore::new(),
        })
    }

    /// builder for creating engines
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn parameters(&self) -> &LoanParameters {
        &self.config.loan
    }

    /// payments behind the extra amortization, without simulating
    pub fn quote(&self) -> Result<ExtraAmortizationQuote> {
        quote_extra_amortization(&self.config.loan)
    }

    /// simulate the accelerated schedule
    pub fn run(&mut self) -> Result<Schedule> {
        let params = &self.config.loan;

        self.events.emit(Event::SimulationStarted {
            initial_capital: params.initial_capital,
            monthly_rate: params.monthly_rate(),
            original_term: params.original_term,
            desired_term: params.desired_term,
        });

        let quote = quote_extra_amortization(params)?;
        self.events.emit(Event::ExtraAmortizationSized {
            scheduled_payment: quote.original_payment,
            desired_payment: quote.desired_payment,
            extra_monthly: quote.net_extra,
            cost_factor: params.extra_amortization_cost_factor,
        });

        if params.desired_term > params.original_term {
            log::warn!(
                "desired term {} is longer than original term {}, extra amortization is {}",
                params.desired_term,
                params.original_term,
                quote.net_extra
            );
            self.events.emit(Event::TermExtensionAccepted {
                original_term: params.original_term,
                desired_term: params.desired_term,
                extra_monthly: quote.net_extra,
            });
        }

        let schedule = simulate_with_extra(params, quote.net_extra)?;

        match schedule.status() {
            PayoffStatus::PaidOff { month } => self.events.emit(Event::LoanPaidOff {
                month,
                total_interest: schedule.totals.interest,
            }),
            PayoffStatus::Outstanding { remaining_balance } => {
                self.events.emit(Event::HorizonReached {
                    month: schedule.len() as u32,
                    remaining_balance,
                })
            }
        }

        Ok(schedule)
    }

    /// run the accelerated schedule and measure it against the plain one
    pub fn compare(&mut self) -> Result<PayoffComparison> {
        let baseline = plain_schedule(&self.config.loan)?;
        let accelerated = self.run()?;
        let comparison = compare_schedules(&baseline, &accelerated);

        self.events.emit(Event::ComparisonCompleted {
            months_saved: comparison.months_saved,
            interest_saved: comparison.interest_saved,
        });

        Ok(comparison)
    }

    pub fn view(&mut self) -> Result<ScheduleView> {
        let schedule = self.run()?;
        Ok(ScheduleView::from_schedule(&schedule))
    }

    pub fn comparison_view(&mut self) -> Result<ComparisonView> {
        let comparison = self.compare()?;
        Ok(ComparisonView::from(&comparison))
    }

    /// schedule as pretty json, amounts as two-decimal strings
    pub fn json(&mut self) -> Result<String> {
        Ok(self.view()?.to_json_pretty()?)
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}

/// builder for [`AmortizationEngine`]
#[derive(Debug)]
pub struct EngineBuilder {
    initial_capital: Option<Money>,
    annual_interest_rate: Option<Decimal>,
    original_term: Option<u32>,
    desired_term: Option<u32>,
    extra_amortization_cost_factor: Option<Decimal>,
    term_policy: Option<TermPolicy>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            initial_capital: None,
            annual_interest_rate: None,
            original_term: None,
            desired_term: None,
            extra_amortization_cost_factor: None,
            term_policy: None,
        }
    }

    pub fn initial_capital(mut self, amount: Money) -> Self {
        self.initial_capital = Some(amount);
        self
    }

    /// annual rate as a percentage (2.7 for 2.7%)
    pub fn annual_interest_rate(mut self, rate: Decimal) -> Self {
        self.annual_interest_rate = Some(rate);
        self
    }

    pub fn original_term(mut self, months: u32) -> Self {
        self.original_term = Some(months);
        self
    }

    pub fn desired_term(mut self, months: u32) -> Self {
        self.desired_term = Some(months);
        self
    }

    /// fee per unit of extra principal (0.005 for 0.5%)
    pub fn extra_amortization_cost_factor(mut self, factor: Decimal) -> Self {
        self.extra_amortization_cost_factor = Some(factor);
        self
    }

    pub fn term_policy(mut self, policy: TermPolicy) -> Self {
        self.term_policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<AmortizationEngine> {
        let initial_capital = self.initial_capital.ok_or(ScheduleError::InvalidConfiguration {
            message: "Initial capital required".to_string(),
        })?;

        let annual_interest_rate =
            self.annual_interest_rate
                .ok_or(ScheduleError::InvalidConfiguration {
                    message: "Annual interest rate required".to_string(),
                })?;

        let original_term = self.original_term.ok_or(ScheduleError::InvalidConfiguration {
            message: "Original term required".to_string(),
        })?;

        let loan = LoanParameters::new(
            initial_capital,
            annual_interest_rate,
            original_term,
            self.desired_term.unwrap_or(original_term),
            self.extra_amortization_cost_factor.unwrap_or(Decimal::ZERO),
        );

        let config =
            SimulationConfig::new(loan).with_term_policy(self.term_policy.unwrap_or_default());

        AmortizationEngine::new(config)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
