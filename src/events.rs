use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// all events that can be emitted by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // simulation events
    SimulationStarted {
        initial_capital: Money,
        monthly_rate: Rate,
        original_term: u32,
        desired_term: u32,
    },
    ExtraAmortizationSized {
        scheduled_payment: Money,
        desired_payment: Money,
        extra_monthly: Money,
        cost_factor: Decimal,
    },
    TermExtensionAccepted {
        original_term: u32,
        desired_term: u32,
        extra_monthly: Money,
    },

    // outcome events
    LoanPaidOff {
        month: u32,
        total_interest: Money,
    },
    HorizonReached {
        month: u32,
        remaining_balance: Money,
    },
    ComparisonCompleted {
        months_saved: u32,
        interest_saved: Money,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        log::debug!("event: {event:?}");
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
