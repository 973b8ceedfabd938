/// quick start - minimal example to get started
use loan_prepayment_rs::{AmortizationEngine, Decimal, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // pay a 40 year mortgage off in 20
    let mut engine = AmortizationEngine::builder()
        .initial_capital(Money::from_major(179_265))
        .annual_interest_rate(Decimal::new(27, 1))
        .original_term(480)
        .desired_term(240)
        .extra_amortization_cost_factor(Decimal::new(5, 3))
        .build()?;

    let schedule = engine.run()?;

    println!("scheduled payment: {}", schedule.scheduled_payment.to_fixed());
    println!("extra each month:  {}", schedule.extra_monthly.to_fixed());
    println!("months simulated:  {}", schedule.len());

    Ok(())
}
