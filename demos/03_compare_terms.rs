/// compare terms - how much interest each target term saves
use loan_prepayment_rs::{AmortizationEngine, ComparisonView, Decimal, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{:>6} {:>10} {:>14} {:>12} {:>12}",
        "target", "extra", "interest", "saved", "net saved"
    );

    for desired_term in [480, 420, 360, 300, 240, 180] {
        let mut engine = AmortizationEngine::builder()
            .initial_capital(Money::from_major(179_265))
            .annual_interest_rate(Decimal::new(27, 1))
            .original_term(480)
            .desired_term(desired_term)
            .extra_amortization_cost_factor(Decimal::new(5, 3))
            .build()?;

        let extra = engine.quote()?.net_extra;
        let view = ComparisonView::from(&engine.compare()?);

        println!(
            "{:>6} {:>10} {:>14} {:>12} {:>12}",
            desired_term,
            extra.to_fixed(),
            view.accelerated_total_interest,
            view.interest_saved,
            view.net_savings,
        );
    }

    Ok(())
}
