/// reference scenario - print the full payoff table
use loan_prepayment_rs::{simulate_schedule, Decimal, LoanParameters, Money, RecordView};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = LoanParameters::new(
        Money::from_major(179_265),
        Decimal::new(27, 1),
        480,
        240,
        Decimal::new(5, 3),
    );

    let schedule = simulate_schedule(&params)?;

    println!(
        "{:>5} {:>14} {:>10} {:>12} {:>10} {:>10}",
        "month", "balance", "interest", "principal", "extra", "payment"
    );
    for record in &schedule {
        let row = RecordView::from(record);
        println!(
            "{:>5} {:>14} {:>10} {:>12} {:>10} {:>10}",
            row.month_index,
            row.remaining_balance,
            row.interest_paid,
            row.scheduled_principal_paid,
            row.extra_principal_paid,
            row.total_scheduled_payment,
        );
    }

    println!("\nstatus: {:?}", schedule.status());
    println!("total interest: {}", schedule.totals.interest.to_fixed());

    Ok(())
}
