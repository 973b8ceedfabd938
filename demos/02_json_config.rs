/// json config - load parameters from json and emit the schedule as json
use loan_prepayment_rs::{AmortizationEngine, SimulationConfig};

const CONFIG: &str = r#"{
    "loan": {
        "initial_capital": "250000",
        "annual_interest_rate": "3.1",
        "original_term": 360,
        "desired_term": 300,
        "extra_amortization_cost_factor": "0.005"
    },
    "term_policy": "Strict"
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig::from_json(CONFIG)?;
    let mut engine = AmortizationEngine::new(config)?;

    println!("{}", engine.json()?);

    println!("\n=== events ===\n");
    for event in engine.take_events() {
        println!("{}", serde_json::to_string(&event)?);
    }

    Ok(())
}
