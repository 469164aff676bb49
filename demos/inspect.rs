//! Shows how numbers narrow to bfloat16.
//!
//! ```text
//! BFLOAT_LOG=trace cargo run --example inspect -- 1.00390631 1e-40 3.4e38
//! ```
use bfloat::{logger, BFloat16, BFloatResult};

fn main() -> BFloatResult<()> {
    logger::init()?;

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = ["1.0", "1.00390631", "-0.0", "1e-40", "3.38953139e38", "3.402823466e38", "nan"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    for input in &inputs {
        let value: BFloat16 = input.parse()?;
        println!(
            "{:>16} -> {:#06x} {:<10} {}",
            input,
            value.to_bits(),
            format!("{:?}", value.classify()),
            value
        );
    }

    Ok(())
}
