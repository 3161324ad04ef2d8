use miette::*;

use advent2025_day_8::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string("input")
        .into_diagnostic()
        .wrap_err("failed to read input")?;
    let product = part1::process(&input)?;
    println!(
        "Multiply together, the sizes of the three largest circuits is: {}",
        product
    );
    Ok(())
}
