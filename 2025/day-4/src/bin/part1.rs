use miette::*;

use advent2025_day_4::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string("input")
        .into_diagnostic()
        .wrap_err("failed to read input")?;
    let count = part1::process(&input)?;
    println!("Number of accessible roll: {}", count);
    Ok(())
}
