use miette::*;

use advent2025_day_9::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string("input")
        .into_diagnostic()
        .wrap_err("failed to read input")?;
    let area = part1::process(&input)?;
    println!("Biggest rectangle: {}", area);
    Ok(())
}
