use miette::*;

use advent2025_day_9::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string("input")
        .into_diagnostic()
        .wrap_err("failed to read input")?;
    let area = part2::process(&input)?;
    println!("Biggest rectangle with red and green tiles: {}", area);
    Ok(())
}
