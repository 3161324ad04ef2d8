use miette::*;

use advent2025_day_2::part2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string("input.txt")
        .into_diagnostic()
        .wrap_err("failed to read input.txt")?;
    let sum = part2::process(&input)?;
    println!("Invalid ID sum: {}", sum);
    Ok(())
}
