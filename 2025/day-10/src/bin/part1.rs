use miette::*;

use advent2025_day_10::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string("input")
        .into_diagnostic()
        .wrap_err("failed to read input")?;
    let presses = part1::process(&input)?;
    println!(
        "To set all the machines in the desired state, a minimal of {} button press is needed.",
        presses
    );
    Ok(())
}
