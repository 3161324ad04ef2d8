use std::collections::HashSet;

use chumsky::prelude::*;
use miette::*;

/// An inclusive product ID range, as written in the input.
type IdRange = (u64, u64);

/// Returns `true` when the decimal digits of `id` are a shorter block of
/// digits repeated end to end, e.g. 1212 ("12" twice) or 444 ("4" three
/// times).
///
/// Candidate block lengths run from 1 up to half the digit count. A length
/// that does not divide the digit count leaves a short trailing chunk which
/// can never equal the block, so no divisibility check is needed. Single
/// digit ids have no candidates at all and never repeat.
fn is_repeated_pattern(id: u64) -> bool {
    let digits = id.to_string();
    let digits = digits.as_bytes();

    (1..=digits.len() / 2).any(|block_len| {
        let block = &digits[..block_len];
        digits.chunks(block_len).all(|chunk| chunk == block)
    })
}

/// Every id inside the range whose digits repeat a shorter block. These are
/// the ids the puzzle considers invalid.
fn invalid_ids((start, end): IdRange) -> impl Iterator<Item = u64> {
    (start..=end).filter(|&id| is_repeated_pattern(id))
}

/// Parses the comma separated list of "start-end" ranges.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<IdRange>, extra::Err<Rich<'a, char>>> {
    let range = text::int(10)
        .from_str::<u64>()
        .unwrapped()
        .then_ignore(just('-'))
        .then(text::int(10).from_str::<u64>().unwrapped())
        .padded(); // The real input wraps lines after some commas

    range.separated_by(just(',')).allow_trailing().collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // Ranges may overlap, so collect into a set before summing to count
    // each invalid id exactly once.
    let invalid: HashSet<u64> = ranges.into_iter().flat_map(invalid_ids).collect();
    let sum: u64 = invalid.iter().sum();

    Ok(sum.to_string())
}
