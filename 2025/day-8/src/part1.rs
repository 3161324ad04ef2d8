use std::collections::HashMap;

use chumsky::prelude::*;
use glam::I64Vec3;
use itertools::Itertools;
use miette::*;

/// How many of the closest junction pairs get wired together.
const PAIRS_TO_CONNECT: usize = 1000;

/// Parses one "x,y,z" junction coordinate per line.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<I64Vec3>, extra::Err<Rich<'a, char>>> {
    let coord = text::int(10).from_str::<i64>().unwrapped();

    let junction = coord
        .then_ignore(just(','))
        .then(coord)
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| I64Vec3::new(x, y, z));

    junction
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Wires the `pair_limit` closest junction pairs together and multiplies
/// the sizes of the three largest resulting circuits.
fn circuit_product(junctions: &[I64Vec3], pair_limit: usize) -> usize {
    // All unordered pairs, closest first. Squared distances order the same
    // as true distances and stay in integers.
    let mut pairs = (0..junctions.len())
        .tuple_combinations()
        .map(|(a, b)| (a, b, (junctions[a] - junctions[b]).length_squared()))
        .collect::<Vec<_>>();
    pairs.sort_unstable_by_key(|&(_, _, dist_sq)| dist_sq);

    // Each junction starts in a circuit of its own; wiring a pair relabels
    // one whole circuit to the other's label.
    let mut circuit: Vec<usize> = (0..junctions.len()).collect();
    for &(a, b, _) in pairs.iter().take(pair_limit) {
        let (keep, absorb) = (circuit[a], circuit[b]);
        if keep != absorb {
            for label in circuit.iter_mut() {
                if *label == absorb {
                    *label = keep;
                }
            }
        }
    }

    let mut sizes: HashMap<usize, usize> = HashMap::new();
    for &label in &circuit {
        *sizes.entry(label).or_default() += 1;
    }

    let mut sizes: Vec<usize> = sizes.into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.iter().take(3).product()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let junctions = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    if junctions.is_empty() {
        return Err(miette!("Input contains no junctions"));
    }

    Ok(circuit_product(&junctions, PAIRS_TO_CONNECT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

    #[test]
    fn example_with_ten_connections() {
        // The puzzle text walks through the example wiring only the 10
        // closest pairs.
        let junctions = parser().parse(EXAMPLE).unwrap();
        assert_eq!(40, circuit_product(&junctions, 10));
    }

    #[test]
    fn it_works() -> Result<()> {
        // With the full 1000-pair allowance the 20 example junctions all end up in one
        // circuit.
        assert_eq!("20", process(EXAMPLE)?);
        Ok(())
    }
}
