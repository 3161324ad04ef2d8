use std::collections::{HashSet, VecDeque};

use chumsky::prelude::*;
use miette::*;

/// One machine from the input line
/// `[.##.] (3) (1,3) (2) (2,3) (0,2) {3,5,4,7}`.
///
/// Switch states are bitmasks, one bit per switch; pressing a button XORs
/// its mask in. The `{}` joltage block is not used here.
#[derive(Debug)]
struct Machine {
    target: u64,
    buttons: Vec<u64>,
}

impl Machine {
    fn new(diagram: &str, buttons: Vec<Vec<u32>>) -> Self {
        let target = diagram
            .chars()
            .enumerate()
            .filter(|&(_, c)| c == '#')
            .fold(0, |mask, (i, _)| mask | 1 << i);

        let buttons = buttons
            .into_iter()
            .map(|toggles| toggles.into_iter().fold(0, |mask, i| mask | 1 << i))
            .collect();

        Self { target, buttons }
    }

    /// Fewest presses taking the all-off state to the target, or `None`
    /// when no sequence of presses reaches it.
    fn fewest_presses(&self) -> Option<usize> {
        if self.target == 0 {
            return Some(0);
        }

        let mut seen = HashSet::from([0u64]);
        let mut queue = VecDeque::from([(0u64, 0usize)]);

        while let Some((state, presses)) = queue.pop_front() {
            // Presses commute, so only buttons touching a still-wrong
            // switch are worth trying from any given state.
            let useful = self
                .buttons
                .iter()
                .filter(|&&button| button & (state ^ self.target) != 0);

            for &button in useful {
                let next = state ^ button;
                if next == self.target {
                    return Some(presses + 1);
                }
                if seen.insert(next) {
                    queue.push_back((next, presses + 1));
                }
            }
        }

        None
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Machine>, extra::Err<Rich<'a, char>>> {
    let index = text::int(10).from_str::<u32>().unwrapped();

    // [.##.]
    let diagram = one_of(".#")
        .repeated()
        .collect::<String>()
        .delimited_by(just('['), just(']'));

    // (1,3)
    let button = index
        .separated_by(just(','))
        .collect::<Vec<_>>()
        .delimited_by(just('('), just(')'));

    // {3,5,4,7} -- joltage requirements, ignored by part one
    let joltage = none_of("}")
        .repeated()
        .delimited_by(just('{'), just('}'))
        .ignored();

    let machine = diagram
        .then_ignore(just(' '))
        .then(button.separated_by(just(' ')).collect::<Vec<_>>())
        .then_ignore(just(' '))
        .then_ignore(joltage)
        .map(|(diagram, buttons)| Machine::new(&diagram, buttons));

    machine
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let machines = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let total: usize = machines
        .iter()
        .map(|machine| {
            machine
                .fewest_presses()
                .ok_or_else(|| miette!("No button sequence reaches the target state"))
        })
        .sum::<Result<usize>>()?;

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_lit_machine_needs_no_presses() {
        let machine = Machine::new("....", vec![vec![0]]);
        assert_eq!(Some(0), machine.fewest_presses());
    }

    #[test]
    fn single_button_per_switch() {
        let machine = Machine::new("##", vec![vec![0], vec![1]]);
        assert_eq!(Some(2), machine.fewest_presses());
    }

    #[test]
    fn unreachable_target_is_detected() {
        let machine = Machine::new("#.", vec![vec![1]]);
        assert_eq!(None, machine.fewest_presses());
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}";
        assert_eq!("7", process(input)?);
        Ok(())
    }
}
