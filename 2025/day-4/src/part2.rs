use miette::*;

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';
const MAX_ADJACENT_ROLLS: usize = 3;

/// The warehouse floor, one row of cells per input line.
struct Floor {
    rows: Vec<Vec<u8>>,
}

impl Floor {
    fn parse(input: &str) -> Result<Self> {
        let rows: Vec<Vec<u8>> = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.bytes().collect())
            .collect();

        if rows.is_empty() {
            return Err(miette!("Input contains no grid rows"));
        }
        Ok(Self { rows })
    }

    /// Rolls in the up-to-8 cells around (row, col), window clamped at the
    /// grid edges.
    fn adjacent_rolls(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for r in row.saturating_sub(1)..=(row + 1).min(self.rows.len() - 1) {
            let line = &self.rows[r];
            for c in col.saturating_sub(1)..=(col + 1).min(line.len() - 1) {
                if (r, c) != (row, col) && line[c] == ROLL {
                    count += 1;
                }
            }
        }
        count
    }

    fn is_accessible(&self, row: usize, col: usize) -> bool {
        self.rows[row][col] == ROLL && self.adjacent_rolls(row, col) <= MAX_ADJACENT_ROLLS
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut floor = Floor::parse(input)?;

    // Lift rolls out as soon as they become reachable. Removing a roll
    // mid-sweep frees its neighbors for the rest of the same sweep; the
    // final remaining set is the same whichever order rolls are taken.
    let mut removed = 0usize;
    loop {
        let removed_before = removed;

        for row in 0..floor.rows.len() {
            for col in 0..floor.rows[row].len() {
                if floor.is_accessible(row, col) {
                    floor.rows[row][col] = EMPTY;
                    removed += 1;
                }
            }
        }

        if removed == removed_before {
            break;
        }
    }

    Ok(removed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
        assert_eq!("43", process(input)?);
        Ok(())
    }
}
