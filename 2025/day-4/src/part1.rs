use miette::*;

const ROLL: u8 = b'@';
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

    /// Rolls in the up-to-8 cells around (row, col). The scan window is
    /// clamped at the grid edges rather than bounds-checking each neighbor.
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

    /// A roll can be lifted out when it is hemmed in by at most three others.
    fn is_accessible(&self, row: usize, col: usize) -> bool {
        self.rows[row][col] == ROLL && self.adjacent_rolls(row, col) <= MAX_ADJACENT_ROLLS
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let floor = Floor::parse(input)?;

    let accessible = (0..floor.rows.len())
        .flat_map(|row| (0..floor.rows[row].len()).map(move |col| (row, col)))
        .filter(|&(row, col)| floor.is_accessible(row, col))
        .count();

    Ok(accessible.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_roll_is_accessible() -> Result<()> {
        assert_eq!("1", process("...\n.@.\n...")?);
        Ok(())
    }

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
        assert_eq!("13", process(input)?);
        Ok(())
    }
}
