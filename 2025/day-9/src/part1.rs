use itertools::Itertools;
use miette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Corner {
    x: i64,
    y: i64,
}

/// Parses one "x,y" corner per line.
fn parse_corners(input: &str) -> Result<Vec<Corner>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| miette!("Expected \"x,y\", got {:?}", line))?;
            Ok(Corner {
                x: x.trim().parse().into_diagnostic()?,
                y: y.trim().parse().into_diagnostic()?,
            })
        })
        .collect()
}

/// Tile count of the rectangle spanned by two opposite corners, borders
/// included.
fn rectangle_area(a: Corner, b: Corner) -> i64 {
    ((a.x - b.x).abs() + 1) * ((a.y - b.y).abs() + 1)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let corners = parse_corners(input)?;

    let biggest = corners
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| rectangle_area(a, b))
        .max()
        .unwrap_or(0);

    Ok(biggest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";
        assert_eq!("50", process(input)?);
        Ok(())
    }
}
