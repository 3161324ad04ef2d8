use std::collections::{BTreeSet, HashMap, HashSet};

use miette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
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

fn in_interval(value: i64, lo: i64, hi: i64) -> bool {
    lo <= value && value <= hi
}

/// True when a segment covering `seg_lo..=seg_hi` sticks out on both sides
/// of `lo..=hi`.
fn spans_across(seg_lo: i64, seg_hi: i64, lo: i64, hi: i64) -> bool {
    seg_lo < lo && seg_hi > hi
}

/// An axis-aligned region. Either interval may be empty (`lo > hi`), in
/// which case nothing is inside.
#[derive(Debug, Clone, Copy, Default)]
struct Band {
    lo: Corner,
    hi: Corner,
}

impl Band {
    fn contains(&self, c: Corner) -> bool {
        in_interval(c.x, self.lo.x, self.hi.x) && in_interval(c.y, self.lo.y, self.hi.y)
    }
}

/// Decides whether two corners of the tiled boundary can be joined by
/// walking along the boundary's rows and columns without touching a blocked
/// band.
struct TileWalker {
    blocked: Band,
    /// Corner x coordinates present in each row.
    xs_by_y: HashMap<i64, BTreeSet<i64>>,
    /// Corner y coordinates present in each column.
    ys_by_x: HashMap<i64, BTreeSet<i64>>,
}

impl TileWalker {
    fn new(corners: &[Corner]) -> Self {
        let mut xs_by_y: HashMap<i64, BTreeSet<i64>> = HashMap::new();
        let mut ys_by_x: HashMap<i64, BTreeSet<i64>> = HashMap::new();
        for &corner in corners {
            xs_by_y.entry(corner.y).or_default().insert(corner.x);
            ys_by_x.entry(corner.x).or_default().insert(corner.y);
        }

        Self {
            blocked: Band::default(),
            xs_by_y,
            ys_by_x,
        }
    }

    /// A rectangle only counts when its corners connect around both sides.
    /// Each pass blocks the rectangle's inner rows, extended past one of
    /// its vertical edges:
    ///
    ///  ●─────────┐                       ●─────────┐
    ///  │*********************      ******│         │
    ///  └─────────●                       └─────────●
    fn connects(&mut self, from: Corner, to: Corner) -> bool {
        let lo_x = from.x.min(to.x);
        let hi_x = from.x.max(to.x);
        let lo_y = from.y.min(to.y);
        let hi_y = from.y.max(to.y);

        self.blocked = Band {
            lo: Corner {
                x: lo_x + 1,
                y: lo_y + 1,
            },
            hi: Corner {
                x: i64::MAX,
                y: hi_y - 1,
            },
        };
        let mut visited = HashSet::new();
        if !self.walk_row(from, to, &mut visited) {
            return false;
        }

        self.blocked = Band {
            lo: Corner { x: 0, y: lo_y + 1 },
            hi: Corner {
                x: hi_x - 1,
                y: hi_y - 1,
            },
        };
        visited.clear();
        self.walk_row(from, to, &mut visited)
    }

    fn walk_row(&self, at: Corner, to: Corner, visited: &mut HashSet<Corner>) -> bool {
        if visited.contains(&at) {
            return false;
        }

        // Corners come in row/column pairs, so any corner we stand on has a
        // non-empty entry in both maps.
        let xs = &self.xs_by_y[&at.y];
        if to.y == at.y
            && !self.crosses_blocked(at, to)
            && *xs.first().unwrap() <= to.x
            && to.x <= *xs.last().unwrap()
        {
            return true;
        }

        for &x in xs {
            let next = Corner { x, y: at.y };
            if !self.crosses_blocked(at, next) && self.walk_column(next, to, visited) {
                return true;
            }
        }
        false
    }

    fn walk_column(&self, at: Corner, to: Corner, visited: &mut HashSet<Corner>) -> bool {
        if visited.contains(&at) {
            return false;
        }

        let ys = &self.ys_by_x[&at.x];
        if to.x == at.x
            && !self.crosses_blocked(at, to)
            && *ys.first().unwrap() <= to.y
            && to.y <= *ys.last().unwrap()
        {
            return true;
        }
        visited.insert(at);

        for &y in ys {
            let next = Corner { x: at.x, y };
            if !self.crosses_blocked(at, next) && self.walk_row(next, to, visited) {
                return true;
            }
        }
        false
    }

    /// True when the axis-aligned segment from `a` to `b` touches the
    /// blocked band: an endpoint inside it, or the segment crossing clean
    /// over it.
    fn crosses_blocked(&self, a: Corner, b: Corner) -> bool {
        let band = &self.blocked;

        let lo = Corner {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
        };
        let hi = Corner {
            x: a.x.max(b.x),
            y: a.y.max(b.y),
        };

        if band.contains(lo) || band.contains(hi) {
            return true;
        }

        if lo.y == hi.y {
            spans_across(lo.x, hi.x, band.lo.x, band.hi.x)
                && in_interval(lo.y, band.lo.y, band.hi.y)
        } else if lo.x == hi.x {
            spans_across(lo.y, hi.y, band.lo.y, band.hi.y)
                && in_interval(lo.x, band.lo.x, band.hi.x)
        } else {
            unreachable!("walks move along a single row or column")
        }
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let corners = parse_corners(input)?;
    let mut walker = TileWalker::new(&corners);

    let mut biggest = 0;
    for (i, &a) in corners.iter().enumerate() {
        for &b in &corners[i + 1..] {
            let area = rectangle_area(a, b);
            if area > biggest && walker.connects(a, b) {
                biggest = area;
            }
        }
    }

    Ok(biggest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rectangle_uses_its_diagonal() -> Result<()> {
        // Four corners of a filled 6x4 rectangle
        assert_eq!("24", process("0,0\n5,0\n5,3\n0,3")?);
        Ok(())
    }

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
        assert_eq!("24", process(input)?);
        Ok(())
    }
}
