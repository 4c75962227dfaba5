use crate::grid::{point_add, point_sub, Grid, Point};
use crate::runner::Options;
use anyhow::{bail, Result};
use itertools::Itertools;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::iter::successors;

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let grid = Grid::parse(input)?;

    let mut antennas: FxHashMap<u8, Vec<Point>> = FxHashMap::default();
    for p in grid.points() {
        match grid[p] {
            b'.' => (),
            frequency if frequency.is_ascii_alphanumeric() => antennas.entry(frequency).or_default().push(p),
            cell => bail!("unexpected character {:?} at {:?}", cell as char, p)
        }
    }
    debug!("{} frequencies", antennas.len());

    let mut antinodes = FxHashSet::default();
    for points in antennas.values() {
        for (&a, &b) in points.iter().tuple_combinations() {
            let diff = point_sub(a, b);
            if part == 1 {
                antinodes.extend([point_add(a, diff), point_sub(b, diff)].into_iter()
                                                                          .filter(|&p| grid.is_in_bounds(p)));
            } else {
                for (from, step) in [(a, diff), (b, point_sub((0, 0), diff))] {
                    antinodes.extend(successors(Some(from), |&p| Some(point_add(p, step)))
                                         .take_while(|&p| grid.is_in_bounds(p)));
                }
            }
        }
    }
    Ok(antinodes.len().to_string())
}
