use crate::grid::{Grid, Point};
use crate::runner::Options;
use anyhow::Result;
use itertools::Itertools;
use log::debug;

fn peaks(grid: &Grid, p: Point, found: &mut Vec<Point>) {
    let height = grid[p];
    if height == b'9' {
        found.push(p);
        return;
    }
    for next in grid.neighbours(p) {
        if grid[next] == height + 1 {peaks(grid, next, found)}
    }
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let grid = Grid::parse(input)?;
    let mut found = vec![];
    let total = grid.positions(b'0').map(|trailhead| {
        found.clear();
        peaks(&grid, trailhead, &mut found);
        let value = if part == 1 {found.iter().unique().count()} else {found.len()};
        debug!("trailhead {:?}: {}", trailhead, value);
        value
    }).sum::<usize>();
    Ok(total.to_string())
}
