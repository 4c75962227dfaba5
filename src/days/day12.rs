use crate::grid::{point_add, Direction, Grid, Point};
use crate::runner::Options;
use anyhow::Result;
use bitvec::prelude::*;
use log::debug;

struct Region {
    plant: u8,
    area: usize,
    perimeter: usize,
    sides: usize,
}

fn fill(grid: &Grid, start: Point, seen: &mut BitVec) -> Region {
    let plant = grid[start];
    let same = |p: Point| grid.get(p) == Some(plant);
    let index = |(x, y): Point| y as usize * grid.width() + x as usize;

    let mut region = Region {plant, area: 0, perimeter: 0, sides: 0};
    let mut stack = vec![start];
    seen.set(index(start), true);
    while let Some(p) = stack.pop() {
        region.area += 1;
        for d in Direction::ALL {
            let next = d.step(p);
            if !same(next) {
                region.perimeter += 1;
            } else if !seen[index(next)] {
                seen.set(index(next), true);
                stack.push(next);
            }

            // each corner of the region is one end of one side
            let (a, b) = (same(d.step(p)), same(d.turn_right().step(p)));
            let diagonal = same(point_add(d.step(p), d.turn_right().delta()));
            if !a && !b || a && b && !diagonal {region.sides += 1}
        }
    }
    region
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let grid = Grid::parse(input)?;
    let mut seen = bitvec![0; grid.width() * grid.height()];
    let mut price = 0;
    for p in grid.points() {
        if seen[p.1 as usize * grid.width() + p.0 as usize] {continue}
        let region = fill(&grid, p, &mut seen);
        debug!("region {} at {:?}: area {}, perimeter {}, sides {}",
               region.plant as char, p, region.area, region.perimeter, region.sides);
        price += region.area * if part == 1 {region.perimeter} else {region.sides};
    }
    Ok(price.to_string())
}
