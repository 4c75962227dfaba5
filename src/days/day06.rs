use crate::grid::{Direction, Grid, Point};
use crate::runner::Options;
use anyhow::{bail, Context, Result};
use bitvec::prelude::*;
use log::debug;

enum Patrol {
    Exits(BitVec),
    Loops,
}

fn patrol(grid: &Grid, start: Point, facing: Direction, obstruction: Option<Point>) -> Patrol {
    let mut seen = bitvec![0; grid.width() * grid.height() * 4];
    let (mut pos, mut dir) = (start, facing);
    loop {
        let state = (pos.1 as usize * grid.width() + pos.0 as usize) * 4 + dir.index();
        if seen.replace(state, true) {return Patrol::Loops}
        let next = dir.step(pos);
        match grid.get(next) {
            None => return Patrol::Exits(seen),
            Some(b'#') => dir = dir.turn_right(),
            Some(_) if Some(next) == obstruction => dir = dir.turn_right(),
            Some(_) => pos = next,
        }
    }
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let grid = Grid::parse(input)?;
    let (start, facing) = grid.points()
        .find_map(|p| Direction::from_arrow(grid[p]).map(|dir| (p, dir)))
        .context("no guard on the map")?;

    let Patrol::Exits(seen) = patrol(&grid, start, facing, None) else {
        bail!("the guard never leaves the map");
    };
    let visited = seen.chunks(4)
        .enumerate()
        .filter(|(_, dirs)| dirs.any())
        .map(|(ix, _)| ((ix % grid.width()) as isize, (ix / grid.width()) as isize))
        .collect::<Vec<_>>();
    debug!("guard visits {} cells", visited.len());

    if part == 1 {
        Ok(visited.len().to_string())
    } else {
        // only cells on the original path can change it
        Ok(visited.iter()
                  .filter(|&&p| p != start)
                  .filter(|&&p| matches!(patrol(&grid, start, facing, Some(p)), Patrol::Loops))
                  .count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn visited_cells() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE, &Options::default())?, "41");
        Ok(())
    }

    #[test]
    fn looping_obstructions() -> Result<()> {
        assert_eq!(solve(2, EXAMPLE, &Options::default())?, "6");
        Ok(())
    }

    #[test]
    fn guard_is_required() {
        assert!(solve(1, "...\n.#.\n", &Options::default()).is_err());
    }

    #[test]
    fn guard_facing_right() -> Result<()> {
        assert_eq!(solve(1, ">..\n...\n", &Options::default())?, "3");
        Ok(())
    }
}
