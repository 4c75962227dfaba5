use crate::grid::{Direction, Grid, Point};
use crate::runner::Options;
use anyhow::{Context, Result};
use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

const STEP: u64 = 1;
const TURN: u64 = 1000;

struct Maze {
    grid: Grid,
    start: Point,
    end: Point,
}

impl Maze {
    fn state(&self, (x, y): Point, dir: Direction) -> usize {
        (y as usize * self.grid.width() + x as usize) * 4 + dir.index()
    }

    fn point(&self, state: usize) -> (Point, Direction) {
        let cell = state / 4;
        (((cell % self.grid.width()) as isize, (cell / self.grid.width()) as isize), Direction::ALL[state % 4])
    }

    fn open(&self, p: Point) -> bool {
        self.grid.get(p).is_some_and(|cell| cell != b'#')
    }

    fn costs(&self, sources: impl IntoIterator<Item = usize>, backward: bool) -> Vec<u64> {
        let mut cost = vec![u64::MAX; self.grid.width() * self.grid.height() * 4];
        let mut queue = BinaryHeap::new();
        for source in sources {
            cost[source] = 0;
            queue.push(Reverse((0, source)));
        }
        while let Some(Reverse((c, state))) = queue.pop() {
            if c > cost[state] {continue}
            let (p, dir) = self.point(state);
            let walk = if backward {dir.reverse()} else {dir};
            let mut moves = vec![(self.state(p, dir.turn_left()), c + TURN),
                                 (self.state(p, dir.turn_right()), c + TURN)];
            if self.open(walk.step(p)) {moves.push((self.state(walk.step(p), dir), c + STEP))}
            for (next, c) in moves {
                if c < cost[next] {
                    cost[next] = c;
                    queue.push(Reverse((c, next)));
                }
            }
        }
        cost
    }
}

fn parse(input: &str) -> Result<Maze> {
    let grid = Grid::parse(input)?;
    let start = grid.find(b'S').context("no start tile")?;
    let end = grid.find(b'E').context("no end tile")?;
    Ok(Maze {grid, start, end})
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let maze = parse(input)?;
    let forward = maze.costs([maze.state(maze.start, Direction::Right)], false);
    let best = Direction::ALL.iter()
                             .map(|&dir| forward[maze.state(maze.end, dir)])
                             .min()
                             .filter(|&best| best != u64::MAX)
                             .context("the end is unreachable")?;
    debug!("best score {}", best);
    if part == 1 {return Ok(best.to_string())}

    let backward = maze.costs(Direction::ALL.map(|dir| maze.state(maze.end, dir)), true);
    let tiles = maze.grid.points().filter(|&p| Direction::ALL.iter().any(|&dir| {
        let state = maze.state(p, dir);
        forward[state].checked_add(backward[state]) == Some(best)
    })).count();
    Ok(tiles.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND: &str = "#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn lowest_score() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE, &Options::default())?, "7036");
        assert_eq!(solve(1, SECOND, &Options::default())?, "11048");
        Ok(())
    }

    #[test]
    fn best_seats() -> Result<()> {
        assert_eq!(solve(2, EXAMPLE, &Options::default())?, "45");
        assert_eq!(solve(2, SECOND, &Options::default())?, "64");
        Ok(())
    }

    #[test]
    fn walled_in_end() {
        assert!(solve(1, "#####\n#S#E#\n#####\n", &Options::default()).is_err());
    }
}
