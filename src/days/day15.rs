use crate::grid::{Direction, Grid, Point};
use crate::input::sections;
use crate::runner::Options;
use anyhow::{bail, Context, Result};
use log::debug;

fn parse(input: &str) -> Result<(Grid, Vec<Direction>)> {
    let sections = sections(input);
    let &[map, moves] = &sections[..] else {bail!("expected a map and a list of moves")};
    let moves = moves.bytes()
                     .filter(|b| !b.is_ascii_whitespace())
                     .map(|b| Direction::from_arrow(b).with_context(|| format!("bad move {:?}", b as char)))
                     .collect::<Result<_>>()?;
    Ok((Grid::parse(map)?, moves))
}

fn widen(grid: &Grid) -> Result<Grid> {
    Grid::from_rows((0 .. grid.height()).map(|y| {
        grid.row(y).iter().flat_map(|&cell| match cell {
            b'O' => *b"[]",
            b'@' => *b"@.",
            cell => [cell, cell],
        }).collect::<Vec<_>>()
    }))
}

fn push(grid: &mut Grid, robot: Point, dir: Direction) -> Point {
    let mut moving = vec![robot];
    let mut ix = 0;
    while ix < moving.len() {
        let next = dir.step(moving[ix]);
        ix += 1;
        if moving.contains(&next) {continue}
        match grid.get(next) {
            None | Some(b'#') => return robot,
            Some(b'O') => moving.push(next),
            Some(half @ (b'[' | b']')) => {
                moving.push(next);
                if matches!(dir, Direction::Up | Direction::Down) {
                    let other = if half == b'[' {Direction::Right} else {Direction::Left};
                    let other = other.step(next);
                    if !moving.contains(&other) {moving.push(other)}
                }
            }
            _ => (),
        }
    }

    for &p in moving.iter().rev() {
        let cell = grid[p];
        grid.set(p, b'.');
        grid.set(dir.step(p), cell);
    }
    dir.step(robot)
}

fn gps_sum(grid: &Grid) -> isize {
    grid.points().filter(|&p| matches!(grid[p], b'O' | b'[')).map(|(x, y)| 100 * y + x).sum()
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let (grid, moves) = parse(input)?;
    let mut grid = if part == 1 {grid} else {widen(&grid)?};
    let mut robot = grid.find(b'@').context("no robot in the warehouse")?;
    for dir in moves {
        robot = push(&mut grid, robot, dir);
    }
    debug!("final warehouse:\n{}", grid);
    Ok(gps_sum(&grid).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const LARGE: &str = "##########
#..O..O.O#
#......O.#
#.OO..O.O#
#..O@..O.#
#O#..O...#
#O..O..O.#
#.OO.O.OO#
#....O...#
##########

<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
";

    #[test]
    fn small_warehouse() -> Result<()> {
        assert_eq!(solve(1, SMALL, &Options::default())?, "2028");
        Ok(())
    }

    #[test]
    fn large_warehouse() -> Result<()> {
        assert_eq!(solve(1, LARGE, &Options::default())?, "10092");
        assert_eq!(solve(2, LARGE, &Options::default())?, "9021");
        Ok(())
    }

    #[test]
    fn wide_boxes_push_together() -> Result<()> {
        let input = "#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";
        assert_eq!(solve(2, input, &Options::default())?, "618");
        Ok(())
    }

    #[test]
    fn widening() -> Result<()> {
        let grid = widen(&Grid::parse("#O@.\n")?)?;
        assert_eq!(grid.to_string(), "##[]@...");
        Ok(())
    }

    #[test]
    fn map_edge_stops_like_a_wall() -> Result<()> {
        assert_eq!(solve(1, "@.O\n\n<\n", &Options::default())?, "2");
        assert_eq!(solve(1, ".@O\n\n>>\n", &Options::default())?, "2");
        assert_eq!(solve(2, "@O\n\n<^v>>\n", &Options::default())?, "2");
        Ok(())
    }

    #[test]
    fn missing_moves() {
        assert!(solve(1, "###\n#@#\n###\n", &Options::default()).is_err());
    }
}
