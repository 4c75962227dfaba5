use crate::grid::{Grid, GridSearch, Point};
use crate::runner::Options;
use anyhow::Result;
use log::debug;

fn count_xmas(grid: &Grid, search: GridSearch) -> usize {
    search.lanes(grid).map(|lane| {
        let cells = lane.map(|p| grid[p]).collect::<Vec<_>>();
        cells.windows(4).filter(|window| *window == b"XMAS").count()
    }).sum()
}

fn mas_centres(grid: &Grid, search: GridSearch) -> Vec<Point> {
    search.lanes(grid).flat_map(|lane| {
        let points = lane.collect::<Vec<_>>();
        points.windows(3)
              .filter(|window| window.iter().map(|&p| grid[p]).eq(*b"MAS"))
              .map(|window| window[1])
              .collect::<Vec<_>>()
    }).collect()
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let grid = Grid::parse(input)?;

    if part == 1 {
        Ok(GridSearch::ALL.iter().map(|&search| {
            let found = count_xmas(&grid, search);
            debug!("{:?}: {}", search, found);
            found
        }).sum::<usize>().to_string())
    } else {
        // every X has exactly one MAS along the main diagonal; check the other one
        Ok([GridSearch::DiagonalUlBr, GridSearch::DiagonalBrUl].iter()
            .flat_map(|&search| mas_centres(&grid, search))
            .filter(|&(x, y)| matches!(
                (grid.get((x + 1, y - 1)), grid.get((x - 1, y + 1))),
                (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
            ))
            .count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn xmas_in_all_directions() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE, &Options::default())?, "18");
        Ok(())
    }

    #[test]
    fn crossed_mas() -> Result<()> {
        assert_eq!(solve(2, EXAMPLE, &Options::default())?, "9");
        Ok(())
    }

    #[test]
    fn single_row_both_ways() -> Result<()> {
        let grid = Grid::parse("XMASAMX")?;
        assert_eq!(count_xmas(&grid, GridSearch::HorizontalRight), 1);
        assert_eq!(count_xmas(&grid, GridSearch::HorizontalLeft), 1);
        assert_eq!(count_xmas(&grid, GridSearch::VerticalDown), 0);
        Ok(())
    }

    #[test]
    fn lone_x_mas() -> Result<()> {
        assert_eq!(solve(2, "M.S\n.A.\nM.S\n", &Options::default())?, "1");
        assert_eq!(solve(2, "M.M\n.A.\nM.S\n", &Options::default())?, "0");
        Ok(())
    }
}
