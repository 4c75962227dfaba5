use crate::grid::{Grid, Point};
use crate::input::lines;
use crate::runner::Options;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn parse(input: &str, side: usize) -> Result<Vec<Point>> {
    lines(input).map(|line| -> Result<Point> {
        let (x, y) = line.split_once(',').with_context(|| format!("bad coordinate {:?}", line))?;
        let p: Point = (x.trim().parse()?, y.trim().parse()?);
        let range = 0 .. side as isize;
        if !range.contains(&p.0) || !range.contains(&p.1) {bail!("{:?} is outside the memory space", p)}
        Ok(p)
    }).collect()
}

fn corrupted(side: usize, bytes: &[Point]) -> Grid {
    let mut grid = Grid::new(side, side, b'.');
    for &p in bytes {grid.set(p, b'#')}
    grid
}

fn shortest_path(grid: &Grid) -> Option<usize> {
    let (start, goal) = (grid.corner_upper_left(), grid.corner_lower_right());
    let heuristic = |(x, y): Point| (goal.0 - x).unsigned_abs() + (goal.1 - y).unsigned_abs();
    let index = |(x, y): Point| y as usize * grid.width() + x as usize;
    if grid[start] == b'#' {return None}

    let mut dist = vec![usize::MAX; grid.width() * grid.height()];
    let mut queue = BinaryHeap::new();
    dist[index(start)] = 0;
    queue.push(Reverse((heuristic(start), 0, start)));
    while let Some(Reverse((_, d, p))) = queue.pop() {
        if p == goal {return Some(d)}
        if d > dist[index(p)] {continue}
        for next in grid.neighbours(p) {
            if grid[next] == b'#' || d + 1 >= dist[index(next)] {continue}
            dist[index(next)] = d + 1;
            queue.push(Reverse((d + 1 + heuristic(next), d + 1, next)));
        }
    }
    None
}

pub fn solve(part: u8, input: &str, options: &Options) -> Result<String> {
    let (side, fallen) = if options.sample {(7, 12)} else {(71, 1024)};
    let bytes = parse(input, side)?;
    debug!("{} bytes on a {}x{} memory space", bytes.len(), side, side);

    if part == 1 {
        let grid = corrupted(side, &bytes[.. fallen.min(bytes.len())]);
        debug!("after {} bytes:\n{}", fallen, grid);
        return Ok(shortest_path(&grid).context("the exit is unreachable")?.to_string());
    }

    // smallest count of fallen bytes that blocks the exit
    let (mut open, mut blocked) = (0, bytes.len());
    if shortest_path(&corrupted(side, &bytes)).is_some() {bail!("the exit is never cut off")}
    while blocked - open > 1 {
        let mid = (open + blocked) / 2;
        if shortest_path(&corrupted(side, &bytes[.. mid])).is_some() {open = mid} else {blocked = mid}
    }
    let (x, y) = bytes[blocked - 1];
    info!("byte {} cuts off the exit", blocked);
    Ok(format!("{},{}", x, y))
}
