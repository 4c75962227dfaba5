use crate::input::lines;
use crate::runner::Options;
use anyhow::{bail, Context, Result};
use itertools::Itertools;
use log::{debug, info};
use regex::Regex;
use rustc_hash::FxHashSet;

type Robot = ((i64, i64), (i64, i64));

fn parse(input: &str) -> Result<Vec<Robot>> {
    let robot = Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$")?;
    lines(input).map(|line| -> Result<Robot> {
        let caps = robot.captures(line).with_context(|| format!("bad robot {:?}", line))?;
        let (px, py, vx, vy) = (1 ..= 4).map(|ix| caps[ix].parse::<i64>())
                                          .collect::<Result<Vec<_>, _>>()?
                                          .into_iter()
                                          .collect_tuple()
                                          .context("robot needs four numbers")?;
        Ok(((px, py), (vx, vy)))
    }).collect()
}

fn position_after(((px, py), (vx, vy)): Robot, seconds: i64, (w, h): (i64, i64)) -> (i64, i64) {
    ((px + vx * seconds).rem_euclid(w), (py + vy * seconds).rem_euclid(h))
}

fn safety_factor(positions: impl Iterator<Item = (i64, i64)>, (w, h): (i64, i64)) -> usize {
    let mut quadrants = [0; 4];
    for (x, y) in positions {
        if x == w / 2 || y == h / 2 {continue}
        quadrants[usize::from(x > w / 2) + 2 * usize::from(y > h / 2)] += 1;
    }
    quadrants.iter().product()
}

pub fn solve(part: u8, input: &str, options: &Options) -> Result<String> {
    let robots = parse(input)?;
    let floor = if options.sample {(11, 7)} else {(101, 103)};
    debug!("{} robots on a {:?} floor", robots.len(), floor);

    if part == 1 {
        let positions = robots.iter().map(|&robot| position_after(robot, 100, floor));
        return Ok(safety_factor(positions, floor).to_string());
    }

    // positions repeat after w * h seconds
    let mut occupied = FxHashSet::default();
    for seconds in 1 ..= floor.0 * floor.1 {
        occupied.clear();
        if robots.iter().all(|&robot| occupied.insert(position_after(robot, seconds, floor))) {
            info!("no robots overlap after {} seconds", seconds);
            return Ok(seconds.to_string());
        }
    }
    bail!("the robots never spread out")
}
