use crate::input::sections;
use crate::runner::Options;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;
use regex::Regex;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    fn tokens(&self, limit: Option<i64>) -> Option<i64> {
        let ((ax, ay), (bx, by), (px, py)) = (self.a, self.b, self.prize);
        let det = ax * by - ay * bx;
        if det == 0 {
            debug!("buttons of {:?} are collinear", self);
            return None;
        }
        let (a_num, b_num) = (px * by - py * bx, ax * py - ay * px);
        if a_num % det != 0 || b_num % det != 0 {return None}
        let (a, b) = (a_num / det, b_num / det);
        if a < 0 || b < 0 || limit.is_some_and(|limit| a > limit || b > limit) {return None}
        Some(3 * a + b)
    }
}

fn parse(input: &str) -> Result<Vec<Machine>> {
    let number = Regex::new(r"-?\d+")?;
    sections(input).into_iter().map(|section| -> Result<Machine> {
        let (ax, ay, bx, by, px, py) = number.find_iter(section)
            .map(|m| m.as_str().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .collect_tuple()
            .with_context(|| format!("expected six numbers in {:?}", section))?;
        Ok(Machine {a: (ax, ay), b: (bx, by), prize: (px, py)})
    }).collect()
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let mut machines = parse(input)?;
    let limit = if part == 1 {Some(100)} else {None};
    if part == 2 {
        for machine in &mut machines {
            machine.prize = (machine.prize.0 + PRIZE_OFFSET, machine.prize.1 + PRIZE_OFFSET);
        }
    }
    let total = machines.iter().filter_map(|machine| machine.tokens(limit)).sum::<i64>();
    Ok(total.to_string())
}
