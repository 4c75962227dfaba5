use crate::input::lines;
use crate::runner::Options;
use anyhow::{Context, Result};
use itertools::{Itertools, MinMaxResult};
use log::debug;

fn parse_report(line: &str) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|level| level.parse().with_context(|| format!("bad level {:?} in {:?}", level, line)))
        .collect()
}

fn is_safe(levels: &[i64]) -> bool {
    match levels.iter().tuple_windows().map(|(x, y)| y - x).minmax() {
        MinMaxResult::NoElements => true,
        MinMaxResult::OneElement(diff) => (1 ..= 3).contains(&diff.abs()),
        MinMaxResult::MinMax(min, max) => min >= 1 && max <= 3 || min >= -3 && max <= -1,
    }
}

fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels) || (0 .. levels.len()).any(|skip| {
        let mut dampened = levels.to_vec();
        dampened.remove(skip);
        is_safe(&dampened)
    })
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let mut safe = 0;
    for line in lines(input) {
        let levels = parse_report(line)?;
        let report_safe = if part == 1 {is_safe(&levels)} else {is_safe_dampened(&levels)};
        debug!("{}: {}", if report_safe {"safe    "} else {"not safe"}, line);
        if report_safe {safe += 1}
    }
    Ok(safe.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn safe_reports() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE, &Options::default())?, "2");
        Ok(())
    }

    #[test]
    fn problem_dampener() -> Result<()> {
        assert_eq!(solve(2, EXAMPLE, &Options::default())?, "4");
        Ok(())
    }

    #[test]
    fn dampener_can_drop_either_end() {
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
        assert!(is_safe_dampened(&[1, 2, 3, 9]));
        assert!(!is_safe_dampened(&[1, 5, 9, 13]));
    }
}
