use crate::input::lines;
use crate::runner::Options;
use anyhow::{bail, Context, Result};
use itertools::Itertools;
use std::iter::zip;

fn parse(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for line in lines(input) {
        let Some((left, right)) = line.split_whitespace().collect_tuple() else {
            bail!("cannot parse {:?} as two location ids", line)
        };
        lefts.push(left.parse::<i64>().with_context(|| format!("bad location id {:?}", left))?);
        rights.push(right.parse::<i64>().with_context(|| format!("bad location id {:?}", right))?);
    }
    Ok((lefts, rights))
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let (mut lefts, mut rights) = parse(input)?;

    if part == 1 {
        lefts.sort_unstable();
        rights.sort_unstable();
        Ok(zip(lefts, rights).map(|(left, right)| (left - right).abs()).sum::<i64>().to_string())
    } else {
        let occurrences = rights.into_iter().counts();
        Ok(lefts.iter().map(|left|
            left * occurrences.get(left).copied().unwrap_or(0) as i64
        ).sum::<i64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn total_distance() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE, &Options::default())?, "11");
        Ok(())
    }

    #[test]
    fn similarity_score() -> Result<()> {
        assert_eq!(solve(2, EXAMPLE, &Options::default())?, "31");
        Ok(())
    }

    #[test]
    fn rejects_odd_rows() {
        assert!(solve(1, "1 2 3\n", &Options::default()).is_err());
        assert!(solve(1, "1 x\n", &Options::default()).is_err());
    }
}
