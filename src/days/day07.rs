use crate::input::lines;
use crate::runner::Options;
use anyhow::{bail, Context, Result};

struct Equation {
    target: u64,
    operands: Vec<u64>,
}

fn parse(line: &str) -> Result<Equation> {
    let (target, operands) = line.split_once(':').with_context(|| format!("no colon in {:?}", line))?;
    let target = target.trim().parse().with_context(|| format!("bad test value in {:?}", line))?;
    let operands = operands.split_whitespace()
        .map(|operand| operand.parse().with_context(|| format!("bad operand {:?}", operand)))
        .collect::<Result<Vec<u64>>>()?;
    if operands.is_empty() {bail!("no operands in {:?}", line)}
    Ok(Equation {target, operands})
}

fn strip_digits(target: u64, suffix: u64) -> Option<u64> {
    let decade = 10u64.checked_pow(suffix.checked_ilog10().unwrap_or(0) + 1)?;
    (target > suffix && target % decade == suffix).then_some(target / decade)
}

/// Operators apply left to right, so undo them from the right.
fn solvable(target: u64, operands: &[u64], concatenation: bool) -> bool {
    let Some((&last, rest)) = operands.split_last() else {return false};
    if rest.is_empty() {return target == last}

    target >= last && solvable(target - last, rest, concatenation)
        || last == 0 && target == 0
        || last != 0 && target % last == 0 && solvable(target / last, rest, concatenation)
        || concatenation && strip_digits(target, last).is_some_and(|prefix| solvable(prefix, rest, concatenation))
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let mut total = 0;
    for line in lines(input) {
        let equation = parse(line)?;
        if solvable(equation.target, &equation.operands, part == 2) {
            total += equation.target;
        }
    }
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn add_and_multiply() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE, &Options::default())?, "3749");
        Ok(())
    }

    #[test]
    fn with_concatenation() -> Result<()> {
        assert_eq!(solve(2, EXAMPLE, &Options::default())?, "11387");
        Ok(())
    }

    #[test]
    fn digit_stripping() {
        assert_eq!(strip_digits(156, 6), Some(15));
        assert_eq!(strip_digits(7290, 290), Some(7));
        assert_eq!(strip_digits(156, 56), Some(1));
        assert_eq!(strip_digits(156, 5), None);
        assert_eq!(strip_digits(6, 6), None);
    }

    #[test]
    fn multiplying_by_zero() -> Result<()> {
        assert_eq!(solve(1, "4: 3 0 4\n", &Options::default())?, "4");
        assert!(solvable(0, &[7, 0], false));
        assert!(!solvable(1, &[7, 0], false));
        Ok(())
    }

    #[test]
    fn single_operand() {
        assert!(solvable(5, &[5], false));
        assert!(!solvable(5, &[4], true));
    }
}
