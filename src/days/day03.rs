use crate::runner::Options;
use anyhow::Result;
use regex::Regex;

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let instruction = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")?;
    let mut enabled = true;
    let mut total = 0u64;
    for captures in instruction.captures_iter(input) {
        match &captures[0] {
            "do()" => enabled = true,
            "don't()" => if part == 2 {enabled = false},
            _ => if enabled {
                total += captures[1].parse::<u64>()? * captures[2].parse::<u64>()?;
            }
        }
    }
    Ok(total.to_string())
}
