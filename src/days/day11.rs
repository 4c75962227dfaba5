use crate::runner::Options;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

type Cache = FxHashMap<(u64, u32), u64>;

fn count_stones(stone: u64, blinks: u32, cache: &mut Cache) -> u64 {
    if blinks == 0 {return 1}
    if let Some(&count) = cache.get(&(stone, blinks)) {return count}

    let digits = stone.checked_ilog10().map_or(1, |log| log + 1);
    let count = if stone == 0 {
        count_stones(1, blinks - 1, cache)
    } else if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        count_stones(stone / half, blinks - 1, cache) + count_stones(stone % half, blinks - 1, cache)
    } else {
        count_stones(stone * 2024, blinks - 1, cache)
    };
    cache.insert((stone, blinks), count);
    count
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let blinks = if part == 1 {25} else {75};
    let mut cache = Cache::default();
    let mut total = 0;
    for stone in input.split_whitespace() {
        let stone = stone.parse().with_context(|| format!("bad stone {:?}", stone))?;
        total += count_stones(stone, blinks, &mut cache);
    }
    Ok(total.to_string())
}
