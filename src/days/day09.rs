use crate::runner::Options;
use anyhow::{bail, Result};
use itertools::repeat_n;
use log::debug;

fn parse(input: &str) -> Result<Vec<usize>> {
    input.trim().bytes().map(|digit| match digit {
        b'0' ..= b'9' => Ok((digit - b'0') as usize),
        _ => bail!("unexpected character {:?} in disk map", digit as char)
    }).collect()
}

fn compact_blocks(disk_map: &[usize]) -> usize {
    let mut blocks = Vec::with_capacity(disk_map.iter().sum());
    for (ix, &len) in disk_map.iter().enumerate() {
        blocks.extend(repeat_n((ix % 2 == 0).then_some(ix / 2), len));
    }

    let (mut left, mut right) = (0, blocks.len());
    loop {
        while left < right && blocks[left].is_some() {left += 1}
        while left < right && blocks[right - 1].is_none() {right -= 1}
        if left >= right {break}
        blocks.swap(left, right - 1);
    }

    blocks.iter().enumerate().filter_map(|(pos, id)| id.map(|id| pos * id)).sum()
}

#[derive(Clone, Copy, Debug)]
struct Span {
    start: usize,
    len: usize,
}

/// Moves whole files, highest id first, into the leftmost gap that fits.
fn compact_files(disk_map: &[usize]) -> usize {
    let mut files = vec![];
    let mut gaps = vec![];
    let mut start = 0;
    for (ix, &len) in disk_map.iter().enumerate() {
        if ix % 2 == 0 {files.push(Span {start, len})} else {gaps.push(Span {start, len})}
        start += len;
    }

    let mut moved = 0;
    for file in files.iter_mut().rev() {
        // space a file leaves behind is right of every file still to be moved
        let Some(gap) = gaps.iter_mut()
                            .take_while(|gap| gap.start < file.start)
                            .find(|gap| gap.len >= file.len) else {continue};
        file.start = gap.start;
        gap.start += file.len;
        gap.len -= file.len;
        moved += 1;
    }
    debug!("moved {} of {} files", moved, files.len());

    files.iter().enumerate()
         .map(|(id, file)| id * (file.start .. file.start + file.len).sum::<usize>())
         .sum()
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let disk_map = parse(input)?;
    let checksum = if part == 1 {compact_blocks(&disk_map)} else {compact_files(&disk_map)};
    Ok(checksum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2333133121414131402\n";

    #[test]
    fn block_compaction() -> Result<()> {
        assert_eq!(solve(1, EXAMPLE, &Options::default())?, "1928");
        assert_eq!(solve(1, "12345", &Options::default())?, "60");
        Ok(())
    }

    #[test]
    fn file_compaction() -> Result<()> {
        assert_eq!(solve(2, EXAMPLE, &Options::default())?, "2858");
        Ok(())
    }

    #[test]
    fn files_that_fit_nowhere_stay() {
        // 0..111....22222: no gap fits file 2, file 1 does not move right
        assert_eq!(compact_files(&[1, 2, 3, 4, 5]), (3 .. 6).sum::<usize>() + 2 * (10 .. 15).sum::<usize>());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(solve(1, "12a4", &Options::default()).is_err());
    }
}
