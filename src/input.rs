use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

pub fn read_input_lines(path: &Path) -> Result<impl Iterator<Item = io::Result<String>>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file).lines())
}

pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Blank-line separated blocks, each trimmed. Tolerates `\r\n` line endings.
pub fn sections(input: &str) -> Vec<&str> {
    let mut sections = vec![];
    let mut start = None;
    let mut end = 0;
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                sections.push(input[s..end].trim());
            }
        } else {
            start.get_or_insert(offset);
            end = offset + line.len();
        }
        offset += line.len();
    }
    if let Some(s) = start {
        sections.push(input[s..end].trim());
    }
    sections
}
