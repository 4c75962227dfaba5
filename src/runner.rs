use crate::input::read_input;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type SolveFn = fn(u8, &str, &Options) -> Result<String>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// The input is a puzzle statement's worked example rather than the full
    /// input; some days use smaller dimensions for it.
    pub sample: bool,
}

#[derive(Parser, Debug)]
#[command(name = "advent2024", version, about = "Advent of Code 2024 solutions")]
pub struct Args {
    /// Puzzle day
    #[arg(value_parser = clap::value_parser!(u8).range(1..=18))]
    pub day: u8,

    /// Puzzle part
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Read `day{DAY}test{N}.in` instead of `day{DAY}.in`
    #[arg(short, long)]
    pub test: Option<u32>,

    /// Input file; relative paths are resolved against the data directory
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding the input files
    #[arg(long, env = "AOC_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Treat the input as a worked example
    #[arg(short, long)]
    pub sample: bool,

    /// Log debug output
    #[arg(short, long)]
    pub debug: bool,
}

pub fn resolve_data_dir(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_owned();
    }
    let local = cwd.join("data");
    if local.is_dir() {
        return local;
    }
    match cwd.parent().map(|parent| parent.join("data")) {
        Some(parent) if parent.is_dir() => parent,
        _ => cwd.to_owned()
    }
}

pub fn resolve_input_path(args: &Args, data_dir: &Path) -> PathBuf {
    let path = match (&args.input, args.test) {
        (Some(path), _) => path.clone(),
        (None, Some(test)) => PathBuf::from(format!("day{}test{}.in", args.day, test)),
        (None, None) => PathBuf::from(format!("day{}.in", args.day)),
    };
    if path.is_absolute() {path} else {data_dir.join(path)}
}

pub fn is_sample_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| name.contains("sample") || name.contains("test"))
}

fn init_logging(debug: bool) {
    let level = if debug {LevelFilter::Debug} else {LevelFilter::Info};
    // a second call (tests) keeps the first logger
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .try_init();
}

pub fn answer(args: &Args) -> Result<String> {
    let solve = crate::solution(args.day)
        .with_context(|| format!("day {} has no solution", args.day))?;

    let cwd = std::env::current_dir().context("reading the working directory")?;
    let data_dir = resolve_data_dir(args.data_dir.as_deref(), &cwd);
    debug!("resolved data dir: {}", data_dir.display());

    let path = resolve_input_path(args, &data_dir);
    let options = Options {sample: args.sample || args.test.is_some() || is_sample_file(&path)};
    info!("executing day {} part {}{}", args.day, args.part, if options.sample {" (sample)"} else {""});
    info!("input file: {}", path.display());

    let input = read_input(&path)?;
    let time = Instant::now();
    let result = solve(args.part, &input, &options)
        .with_context(|| format!("solving day {} part {}", args.day, args.part))?;
    info!("result: {}", result);
    info!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(result)
}

pub fn run(args: &Args) -> Result<()> {
    init_logging(args.debug);
    println!("{}", answer(args)?);
    Ok(())
}
