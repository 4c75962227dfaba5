use advent2024::runner::{run, Args};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    run(&Args::parse())
}
