pub mod days;
pub mod grid;
pub mod input;
pub mod runner;

pub use runner::{Options, SolveFn};

/// Solutions indexed by day - 1.
pub const DAYS: [SolveFn; 18] = [
    days::day01::solve, days::day02::solve, days::day03::solve, days::day04::solve,
    days::day05::solve, days::day06::solve, days::day07::solve, days::day08::solve,
    days::day09::solve, days::day10::solve, days::day11::solve, days::day12::solve,
    days::day13::solve, days::day14::solve, days::day15::solve, days::day16::solve,
    days::day17::solve, days::day18::solve,
];

pub fn solution(day: u8) -> Option<SolveFn> {
    DAYS.get(usize::from(day).checked_sub(1)?).copied()
}
