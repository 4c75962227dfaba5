use crate::input::lines;
use crate::runner::Options;
use anyhow::{bail, Context, Result};
use itertools::Itertools;
use log::{debug, info};
use thiserror::Error;

const STEP_LIMIT: usize = 1_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CpuError {
    #[error("invalid opcode {0}")]
    InvalidOpcode(u8),
    #[error("reserved combo operand 7 at {0}")]
    ReservedOperand(usize),
    #[error("program still running after {0} steps")]
    StepLimit(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Opcode {Adv, Bxl, Bst, Jnz, Bxc, Out, Bdv, Cdv}

impl TryFrom<u8> for Opcode {
    type Error = CpuError;

    fn try_from(code: u8) -> Result<Opcode, CpuError> {
        Ok(match code {
            0 => Opcode::Adv,
            1 => Opcode::Bxl,
            2 => Opcode::Bst,
            3 => Opcode::Jnz,
            4 => Opcode::Bxc,
            5 => Opcode::Out,
            6 => Opcode::Bdv,
            7 => Opcode::Cdv,
            _ => return Err(CpuError::InvalidOpcode(code))
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {Running, Halted}

#[derive(Clone, Debug)]
pub struct Computer {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub program: Vec<u8>,
    pub ip: usize,
    pub outputs: Vec<u8>,
}

impl Computer {
    pub fn new(a: u64, b: u64, c: u64, program: Vec<u8>) -> Computer {
        Computer {a, b, c, program, ip: 0, outputs: vec![]}
    }

    fn combo(&self, operand: u8) -> Result<u64, CpuError> {
        match operand {
            0 ..= 3 => Ok(u64::from(operand)),
            4 => Ok(self.a),
            5 => Ok(self.b),
            6 => Ok(self.c),
            _ => Err(CpuError::ReservedOperand(self.ip + 1))
        }
    }

    fn divide(&self, operand: u8) -> Result<u64, CpuError> {
        let shift = self.combo(operand)?;
        Ok(u32::try_from(shift).ok().and_then(|shift| self.a.checked_shr(shift)).unwrap_or(0))
    }

    /// Executes one instruction. Reading the opcode or its operand past the end halts.
    pub fn step(&mut self) -> Result<RunState, CpuError> {
        let Some(&code) = self.program.get(self.ip) else {return Ok(RunState::Halted)};
        let opcode = Opcode::try_from(code)?;
        if opcode == Opcode::Jnz && self.a == 0 {
            self.ip += 2;
            return Ok(RunState::Running);
        }
        let Some(&operand) = self.program.get(self.ip + 1) else {return Ok(RunState::Halted)};

        match opcode {
            Opcode::Adv => self.a = self.divide(operand)?,
            Opcode::Bxl => self.b ^= u64::from(operand),
            Opcode::Bst => self.b = self.combo(operand)? % 8,
            Opcode::Jnz => {
                self.ip = usize::from(operand);
                return Ok(RunState::Running);
            }
            Opcode::Bxc => self.b ^= self.c,
            Opcode::Out => {
                let value = self.combo(operand)? % 8;
                self.outputs.push(value as u8);
            }
            Opcode::Bdv => self.b = self.divide(operand)?,
            Opcode::Cdv => self.c = self.divide(operand)?,
        }
        self.ip += 2;
        Ok(RunState::Running)
    }

    pub fn run(&mut self) -> Result<(), CpuError> {
        for _ in 0 .. STEP_LIMIT {
            if self.step()? == RunState::Halted {return Ok(())}
        }
        Err(CpuError::StepLimit(STEP_LIMIT))
    }
}

fn parse(input: &str) -> Result<Computer> {
    let mut registers = [0u64; 3];
    let mut program = None;
    for line in lines(input) {
        let (name, value) = line.split_once(':').with_context(|| format!("unexpected line {:?}", line))?;
        let value = value.trim();
        let register = match name {
            "Register A" => 0,
            "Register B" => 1,
            "Register C" => 2,
            "Program" => {
                program = Some(value.split(',').map(|n| match n.trim().parse::<u8>() {
                    Ok(n) if n < 8 => Ok(n),
                    _ => bail!("{:?} is not a 3-bit number", n)
                }).collect::<Result<Vec<_>>>()?);
                continue;
            }
            _ => bail!("unexpected line {:?}", line)
        };
        registers[register] = value.parse().with_context(|| format!("bad register value {:?}", value))?;
    }
    let [a, b, c] = registers;
    Ok(Computer::new(a, b, c, program.context("no program")?))
}

fn find_quine(template: &Computer, prefix: u64, from: usize) -> Option<u64> {
    for a in prefix * 8 .. prefix * 8 + 8 {
        if a == 0 {continue}
        let mut computer = Computer {a, ..template.clone()};
        if let Err(err) = computer.run() {
            debug!("a = {:o}: {}", a, err);
            continue;
        }
        if computer.outputs != template.program[from..] {continue}
        debug!("a = {:o} outputs the last {} values", a, template.program.len() - from);
        if from == 0 {return Some(a)}
        if let Some(a) = find_quine(template, a, from - 1) {return Some(a)}
    }
    None
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let mut computer = parse(input)?;
    info!("{} program values", computer.program.len());
    if part == 1 {
        computer.run()?;
        return Ok(computer.outputs.iter().join(","));
    }
    let Some(from) = computer.program.len().checked_sub(1) else {bail!("the program is empty")};
    match find_quine(&computer, 0, from) {
        Some(a) => Ok(a.to_string()),
        None => bail!("no value of register A makes the program output itself")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GARBAGE: u64 = 999_999;

    fn single_step(a: u64, b: u64, c: u64, program: &[u8]) -> Computer {
        let mut computer = Computer::new(a, b, c, program.to_vec());
        assert_eq!(computer.step(), Ok(RunState::Running));
        assert_eq!(computer.step(), Ok(RunState::Halted));
        computer
    }

    #[test]
    fn combo_operands() {
        let computer = Computer::new(100, 200, 300, vec![]);
        let values = (0 ..= 6).map(|operand| computer.combo(operand)).collect::<Result<Vec<_>, _>>();
        assert_eq!(values, Ok(vec![0, 1, 2, 3, 100, 200, 300]));
        assert_eq!(computer.combo(7), Err(CpuError::ReservedOperand(1)));
    }

    #[test]
    fn divisions() {
        let computer = single_step(81, GARBAGE, GARBAGE, &[0, 3]);
        assert_eq!((computer.a, computer.b, computer.c, computer.ip), (10, GARBAGE, GARBAGE, 2));
        let computer = single_step(150, 6, GARBAGE, &[6, 5]);
        assert_eq!((computer.a, computer.b, computer.c), (150, 2, GARBAGE));
        let computer = single_step(17, GARBAGE, GARBAGE, &[7, 4]);
        assert_eq!((computer.a, computer.b, computer.c), (17, GARBAGE, 0));
    }

    #[test]
    fn bitwise() {
        assert_eq!(single_step(GARBAGE, 52, GARBAGE, &[1, 7]).b, 52 ^ 7);
        assert_eq!(single_step(GARBAGE, 52, GARBAGE, &[2, 5]).b, 52 % 8);
        let computer = single_step(GARBAGE, 25, 32, &[4, 7]);
        assert_eq!((computer.b, computer.c), (25 ^ 32, 32));
    }

    #[test]
    fn jumps() {
        let computer = single_step(0, GARBAGE, GARBAGE, &[3, 3]);
        assert_eq!(computer.ip, 2);
        let mut computer = Computer::new(1, GARBAGE, GARBAGE, vec![3, 5]);
        assert_eq!(computer.step(), Ok(RunState::Running));
        assert_eq!(computer.ip, 5);
        assert_eq!(computer.step(), Ok(RunState::Halted));
    }

    #[test]
    fn output() {
        let computer = single_step(GARBAGE, GARBAGE, 19, &[5, 6]);
        assert_eq!(computer.outputs, vec![19 % 8]);
    }

    #[test]
    fn missing_operand_halts() {
        let mut computer = Computer::new(GARBAGE, GARBAGE, GARBAGE, vec![4]);
        assert_eq!(computer.step(), Ok(RunState::Halted));
    }

    #[test]
    fn small_programs() -> Result<()> {
        let mut computer = Computer::new(0, 0, 9, vec![2, 6]);
        computer.run()?;
        assert_eq!(computer.b, 1);

        let mut computer = Computer::new(10, 0, 0, vec![5, 0, 5, 1, 5, 4]);
        computer.run()?;
        assert_eq!(computer.outputs, vec![0, 1, 2]);

        let mut computer = Computer::new(2024, 0, 0, vec![0, 1, 5, 4, 3, 0]);
        computer.run()?;
        assert_eq!(computer.outputs, vec![4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]);
        assert_eq!(computer.a, 0);

        let mut computer = Computer::new(0, 29, 0, vec![1, 7]);
        computer.run()?;
        assert_eq!(computer.b, 26);

        let mut computer = Computer::new(0, 2024, 43690, vec![4, 0]);
        computer.run()?;
        assert_eq!(computer.b, 44354);
        Ok(())
    }

    #[test]
    fn reserved_operand_and_endless_loop() {
        assert_eq!(Computer::new(0, 0, 0, vec![2, 7]).run(), Err(CpuError::ReservedOperand(1)));
        assert_eq!(Computer::new(1, 0, 0, vec![3, 0]).run(), Err(CpuError::StepLimit(STEP_LIMIT)));
    }

    #[test]
    fn program_output() -> Result<()> {
        let input = "Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";
        assert_eq!(solve(1, input, &Options::default())?, "4,6,3,5,6,3,5,2,1,0");
        Ok(())
    }

    #[test]
    fn self_replicating_program() -> Result<()> {
        let input = "Register A: 2024
Register B: 0
Register C: 0

Program: 0,3,5,4,3,0
";
        assert_eq!(solve(2, input, &Options::default())?, "117440");
        Ok(())
    }

    #[test]
    fn failing_candidates_are_skipped() {
        let template = Computer::new(0, 0, 0, vec![2, 7, 5, 4]);
        assert_eq!(find_quine(&template, 0, 3), None);
        let err = solve(2, "Register A: 0\nProgram: 2,7,5,4\n", &Options::default()).unwrap_err();
        assert!(err.to_string().contains("no value of register A"), "{}", err);
    }

    #[test]
    fn rejects_wide_values() {
        assert!(parse("Register A: 1\nProgram: 0,8\n").is_err());
    }
}
