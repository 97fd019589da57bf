//! Conditional register machine: each instruction bumps one register up or
//! down, guarded by a comparison against another register.

use advent_of_code::input;
use failure::{bail, format_err, Error};
use lazy_static::lazy_static;
use std::collections::HashMap;

type Value = i64;

lazy_static! {
    static ref COMPARISONS: HashMap<&'static str, fn(Value, Value) -> bool> = {
        let mut table: HashMap<&'static str, fn(Value, Value) -> bool> = HashMap::new();
        table.insert(">", |a, b| a > b);
        table.insert("<", |a, b| a < b);
        table.insert(">=", |a, b| a >= b);
        table.insert("<=", |a, b| a <= b);
        table.insert("==", |a, b| a == b);
        table.insert("!=", |a, b| a != b);
        table
    };
}

/// Registers spring into existence holding zero; reading a register that was
/// never written returns zero by contract, not by accident of the lookup.
#[derive(Default)]
struct Registers(HashMap<String, Value>);

impl Registers {
    fn get(&self, name: &str) -> Value {
        self.0.get(name).cloned().unwrap_or(0)
    }

    fn set(&mut self, name: &str, value: Value) {
        self.0.insert(name.to_string(), value);
    }

    fn largest(&self) -> Value {
        self.0.values().cloned().max().unwrap_or(0)
    }
}

struct Instruction {
    target: String,
    delta: Value, // "dec" is stored as a negative delta
    guard_register: String,
    comparison: fn(Value, Value) -> bool,
    operand: Value,
}

/// A line reads `b inc 5 if a > 1`.
fn parse_line(line: &str) -> Result<Instruction, Error> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 7 || tokens[3] != "if" {
        bail!("malformed instruction: {:?}", line);
    }

    let magnitude: Value = tokens[2].parse()?;
    let delta = match tokens[1] {
        "inc" => magnitude,
        "dec" => -magnitude,
        other => bail!("unknown operation {:?}", other),
    };
    let comparison = *COMPARISONS
        .get(tokens[5])
        .ok_or_else(|| format_err!("unknown comparison {:?}", tokens[5]))?;

    Ok(Instruction {
        target: tokens[0].to_string(),
        delta,
        guard_register: tokens[4].to_string(),
        comparison,
        operand: tokens[6].parse()?,
    })
}

fn parse(text: &str) -> Result<Vec<Instruction>, Error> {
    text.lines().map(parse_line).collect()
}

/// Run the whole program. Returns the largest register value once it
/// finishes and the largest value any register held at any point.
fn run(program: &[Instruction]) -> (Value, Value) {
    let mut registers = Registers::default();
    let mut peak = 0;
    for insn in program {
        if (insn.comparison)(registers.get(&insn.guard_register), insn.operand) {
            let value = registers.get(&insn.target) + insn.delta;
            registers.set(&insn.target, value);
            peak = peak.max(value);
        }
    }
    (registers.largest(), peak)
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2017-day-08.txt")?;
    let program = parse(&text)?;
    let (largest, peak) = run(&program);
    println!("{}", largest);
    println!("{}", peak);
    Ok(())
}
