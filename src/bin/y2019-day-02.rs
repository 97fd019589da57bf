//! Gravity-assist intcode: a position-mode machine with add, multiply, and
//! halt, plus a search for the noun and verb that produce a target output.

use advent_of_code::input;
use failure::{bail, format_err, Error};

const TARGET: usize = 19_690_720;

fn fetch(memory: &[usize], address: usize) -> Result<usize, Error> {
    memory
        .get(address)
        .cloned()
        .ok_or_else(|| format_err!("address {} out of range", address))
}

/// Run the machine to the halt instruction and return the value left at
/// address 0.
fn run(mut memory: Vec<usize>) -> Result<usize, Error> {
    let mut pc = 0;
    loop {
        let opcode = fetch(&memory, pc)?;
        match opcode {
            1 | 2 => {
                let a = fetch(&memory, fetch(&memory, pc + 1)?)?;
                let b = fetch(&memory, fetch(&memory, pc + 2)?)?;
                let destination = fetch(&memory, pc + 3)?;
                let value = if opcode == 1 { a + b } else { a * b };
                *memory
                    .get_mut(destination)
                    .ok_or_else(|| format_err!("address {} out of range", destination))? = value;
                pc += 4;
            }
            99 => return fetch(&memory, 0),
            other => bail!("unknown opcode {} at address {}", other, pc),
        }
    }
}

/// Patch the noun and verb into a fresh copy of the program and run it. The
/// parsed program is never modified, so the search below can call this as
/// often as it likes.
fn run_with_inputs(program: &[usize], noun: usize, verb: usize) -> Result<usize, Error> {
    let mut memory = program.to_vec();
    if memory.len() < 3 {
        bail!("program too short to patch");
    }
    memory[1] = noun;
    memory[2] = verb;
    run(memory)
}

/// Brute force over the hundred-by-hundred input space. Inputs that crash
/// the machine are simply not the answer.
fn search(program: &[usize], target: usize) -> Result<usize, Error> {
    for noun in 0..100 {
        for verb in 0..100 {
            if let Ok(output) = run_with_inputs(program, noun, verb) {
                if output == target {
                    return Ok(100 * noun + verb);
                }
            }
        }
    }
    bail!("no noun and verb produce {}", target)
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2019-day-02.txt")?;
    let program: Vec<usize> = input::comma_integers(&text)?;
    println!("{}", run_with_inputs(&program, 12, 2)?);
    println!("{}", search(&program, TARGET)?);
    Ok(())
}
