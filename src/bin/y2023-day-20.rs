//! Pulse propagation: press the button a thousand times, run each press's
//! pulses through the flip-flop and conjunction modules to completion, and
//! multiply the low and high pulse counts.

use advent_of_code::input;
use failure::{err_msg, format_err, Error};
use std::collections::{HashMap, VecDeque};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Pulse {
    Low,
    High,
}

enum Kind {
    Broadcaster,
    /// Flips on a low pulse and sends its new state; ignores high pulses.
    FlipFlop { on: bool },
    /// Remembers the last pulse from every input; sends low only when all
    /// remembered pulses are high.
    Conjunction { last_inputs: HashMap<String, Pulse> },
}

struct Module {
    kind: Kind,
    outputs: Vec<String>,
}

/// A module line reads `%a -> inv, con`. Conjunctions start out remembering
/// a low pulse from each of their inputs, so the wiring has to be walked
/// once up front to find them.
fn parse(text: &str) -> Result<HashMap<String, Module>, Error> {
    let mut modules = HashMap::new();
    let mut wires = Vec::new();
    for line in text.lines() {
        let mut halves = line.split(" -> ");
        let label = halves
            .next()
            .ok_or_else(|| err_msg("missing module label"))?;
        let outputs: Vec<String> = halves
            .next()
            .ok_or_else(|| format_err!("module has no outputs: {:?}", line))?
            .split(", ")
            .map(str::to_string)
            .collect();
        let (name, kind) = if let Some(name) = label.strip_prefix('%') {
            (name, Kind::FlipFlop { on: false })
        } else if let Some(name) = label.strip_prefix('&') {
            (
                name,
                Kind::Conjunction {
                    last_inputs: HashMap::new(),
                },
            )
        } else {
            (label, Kind::Broadcaster)
        };
        for output in &outputs {
            wires.push((name.to_string(), output.clone()));
        }
        modules.insert(name.to_string(), Module { kind, outputs });
    }

    for (from, to) in wires {
        if let Some(Module {
            kind: Kind::Conjunction { last_inputs },
            ..
        }) = modules.get_mut(&to)
        {
            last_inputs.insert(from, Pulse::Low);
        }
    }
    Ok(modules)
}

/// Press the button `presses` times and multiply the total low pulses sent
/// by the total high pulses. Pulses from one press settle before the next;
/// names with no module are sinks that swallow their pulses.
fn pulse_product(modules: &mut HashMap<String, Module>, presses: usize) -> u64 {
    let mut low = 0u64;
    let mut high = 0u64;
    for _ in 0..presses {
        let mut pending = VecDeque::new();
        pending.push_back(("button".to_string(), "broadcaster".to_string(), Pulse::Low));
        while let Some((from, to, pulse)) = pending.pop_front() {
            match pulse {
                Pulse::Low => low += 1,
                Pulse::High => high += 1,
            }
            let module = match modules.get_mut(&to) {
                Some(module) => module,
                None => continue,
            };
            let send = match &mut module.kind {
                Kind::Broadcaster => Some(pulse),
                Kind::FlipFlop { on } => {
                    if pulse == Pulse::High {
                        None
                    } else {
                        *on = !*on;
                        Some(if *on { Pulse::High } else { Pulse::Low })
                    }
                }
                Kind::Conjunction { last_inputs } => {
                    last_inputs.insert(from, pulse);
                    if last_inputs.values().all(|&p| p == Pulse::High) {
                        Some(Pulse::Low)
                    } else {
                        Some(Pulse::High)
                    }
                }
            };
            if let Some(send) = send {
                for output in module.outputs.clone() {
                    pending.push_back((to.clone(), output, send));
                }
            }
        }
    }
    low * high
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-20.txt")?;
    let mut modules = parse(&text)?;
    println!("{}", pulse_product(&mut modules, 1000));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flip_flop_chain() {
        let text = "broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a\n";
        let mut modules = parse(text).unwrap();
        assert_eq!(pulse_product(&mut modules, 1000), 32000000);
    }

    // This wiring only repeats every four presses, so the counts are not a
    // multiple of a single press's.
    #[test]
    fn longer_cycle() {
        let text = "broadcaster -> a\n%a -> inv, con\n&inv -> b\n%b -> con\n&con -> output\n";
        let mut modules = parse(text).unwrap();
        assert_eq!(pulse_product(&mut modules, 1000), 11687500);
    }

    #[test]
    fn unwired_outputs_swallow_pulses() {
        // One press: button->broadcaster low, broadcaster->nowhere low.
        let mut modules = parse("broadcaster -> nowhere\n").unwrap();
        assert_eq!(pulse_product(&mut modules, 1), 0);
    }
}
