//! Program tower: find the bottom program, then work out the corrected
//! weight for the single program whose weight throws its subtower off
//! balance.

use advent_of_code::{input, odd_one_out};
use failure::{err_msg, Error};
use std::collections::{HashMap, HashSet};

struct Program {
    weight: i64,
    children: Vec<String>,
}

type Tower = HashMap<String, Program>;

/// A line reads `fwft (72) -> ktlj, cntj, xhth`; leaf programs stop after
/// the weight.
fn parse(text: &str) -> Result<Tower, Error> {
    let mut tower = Tower::new();
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| err_msg("missing program name"))?
            .to_string();
        let weight = tokens
            .next()
            .ok_or_else(|| err_msg("missing program weight"))?
            .trim_matches(|c| c == '(' || c == ')')
            .parse()?;
        let children = tokens
            .skip(1) // the "->" arrow
            .map(|child| child.trim_end_matches(',').to_string())
            .collect();
        tower.insert(name, Program { weight, children });
    }
    Ok(tower)
}

/// The root is the one program that appears in no child list.
fn root(tower: &Tower) -> Result<&str, Error> {
    let children: HashSet<&str> = tower
        .values()
        .flat_map(|p| p.children.iter().map(String::as_str))
        .collect();
    tower
        .keys()
        .map(String::as_str)
        .find(|name| !children.contains(name))
        .ok_or_else(|| err_msg("tower has no root"))
}

/// Weight of `name` plus everything stacked on it.
fn total_weight(tower: &Tower, name: &str) -> i64 {
    let program = &tower[name];
    program.weight
        + program
            .children
            .iter()
            .map(|child| total_weight(tower, child))
            .sum::<i64>()
}

/// Exactly one program has the wrong weight. Descend from the root toward
/// it, remembering what its subtower ought to total, and return the weight
/// that program would need for the whole tower to balance. The tower is
/// never modified, so asking twice gives the same answer.
fn corrected_weight(tower: &Tower, root: &str) -> Option<i64> {
    let mut name = root;
    let mut expected = None;
    loop {
        let children = &tower[name].children;
        let totals: Vec<i64> = children
            .iter()
            .map(|child| total_weight(tower, child))
            .collect();
        match odd_one_out(&totals) {
            Some(odd) => {
                // Descend into the offending subtower; any sibling shows the
                // total it should reach.
                expected = Some(totals[(odd + 1) % totals.len()]);
                name = &children[odd];
            }
            None => {
                // Everything on top of this program balances, so the
                // program itself carries the bad weight.
                let expected = expected?;
                return Some(expected - totals.iter().sum::<i64>());
            }
        }
    }
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2017-day-07.txt")?;
    let tower = parse(&text)?;
    let root = root(&tower)?;
    println!("{}", root);
    let corrected = corrected_weight(&tower, root)
        .ok_or_else(|| err_msg("the tower is already balanced"))?;
    println!("{}", corrected);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = "\
pbga (66)
xhth (57)
ebii (61)
havc (66)
ktlj (57)
fwft (72) -> ktlj, cntj, xhth
qoyq (66)
padx (45) -> pbga, havc, qoyq
tknk (41) -> ugml, padx, fwft
jptl (61)
ugml (68) -> gyxo, ebii, jptl
gyxo (61)
cntj (57)
";

    #[test]
    fn finds_the_root() {
        let tower = parse(EXAMPLE).unwrap();
        assert_eq!(root(&tower).unwrap(), "tknk");
    }

    #[test]
    fn subtower_weights() {
        let tower = parse(EXAMPLE).unwrap();
        assert_eq!(total_weight(&tower, "gyxo"), 61);
        assert_eq!(total_weight(&tower, "ugml"), 251);
        assert_eq!(total_weight(&tower, "padx"), 243);
    }

    // ugml's subtower totals 251 where its siblings total 243, so ugml
    // itself must drop from 68 to 60.
    #[test]
    fn corrects_the_unbalanced_program() {
        let tower = parse(EXAMPLE).unwrap();
        assert_eq!(corrected_weight(&tower, "tknk"), Some(60));
    }

    #[test]
    fn balanced_tower_needs_no_correction() {
        let tower = parse("aa (1) -> bb, cc\nbb (2)\ncc (2)\n").unwrap();
        assert_eq!(corrected_weight(&tower, "aa"), None);
    }

    #[test]
    fn asking_twice_sees_the_same_tower() {
        let tower = parse(EXAMPLE).unwrap();
        assert_eq!(
            corrected_weight(&tower, "tknk"),
            corrected_weight(&tower, "tknk")
        );
    }
}
