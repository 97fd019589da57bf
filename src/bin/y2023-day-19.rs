//! Part sorting: run each machine part through the chain of workflows
//! starting at `in`, and total the ratings of the parts that end up
//! accepted.

use advent_of_code::input;
use failure::{bail, err_msg, format_err, Error};
use std::collections::HashMap;

enum Comparison {
    Less,
    Greater,
}

struct Rule {
    category: usize,
    comparison: Comparison,
    threshold: u64,
    destination: String,
}

struct Workflow {
    rules: Vec<Rule>,
    fallback: String,
}

/// Ratings indexed by category.
type Part = [u64; 4];

fn category_index(category: &str) -> Result<usize, Error> {
    match category {
        "x" => Ok(0),
        "m" => Ok(1),
        "a" => Ok(2),
        "s" => Ok(3),
        other => bail!("unknown category {:?}", other),
    }
}

/// A workflow reads `px{a<2006:qkq,m>2090:A,rfg}`: comparison rules tried in
/// order, with the last entry an unconditional destination.
fn parse_workflow(line: &str) -> Result<(String, Workflow), Error> {
    let brace = line
        .find('{')
        .ok_or_else(|| format_err!("malformed workflow: {:?}", line))?;
    let name = line[..brace].to_string();
    let body = line[brace + 1..]
        .strip_suffix('}')
        .ok_or_else(|| format_err!("unterminated workflow: {:?}", line))?;

    let mut rules = Vec::new();
    let mut fallback = None;
    for clause in body.split(',') {
        match clause.find(':') {
            Some(colon) => {
                let condition = &clause[..colon];
                let comparison = match &condition[1..2] {
                    "<" => Comparison::Less,
                    ">" => Comparison::Greater,
                    other => bail!("unknown comparison {:?}", other),
                };
                rules.push(Rule {
                    category: category_index(&condition[..1])?,
                    comparison,
                    threshold: condition[2..].parse()?,
                    destination: clause[colon + 1..].to_string(),
                });
            }
            None => fallback = Some(clause.to_string()),
        }
    }
    let fallback = fallback.ok_or_else(|| err_msg("workflow has no fallback"))?;
    Ok((name, Workflow { rules, fallback }))
}

/// A part reads `{x=787,m=2655,a=1222,s=2876}`.
fn parse_part(line: &str) -> Result<Part, Error> {
    let body = line
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| format_err!("malformed part: {:?}", line))?;
    let mut part = [0; 4];
    for rating in body.split(',') {
        let equals = rating
            .find('=')
            .ok_or_else(|| format_err!("malformed rating: {:?}", rating))?;
        part[category_index(&rating[..equals])?] = rating[equals + 1..].parse()?;
    }
    Ok(part)
}

/// Workflows and parts are separated by a blank line.
fn parse(text: &str) -> Result<(HashMap<String, Workflow>, Vec<Part>), Error> {
    let mut sections = text.split("\n\n");
    let workflows = sections
        .next()
        .ok_or_else(|| err_msg("missing workflows"))?
        .lines()
        .map(parse_workflow)
        .collect::<Result<_, Error>>()?;
    let parts = sections
        .next()
        .ok_or_else(|| err_msg("missing parts"))?
        .lines()
        .map(parse_part)
        .collect::<Result<_, Error>>()?;
    Ok((workflows, parts))
}

fn accepted(workflows: &HashMap<String, Workflow>, part: &Part) -> Result<bool, Error> {
    let mut name = "in";
    loop {
        match name {
            "A" => return Ok(true),
            "R" => return Ok(false),
            _ => {}
        }
        let workflow = workflows
            .get(name)
            .ok_or_else(|| format_err!("no workflow named {:?}", name))?;
        name = workflow
            .rules
            .iter()
            .find(|rule| {
                let rating = part[rule.category];
                match rule.comparison {
                    Comparison::Less => rating < rule.threshold,
                    Comparison::Greater => rating > rule.threshold,
                }
            })
            .map(|rule| rule.destination.as_str())
            .unwrap_or(&workflow.fallback);
    }
}

/// Sum of all four ratings over every accepted part.
fn total_rating(workflows: &HashMap<String, Workflow>, parts: &[Part]) -> Result<u64, Error> {
    let mut total = 0;
    for part in parts {
        if accepted(workflows, part)? {
            total += part.iter().sum::<u64>();
        }
    }
    Ok(total)
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-19.txt")?;
    let (workflows, parts) = parse(&text)?;
    println!("{}", total_rating(&workflows, &parts)?);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = "\
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}
crn{x>2662:A,R}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

    #[test]
    fn sorts_the_example_parts() {
        let (workflows, parts) = parse(EXAMPLE).unwrap();
        let verdicts: Vec<bool> = parts
            .iter()
            .map(|part| accepted(&workflows, part).unwrap())
            .collect();
        assert_eq!(verdicts, vec![true, false, true, false, true]);
        assert_eq!(total_rating(&workflows, &parts).unwrap(), 19114);
    }

    #[test]
    fn dangling_destination_is_an_error() {
        let (workflows, parts) = parse("in{x<5:gone,A}\n\n{x=1,m=1,a=1,s=1}\n").unwrap();
        assert!(accepted(&workflows, &parts[0]).is_err());
    }

    #[test]
    fn fallback_applies_when_no_rule_matches() {
        let (workflows, parts) = parse("in{x>10:R,A}\n\n{x=1,m=2,a=3,s=4}\n").unwrap();
        assert_eq!(total_rating(&workflows, &parts).unwrap(), 10);
    }
}
