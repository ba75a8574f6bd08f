use anyhow::{anyhow, Result};
use clap::{Arg, ArgMatches, Command};
use serde::Serialize;
use std::fs;

use qm_solve::{ProblemConfig, QmProblem};

#[derive(Debug, Serialize)]
struct MinimizeResponse {
    width: usize,
    expressions: Vec<String>,
    prime_implicants: Vec<String>,
    essential_prime_implicants: Vec<String>,
    steps: Option<Vec<String>>,
}

fn main() {
    let matches = Command::new("qm-solve")
        .version("0.1.0")
        .about("Exact Quine-McCluskey Boolean minimization with Petrick-style cover search")
        .subcommand(
            Command::new("minimize")
                .about("Minimize a Boolean function")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Input: JSON file path, or inline JSON")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format")
                        .value_parser(["json", "human", "steps"])
                        .default_value("human"),
                )
                .arg(
                    Arg::new("show-steps")
                        .long("show-steps")
                        .help("Include the solution step trace")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("examples").about("Show usage examples"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("minimize", sub_matches)) => handle_minimize(sub_matches),
        Some(("examples", _)) => handle_examples(),
        _ => {
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn handle_minimize(matches: &ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").expect("input is required by clap");
    let format = matches.get_one::<String>("format").expect("format has a default value in clap");
    let show_steps = matches.get_flag("show-steps");

    let config = parse_config(input)?;
    let mut problem = QmProblem::new(config)?;

    let expressions = problem.solve()?;
    let response = MinimizeResponse {
        width: problem.width(),
        expressions,
        prime_implicants: problem.prime_implicants(),
        essential_prime_implicants: problem.essential_implicants(),
        steps: show_steps.then(|| problem.steps().to_vec()),
    };

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&response)?),
        "human" => print_human_readable(&response),
        "steps" => print_steps(&response),
        other => return Err(anyhow!("unknown format: {other}")),
    }

    Ok(())
}

/// Read the request either from a file path or as an inline JSON string,
/// trying the path first and falling back to parsing `input` itself.
fn parse_config(input: &str) -> Result<ProblemConfig> {
    if let Ok(file_content) = fs::read_to_string(input) {
        return Ok(serde_json::from_str(&file_content)?);
    }
    Ok(serde_json::from_str(input)?)
}

fn print_human_readable(response: &MinimizeResponse) {
    println!("Quine-McCluskey minimization (width {})", response.width);

    println!("\nMinimized expression(s):");
    for expr in &response.expressions {
        println!("  F = {expr}");
    }

    println!("\nPrime implicants:");
    for pi in &response.prime_implicants {
        println!("  {pi}");
    }

    println!("\nEssential prime implicants:");
    for epi in &response.essential_prime_implicants {
        println!("  {epi}");
    }

    if let Some(ref steps) = response.steps {
        println!("\nSolution steps:");
        for (i, step) in steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }
}

fn print_steps(response: &MinimizeResponse) {
    match &response.steps {
        Some(steps) => {
            println!("Quine-McCluskey solution steps:");
            for (i, step) in steps.iter().enumerate() {
                println!("{}. {}", i + 1, step);
            }
        }
        None => println!("No step trace available; pass --show-steps."),
    }
}

fn handle_examples() -> Result<()> {
    println!("Usage examples:");
    println!();
    println!("1. Inline JSON:");
    println!("   qm-solve minimize -i '{{\"width\":3,\"minterms\":[1,3,5,7]}}'");
    println!();
    println!("2. With don't-cares:");
    println!("   qm-solve minimize -i '{{\"width\":4,\"minterms\":[4,8,10,11,12,15],\"dontcares\":[9,14]}}'");
    println!();
    println!("3. From a file:");
    println!("   qm-solve minimize -i request.json");
    println!();
    println!("4. JSON output with the step trace:");
    println!("   qm-solve minimize -i request.json --format json --show-steps");
    Ok(())
}
