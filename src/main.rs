use std::io::{self, BufRead};

use anyhow::bail;
use clap::{Parser, Subcommand};
use colored::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use texnorm::Normalizer;
use texnorm::canonical::canonicalize;
use texnorm::random::generate_raw;

#[derive(Parser, Debug)]
#[command(author, version, about = "Canonicalize TeX-like algebraic expressions", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical form of each expression (read from stdin when none are given)
    Canon {
        /// Also print the raw syntax tree
        #[arg(long)]
        raw: bool,

        /// Also print the indented canonical tree
        #[arg(long)]
        tree: bool,

        /// Also print the canonical tree as a nested JSON array
        #[arg(long)]
        json: bool,

        expressions: Vec<String>,
    },

    /// Check that random canonical trees survive serialize → parse → canonicalize
    Fuzz {
        /// Number of random trees
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,

        /// Maximum operator depth of each tree
        #[arg(short = 'd', long, default_value_t = 5)]
        depth: usize,

        /// Seed for reproducible runs
        #[arg(short = 's', long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let normalizer = Normalizer::tex();

    match args.command {
        Command::Canon {
            raw,
            tree,
            json,
            expressions,
        } => {
            let expressions = if expressions.is_empty() {
                io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?
            } else {
                expressions
            };
            canon(&normalizer, &expressions, raw, tree, json)
        }
        Command::Fuzz { count, depth, seed } => fuzz(&normalizer, count, depth, seed),
    }
}

fn canon(
    normalizer: &Normalizer,
    expressions: &[String],
    raw: bool,
    tree: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut failures = 0;

    for expression in expressions.iter().filter(|e| !e.trim().is_empty()) {
        println!("{} {expression}", "original:".bold().yellow());

        let raw_tree = match normalizer.parse(expression) {
            Ok(raw_tree) => raw_tree,
            Err(error) => {
                println!("{} {error}\n", "error:".bold().red());
                failures += 1;
                continue;
            }
        };
        if raw {
            println!("{raw_tree:#?}");
        }

        let node = canonicalize(&raw_tree);
        println!("{} {node}", "TeX:".bold().yellow());
        if tree {
            println!("{}", node.pretty());
        }
        if json {
            println!("{}", serde_json::to_string(&node)?);
        }
        println!();
    }

    if failures > 0 {
        bail!("{failures} of {} expressions failed to parse", expressions.len());
    }
    Ok(())
}

fn fuzz(normalizer: &Normalizer, count: usize, depth: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut failures = 0;

    for _ in 0..count {
        let node = canonicalize(&generate_raw(&mut rng, depth));
        match normalizer.round_trip(&node) {
            Ok(again) if again == node => {}
            Ok(again) => {
                failures += 1;
                println!("{} {node}", "mismatch:".bold().red());
                println!("{}\n{}\n", node.pretty(), again.pretty());
            }
            Err(error) => {
                failures += 1;
                println!("{} {node}: {error}", "unparsable:".bold().red());
            }
        }
    }

    println!("{} {}/{count} round trips", "checked:".bold().green(), count - failures);
    if failures > 0 {
        bail!("{failures} round trips failed");
    }
    Ok(())
}
