use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead};
use std::process;

use amount_core::{needs_sanitization, normalize};

/// amount — locale-agnostic currency amount normalizer
///
/// Resolve free-form numeric text ("1.234,56", "€ 10,50", "1 234,56") to a
/// canonical dot-separated decimal string, with no locale configuration.
#[derive(Parser)]
#[command(name = "amount", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize values to canonical form (reads stdin lines when none given)
    Normalize {
        /// Raw amount strings
        values: Vec<String>,
        /// Output one JSON report per value
        #[arg(long)]
        json: bool,
    },

    /// Check whether a value would be rewritten by live-typing sanitization
    Check {
        /// Raw amount string
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Normalize { values, json } => cmd_normalize(values, json),
        Commands::Check { value, json } => cmd_check(&value, json),
        Commands::Version => {
            println!(
                "amount {} (amount-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            0
        }
    };

    process::exit(exit_code);
}

/// Exit 0 when every value normalized, 1 when any value was unrecognizable,
/// 2 on an I/O failure reading stdin.
fn cmd_normalize(values: Vec<String>, json: bool) -> i32 {
    let inputs = if values.is_empty() {
        match read_stdin_lines() {
            Ok(lines) => lines,
            Err(err) => {
                eprintln!("{} reading stdin: {}", "error:".red().bold(), err);
                return 2;
            }
        }
    } else {
        values
    };

    let mut failures = 0;
    for input in &inputs {
        let output = normalize(input);
        let failed = output.is_empty() && !input.trim().is_empty();
        if failed {
            failures += 1;
        }

        if json {
            let report = serde_json::json!({
                "input": input,
                "output": output,
                "changed": input.as_str() != output,
            });
            println!("{}", report);
        } else if failed {
            println!(
                "{} {:?} is not a recognizable amount",
                "✗".red().bold(),
                input
            );
        } else {
            println!("{} {} → {}", "✓".green().bold(), input, output);
        }
    }

    if failures > 0 {
        1
    } else {
        0
    }
}

/// Exit 0 when the value is already clean, 1 when it needs sanitization.
fn cmd_check(value: &str, json: bool) -> i32 {
    let needed = needs_sanitization(value);

    if json {
        let report = serde_json::json!({
            "input": value,
            "needs_sanitization": needed,
        });
        println!("{}", report);
    } else if needed {
        println!("{} {:?} needs sanitization", "✗".yellow().bold(), value);
    } else {
        println!("{} {:?} is clean", "✓".green().bold(), value);
    }

    if needed {
        1
    } else {
        0
    }
}

fn read_stdin_lines() -> io::Result<Vec<String>> {
    io::stdin().lock().lines().collect()
}
