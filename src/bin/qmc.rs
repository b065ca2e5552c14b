//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Reads a function such as `f(A,B) = AB + A^B` and prints every minimal
//! sum-of-products form in the same notation.

use clap::{ArgAction, Parser};
use quine_mccluskey::notation::{self, NotationConfig, ParsedFunction};
use quine_mccluskey::{Error, Function};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey exact logic minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Function to minimize, e.g. "f(A,B) = AB + A^B"
    #[arg(value_name = "EXPRESSION", conflicts_with = "file")]
    expression: Option<String>,

    /// Read the function from the first non-empty line of a file
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Negation symbol (one of ^ ~ !)
    #[arg(short = 'i', long = "inverter", default_value_t = '^')]
    inverter: char,

    /// Name of the first variable
    #[arg(long = "first", default_value_t = 'A')]
    first_variable: char,

    /// Print the truth table of the canonical form
    #[arg(short = 't', long = "truth-table")]
    truth_table: bool,

    /// Print every level of the grouping table
    #[arg(long = "table")]
    table: bool,

    /// Log stage progress to stderr (repeat for merge traces)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    if args.verbose > 0 {
        let level = if args.verbose > 1 {
            LevelFilter::Trace
        } else {
            LevelFilter::Debug
        };
        let _ = TermLogger::init(
            level,
            simplelog::Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = NotationConfig {
        inverter: args.inverter,
        first_variable: args.first_variable,
    };
    let parsed = read_input(args, &config)?;
    let width = parsed.width();

    let mut qm = parsed.minimizer()?;
    let covers: Vec<Function> = qm.minimize()?.to_vec();

    if args.truth_table {
        print!("{}", config.render_truth_table(qm.canonical(), width)?);
        println!();
    }
    if args.table {
        print!("{}", config.render_table(qm.table()));
        println!();
    }
    for cover in &covers {
        println!("{}", config.render_equation(&parsed.name, width, cover));
    }
    Ok(())
}

fn read_input(args: &Args, config: &NotationConfig) -> Result<ParsedFunction, Error> {
    if let Some(expression) = &args.expression {
        return Ok(notation::parse_function(expression, config)?);
    }
    let parsed = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                io::Error::new(e.kind(), format!("cannot open '{}': {}", path.display(), e))
            })?;
            notation::read_function(BufReader::new(file), config)?
        }
        None => notation::read_function(io::stdin().lock(), config)?,
    };
    Ok(parsed)
}
