//! Star/Circle agent CLI
//!
//! Reads a game configuration, searches it and writes the decision.

use std::env;
use std::path::PathBuf;
use std::process;

use agent::run;
use tracing_subscriber::EnvFilter;

struct Options {
    input: PathBuf,
    output: PathBuf,
    json: bool,
}

fn print_usage() {
    println!("Star/Circle search agent");
    println!();
    println!("Usage:");
    println!("  checkers_agent [--input PATH] [--output PATH] [--json]");
    println!();
    println!("Options:");
    println!("  --input, -i PATH    configuration to read (default input.txt)");
    println!("  --output, -o PATH   where to write the decision (default output.txt)");
    println!("  --json              also print a JSON report to stdout");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) for search diagnostics on stderr.");
}

/// Returns `Ok(None)` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut options = Options {
        input: PathBuf::from("input.txt"),
        output: PathBuf::from("output.txt"),
        json: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" | "-i" => {
                i += 1;
                let path = args.get(i).ok_or("--input requires a path")?;
                options.input = PathBuf::from(path);
            }
            "--output" | "-o" => {
                i += 1;
                let path = args.get(i).ok_or("--output requires a path")?;
                options.output = PathBuf::from(path);
            }
            "--json" => options.json = true,
            "help" | "--help" | "-h" => return Ok(None),
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(Some(options))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(msg) => {
            eprintln!("Error: {msg}");
            print_usage();
            process::exit(2);
        }
    };

    let report = match run(&options.input, &options.output) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    if options.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {e}");
                process::exit(1);
            }
        }
    }
}
