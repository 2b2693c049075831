//! Command-line demo driver.
//!
//! Registers a small set of host functions, compiles a script file (or
//! the built-in demo script) against them, and runs it. Compile errors
//! print to stderr with their line number and exit nonzero. Set
//! `RUST_LOG=cmdscript=trace` to watch the compile and replay.

use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cmdscript::{Config, ParamType};

/// Script used when no file is given.
const DEMO_SCRIPT: &str = "\
Say \"cmdscript demo\"
Person \"Ada\", 36
Tally 40
Tally 2
Total
Mul 6.5 4.0
Flag \"strict\" on
";

#[derive(Parser, Debug)]
#[command(name = "cmdscript", about = "Compile and run a command script", version)]
struct Cli {
    /// Script file to run; the built-in demo script when omitted.
    script: Option<PathBuf>,

    /// Compile only and report the instruction count.
    #[arg(long)]
    check: bool,

    /// Run the compiled program this many times.
    #[arg(long, default_value_t = 1)]
    runs: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (source, origin) = match &cli.script {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => (text, path.display().to_string()),
            Err(e) => {
                eprintln!("cmdscript: {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => (DEMO_SCRIPT.to_owned(), "<demo>".to_owned()),
    };

    let config = demo_config();
    let program = match config.compile(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("cmdscript: {origin}: {e}");
            std::process::exit(1);
        }
    };

    if cli.check {
        println!("{origin}: {} instruction(s)", program.len());
        return;
    }

    for _ in 0..cli.runs {
        program.run();
    }
}

/// The functions demo scripts may call.
///
/// `Tally`/`Total` share a captured accumulator to show state threading
/// through callbacks; `Total` takes no arguments at all.
fn demo_config() -> Config {
    let mut config = Config::new();

    config.define("Say", &[ParamType::Str], |args| {
        println!("{}", args[0]);
    });

    config.define("Person", &[ParamType::Str, ParamType::U32], |args| {
        println!("{} is {} years old", args[0], args[1]);
    });

    config.define("Mul", &[ParamType::F64, ParamType::F64], |args| {
        let a = args[0].as_f64().unwrap();
        let b = args[1].as_f64().unwrap();
        println!("{a} * {b} = {}", a * b);
    });

    config.define("Flag", &[ParamType::Str, ParamType::Bool], |args| {
        let state = if args[1].as_bool().unwrap() { "on" } else { "off" };
        println!("{}: {state}", args[0]);
    });

    let total = Arc::new(AtomicI64::new(0));
    let tally = Arc::clone(&total);
    config.define("Tally", &[ParamType::I64], move |args| {
        tally.fetch_add(args[0].as_i64().unwrap(), Ordering::Relaxed);
    });
    config.define("Total", &[], move |_| {
        println!("total: {}", total.load(Ordering::Relaxed));
    });

    config
}
