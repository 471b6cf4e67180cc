//! RISC-16 command-line front end.
//!
//! Local driver for the same core the service layer exposes:
//! 1. **Assemble:** print the padded memory image or every collected error.
//! 2. **Run:** assemble, drive the external simulation, print the JSON response.
//! 3. **Status:** report which external tools were resolved.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use risc16_assembler::assemble;
use risc16_sim::{service, SourceSet, Simulator, Toolchain};
use risc16_spec::to_image;

#[derive(Parser, Debug)]
#[command(
    name = "risc16",
    version,
    about = "16-bit RISC CPU assembler and simulation driver"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a source file and print the memory image.
    Assemble {
        /// Assembly source file.
        file: PathBuf,
    },

    /// Assemble a source file, run the external simulation, print the JSON response.
    Run {
        /// Assembly source file.
        file: PathBuf,

        /// Directory containing the hardware description (src/ and testbench/).
        #[arg(long, default_value = "hdl")]
        hdl: PathBuf,
    },

    /// Report which external tools were resolved.
    Status,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Assemble { file } => cmd_assemble(&file),
        Commands::Run { file, hdl } => cmd_run(&file, &hdl),
        Commands::Status => cmd_status(),
    }
}

fn read_source(file: &PathBuf) -> String {
    std::fs::read_to_string(file).unwrap_or_else(|e| {
        eprintln!("error: cannot read {}: {}", file.display(), e);
        process::exit(1);
    })
}

fn cmd_assemble(file: &PathBuf) {
    let program = assemble(&read_source(file));
    if !program.is_success() {
        for err in &program.errors {
            eprintln!("{err}");
        }
        process::exit(1);
    }
    println!("{}", to_image(&program.words));
}

fn cmd_run(file: &PathBuf, hdl: &PathBuf) {
    let sim = Simulator::new(Toolchain::global().clone(), SourceSet::rooted_at(hdl));
    let response = service::simulate(&sim, &read_source(file));

    match serde_json::to_string_pretty(&response) {
        Ok(body) => println!("{body}"),
        Err(e) => {
            eprintln!("error: cannot serialize response: {e}");
            process::exit(1);
        }
    }
    if !response.success {
        process::exit(1);
    }
}

fn cmd_status() {
    let report = service::status(Toolchain::global());
    match serde_json::to_string_pretty(&report) {
        Ok(body) => println!("{body}"),
        Err(e) => {
            eprintln!("error: cannot serialize status: {e}");
            process::exit(1);
        }
    }
}
