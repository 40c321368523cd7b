//! Club simulator CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use clubsim_runtime::cli::help_text;
use clubsim_runtime::{CliConfig, init_logging, run};
use tracing::error;

fn main() -> ExitCode {
    let config = match CliConfig::parse(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Try 'clubsim --help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    if config.show_help {
        println!("{}", help_text());
        return ExitCode::SUCCESS;
    }

    if config.show_version {
        println!("clubsim {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    match run(&config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // A malformed input line is reported by echoing it on stdout.
            if let Some(line) = &e.line {
                println!("{}", line.text);
                error!(line = line.number, "{e}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
