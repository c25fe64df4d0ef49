//! VMC Renamer: convert GameCube memory card emulator layouts
//!
//! Renames save directories between the MCGCP and GCMCE naming schemes,
//! either in place or into another SD root.

use std::process::ExitCode;

use clap::Parser;

use vmc_renamer::cli::{run_rename, Cli};
use vmc_renamer::utils::{init_logger, print_error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    tracing::debug!(?cli, "Parsed arguments");

    match run_rename(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Conversion failed");
            print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
