//! Diagnostic logging via tracing
//!
//! User-facing output goes to stdout with `println!`; tracing events go to
//! stderr and are only shown at `warn` unless `--verbose` or `RUST_LOG` is set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "vmc_renamer=debug,warn"
    } else {
        "vmc_renamer=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init so repeated initialization (tests) is not fatal
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
