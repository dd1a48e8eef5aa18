use std::process;

use tracing_subscriber::EnvFilter;

use enigma_rs::cli;
use enigma_rs::EnigmaError;

fn main() {
    let cli = cli::parse_from(std::env::args_os());
    init_tracing(cli.verbose);

    if let Err(err) = cli::run(cli) {
        match err {
            EnigmaError::Settings(errors) => {
                eprintln!("Encountered the following errors:");
                for error in &errors {
                    eprintln!("- {error}");
                }
                process::exit(2);
            }
            other => {
                eprintln!("error: {other}");
                process::exit(1);
            }
        }
    }
}

fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var("ENIGMA_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn level_from_verbosity(verbosity: u8) -> tracing::metadata::LevelFilter {
    match verbosity {
        0 => tracing::metadata::LevelFilter::WARN,
        1 => tracing::metadata::LevelFilter::INFO,
        2 => tracing::metadata::LevelFilter::DEBUG,
        _ => tracing::metadata::LevelFilter::TRACE,
    }
}
