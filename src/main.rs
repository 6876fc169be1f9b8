use clap::Parser;
use finguide::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("finguide=info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    run(Cli::parse())
}
