use clap::Parser;
use focusflow::cli::commands::Cli;
use focusflow::cli::handlers;
use tracing_subscriber::EnvFilter;

fn main() {
    if std::env::var("FOCUSFLOW_DEBUG").is_ok() {
        let filter = EnvFilter::try_from_env("FOCUSFLOW_LOG")
            .unwrap_or_else(|_| EnvFilter::new("focusflow=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
