use clap::Parser;
use debug_log::cli::Cli;
use debug_log::error::LogError;
use debug_log::runner::run_messages;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(err) = real_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn real_main() -> Result<(), LogError> {
    let cli = Cli::parse();
    let result = run_messages(&cli)?;

    // Write failures only affect the exit status when asked to.
    if cli.strict && !result.all_written() {
        std::process::exit(1);
    }
    Ok(())
}
