use std::{io, process};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zen::repl::{run, ReplConfig};

#[derive(Parser)]
#[command(
    name = "zen",
    about = "Tokenize arithmetic expressions read from standard input",
    version
)]
struct Cli {
    /// Prompt printed before each line is read
    #[arg(long, default_value = "zen >> ")]
    prompt: String,

    /// Source name reported in diagnostics
    #[arg(long, default_value = "stdin")]
    file_name: String,

    /// Print the offending line with a caret after each error
    #[arg(long)]
    show_source: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "zen::lexer=trace")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = ReplConfig {
        prompt: cli.prompt,
        file_name: cli.file_name,
        show_source: cli.show_source,
    };

    info!(file_name = %config.file_name, "starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    if let Err(error) = run(stdin.lock(), &mut stdout, &config) {
        eprintln!("reading standard input: {}", error);
        process::exit(1);
    }
}
