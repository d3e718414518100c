use clap::Parser;
use std::path::Path;

mod commands;
mod output;
mod tty;

use rewire::refactor::DEFAULT_TARGET;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rewire")]
#[command(version = VERSION)]
#[command(about = "Rewrite IPC module imports in electron/src/main.ts to handler modules")]
struct Cli {
    /// Print a JSON response instead of plain report lines
    #[arg(long)]
    json: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = commands::refactor::run(Path::new(DEFAULT_TARGET));

    // Failures are reported, never turned into a non-zero status.
    if cli.json {
        output::print_result(result);
    } else {
        output::print_plain(DEFAULT_TARGET, &result);
    }

    std::process::ExitCode::SUCCESS
}
