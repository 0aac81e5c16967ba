use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::cli::{handlers, logging};

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it only logs to an explicit file
    let wants_logs = cli.command.is_some() || cli.log_file.is_some();
    if wants_logs && let Err(e) = logging::init_tracing(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
