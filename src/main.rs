//! `legalpages` - agreement page generator

use clap::Parser;

use legalpages::cli::args::Cli;
use legalpages::cli::commands;
use legalpages::error::ExitCode;
use legalpages::observability::init_logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(ExitCode::USAGE_ERROR);
        }
        Err(e) => e.exit(),
    };

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
