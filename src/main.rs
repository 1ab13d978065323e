use clap::Parser;
use clap::error::ErrorKind;
use courseplan::cli::{Cli, Commands};
use courseplan::cli_handlers;
use std::process;

fn main() {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Exit status 2 is reserved for a detected cycle, so usage errors exit 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Order {
            plan,
            json,
            explain,
            fail_on_cycle,
        } => cli_handlers::handle_order(&plan, json, explain, fail_on_cycle),
        Commands::Check { plan } => cli_handlers::handle_check(&plan),
        Commands::Demo => cli_handlers::handle_demo(),
    };

    match result {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
