//! `grc` command-line entry point.

use clap::Parser;

mod commands;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    let logging = commands::load_config(&cli.config)
        .map(|config| config.logging)
        .unwrap_or_default();
    grc_policy_engine::init_logging(&logging);

    if let Err(e) = cli.execute() {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
