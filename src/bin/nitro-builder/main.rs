//! nitro-builder CLI - Builder selection for Nitro projects

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use nitro_builder::resolve::{EnvSnapshot, ResolveError};
use nitro_builder::util::diagnostic;
use nitro_builder::util::Shell;

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("nitro_builder=debug")
    } else {
        EnvFilter::new("nitro_builder=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let shell = Shell::from_flags(cli.quiet, cli.verbose, cli.color, cli.json);

    if let Err(e) = run(cli, &shell) {
        report(&shell, &e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, shell: &Shell) -> Result<()> {
    let env = EnvSnapshot::capture();

    match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args, shell, &env),
        Commands::List(args) => commands::list::execute(args, shell),
        Commands::Check(args) => commands::check::execute(args, shell),
        Commands::Detect(args) => commands::detect::execute(args, shell),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn report(shell: &Shell, err: &anyhow::Error) {
    if shell.is_json() {
        shell.error(format!("{:#}", err));
        return;
    }

    match err.downcast_ref::<ResolveError>() {
        Some(resolve_err) => diagnostic::emit(&resolve_err.to_diagnostic(), shell.use_color()),
        None => eprintln!("error: {:#}", err),
    }
}
