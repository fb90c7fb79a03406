//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use nitro_builder::pm::PackageManager;
use nitro_builder::util::ColorChoice;

/// nitro-builder - Pick and provision the bundler for a Nitro project
#[derive(Parser)]
#[command(name = "nitro-builder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto", value_name = "WHEN")]
    pub color: ColorChoice,

    /// Emit machine-readable JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the builder for a project, installing it if needed
    Resolve(ResolveArgs),

    /// List supported builders and whether they are installed
    List(ProjectArgs),

    /// Check that a builder is valid and installed
    Check(CheckArgs),

    /// Explain what auto-detection would choose
    Detect(ProjectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ProjectArgs {
    /// Project root (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Builder to use, overriding config and NITRO_BUILDER
    #[arg(long, short)]
    pub builder: Option<String>,

    /// Install missing builder packages without asking
    #[arg(long, short)]
    pub yes: bool,

    /// Package manager used for installation (overrides detection)
    #[arg(long, value_name = "PM")]
    pub package_manager: Option<PackageManager>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Builder to check
    pub builder: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
