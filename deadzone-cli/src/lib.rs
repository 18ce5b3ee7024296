//! Command-line interface for the Deadzone remedy engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

use recommend::RecommendArgs;

pub(crate) const ARG_RECOMMEND_PROFILE: &str = "profile";
pub(crate) const ARG_RECOMMEND_WEIGHTS: &str = "weights";
pub(crate) const ARG_RECOMMEND_CATALOG: &str = "catalog";
pub(crate) const ENV_RECOMMEND_PROFILE: &str = "DEADZONE_CMDS_RECOMMEND_PROFILE";

/// Run the Deadzone CLI with the current process arguments and
/// environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging,
/// input loading, or scoring fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "deadzone",
    about = "Recommend an intervention for a site from its observed features",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a site profile and report the winning remedy.
    Recommend(RecommendArgs),
}
