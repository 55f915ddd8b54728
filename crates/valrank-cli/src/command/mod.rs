use clap::{Parser, Subcommand};

use self::{extract::ExtractArg, features::FeaturesArg, predict::PredictArg, show::ShowArg};

mod extract;
mod features;
mod predict;
mod show;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Enable debug logging (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

impl CommandArgs {
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Extract a stat record from pasted statistics text
    Extract(#[clap(flatten)] ExtractArg),
    /// Show the statistics of a stat record
    Show(#[clap(flatten)] ShowArg),
    /// Build the classifier feature vector of a stat record
    Features(#[clap(flatten)] FeaturesArg),
    /// Predict the rank tier of a stat record
    Predict(#[clap(flatten)] PredictArg),
}

pub fn run(args: CommandArgs) -> anyhow::Result<()> {
    match args.mode {
        Mode::Extract(arg) => extract::run(&arg)?,
        Mode::Show(arg) => show::run(&arg)?,
        Mode::Features(arg) => features::run(&arg)?,
        Mode::Predict(arg) => predict::run(&arg)?,
    }
    Ok(())
}
