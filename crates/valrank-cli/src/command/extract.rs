use std::path::PathBuf;

use tracing::info;
use valrank_core::{DuplicatePolicy, Extractor};

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ExtractArg {
    /// Pasted statistics text (reads stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Keep the first value of a repeated label instead of the last
    #[arg(long)]
    first_wins: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ExtractArg) -> anyhow::Result<()> {
    let ExtractArg {
        input,
        first_wins,
        output,
    } = arg;

    let text = util::read_text_input(input.as_deref())?;
    let record = extractor(*first_wins).extract(&text);
    info!(present = record.present_count(), "extracted stat record");

    Output::save_json(&record, output.clone())?;
    Ok(())
}

pub(crate) fn extractor(first_wins: bool) -> Extractor {
    let policy = if first_wins {
        DuplicatePolicy::FirstWins
    } else {
        DuplicatePolicy::LastWins
    };
    Extractor::with_duplicate_policy(policy)
}
