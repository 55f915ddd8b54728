use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::info;
use valrank_core::StatRecord;

use crate::{
    command::extract,
    model::rank_model::RankModel,
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PredictArg {
    /// Rank model file
    #[arg(long)]
    model: PathBuf,
    /// Stat record written by `extract`
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    record: Option<PathBuf>,
    /// Pasted statistics text to extract the record from
    #[arg(long)]
    input: Option<PathBuf>,
    /// Keep the first value of a repeated label instead of the last (with `--input`)
    #[arg(long, requires = "input")]
    first_wins: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &PredictArg) -> anyhow::Result<()> {
    let PredictArg {
        model,
        record,
        input,
        first_wins,
        output,
    } = arg;

    let record = match record {
        Some(path) => util::read_record_file(path)?,
        None => read_record_from_text(input.as_deref(), *first_wins)?,
    };
    let predictor = RankModel::open(model)?.into_predictor();
    let prediction = predictor
        .predict_record(&record)
        .context("Failed to predict rank tier")?;
    info!(tier = %prediction.tier, icon = %prediction.icon, "predicted rank");

    Output::save_json(&prediction, output.clone())?;
    Ok(())
}

fn read_record_from_text(input: Option<&Path>, first_wins: bool) -> anyhow::Result<StatRecord> {
    let text = util::read_text_input(input)?;
    Ok(extract::extractor(first_wins).extract(&text))
}
