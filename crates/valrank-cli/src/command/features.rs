use std::path::PathBuf;

use serde::Serialize;
use valrank_evaluator::feature::{self, FEATURE_LAYOUT_VERSION, FeatureVector};

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct FeaturesArg {
    /// Stat record written by `extract`
    #[arg(long)]
    record: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct FeatureOutput {
    feature_layout_version: u32,
    features: Vec<FeatureEntry>,
}

#[derive(Debug, Serialize)]
struct FeatureEntry {
    id: &'static str,
    value: f64,
}

impl FeatureOutput {
    fn new(features: &FeatureVector) -> Self {
        Self {
            feature_layout_version: FEATURE_LAYOUT_VERSION,
            features: features
                .iter()
                .map(|(kind, value)| FeatureEntry {
                    id: kind.id(),
                    value,
                })
                .collect(),
        }
    }
}

pub(crate) fn run(arg: &FeaturesArg) -> anyhow::Result<()> {
    let FeaturesArg { record, output } = arg;

    let record = util::read_record_file(record)?;
    let features = feature::build_features(&record);
    Output::save_json(&FeatureOutput::new(&features), output.clone())?;
    Ok(())
}
