use std::{
    io::{self, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use valrank_core::{StatLabel, StatRecord};

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ShowArg {
    /// Stat record written by `extract`
    #[arg(long)]
    record: PathBuf,
}

pub(crate) fn run(arg: &ShowArg) -> anyhow::Result<()> {
    let ShowArg { record } = arg;

    let record = util::read_record_file(record)?;
    let mut stdout = io::stdout().lock();
    for line in stat_table(&record) {
        writeln!(stdout, "{line}").context("Failed to write to stdout")?;
    }
    Ok(())
}

fn stat_table(record: &StatRecord) -> Vec<String> {
    let width = StatLabel::ALL
        .iter()
        .map(|label| label.label().len())
        .max()
        .unwrap_or(0);
    record
        .iter()
        .map(|(label, value)| match value {
            Some(value) => format!("{:<width$}  {value}", label.label()),
            None => format!("{:<width$}  -", label.label()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_table() {
        let record = StatRecord::new()
            .with(StatLabel::DamageReceived, 1_336_758.0)
            .with(StatLabel::MatchesPlayed, 20.0);
        let table = stat_table(&record);
        assert_eq!(table.len(), 8);
        assert_eq!(table[0], "Assists/Match    -");
        assert_eq!(table[1], "Damage Received  1336758");
        assert_eq!(table[7], "Matches Played   20");
    }
}
