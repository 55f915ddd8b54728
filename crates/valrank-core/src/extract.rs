//! Label-driven extraction of statistics from pasted text.
//!
//! The expected input loosely resembles a stats page copied from a browser: a label on a
//! line of its own, with its value on the very next line.
//!
//! ```text
//! Damage Received
//! 1,336,758
//! Headshots
//! 3,905
//! ```
//!
//! [`scan()`] walks the lines once and emits a `(label, value)` pair for every label line
//! that has a following line; [`Extractor`] folds those pairs into a [`StatRecord`].
//! Nothing in here fails: a value line that is not a finite number yields an absent value.

use std::iter;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::stat_record::{StatLabel, StatRecord};

/// Which pair wins when a label occurs more than once in the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Each occurrence overwrites the previous one, including with an absent value.
    #[default]
    LastWins,
    /// The first occurrence is kept and later ones are ignored.
    FirstWins,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Extractor {
    duplicate_policy: DuplicatePolicy,
}

impl Extractor {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::LastWins,
        }
    }

    #[must_use]
    pub const fn with_duplicate_policy(duplicate_policy: DuplicatePolicy) -> Self {
        Self { duplicate_policy }
    }

    #[must_use]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    #[must_use]
    pub fn extract(&self, raw_text: &str) -> StatRecord {
        let mut record = StatRecord::new();
        let mut seen = [false; StatLabel::ALL.len()];
        for (label, value) in scan(raw_text) {
            let already_seen = &mut seen[label.index()];
            if *already_seen && self.duplicate_policy == DuplicatePolicy::FirstWins {
                debug!(%label, "ignoring repeated label");
                continue;
            }
            *already_seen = true;
            record.set(label, value);
        }
        debug!(
            present = record.present_count(),
            total = StatLabel::ALL.len(),
            "extracted stats"
        );
        record
    }
}

/// Extracts a [`StatRecord`] with the default [`DuplicatePolicy::LastWins`] policy.
#[must_use]
pub fn extract(raw_text: &str) -> StatRecord {
    Extractor::new().extract(raw_text)
}

/// Emits one pair per label line that is followed by another line.
///
/// Every line is considered as a label candidate, including one that was just used as
/// the value line of the previous label. A label on the last line emits nothing.
pub fn scan(raw_text: &str) -> impl Iterator<Item = (StatLabel, Option<f64>)> + '_ {
    let mut lines = split_lines(raw_text).peekable();
    iter::from_fn(move || {
        loop {
            let line = lines.next()?;
            let Some(label) = StatLabel::from_label(line.trim()) else {
                continue;
            };
            let Some(value_line) = lines.peek() else {
                debug!(%label, "label on the last line has no value");
                return None;
            };
            return Some((label, parse_value(label, value_line)));
        }
    })
}

/// Splits on `\n`, `\r\n` and lone `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

fn parse_value(label: StatLabel, line: &str) -> Option<f64> {
    let cleaned = line.trim().replace(',', "");
    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!(%label, value = line.trim(), "value is not a finite number");
            None
        }
    }
}
