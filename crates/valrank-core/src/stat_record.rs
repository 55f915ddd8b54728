use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Labels of the statistics captured from pasted stats text.
///
/// A label is recognized only when a trimmed line equals [`StatLabel::label()`]
/// exactly (case-sensitive). Variant order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatLabel {
    AssistsPerMatch,
    DamageReceived,
    Headshots,
    RoundsTraded,
    KillsPerMatch,
    DeathsPerMatch,
    DamagePerMatch,
    MatchesPlayed,
}

impl StatLabel {
    pub const ALL: [Self; 8] = [
        Self::AssistsPerMatch,
        Self::DamageReceived,
        Self::Headshots,
        Self::RoundsTraded,
        Self::KillsPerMatch,
        Self::DeathsPerMatch,
        Self::DamagePerMatch,
        Self::MatchesPlayed,
    ];

    /// Label text as it appears in the stats dump.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AssistsPerMatch => "Assists/Match",
            Self::DamageReceived => "Damage Received",
            Self::Headshots => "Headshots",
            Self::RoundsTraded => "Rounds Traded",
            Self::KillsPerMatch => "Kills/Match",
            Self::DeathsPerMatch => "Deaths/Match",
            Self::DamagePerMatch => "Damage/Match",
            Self::MatchesPlayed => "Matches Played",
        }
    }

    /// Position of the label in [`StatLabel::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Exact, case-sensitive lookup. Callers trim the line first.
    #[must_use]
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.label() == text)
    }
}

impl fmt::Display for StatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown stat label '{label}'")]
pub struct ParseStatLabelError {
    label: String,
}

impl FromStr for StatLabel {
    type Err = ParseStatLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim()).ok_or_else(|| ParseStatLabelError {
            label: s.to_owned(),
        })
    }
}

/// One optional value per [`StatLabel`].
///
/// The record always holds all eight labels; a value is `None` until it has been
/// parsed, and a stored value is always finite. The serialized form is a JSON object
/// keyed by the label text with `null` for absent values, which is what gets carried
/// between the extraction step and the prediction step.
///
/// ```
/// use valrank_core::{StatLabel, StatRecord};
///
/// let mut record = StatRecord::new();
/// record.set(StatLabel::Headshots, Some(3905.0));
/// record.set(StatLabel::KillsPerMatch, Some(f64::INFINITY));
/// assert_eq!(record.get(StatLabel::Headshots), Some(3905.0));
/// assert_eq!(record.get(StatLabel::KillsPerMatch), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatRecord {
    #[serde(rename = "Assists/Match")]
    assists_per_match: Option<f64>,
    #[serde(rename = "Damage Received")]
    damage_received: Option<f64>,
    #[serde(rename = "Headshots")]
    headshots: Option<f64>,
    #[serde(rename = "Rounds Traded")]
    rounds_traded: Option<f64>,
    #[serde(rename = "Kills/Match")]
    kills_per_match: Option<f64>,
    #[serde(rename = "Deaths/Match")]
    deaths_per_match: Option<f64>,
    #[serde(rename = "Damage/Match")]
    damage_per_match: Option<f64>,
    #[serde(rename = "Matches Played")]
    matches_played: Option<f64>,
}

impl StatRecord {
    /// Creates a record with every value absent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assists_per_match: None,
            damage_received: None,
            headshots: None,
            rounds_traded: None,
            kills_per_match: None,
            deaths_per_match: None,
            damage_per_match: None,
            matches_played: None,
        }
    }

    #[must_use]
    pub const fn get(&self, label: StatLabel) -> Option<f64> {
        match label {
            StatLabel::AssistsPerMatch => self.assists_per_match,
            StatLabel::DamageReceived => self.damage_received,
            StatLabel::Headshots => self.headshots,
            StatLabel::RoundsTraded => self.rounds_traded,
            StatLabel::KillsPerMatch => self.kills_per_match,
            StatLabel::DeathsPerMatch => self.deaths_per_match,
            StatLabel::DamagePerMatch => self.damage_per_match,
            StatLabel::MatchesPlayed => self.matches_played,
        }
    }

    /// Stores `value` for `label`. Non-finite values are stored as absent.
    pub fn set(&mut self, label: StatLabel, value: Option<f64>) {
        *self.slot_mut(label) = value.filter(|v| v.is_finite());
    }

    /// Builder-style [`StatRecord::set`] with a present value.
    #[must_use]
    pub fn with(mut self, label: StatLabel, value: f64) -> Self {
        self.set(label, Some(value));
        self
    }

    /// Iterates all eight labels in canonical order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (StatLabel, Option<f64>)> + '_ {
        StatLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }

    /// Number of labels with a parsed value.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.iter().filter(|(_, value)| value.is_some()).count()
    }

    fn slot_mut(&mut self, label: StatLabel) -> &mut Option<f64> {
        match label {
            StatLabel::AssistsPerMatch => &mut self.assists_per_match,
            StatLabel::DamageReceived => &mut self.damage_received,
            StatLabel::Headshots => &mut self.headshots,
            StatLabel::RoundsTraded => &mut self.rounds_traded,
            StatLabel::KillsPerMatch => &mut self.kills_per_match,
            StatLabel::DeathsPerMatch => &mut self.deaths_per_match,
            StatLabel::DamagePerMatch => &mut self.damage_per_match,
            StatLabel::MatchesPlayed => &mut self.matches_played,
        }
    }
}
