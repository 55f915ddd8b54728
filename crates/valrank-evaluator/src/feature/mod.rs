//! Classifier input features.
//!
//! A [`FeatureVector`] holds exactly eight values in the order given by [`FeatureKind::ALL`].
//! The scaler and the classifier of a model artifact were fit against this order, so it is
//! part of the model interface: it is versioned by [`FEATURE_LAYOUT_VERSION`] and stored in
//! every artifact (see [`check_feature_layout`](crate::artifact::check_feature_layout)).
//! Reordering the features silently corrupts predictions.
//!
//! | # | id                          | source                                   |
//! |---|-----------------------------|------------------------------------------|
//! | 0 | `assists_per_match`         | `Assists/Match`                          |
//! | 1 | `damage_received_per_match` | `Damage Received` / matches played       |
//! | 2 | `headshots_per_match`       | `Headshots` / matches played             |
//! | 3 | `rounds_traded_per_match`   | `Rounds Traded` / matches played         |
//! | 4 | `kills_per_match`           | `Kills/Match`                            |
//! | 5 | `deaths_per_match`          | `Deaths/Match`                           |
//! | 6 | `damage_per_match`          | `Damage/Match`                           |
//! | 7 | `kd_ratio`                  | kills per match / deaths per match       |

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::builder::{MATCHES_PLAYED_FALLBACK, build_features};

mod builder;

/// Version of the feature layout described by [`FeatureKind::ALL`].
pub const FEATURE_LAYOUT_VERSION: u32 = 1;

/// Number of features in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = FeatureKind::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    AssistsPerMatch,
    DamageReceivedPerMatch,
    HeadshotsPerMatch,
    RoundsTradedPerMatch,
    KillsPerMatch,
    DeathsPerMatch,
    DamagePerMatch,
    KdRatio,
}

impl FeatureKind {
    pub const ALL: [Self; 8] = [
        Self::AssistsPerMatch,
        Self::DamageReceivedPerMatch,
        Self::HeadshotsPerMatch,
        Self::RoundsTradedPerMatch,
        Self::KillsPerMatch,
        Self::DeathsPerMatch,
        Self::DamagePerMatch,
        Self::KdRatio,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::AssistsPerMatch => "assists_per_match",
            Self::DamageReceivedPerMatch => "damage_received_per_match",
            Self::HeadshotsPerMatch => "headshots_per_match",
            Self::RoundsTradedPerMatch => "rounds_traded_per_match",
            Self::KillsPerMatch => "kills_per_match",
            Self::DeathsPerMatch => "deaths_per_match",
            Self::DamagePerMatch => "damage_per_match",
            Self::KdRatio => "kd_ratio",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AssistsPerMatch => "Assists per Match",
            Self::DamageReceivedPerMatch => "Damage Received per Match",
            Self::HeadshotsPerMatch => "Headshots per Match",
            Self::RoundsTradedPerMatch => "Rounds Traded per Match",
            Self::KillsPerMatch => "Kills per Match",
            Self::DeathsPerMatch => "Deaths per Match",
            Self::DamagePerMatch => "Damage per Match",
            Self::KdRatio => "K/D Ratio",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Fixed-length, fixed-order classifier input. Serializes as a plain array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    #[must_use]
    pub const fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    #[must_use]
    pub const fn get(&self, kind: FeatureKind) -> f64 {
        self.0[kind.index()]
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    #[must_use]
    pub const fn into_array(self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    /// Pairs every value with its [`FeatureKind`], in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKind, f64)> + '_ {
        FeatureKind::ALL.into_iter().zip(self.0.iter().copied())
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|value| value.is_finite())
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}
