//! Rank tiers, their classifier codes, and their display icons.
//!
//! Tier names, codes and icon filenames come from a single read-only table so that the
//! classifier-code lookup and the icon lookup can never disagree. Codes follow ascending
//! skill order and are exactly the category codes the classifier was trained on.
//!
//! Lookups never fail: an unrecognized code or name maps to [`UNKNOWN_TIER_NAME`] and
//! [`UNKNOWN_TIER_ICON`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const UNKNOWN_TIER_NAME: &str = "Unknown Tier";
pub const UNKNOWN_TIER_ICON: &str = "unknown_tier.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Ascendant,
    Immortal,
}

#[derive(Debug)]
struct TierEntry {
    tier: Tier,
    name: &'static str,
    icon: &'static str,
}

impl TierEntry {
    const fn new(tier: Tier, name: &'static str, icon: &'static str) -> Self {
        Self { tier, name, icon }
    }
}

static TIER_TABLE: [TierEntry; 8] = [
    TierEntry::new(Tier::Iron, "iron", "iron.png"),
    TierEntry::new(Tier::Bronze, "bronze", "bronze.png"),
    TierEntry::new(Tier::Silver, "silver", "silver.png"),
    TierEntry::new(Tier::Gold, "gold", "gold.png"),
    TierEntry::new(Tier::Platinum, "platinum", "platinum.png"),
    TierEntry::new(Tier::Diamond, "diamond", "diamond.png"),
    TierEntry::new(Tier::Ascendant, "ascendant", "ascendant.png"),
    TierEntry::new(Tier::Immortal, "immortal", "immortal.png"),
];

impl Tier {
    pub const ALL: [Self; 8] = [
        Self::Iron,
        Self::Bronze,
        Self::Silver,
        Self::Gold,
        Self::Platinum,
        Self::Diamond,
        Self::Ascendant,
        Self::Immortal,
    ];

    fn entry(self) -> &'static TierEntry {
        &TIER_TABLE[self as usize]
    }

    /// Classifier category code (`iron` = 0 … `immortal` = 7).
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Reverse of [`Tier::code()`]; `None` for any code outside `0..=7`.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        let index = usize::try_from(code).ok()?;
        TIER_TABLE.get(index).map(|entry| entry.tier)
    }

    /// Lowercase tier name, as shown to the user.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        self.entry().icon
    }

    /// Case-insensitive name lookup.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        TIER_TABLE
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.tier)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown tier name '{name}'")]
pub struct ParseTierError {
    name: String,
}

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseTierError { name: s.to_owned() })
    }
}

/// Icon filename for a tier name carried between steps.
///
/// The name is matched case-insensitively; an absent, empty, sentinel, or otherwise
/// unrecognized name gets [`UNKNOWN_TIER_ICON`].
#[must_use]
pub fn icon_for_tier_name(name: Option<&str>) -> &'static str {
    name.and_then(Tier::from_name).map_or(UNKNOWN_TIER_ICON, Tier::icon)
}

/// Tier name and icon filename handed to the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPrediction {
    pub tier: String,
    pub icon: String,
}

impl TierPrediction {
    /// Maps a classifier category code to a prediction.
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        if let Some(tier) = Tier::from_code(code) {
            Self::from(tier)
        } else {
            debug!(code, "classifier returned an unknown tier code");
            Self::unknown()
        }
    }

    /// Rebuilds a prediction from a tier name carried forward from an earlier step.
    #[must_use]
    pub fn from_tier_name(name: Option<&str>) -> Self {
        let tier = match name {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_TIER_NAME,
        };
        Self {
            tier: tier.to_owned(),
            icon: icon_for_tier_name(name).to_owned(),
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self {
            tier: UNKNOWN_TIER_NAME.to_owned(),
            icon: UNKNOWN_TIER_ICON.to_owned(),
        }
    }

    /// The predicted tier, or `None` for the unknown sentinel.
    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        Tier::from_name(&self.tier)
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.tier().is_none()
    }
}

impl From<Tier> for TierPrediction {
    fn from(tier: Tier) -> Self {
        Self {
            tier: tier.name().to_owned(),
            icon: tier.icon().to_owned(),
        }
    }
}

impl fmt::Display for TierPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tier, self.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_skill_order() {
        let names = (0..8)
            .map(|code| Tier::from_code(code).unwrap().name())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "iron",
                "bronze",
                "silver",
                "gold",
                "platinum",
                "diamond",
                "ascendant",
                "immortal",
            ]
        );
    }

    #[test]
    fn test_name_code_round_trip() {
        for tier in Tier::ALL {
            let code = tier.code();
            assert_eq!(Tier::from_code(code), Some(tier));
            assert_eq!(Tier::from_code(code).unwrap().name(), tier.name());
            assert_eq!(tier.name().parse::<Tier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_table_matches_enum() {
        for (i, entry) in TIER_TABLE.iter().enumerate() {
            assert_eq!(entry.tier as usize, i);
            assert_eq!(entry.icon, format!("{}.png", entry.name));
        }
    }

    #[test]
    fn test_out_of_range_code() {
        for code in [-1, 8, 42, i64::MIN, i64::MAX] {
            assert_eq!(Tier::from_code(code), None);
            let prediction = TierPrediction::from_code(code);
            assert_eq!(prediction.tier, UNKNOWN_TIER_NAME);
            assert_eq!(prediction.icon, UNKNOWN_TIER_ICON);
            assert!(prediction.is_unknown());
        }
    }

    #[test]
    fn test_prediction_for_every_code() {
        for tier in Tier::ALL {
            let prediction = TierPrediction::from_code(tier.code());
            assert_eq!(prediction.tier, tier.name());
            assert_eq!(prediction.icon, tier.icon());
            assert_eq!(prediction.tier(), Some(tier));
        }
    }

    #[test]
    fn test_icon_lookup_is_case_insensitive() {
        assert_eq!(icon_for_tier_name(Some("GOLD")), "gold.png");
        assert_eq!(icon_for_tier_name(Some("Immortal")), "immortal.png");
        assert_eq!(icon_for_tier_name(Some(UNKNOWN_TIER_NAME)), UNKNOWN_TIER_ICON);
        assert_eq!(icon_for_tier_name(Some("")), UNKNOWN_TIER_ICON);
        assert_eq!(icon_for_tier_name(Some("radiant")), UNKNOWN_TIER_ICON);
        assert_eq!(icon_for_tier_name(None), UNKNOWN_TIER_ICON);
    }

    #[test]
    fn test_prediction_from_carried_name() {
        let prediction = TierPrediction::from_tier_name(Some("Diamond"));
        assert_eq!(prediction.tier, "Diamond");
        assert_eq!(prediction.icon, "diamond.png");
        assert_eq!(prediction.tier(), Some(Tier::Diamond));

        assert_eq!(TierPrediction::from_tier_name(None), TierPrediction::unknown());
        assert_eq!(TierPrediction::from_tier_name(Some("")), TierPrediction::unknown());
    }

    #[test]
    fn test_prediction_json_shape() {
        let json = serde_json::to_value(TierPrediction::from(Tier::Ascendant)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "tier": "ascendant", "icon": "ascendant.png" })
        );
    }

    #[test]
    fn test_parse_error_message() {
        let err = "radiant".parse::<Tier>().unwrap_err();
        assert_eq!(err.to_string(), "unknown tier name 'radiant'");
    }
}
