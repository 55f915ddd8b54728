//! Extraction side of the rank predictor: turns pasted player-statistics text into a
//! partial record of known statistics.
//!
//! # Overview
//!
//! - [`StatLabel`] - the closed set of eight labels recognized in the text
//! - [`StatRecord`] - one optional, finite value per label
//! - [`extract()`] / [`Extractor`] - the label-driven line scanner
//!
//! # Example
//!
//! ```
//! use valrank_core::{StatLabel, extract};
//!
//! let record = extract("Damage Received\n1,336,758\nHeadshots\nN/A\n");
//! assert_eq!(record.get(StatLabel::DamageReceived), Some(1_336_758.0));
//! assert_eq!(record.get(StatLabel::Headshots), None);
//! assert_eq!(record.get(StatLabel::MatchesPlayed), None);
//! ```

pub use self::{
    extract::{DuplicatePolicy, Extractor, extract, scan},
    stat_record::{ParseStatLabelError, StatLabel, StatRecord},
};

pub mod extract;
pub mod stat_record;
