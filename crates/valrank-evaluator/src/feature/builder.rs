use valrank_core::{StatLabel, StatRecord};

use super::FeatureVector;

/// Match count used when `Matches Played` is absent or zero.
pub const MATCHES_PLAYED_FALLBACK: f64 = 1.0;

/// Builds the classifier input from an extracted record.
///
/// # Missing values
///
/// Every absent statistic reads as `0.0`, except `Matches Played` which reads as
/// [`MATCHES_PLAYED_FALLBACK`]. A match count of exactly zero is replaced by the same
/// fallback before anything is divided by it.
///
/// # Derived values
///
/// - `Damage Received`, `Headshots` and `Rounds Traded` are career totals and are divided
///   by the match count.
/// - Assists, kills, deaths and damage are already per-match figures and pass through.
/// - The K/D ratio is kills per match over deaths per match, or `0.0` when deaths per
///   match is zero.
///
/// ```
/// use valrank_core::{StatLabel, StatRecord};
/// use valrank_evaluator::feature::{FeatureKind, build_features};
///
/// let record = StatRecord::new()
///     .with(StatLabel::Headshots, 3905.0)
///     .with(StatLabel::MatchesPlayed, 20.0);
/// let features = build_features(&record);
/// assert_eq!(features.get(FeatureKind::HeadshotsPerMatch), 195.25);
/// assert_eq!(features.get(FeatureKind::KdRatio), 0.0);
/// ```
#[must_use]
pub fn build_features(record: &StatRecord) -> FeatureVector {
    let value = |label| record.get(label).unwrap_or(0.0);

    let matches_played = match record.get(StatLabel::MatchesPlayed) {
        Some(count) if count != 0.0 => count,
        _ => MATCHES_PLAYED_FALLBACK,
    };

    let assists = value(StatLabel::AssistsPerMatch);
    let damage_received = value(StatLabel::DamageReceived);
    let headshots = value(StatLabel::Headshots);
    let rounds_traded = value(StatLabel::RoundsTraded);
    let kills = value(StatLabel::KillsPerMatch);
    let deaths = value(StatLabel::DeathsPerMatch);
    let damage = value(StatLabel::DamagePerMatch);

    FeatureVector::new([
        assists,
        ratio(damage_received, matches_played),
        ratio(headshots, matches_played),
        ratio(rounds_traded, matches_played),
        kills,
        deaths,
        damage,
        ratio(kills, deaths),
    ])
}

/// `numerator / denominator`, or `0.0` for a zero denominator or an overflowing quotient.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() { quotient } else { 0.0 }
}
