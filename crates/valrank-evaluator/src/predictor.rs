//! Tier prediction: scale, classify, and map the category code to a tier.
//!
//! Unknown category codes are not errors; they produce the unknown-tier sentinels. Only a
//! failing artifact aborts a prediction.

use tracing::debug;
use valrank_core::StatRecord;

use crate::{
    artifact::{ArtifactError, VectorClassifier, VectorTransform},
    feature::{FeatureVector, build_features},
    tier::TierPrediction,
};

/// Predicts the tier for one feature vector.
///
/// ```
/// use valrank_evaluator::{
///     artifact::{Classifier, LinearClassifier, Scaler},
///     feature::FeatureVector,
///     predictor::predict_tier,
/// };
///
/// // Always answers class 3.
/// let classifier = Classifier::Linear(
///     LinearClassifier::new(vec![3], vec![[0.0; 8]], vec![0.0]).unwrap(),
/// );
/// let features = FeatureVector::new([0.0; 8]);
/// let prediction = predict_tier(&features, &Scaler::Identity, &classifier).unwrap();
/// assert_eq!(prediction.tier, "gold");
/// assert_eq!(prediction.icon, "gold.png");
/// ```
pub fn predict_tier<T, C>(
    features: &FeatureVector,
    transform: &T,
    classifier: &C,
) -> Result<TierPrediction, ArtifactError>
where
    T: VectorTransform + ?Sized,
    C: VectorClassifier + ?Sized,
{
    let scaled = transform.transform(features)?;
    let code = classifier.predict(&scaled)?;
    let prediction = TierPrediction::from_code(code);
    debug!(code, tier = %prediction.tier, "predicted tier");
    Ok(prediction)
}

/// A loaded scaler and classifier pair.
///
/// Both artifacts are only read, so one predictor can be shared across threads.
#[derive(Debug)]
pub struct TierPredictor {
    transform: Box<dyn VectorTransform>,
    classifier: Box<dyn VectorClassifier>,
}

impl TierPredictor {
    #[must_use]
    pub fn new(transform: Box<dyn VectorTransform>, classifier: Box<dyn VectorClassifier>) -> Self {
        Self {
            transform,
            classifier,
        }
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<TierPrediction, ArtifactError> {
        predict_tier(features, &self.transform, &self.classifier)
    }

    /// Builds the feature vector from `record` and predicts its tier.
    pub fn predict_record(&self, record: &StatRecord) -> Result<TierPrediction, ArtifactError> {
        self.predict(&build_features(record))
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use valrank_core::StatLabel;

    use super::*;
    use crate::{
        artifact::{Classifier, LinearClassifier, Scaler, StandardScaler},
        feature::{FEATURE_COUNT, FeatureKind},
        tier::{Tier, UNKNOWN_TIER_ICON, UNKNOWN_TIER_NAME},
    };

    /// Answers the code it is given, ignoring the features.
    #[derive(Debug)]
    struct FixedClassifier(i64);

    impl VectorClassifier for FixedClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<i64, ArtifactError> {
            Ok(self.0)
        }
    }

    /// Answers the rounded K/D ratio as the category code.
    #[derive(Debug)]
    struct KdClassifier;

    impl VectorClassifier for KdClassifier {
        #[expect(clippy::cast_possible_truncation)]
        fn predict(&self, features: &FeatureVector) -> Result<i64, ArtifactError> {
            Ok(features.get(FeatureKind::KdRatio).round() as i64)
        }
    }

    #[derive(Debug)]
    struct BrokenTransform;

    impl VectorTransform for BrokenTransform {
        fn transform(&self, _features: &FeatureVector) -> Result<FeatureVector, ArtifactError> {
            Err(ArtifactError::NonFiniteOutput {
                artifact: "broken transform",
            })
        }
    }

    #[test]
    fn test_every_known_code() {
        let features = FeatureVector::new([0.0; FEATURE_COUNT]);
        for tier in Tier::ALL {
            let prediction =
                predict_tier(&features, &Scaler::Identity, &FixedClassifier(tier.code())).unwrap();
            assert_eq!(prediction.tier, tier.name());
            assert_eq!(prediction.icon, tier.icon());
        }
    }

    #[test]
    fn test_unknown_code_is_not_an_error() {
        let features = FeatureVector::new([0.0; FEATURE_COUNT]);
        for code in [-1, 8, 100] {
            let prediction =
                predict_tier(&features, &Scaler::Identity, &FixedClassifier(code)).unwrap();
            assert_eq!(prediction.tier, UNKNOWN_TIER_NAME);
            assert_eq!(prediction.icon, UNKNOWN_TIER_ICON);
        }
    }

    #[test]
    fn test_classifier_sees_scaled_features() {
        let mut mean = [0.0; FEATURE_COUNT];
        let mut scale = [1.0; FEATURE_COUNT];
        mean[FeatureKind::KdRatio.index()] = 1.0;
        scale[FeatureKind::KdRatio.index()] = 0.25;
        let scaler = Scaler::Standard(StandardScaler::new(mean, scale).unwrap());

        // kd 2.0 scales to (2.0 - 1.0) / 0.25 = 4 -> platinum
        let mut values = [0.0; FEATURE_COUNT];
        values[FeatureKind::KdRatio.index()] = 2.0;
        let prediction = predict_tier(&FeatureVector::new(values), &scaler, &KdClassifier).unwrap();
        assert_eq!(prediction.tier(), Some(Tier::Platinum));
    }

    #[test]
    fn test_transform_failure_propagates() {
        let features = FeatureVector::new([0.0; FEATURE_COUNT]);
        let err = predict_tier(&features, &BrokenTransform, &FixedClassifier(0)).unwrap_err();
        assert_eq!(err.to_string(), "broken transform produced a non-finite value");
    }

    #[test]
    fn test_predictor_from_record() {
        let classifier = Classifier::Linear(
            LinearClassifier::new(
                vec![1, 6],
                vec![{
                    let mut row = [0.0; FEATURE_COUNT];
                    row[FeatureKind::KdRatio.index()] = 1.0;
                    row
                }],
                vec![-1.0],
            )
            .unwrap(),
        );
        let predictor = TierPredictor::new(Box::new(Scaler::Identity), Box::new(classifier));

        let strong = StatRecord::new()
            .with(StatLabel::KillsPerMatch, 1.4)
            .with(StatLabel::DeathsPerMatch, 0.7);
        let weak = StatRecord::new()
            .with(StatLabel::KillsPerMatch, 0.5)
            .with(StatLabel::DeathsPerMatch, 1.0);
        assert_eq!(
            predictor.predict_record(&strong).unwrap().tier(),
            Some(Tier::Ascendant)
        );
        assert_eq!(
            predictor.predict_record(&weak).unwrap().tier(),
            Some(Tier::Bronze)
        );
        // no deaths -> kd 0.0
        let no_deaths = StatRecord::new().with(StatLabel::KillsPerMatch, 5.0);
        assert_eq!(
            predictor.predict_record(&no_deaths).unwrap().tier(),
            Some(Tier::Bronze)
        );
    }

    #[test]
    fn test_predictor_is_shareable() {
        let predictor = Arc::new(TierPredictor::new(
            Box::new(Scaler::Identity),
            Box::new(KdClassifier),
        ));
        let handles = (0..4_i32)
            .map(|i| {
                let predictor = Arc::clone(&predictor);
                thread::spawn(move || {
                    let record = StatRecord::new()
                        .with(StatLabel::KillsPerMatch, f64::from(i))
                        .with(StatLabel::DeathsPerMatch, 1.0);
                    predictor.predict_record(&record).unwrap()
                })
            })
            .collect::<Vec<_>>();
        for (i, handle) in (0_i64..).zip(handles) {
            assert_eq!(handle.join().unwrap(), TierPrediction::from_code(i));
        }
    }
}
