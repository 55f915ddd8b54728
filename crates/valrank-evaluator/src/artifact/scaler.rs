use serde::{Deserialize, Serialize};

use crate::{
    artifact::{ArtifactError, VectorTransform},
    feature::{FEATURE_COUNT, FeatureVector},
};

const ARTIFACT: &str = "standard scaler";

/// Per-feature standardization: `(x - mean) / scale`.
///
/// A zero `scale` marks a feature that was constant in the training data; it is treated
/// as `1.0` so the feature is only centered, matching how common training libraries
/// persist such features.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandardScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    pub fn new(
        mean: [f64; FEATURE_COUNT],
        scale: [f64; FEATURE_COUNT],
    ) -> Result<Self, ArtifactError> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    #[must_use]
    pub const fn mean(&self) -> &[f64; FEATURE_COUNT] {
        &self.mean
    }

    #[must_use]
    pub const fn scale(&self) -> &[f64; FEATURE_COUNT] {
        &self.scale
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        if !self.mean.iter().all(|m| m.is_finite()) {
            return Err(ArtifactError::invalid(ARTIFACT, "mean must be finite"));
        }
        if !self.scale.iter().all(|s| s.is_finite() && *s >= 0.0) {
            return Err(ArtifactError::invalid(
                ARTIFACT,
                "scale must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

impl VectorTransform for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, ArtifactError> {
        let mut scaled = features.into_array();
        for ((value, mean), scale) in scaled.iter_mut().zip(&self.mean).zip(&self.scale) {
            let scale = if *scale == 0.0 { 1.0 } else { *scale };
            *value = (*value - mean) / scale;
        }
        let scaled = FeatureVector::new(scaled);
        if !scaled.is_finite() {
            return Err(ArtifactError::NonFiniteOutput { artifact: ARTIFACT });
        }
        Ok(scaled)
    }
}
