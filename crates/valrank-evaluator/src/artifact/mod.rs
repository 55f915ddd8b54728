//! Pre-fit model artifacts consumed by the tier predictor.
//!
//! The predictor only depends on two capabilities:
//!
//! - [`VectorTransform`] - maps one feature vector to one scaled feature vector
//! - [`VectorClassifier`] - maps one scaled feature vector to one category code
//!
//! Any model technology that satisfies those two operations can be plugged in. This module
//! also provides serializable implementations ([`Scaler`] and [`Classifier`]) that are
//! stored in model files together with the feature layout they were fit against.
//!
//! Artifacts are never fitted or mutated here; once loaded they are read-only and can be
//! shared between any number of concurrent predictions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::feature::{FEATURE_COUNT, FEATURE_LAYOUT_VERSION, FeatureKind, FeatureVector};

pub use self::{
    classifier::{DecisionTree, ForestClassifier, LinearClassifier, TreeNode},
    scaler::StandardScaler,
};

mod classifier;
mod scaler;

/// Failure of a model artifact. These are fatal to the prediction that hit them.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ArtifactError {
    #[display("unsupported feature layout version {found} (expected {expected})")]
    LayoutVersionMismatch { expected: u32, found: u32 },
    #[display("feature layout has {found} features (expected {expected})")]
    LayoutLengthMismatch { expected: usize, found: usize },
    #[display("feature layout mismatch at position {position}: expected '{expected}', found '{found}'")]
    LayoutMismatch {
        position: usize,
        expected: FeatureKind,
        found: String,
    },
    #[display("{artifact} produced a non-finite value")]
    NonFiniteOutput { artifact: &'static str },
    #[display("invalid {artifact}: {reason}")]
    Invalid { artifact: &'static str, reason: String },
}

impl ArtifactError {
    pub(crate) fn invalid(artifact: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            artifact,
            reason: reason.into(),
        }
    }
}

pub trait VectorTransform: fmt::Debug + Send + Sync {
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, ArtifactError>;
}

pub trait VectorClassifier: fmt::Debug + Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ArtifactError>;
}

impl<T> VectorTransform for Box<T>
where
    T: VectorTransform + ?Sized,
{
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, ArtifactError> {
        self.as_ref().transform(features)
    }
}

impl<C> VectorClassifier for Box<C>
where
    C: VectorClassifier + ?Sized,
{
    fn predict(&self, features: &FeatureVector) -> Result<i64, ArtifactError> {
        self.as_ref().predict(features)
    }
}

/// Checks that an artifact was fit against the current feature layout.
pub fn check_feature_layout<S>(version: u32, layout: &[S]) -> Result<(), ArtifactError>
where
    S: AsRef<str>,
{
    if version != FEATURE_LAYOUT_VERSION {
        return Err(ArtifactError::LayoutVersionMismatch {
            expected: FEATURE_LAYOUT_VERSION,
            found: version,
        });
    }
    if layout.len() != FEATURE_COUNT {
        return Err(ArtifactError::LayoutLengthMismatch {
            expected: FEATURE_COUNT,
            found: layout.len(),
        });
    }
    for (position, (expected, found)) in FeatureKind::ALL.into_iter().zip(layout).enumerate() {
        let found = found.as_ref();
        if expected.id() != found {
            return Err(ArtifactError::LayoutMismatch {
                position,
                expected,
                found: found.to_owned(),
            });
        }
    }
    Ok(())
}

/// The current feature layout as stored in model files.
#[must_use]
pub fn feature_layout() -> Vec<String> {
    FeatureKind::ALL
        .into_iter()
        .map(|kind| kind.id().to_owned())
        .collect()
}

/// Serializable scaling transform.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scaler {
    /// Passes features through unchanged.
    Identity,
    Standard(StandardScaler),
}

impl Scaler {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            Self::Identity => Ok(()),
            Self::Standard(scaler) => scaler.validate(),
        }
    }
}

impl VectorTransform for Scaler {
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, ArtifactError> {
        match self {
            Self::Identity => Ok(*features),
            Self::Standard(scaler) => scaler.transform(features),
        }
    }
}

/// Serializable classifier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classifier {
    Linear(LinearClassifier),
    Forest(ForestClassifier),
}

impl Classifier {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            Self::Linear(classifier) => classifier.validate(),
            Self::Forest(classifier) => classifier.validate(),
        }
    }
}

impl VectorClassifier for Classifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ArtifactError> {
        match self {
            Self::Linear(classifier) => classifier.predict(features),
            Self::Forest(classifier) => classifier.predict(features),
        }
    }
}
