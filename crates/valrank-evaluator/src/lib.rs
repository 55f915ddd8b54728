//! Prediction side of the rank predictor: turns a [`StatRecord`](valrank_core::StatRecord)
//! into a rank tier.
//!
//! # Architecture
//!
//! ```text
//! StatRecord
//!     ↓ build_features
//! FeatureVector (8 values, fixed order)
//!     ↓ VectorTransform (scaler artifact)
//! scaled FeatureVector
//!     ↓ VectorClassifier (classifier artifact)
//! category code
//!     ↓ tier table
//! TierPrediction { tier, icon }
//! ```
//!
//! - [`feature`] - the feature layout and the builder that derives per-match rates
//! - [`artifact`] - the scaler and classifier capabilities, plus serializable implementations
//! - [`tier`] - the single table mapping category codes to tier names and icon filenames
//! - [`predictor`] - glues the steps together
//!
//! # Design Principles
//!
//! ## Total Feature Building
//!
//! Feature building never fails. Missing statistics count as `0.0`, a missing or zero
//! matches-played count as `1.0`, and a K/D ratio with zero deaths is `0.0`. Every
//! feature vector is finite.
//!
//! ## Read-Only Artifacts
//!
//! The scaler and classifier are loaded once and never mutated. Predictions only borrow
//! them, so a single [`TierPredictor`](predictor::TierPredictor) serves any number of
//! threads.
//!
//! ## Unknown Is Not an Error
//!
//! A category code outside the tier table yields the `Unknown Tier` sentinel. Only a
//! failing artifact surfaces as an [`ArtifactError`](artifact::ArtifactError).
//!
//! # Example
//!
//! ```
//! use valrank_core::extract;
//! use valrank_evaluator::{
//!     artifact::{Classifier, LinearClassifier, Scaler},
//!     predictor::TierPredictor,
//! };
//!
//! // Positive K/D margin above 1.0 -> diamond, otherwise silver.
//! let mut weights = [0.0; 8];
//! weights[7] = 1.0;
//! let classifier = LinearClassifier::new(vec![2, 5], vec![weights], vec![-1.0]).unwrap();
//! let predictor = TierPredictor::new(
//!     Box::new(Scaler::Identity),
//!     Box::new(Classifier::Linear(classifier)),
//! );
//!
//! let record = extract("Kills/Match\n1.5\nDeaths/Match\n0.6\n");
//! let prediction = predictor.predict_record(&record).unwrap();
//! assert_eq!(prediction.tier, "diamond");
//! assert_eq!(prediction.icon, "diamond.png");
//! ```

pub mod artifact;
pub mod feature;
pub mod predictor;
pub mod tier;
