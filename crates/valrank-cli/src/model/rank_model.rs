use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use valrank_evaluator::{
    artifact::{self, Classifier, Scaler},
    predictor::TierPredictor,
};

/// A trained model file: the scaler and classifier together with the feature layout they
/// were fit against.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankModel {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    pub feature_layout_version: u32,
    pub feature_layout: Vec<String>,
    pub scaler: Scaler,
    pub classifier: Classifier,
}

impl RankModel {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open rank model file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let model: Self = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to read rank model file: {}", path.display()))?;
        model
            .validate()
            .with_context(|| format!("Invalid rank model file: {}", path.display()))?;

        info!(
            name = %model.name,
            trained_at = %model.trained_at,
            "loaded rank model"
        );
        Ok(model)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        artifact::check_feature_layout(self.feature_layout_version, &self.feature_layout)?;
        self.scaler.validate()?;
        self.classifier.validate()?;
        Ok(())
    }

    pub fn into_predictor(self) -> TierPredictor {
        TierPredictor::new(Box::new(self.scaler), Box::new(self.classifier))
    }
}

#[cfg(test)]
mod tests {
    use valrank_core::StatRecord;
    use valrank_evaluator::feature::FEATURE_LAYOUT_VERSION;

    use super::*;

    fn model_json(layout: &[String], classifier: &str) -> String {
        format!(
            r#"{{
                "name": "kd-split",
                "trained_at": "2024-05-01T12:00:00Z",
                "feature_layout_version": {FEATURE_LAYOUT_VERSION},
                "feature_layout": {layout},
                "scaler": "identity",
                "classifier": {classifier}
            }}"#,
            layout = serde_json::to_string(layout).unwrap(),
        )
    }

    const LINEAR: &str = r#"{"linear": {
        "classes": [2, 5],
        "coefficients": [[0, 0, 0, 0, 0, 0, 0, 1]],
        "intercepts": [-1.0]
    }}"#;

    #[test]
    fn test_parse_and_predict() {
        let json = model_json(&artifact::feature_layout(), LINEAR);
        let model: RankModel = serde_json::from_str(&json).unwrap();
        model.validate().unwrap();
        assert_eq!(model.name, "kd-split");

        let predictor = model.into_predictor();
        let prediction = predictor.predict_record(&StatRecord::new()).unwrap();
        assert_eq!(prediction.tier, "silver");
        assert_eq!(prediction.icon, "silver.png");
    }

    #[test]
    fn test_reordered_layout_is_rejected() {
        let mut layout = artifact::feature_layout();
        layout.swap(4, 5);
        let model: RankModel = serde_json::from_str(&model_json(&layout, LINEAR)).unwrap();
        let err = model.validate().unwrap_err();
        assert!(err.to_string().starts_with("feature layout mismatch at position 4"));
    }

    #[test]
    fn test_malformed_classifier_is_rejected() {
        let forest = r#"{"forest": {"classes": [0, 1], "trees": [[
            {"split": {"feature": 0, "threshold": 0.5, "left": 0, "right": 0}}
        ]]}}"#;
        let model: RankModel =
            serde_json::from_str(&model_json(&artifact::feature_layout(), forest)).unwrap();
        assert!(model.validate().is_err());
    }
}
