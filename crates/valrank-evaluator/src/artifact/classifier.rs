use std::iter;

use serde::{Deserialize, Serialize};

use crate::{
    artifact::{ArtifactError, VectorClassifier},
    feature::{FEATURE_COUNT, FeatureVector},
};

const LINEAR: &str = "linear classifier";
const FOREST: &str = "forest classifier";

/// One-vs-rest linear model: the class with the highest `w·x + b` wins.
///
/// With two classes a single coefficient row is accepted: a positive score picks the
/// second class, anything else the first. Ties go to the lower class index.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinearClassifier {
    classes: Vec<i64>,
    coefficients: Vec<[f64; FEATURE_COUNT]>,
    intercepts: Vec<f64>,
}

impl LinearClassifier {
    pub fn new(
        classes: Vec<i64>,
        coefficients: Vec<[f64; FEATURE_COUNT]>,
        intercepts: Vec<f64>,
    ) -> Result<Self, ArtifactError> {
        let classifier = Self {
            classes,
            coefficients,
            intercepts,
        };
        classifier.validate()?;
        Ok(classifier)
    }

    #[must_use]
    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn is_binary(&self) -> bool {
        self.classes.len() == 2 && self.coefficients.len() == 1
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.is_empty() {
            return Err(ArtifactError::invalid(LINEAR, "no classes"));
        }
        if !self.is_binary() && self.coefficients.len() != self.classes.len() {
            return Err(ArtifactError::invalid(
                LINEAR,
                format!(
                    "{} coefficient rows for {} classes",
                    self.coefficients.len(),
                    self.classes.len()
                ),
            ));
        }
        if self.intercepts.len() != self.coefficients.len() {
            return Err(ArtifactError::invalid(
                LINEAR,
                format!(
                    "{} intercepts for {} coefficient rows",
                    self.intercepts.len(),
                    self.coefficients.len()
                ),
            ));
        }
        let all_finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ArtifactError::invalid(LINEAR, "weights must be finite"));
        }
        Ok(())
    }

    fn score(&self, row: usize, features: &FeatureVector) -> f64 {
        iter::zip(&self.coefficients[row], features.as_array())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercepts[row]
    }
}

impl VectorClassifier for LinearClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ArtifactError> {
        self.validate()?;

        let class_index = if self.is_binary() {
            let score = self.score(0, features);
            if !score.is_finite() {
                return Err(ArtifactError::NonFiniteOutput { artifact: LINEAR });
            }
            usize::from(score > 0.0)
        } else {
            let mut best: Option<(usize, f64)> = None;
            for row in 0..self.coefficients.len() {
                let score = self.score(row, features);
                if !score.is_finite() {
                    return Err(ArtifactError::NonFiniteOutput { artifact: LINEAR });
                }
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((row, score));
                }
            }
            best.map_or(0, |(row, _)| row)
        };
        Ok(self.classes[class_index])
    }
}

/// Node of a [`DecisionTree`].
///
/// Nodes live in a flat list and the root is node 0. A split sends a vector to `left`
/// when `x[feature] <= threshold` and to `right` otherwise.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// `class` indexes the owning forest's class list.
    Leaf { class: usize },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    #[must_use]
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    /// Children must come after their parent, which rules out cycles.
    fn validate(&self, class_count: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("empty tree".to_owned());
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FEATURE_COUNT {
                        return Err(format!("node {index} splits on unknown feature {feature}"));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {index} has a non-finite threshold"));
                    }
                    for child in [left, right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(format!("node {index} has invalid child {child}"));
                        }
                    }
                }
                TreeNode::Leaf { class } => {
                    if class >= class_count {
                        return Err(format!("node {index} has unknown class index {class}"));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_class(&self, features: &FeatureVector) -> Result<usize, String> {
        let mut index = 0;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { class }) => return Ok(*class),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features
                        .as_array()
                        .get(*feature)
                        .ok_or_else(|| format!("unknown feature {feature}"))?;
                    index = if *value <= *threshold { *left } else { *right };
                }
                None => return Err(format!("missing node {index}")),
            }
        }
        Err("tree does not terminate".to_owned())
    }
}

/// Majority vote over decision trees. Ties go to the lower class index.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ForestClassifier {
    classes: Vec<i64>,
    trees: Vec<DecisionTree>,
}

impl ForestClassifier {
    pub fn new(classes: Vec<i64>, trees: Vec<DecisionTree>) -> Result<Self, ArtifactError> {
        let classifier = Self { classes, trees };
        classifier.validate()?;
        Ok(classifier)
    }

    #[must_use]
    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.is_empty() {
            return Err(ArtifactError::invalid(FOREST, "no classes"));
        }
        if self.trees.is_empty() {
            return Err(ArtifactError::invalid(FOREST, "no trees"));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.classes.len())
                .map_err(|reason| ArtifactError::invalid(FOREST, format!("tree {i}: {reason}")))?;
        }
        Ok(())
    }
}

impl VectorClassifier for ForestClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ArtifactError> {
        if self.trees.is_empty() {
            return Err(ArtifactError::invalid(FOREST, "no trees"));
        }
        let mut votes = vec![0_usize; self.classes.len()];
        for (i, tree) in self.trees.iter().enumerate() {
            let class = tree
                .leaf_class(features)
                .map_err(|reason| ArtifactError::invalid(FOREST, format!("tree {i}: {reason}")))?;
            let vote = votes.get_mut(class).ok_or_else(|| {
                ArtifactError::invalid(FOREST, format!("tree {i}: unknown class index {class}"))
            })?;
            *vote += 1;
        }

        let mut winner: Option<(usize, usize)> = None;
        for (class, count) in votes.into_iter().enumerate() {
            if winner.is_none_or(|(_, best)| count > best) {
                winner = Some((class, count));
            }
        }
        let (class, _) = winner.ok_or_else(|| ArtifactError::invalid(FOREST, "no classes"))?;
        Ok(self.classes[class])
    }
}
