//! Defines the decision-tree classifier.
use serde::{Serialize, Deserialize};

use crate::Sample;
use super::node::Node;


/// A trait that defines the prediction interface of
/// the induced trees.
pub trait Classifier {
    /// Predicts the class label of the `row`-th observation
    /// of `sample`.
    fn label<'a>(&'a self, sample: &Sample, row: usize) -> &'a str;


    /// Predicts the class labels of all observations of `sample`.
    fn predict_all<'a>(&'a self, sample: &Sample) -> Vec<&'a str> {
        let (n_rows, _) = sample.shape();
        (0..n_rows)
            .map(|row| self.label(sample, row))
            .collect()
    }
}


/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`](Node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl DecisionTreeClassifier {
    /// The root node of the tree.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Number of leaves of the tree.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }
}


impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn label<'a>(&'a self, sample: &Sample, row: usize) -> &'a str {
        self.root.label(sample, row)
    }
}
