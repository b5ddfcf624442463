//! The files in `decision_tree/` directory define
//! the ID3 inducer, the induced tree, and its evaluation.

/// Defines entropy and information gain.
pub mod measure;

/// Defines the tree representation.
pub mod node;

/// Defines the recursive inducer.
pub mod id3;

/// Defines the classifier wrapper and the `Classifier` trait.
pub mod classifier;

/// Defines accuracy and the confusion matrix.
pub mod evaluation;


pub use self::measure::{entropy, information_gain};
pub use self::node::{Node, BranchNode, LeafNode};
pub use self::id3::Id3;
pub use self::classifier::{Classifier, DecisionTreeClassifier};
pub use self::evaluation::{accuracy, ConfusionMatrix};
