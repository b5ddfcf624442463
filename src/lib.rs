#![warn(missing_docs)]

//!
//! A crate with two coupled cores:
//!
//! - A discrete Bayesian-network sampler that draws synthetic boolean
//!     observations from a directed dependency model defined by
//!     conditional-probability tables.
//!     The network definition is read from JSON;
//!     its declaration order is the evaluation order,
//!     validated once at load time so that
//!     every node's parents precede the node itself.
//!
//! - An ID3-style decision-tree inducer that learns a classifier
//!     from tabular categorical observations using
//!     information-gain attribute selection,
//!     then scores it via accuracy and a confusion matrix
//!     over a random holdout split.
//!
//! Everything is single-threaded and synchronous.
//! All randomness flows through explicitly passed
//! [`rand::Rng`](rand::Rng) handles,
//! so sampling and splitting are seedable and deterministic.

pub mod error;
pub mod network;
pub mod sample;
pub mod decision_tree;


pub use error::Error;

pub use network::{
    BayesianNetwork,
    NetworkNode,
    ConditionalProbabilityTable,
    NodeRecord,
    ProbabilityRecord,
};

pub use sample::{
    Sample,
    SampleReader,
};

pub use decision_tree::{
    // Induction
    Id3,
    Node,

    // Classification
    Classifier,
    DecisionTreeClassifier,

    // Impurity measures
    entropy,
    information_gain,

    // Evaluation
    accuracy,
    ConfusionMatrix,
};
