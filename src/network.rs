//! The files in `network/` directory define the discrete
//! Bayesian network used for drawing synthetic boolean observations.

/// Defines the conditional probability table.
pub mod cpt;

/// Defines a single network node.
pub mod node;

/// Defines the network and its JSON definition loader.
pub mod bayes_net;


pub use self::cpt::ConditionalProbabilityTable;
pub use self::node::NetworkNode;
pub use self::bayes_net::{
    BayesianNetwork,
    NodeRecord,
    ProbabilityRecord,
};
