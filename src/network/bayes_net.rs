//! Defines the Bayesian network and its JSON definition loader.
use rand::Rng;
use serde::{Serialize, Deserialize};

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::Error;
use super::cpt::ConditionalProbabilityTable;
use super::node::NetworkNode;


/// One CPT row of a JSON network definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityRecord {
    /// Parent outcomes, one boolean per declared parent, in order.
    pub parents_values: Vec<bool>,
    /// Probability that the node outcome is `true`
    /// under these parent outcomes.
    pub value: f64,
}


/// One node of a JSON network definition.
/// Declaration order of the records defines the evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Unique node name.
    pub name: String,
    /// Names of the parent nodes, all declared earlier.
    pub parents: Vec<String>,
    /// The conditional probability table rows.
    pub probabilities: Vec<ProbabilityRecord>,
}


/// A discrete Bayesian network over boolean variables.
///
/// The network owns one [`NetworkNode`](NetworkNode) per name
/// and a fixed evaluation order in which every node's parents
/// precede the node itself.
/// The order is a permutation of the node names and is taken from
/// the declaration order of the definition,
/// validated once at load time.
/// Built once, immutable thereafter; drawing samples never mutates it.
#[derive(Debug, Clone)]
pub struct BayesianNetwork {
    node_map: HashMap<String, NetworkNode>,
    evaluation_order: Vec<String>,
}


impl BayesianNetwork {
    /// Build a network from definition records.
    ///
    /// Each record's parents must already be declared by an earlier
    /// record. This check makes the parent-before-child ordering an
    /// explicit precondition instead of a trusted one, and rules out
    /// cycles as a side effect.
    /// Node names must be unique, every CPT row must list exactly one
    /// outcome per declared parent, and probabilities must lie in
    /// `[0, 1]`.
    /// On any violation no partial network is returned.
    pub fn from_records(records: Vec<NodeRecord>) -> Result<Self, Error> {
        let mut node_map = HashMap::with_capacity(records.len());
        let mut evaluation_order = Vec::with_capacity(records.len());

        for record in records {
            let NodeRecord { name, parents, probabilities } = record;

            if node_map.contains_key(&name) {
                return Err(Error::DuplicateNodeName(name));
            }

            for parent in &parents {
                if !node_map.contains_key(parent) {
                    return Err(Error::UnknownParent {
                        node: name,
                        parent: parent.clone(),
                    });
                }
            }

            for row in &probabilities {
                if row.parents_values.len() != parents.len() {
                    return Err(Error::CptArityMismatch {
                        node: name,
                        expected: parents.len(),
                        found: row.parents_values.len(),
                    });
                }
            }

            let cpt = ConditionalProbabilityTable::from_rows(
                probabilities.into_iter()
                    .map(|row| (row.parents_values, row.value))
            );
            cpt.check_range(&name)?;

            let node = NetworkNode::new(name.clone(), parents, cpt);
            node_map.insert(name.clone(), node);
            evaluation_order.push(name);
        }

        Ok(Self { node_map, evaluation_order })
    }


    /// Read a JSON definition file into a network.
    /// The file holds an ordered list of node records;
    /// see [`NodeRecord`](NodeRecord).
    pub fn from_json_file<P>(path: P) -> Result<Self, Error>
        where P: AsRef<Path>
    {
        let file = File::open(path)?;
        let records = serde_json::from_reader(BufReader::new(file))?;

        Self::from_records(records)
    }


    /// Node names in evaluation order.
    /// The outcomes returned by [`draw`](Self::draw) align with
    /// this slice.
    #[inline]
    pub fn node_names(&self) -> &[String] {
        &self.evaluation_order[..]
    }


    /// Returns the node of the given `name`, if any.
    #[inline]
    pub fn node(&self, name: &str) -> Option<&NetworkNode> {
        self.node_map.get(name)
    }


    /// Number of nodes in the network.
    #[inline]
    pub fn len(&self) -> usize {
        self.evaluation_order.len()
    }


    /// `true` if the network has no node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.evaluation_order.is_empty()
    }


    /// Draw one full joint assignment.
    ///
    /// Walks the evaluation order; for each node the already-drawn
    /// outcomes of its parents are gathered in declared order and
    /// looked up in the node's CPT.
    /// Parents precede children in the order,
    /// so every needed outcome is available in a single pass.
    /// The returned outcomes align with
    /// [`node_names`](Self::node_names).
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Result<Vec<bool>, Error> {
        let mut drawn = HashMap::with_capacity(self.len());
        let mut joint = Vec::with_capacity(self.len());

        for name in &self.evaluation_order {
            let node = &self.node_map[name];

            let outcomes = node.parent_names()
                .iter()
                .map(|parent| drawn[parent.as_str()])
                .collect::<Vec<bool>>();

            let outcome = node.draw(&outcomes[..], rng)?;
            drawn.insert(name.as_str(), outcome);
            joint.push(outcome);
        }

        Ok(joint)
    }


    /// Draw `n` independent joint assignments.
    pub fn draw_many<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec<bool>>, Error>
    {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}
