//! Defines a single node of the Bayesian network.
use rand::Rng;

use crate::Error;
use super::cpt::ConditionalProbabilityTable;


/// One node of a [`BayesianNetwork`](super::BayesianNetwork):
/// a name, an ordered list of parent names,
/// and the conditional probability table keyed by parent outcomes.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkNode {
    name: String,
    parent_names: Vec<String>,
    cpt: ConditionalProbabilityTable,
}


impl NetworkNode {
    /// Construct a node from its components.
    #[inline]
    pub fn new(
        name: String,
        parent_names: Vec<String>,
        cpt: ConditionalProbabilityTable,
    ) -> Self
    {
        Self { name, parent_names, cpt }
    }


    /// Name of this node.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Parent names in declared order.
    /// The CPT keys follow this order.
    #[inline]
    pub fn parent_names(&self) -> &[String] {
        &self.parent_names[..]
    }


    /// The conditional probability table of this node.
    #[inline]
    pub fn cpt(&self) -> &ConditionalProbabilityTable {
        &self.cpt
    }


    /// Draw one boolean outcome for this node,
    /// given the already-drawn `outcomes` of its parents
    /// in declared order.
    /// The outcome is `true` iff the table probability exceeds
    /// one uniform draw from `[0, 1)`.
    ///
    /// A parent combination without a CPT entry is fatal;
    /// it is never treated as probability `0` or `1`.
    #[inline]
    pub fn draw<R: Rng>(
        &self,
        outcomes: &[bool],
        rng: &mut R,
    ) -> Result<bool, Error>
    {
        let p = self.cpt.probability(outcomes)
            .ok_or_else(|| Error::MissingCptEntry {
                node: self.name.clone(),
                outcomes: outcomes.to_vec(),
            })?;

        Ok(p > rng.gen::<f64>())
    }
}
