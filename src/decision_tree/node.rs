//! Defines the inner representation of the induced decision tree.
use serde::{Serialize, Deserialize};

use std::collections::HashMap;

use crate::Sample;


/// Enumeration of `BranchNode` and `LeafNode`.
/// The tree is built once by [`Id3`](super::Id3)
/// and immutable afterwards;
/// classification only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that splits on one attribute.
    Branch(BranchNode),

    /// A node that holds one class label.
    Leaf(LeafNode),
}


/// Represents the branch nodes of the decision tree.
/// A branch reads one feature column of the full row and
/// dispatches on its value;
/// a value with no child resolves to the default label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    /// Column index of the attribute this node splits on.
    /// Indexes the full row; column `0` is the class column,
    /// so this is always `>= 1`.
    pub(super) attribute: usize,

    /// One child per attribute value observed during induction.
    pub(super) children: HashMap<String, Node>,

    /// The most frequent class among the rows that built this node,
    /// fixed before partitioning.
    /// Returned for attribute values unseen during induction.
    pub(super) default_label: String,
}


/// Represents the leaf nodes of the decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: String,
}


impl BranchNode {
    /// Returns a `BranchNode` from the given components.
    #[inline]
    pub(super) fn from_raw(
        attribute: usize,
        children: HashMap<String, Node>,
        default_label: String,
    ) -> Self
    {
        Self { attribute, children, default_label }
    }


    /// Column index of the split attribute.
    #[inline]
    pub fn attribute(&self) -> usize {
        self.attribute
    }


    /// The fallback label for unseen attribute values.
    #[inline]
    pub fn default_label(&self) -> &str {
        &self.default_label
    }
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the given label.
    #[inline]
    pub(super) fn from_raw(label: String) -> Self {
        Self { label }
    }


    /// The class label this leaf predicts.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}


impl Node {
    /// Predict the class label for the `row`-th observation of
    /// `sample` by walking the tree.
    /// A leaf returns its label.
    /// A branch reads the cell at its attribute column and recurses
    /// into the matching child;
    /// an unseen value returns the branch's default label
    /// immediately.
    pub fn label(&self, sample: &Sample, row: usize) -> &str {
        match self {
            Node::Leaf(ref leaf) => leaf.label(),
            Node::Branch(ref branch) => {
                let value = sample.value(row, branch.attribute);
                match branch.children.get(value) {
                    Some(child) => child.label(sample, row),
                    None => branch.default_label(),
                }
            },
        }
    }


    /// Number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(ref branch) => {
                branch.children.values()
                    .map(Node::leaves)
                    .sum::<usize>()
            },
        }
    }
}
