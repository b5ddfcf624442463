//! Defines the ID3 inducer.
use std::collections::HashMap;

use crate::Sample;
use super::measure::information_gain;
use super::node::{Node, BranchNode, LeafNode};
use super::classifier::DecisionTreeClassifier;


/// Greedy, non-backtracking decision-tree induction:
/// every split takes the attribute with the currently highest
/// information gain.
/// Induction is deterministic,
/// so the same sample always yields a structurally identical tree.
pub struct Id3;


impl Id3 {
    /// Induce a tree from `sample` and return the classifier.
    /// Column `0` of `sample` is the class column;
    /// all remaining columns are candidate attributes.
    ///
    /// The sample must be non-empty;
    /// the loaders guarantee this for datasets read from disk.
    pub fn fit(sample: &Sample) -> DecisionTreeClassifier {
        let (n_rows, _) = sample.shape();
        assert!(n_rows > 0, "cannot induce a tree from an empty sample");

        let rows = (0..n_rows).collect::<Vec<usize>>();
        let attributes = sample.feature_columns().collect::<Vec<usize>>();

        let root = grow(sample, &rows[..], &attributes[..]);

        DecisionTreeClassifier::from(root)
    }
}


/// Grow one subtree over the observations in `rows`,
/// choosing among the candidate `attributes`.
/// Each recursive call removes the chosen attribute from
/// the candidates, which bounds the depth by the feature count.
fn grow(sample: &Sample, rows: &[usize], attributes: &[usize]) -> Node {
    // No candidate attribute can discriminate further.
    // This also covers the vacuous case of no candidates at all.
    let discriminating = attributes.iter()
        .any(|&a| !single_valued(sample, rows, a));
    if !discriminating {
        return Node::Leaf(LeafNode::from_raw(most_common_class(sample, rows)));
    }

    // All observations share one class.
    if single_class(sample, rows) {
        let label = sample.class(rows[0]).to_string();
        return Node::Leaf(LeafNode::from_raw(label));
    }

    // Strictly maximal gain wins; exact ties go to
    // the first candidate in column order.
    let mut best = attributes[0];
    let mut best_gain = information_gain(sample, rows, best);
    for &attribute in &attributes[1..] {
        let gain = information_gain(sample, rows, attribute);
        if gain > best_gain {
            best = attribute;
            best_gain = gain;
        }
    }

    // Fixed before partitioning.
    let default_label = most_common_class(sample, rows);

    let remaining = attributes.iter()
        .copied()
        .filter(|&a| a != best)
        .collect::<Vec<usize>>();

    let mut children = HashMap::new();
    for (value, subset) in partition(sample, rows, best) {
        let child = if single_class(sample, &subset[..]) {
            let label = sample.class(subset[0]).to_string();
            Node::Leaf(LeafNode::from_raw(label))
        } else {
            grow(sample, &subset[..], &remaining[..])
        };
        children.insert(value, child);
    }

    Node::Branch(BranchNode::from_raw(best, children, default_label))
}


/// `true` if the column holds exactly one distinct value over `rows`.
fn single_valued(sample: &Sample, rows: &[usize], column: usize) -> bool {
    let mut values = rows.iter()
        .map(|&i| sample.value(i, column));
    match values.next() {
        Some(first) => values.all(|v| v == first),
        None => true,
    }
}


/// `true` if the class column holds exactly one distinct value
/// over `rows`.
fn single_class(sample: &Sample, rows: &[usize]) -> bool {
    let mut classes = rows.iter().map(|&i| sample.class(i));
    match classes.next() {
        Some(first) => classes.all(|c| c == first),
        None => true,
    }
}


/// The most frequent class value over `rows`;
/// ties are broken by first-encountered order.
fn most_common_class(sample: &Sample, rows: &[usize]) -> String {
    let mut counts = HashMap::<&str, usize>::new();
    let mut order = Vec::new();
    for &i in rows {
        let class = sample.class(i);
        let count = counts.entry(class).or_insert(0);
        if *count == 0 { order.push(class); }
        *count += 1;
    }

    let mut best = order[0];
    for &class in &order[1..] {
        if counts[class] > counts[best] {
            best = class;
        }
    }

    best.to_string()
}


/// Partition `rows` by the distinct values at `column`,
/// in first-encountered order.
fn partition<'a>(
    sample: &'a Sample,
    rows: &[usize],
    column: usize,
) -> Vec<(String, Vec<usize>)>
{
    let mut subsets = Vec::<(String, Vec<usize>)>::new();
    let mut index = HashMap::<&'a str, usize>::new();

    for &i in rows {
        let value = sample.value(i, column);
        match index.get(value) {
            Some(&k) => { subsets[k].1.push(i); },
            None => {
                index.insert(value, subsets.len());
                subsets.push((value.to_string(), vec![i]));
            },
        }
    }

    subsets
}
