//! Shared proptest strategies.

use proptest::prelude::*;
use proptest::sample::Index;

use treeselect::TreeNode;

/// Build a forest from a parent list; `parents[i]` picks a parent among
/// nodes `0..i`, or makes node `i` a root.
pub fn forest_from_parents(parents: &[Option<Index>]) -> Vec<TreeNode> {
    let n = parents.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut roots = Vec::new();
    for (i, parent) in parents.iter().enumerate() {
        match parent {
            Some(idx) if i > 0 => children[idx.index(i)].push(i),
            _ => roots.push(i),
        }
    }

    fn build(i: usize, children: &[Vec<usize>]) -> TreeNode {
        TreeNode::keyed(format!("n{i}"))
            .with_children(children[i].iter().map(|&c| build(c, children)).collect())
    }

    roots.iter().map(|&r| build(r, &children)).collect()
}

/// Random forest of 1..=24 nodes with unique keys `n0..`
pub fn forest() -> impl Strategy<Value = (Vec<TreeNode>, usize)> {
    prop::collection::vec(prop::option::weighted(0.8, any::<Index>()), 1..=24)
        .prop_map(|parents| (forest_from_parents(&parents), parents.len()))
}

/// Engine operation against a node picked by index
#[derive(Debug, Clone)]
pub enum Op {
    ToggleExpand(Index),
    Select(Index),
    Check(Index, bool),
    Unknown,
}

impl Op {
    /// Key this op targets in a forest of `n` nodes
    pub fn key(&self, n: usize) -> String {
        match self {
            Op::ToggleExpand(idx) | Op::Select(idx) | Op::Check(idx, _) => {
                format!("n{}", idx.index(n))
            }
            Op::Unknown => "missing".to_string(),
        }
    }
}

pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<Index>().prop_map(Op::ToggleExpand),
        any::<Index>().prop_map(Op::Select),
        (any::<Index>(), any::<bool>()).prop_map(|(i, b)| Op::Check(i, b)),
        Just(Op::Unknown),
    ]
}

pub fn ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..40)
}
