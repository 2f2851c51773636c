//! An implementation of a binary decision tree that is stored as a flat table
//! of nodes. Children are referenced by their index in the table.

use crate::utils::check_len;
use crate::{Classifier, ClassifyError, Votes, NUM_FEATURES};

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Node {
    /// Go to 'left' if features[feature] <= threshold, otherwise to 'right'.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// A terminal node with the number of training samples of each class.
    Leaf { votes: Votes },
}

#[derive(Copy, Clone, Debug)]
pub struct DecisionTree<'a> {
    /// The nodes, in pre-order. The root is at index zero.
    nodes: &'a [Node],
}

impl DecisionTree<'static> {
    /// Return the tree that was fitted on the iris dataset.
    pub fn iris() -> Self {
        Self {
            nodes: &crate::model::IRIS_NODES,
        }
    }
}

impl<'a> DecisionTree<'a> {
    /// Create a tree from the node table 'nodes', or return an error if the
    /// table does not describe a well formed tree.
    pub fn from_nodes(nodes: &'a [Node]) -> Result<Self, ClassifyError> {
        Self::verify(nodes)?;
        Ok(Self { nodes })
    }

    fn verify(nodes: &[Node]) -> Result<(), ClassifyError> {
        let invalid = |msg: String| -> Result<(), ClassifyError> {
            Err(ClassifyError::InvalidTree(msg))
        };

        if nodes.is_empty() {
            return invalid("the tree has no nodes".to_string());
        }

        // Every node except the root must have exactly one parent.
        let mut parents = vec![0usize; nodes.len()];
        // The votes of all of the leaves must fit in a u32 when added up.
        let mut total: u64 = 0;
        for (i, node) in nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= NUM_FEATURES {
                        return invalid(format!(
                            "node {} splits on feature {}",
                            i, feature
                        ));
                    }
                    if threshold.is_nan() {
                        return invalid(format!(
                            "node {} has a NaN threshold",
                            i
                        ));
                    }
                    // Children always follow their parent, so the table has
                    // no cycles.
                    for child in [left, right] {
                        if child <= i || child >= nodes.len() {
                            return invalid(format!(
                                "node {} has an invalid child {}",
                                i, child
                            ));
                        }
                        parents[child] += 1;
                    }
                }
                Node::Leaf { votes } => {
                    if votes.iter().all(|&v| v == 0) {
                        return invalid(format!("leaf {} has no votes", i));
                    }
                    total += votes.iter().map(|&v| v as u64).sum::<u64>();
                    if total > u32::MAX as u64 {
                        return invalid(format!(
                            "the votes overflow at leaf {}",
                            i
                        ));
                    }
                }
            }
        }

        for (i, &cnt) in parents.iter().enumerate().skip(1) {
            if cnt != 1 {
                return invalid(format!("node {} has {} parents", i, cnt));
            }
        }
        Ok(())
    }

    /// Return the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Return the node table, in pre-order.
    pub fn nodes(&self) -> &'a [Node] {
        self.nodes
    }

    pub fn num_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    /// Return the number of edges on the longest path from the root to a
    /// leaf.
    pub fn depth(&self) -> usize {
        // Children are stored after their parents, so a reverse scan sees
        // every child before its parent.
        let mut depth = vec![0usize; self.nodes.len()];
        for i in (0..self.nodes.len()).rev() {
            if let Node::Split { left, right, .. } = self.nodes[i] {
                depth[i] = 1 + depth[left].max(depth[right]);
            }
        }
        depth[0]
    }

    /// Return the sum of the votes of all of the leaves below node 'idx', or
    /// None if there is no such node. The sums can't overflow because the
    /// votes of the whole tree fit in a u32.
    pub fn node_votes(&self, idx: usize) -> Option<Votes> {
        match *self.nodes.get(idx)? {
            Node::Leaf { votes } => Some(votes),
            Node::Split { left, right, .. } => {
                let l = self.node_votes(left)?;
                let r = self.node_votes(right)?;
                Some(std::array::from_fn(|i| l[i] + r[i]))
            }
        }
    }

    /// Walk the tree and return the index and the votes of the leaf that
    /// 'features' lands in. The caller must check the length of 'features'.
    fn find_leaf(&self, features: &[f64]) -> (usize, Votes) {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    // NaN fails the comparison and goes right.
                    idx = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
                Node::Leaf { votes } => return (idx, votes),
            }
        }
    }

    /// Return the index of the leaf that 'features' lands in.
    pub fn decision_leaf(
        &self,
        features: &[f64],
    ) -> Result<usize, ClassifyError> {
        check_len(features)?;
        Ok(self.find_leaf(features).0)
    }
}

impl<'a> Classifier for DecisionTree<'a> {
    fn votes(&self, features: &[f64]) -> Result<Votes, ClassifyError> {
        check_len(features)?;
        let (leaf, votes) = self.find_leaf(features);
        log::trace!("Features {:?} reached leaf {}", features, leaf);
        Ok(votes)
    }
}

#[test]
fn test_iris_table_is_valid() {
    let tree = DecisionTree::iris();
    assert!(DecisionTree::from_nodes(&crate::model::IRIS_NODES).is_ok());
    assert_eq!(tree.len(), 17);
    assert_eq!(tree.find_leaf(&[0.0, 0.0, 1.0, 0.0]), (1, [50, 0, 0]));
}
