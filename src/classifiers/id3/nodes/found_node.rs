use crate::classifiers::id3::nodes::node::Node;
use crate::classifiers::id3::nodes::split_node::SplitNode;

/// Where an instance ends up when routed down the tree.
///
/// `node` is `None` when the instance reached a branch of `parent` that
/// received no training instances.
pub struct FoundNode<'a> {
    node: Option<&'a Node>,
    parent: Option<&'a SplitNode>,
    parent_branch: Option<usize>,
}

impl<'a> FoundNode<'a> {
    pub fn new(
        node: Option<&'a Node>,
        parent: Option<&'a SplitNode>,
        parent_branch: Option<usize>,
    ) -> Self {
        Self {
            node,
            parent,
            parent_branch,
        }
    }

    pub fn get_node(&self) -> Option<&'a Node> {
        self.node
    }

    pub fn get_parent_branch(&self) -> Option<usize> {
        self.parent_branch
    }

    /// Class distribution used to vote: the reached node's, or its parent's
    /// when the branch is empty.
    pub fn class_distribution(&self) -> Option<&'a [f64]> {
        match (self.node, self.parent) {
            (Some(node), _) => Some(node.get_observed_class_distribution()),
            (None, Some(parent)) => Some(parent.get_observed_class_distribution()),
            (None, None) => None,
        }
    }
}
