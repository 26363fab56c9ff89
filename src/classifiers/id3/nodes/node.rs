use crate::classifiers::id3::nodes::found_node::FoundNode;
use crate::classifiers::id3::nodes::leaf_node::LeafNode;
use crate::classifiers::id3::nodes::split_node::SplitNode;
use crate::core::instances::Instance;

/// A decision tree node. Split nodes own their children outright.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(LeafNode),
    Split(SplitNode),
}

impl Node {
    pub fn get_observed_class_distribution(&self) -> &[f64] {
        match self {
            Node::Leaf(leaf) => leaf.get_observed_class_distribution(),
            Node::Split(split) => split.get_observed_class_distribution(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Routes `instance` down from this node until it reaches a leaf, an
    /// empty branch, or a split it cannot evaluate.
    pub fn filter_instance_to_leaf<'a>(
        &'a self,
        instance: &dyn Instance,
        parent: Option<&'a SplitNode>,
        parent_branch: Option<usize>,
    ) -> FoundNode<'a> {
        let mut node = self;
        let mut parent = parent;
        let mut parent_branch = parent_branch;
        while let Node::Split(split) = node {
            let Some(branch) = split.instance_child_index(instance) else {
                break;
            };
            match split.get_child(branch) {
                Some(child) => {
                    parent = Some(split);
                    parent_branch = Some(branch);
                    node = child;
                }
                None => return FoundNode::new(None, Some(split), Some(branch)),
            }
        }
        FoundNode::new(Some(node), parent, parent_branch)
    }

    pub fn get_class_votes(&self, instance: &dyn Instance) -> Vec<f64> {
        self.filter_instance_to_leaf(instance, None, None)
            .class_distribution()
            .map(<[f64]>::to_vec)
            .unwrap_or_default()
    }

    /// Split levels below this node; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Split(split) => 1 + split.children().map(|(_, c)| c.depth()).max().unwrap_or(0),
        }
    }

    pub fn number_of_nodes(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split(split) => {
                1 + split
                    .children()
                    .map(|(_, c)| c.number_of_nodes())
                    .sum::<usize>()
            }
        }
    }

    pub fn number_of_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split(split) => split.children().map(|(_, c)| c.number_of_leaves()).sum(),
        }
    }
}

/// At most one class has a positive weight.
pub fn class_distribution_is_pure(distribution: &[f64]) -> bool {
    distribution.iter().filter(|&&w| w > 0.0).count() < 2
}
