use crate::classifiers::id3::instance_conditional_test::{
    InstanceConditionalTest, NominalAttributeMultiwayTest,
};
use crate::classifiers::id3::nodes::node::Node;
use crate::core::instances::Instance;

/// An internal node. Children are indexed by the value index of the split
/// attribute; values that received no instances have no child.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    observed_class_distribution: Vec<f64>,
    split_test: NominalAttributeMultiwayTest,
    merit: f64,
    children: Vec<Option<Node>>,
}

impl SplitNode {
    pub fn new(
        split_test: NominalAttributeMultiwayTest,
        observed_class_distribution: Vec<f64>,
        merit: f64,
        initial_children_len: usize,
    ) -> Self {
        Self {
            observed_class_distribution,
            split_test,
            merit,
            children: (0..initial_children_len).map(|_| None).collect(),
        }
    }

    pub fn set_child(&mut self, index: usize, child: Node) {
        if index >= self.children.len() {
            self.children.resize_with(index + 1, || None);
        }
        self.children[index] = Some(child);
    }

    pub fn get_child(&self, index: usize) -> Option<&Node> {
        self.children.get(index).and_then(Option::as_ref)
    }

    /// `(branch, child)` pairs for every populated branch, in branch order.
    pub fn children(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| child.as_ref().map(|c| (i, c)))
    }

    pub fn split_test(&self) -> &NominalAttributeMultiwayTest {
        &self.split_test
    }

    pub fn merit(&self) -> f64 {
        self.merit
    }

    pub fn get_observed_class_distribution(&self) -> &[f64] {
        &self.observed_class_distribution
    }

    pub fn instance_child_index(&self, instance: &dyn Instance) -> Option<usize> {
        self.split_test.branch_for_instance(instance)
    }
}
