use crate::classifiers::Classifier;
use crate::classifiers::id3::Id3Params;
use crate::classifiers::id3::SplitSelector;
use crate::classifiers::id3::instance_conditional_test::InstanceConditionalTest;
use crate::classifiers::id3::nodes::{LeafNode, Node, SplitNode, class_distribution_is_pure};
use crate::core::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::error::{Result, SplitError};
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Batch ID3 decision tree over nominal attributes.
///
/// Each split node partitions its instances on the feature chosen by a
/// [`SplitSelector`]; recursion stops on pure partitions, when no candidate
/// features remain, at `max_depth`, below `min_instances_split`, or when the
/// best split would leave every instance in a single branch.
pub struct Id3Tree {
    params: Id3Params,
    selector: SplitSelector,
    header: Option<Arc<InstanceHeader>>,
    root: Option<Node>,
}

impl Default for Id3Tree {
    fn default() -> Self {
        Self::new(Id3Params::default())
    }
}

impl Id3Tree {
    pub fn new(params: Id3Params) -> Self {
        let selector = SplitSelector::with_criterion(params.split_criterion.build());
        Self {
            params,
            selector,
            header: None,
            root: None,
        }
    }

    pub fn params(&self) -> &Id3Params {
        &self.params
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn header(&self) -> Option<&InstanceHeader> {
        self.header.as_deref()
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    pub fn number_of_nodes(&self) -> usize {
        self.root.as_ref().map_or(0, Node::number_of_nodes)
    }

    pub fn number_of_leaves(&self) -> usize {
        self.root.as_ref().map_or(0, Node::number_of_leaves)
    }

    /// The predicted class value as its string label.
    pub fn predict_label(&self, instance: &dyn Instance) -> Option<&str> {
        let class = self.predict(instance)?;
        self.header.as_ref()?.class_attribute().value(class)
    }

    /// Encodes string cells against the training header. Rows read from
    /// another dataset must go through here: their value indices follow that
    /// dataset's own first-seen order.
    pub fn instance_from_cells<S: AsRef<str>>(&self, cells: &[S]) -> Result<DenseInstance> {
        let header = self
            .header
            .as_ref()
            .ok_or_else(|| SplitError::invalid("tree has not been trained"))?;
        DenseInstance::from_cells(Arc::clone(header), cells)
    }

    /// The tree as JSON, with attribute and value names resolved.
    pub fn to_json(&self) -> Option<Value> {
        let header = self.header.as_deref()?;
        let root = self.root.as_ref()?;
        Some(json!({
            "relation": header.relation_name(),
            "class": header.class_attribute().name(),
            "root": node_to_json(root, header),
        }))
    }

    fn build_node(&self, dataset: &Dataset, candidates: &[usize], depth: usize) -> Result<Node> {
        let distribution = dataset.class_distribution();
        let leaf = |reason: &str| {
            trace!(depth, instances = dataset.len(), reason, "created leaf");
            Ok(Node::Leaf(LeafNode::new(distribution.clone())))
        };

        if class_distribution_is_pure(&distribution) {
            return leaf("pure");
        }
        if candidates.is_empty() {
            return leaf("no candidate features");
        }
        if self.params.max_depth.is_some_and(|max| depth >= max) {
            return leaf("max depth");
        }
        if dataset.len() < self.params.min_instances_split {
            return leaf("too few instances");
        }

        let best = self.selector.best_suggestion(dataset, candidates)?;
        if best.number_of_non_empty_splits() < 2 {
            return leaf("single branch");
        }

        let attribute_index = best.attribute_index();
        let child_candidates: Vec<usize> = if self.params.allow_attribute_reuse {
            candidates.to_vec()
        } else {
            candidates
                .iter()
                .copied()
                .filter(|&i| i != attribute_index)
                .collect()
        };

        let split_test = *best.get_split_test();
        let mut split = SplitNode::new(
            split_test,
            distribution.clone(),
            best.get_merit(),
            split_test.max_branches(dataset.header()),
        );
        for (value, subset) in dataset.partition(attribute_index) {
            let child = self.build_node(&subset, &child_candidates, depth + 1)?;
            split.set_child(value, child);
        }
        Ok(Node::Split(split))
    }

    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &Node,
        header: &InstanceHeader,
        level: usize,
    ) -> fmt::Result {
        let Node::Split(split) = node else {
            return writeln!(f, "{}", leaf_summary(node, header));
        };
        for (branch, child) in split.children() {
            write!(f, "{}", "|   ".repeat(level))?;
            write!(
                f,
                "{}",
                split
                    .split_test()
                    .describe_condition_for_branch(branch, header)
            )?;
            if child.is_leaf() {
                writeln!(f, ": {}", leaf_summary(child, header))?;
            } else {
                writeln!(f)?;
                self.fmt_node(f, child, header, level + 1)?;
            }
        }
        Ok(())
    }
}

impl Classifier for Id3Tree {
    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Option<Vec<f64>> {
        let header = self.header.as_deref()?;
        let instance_header = instance.header();
        if !std::ptr::eq(instance_header, header) && instance_header != header {
            return None;
        }
        Some(self.root.as_ref()?.get_class_votes(instance))
    }

    fn train_on_dataset(&mut self, dataset: &Dataset) -> Result<()> {
        if dataset.is_empty() {
            return Err(SplitError::EmptyDataset);
        }
        let candidates: Vec<usize> = dataset.header().feature_indices().collect();
        let root = self.build_node(dataset, &candidates, 0)?;
        debug!(
            relation = dataset.header().relation_name(),
            nodes = root.number_of_nodes(),
            leaves = root.number_of_leaves(),
            depth = root.depth(),
            "built ID3 tree"
        );
        self.header = Some(dataset.shared_header());
        self.root = Some(root);
        Ok(())
    }
}

impl fmt::Display for Id3Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.root, self.header.as_deref()) {
            (Some(root), Some(header)) => self.fmt_node(f, root, header, 0),
            _ => writeln!(f, "(untrained)"),
        }
    }
}

fn majority_class(distribution: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &w) in distribution.iter().enumerate() {
        if best.is_none_or(|(_, b)| w > b) {
            best = Some((i, w));
        }
    }
    best.map(|(i, _)| i)
}

fn leaf_summary(node: &Node, header: &InstanceHeader) -> String {
    let distribution = node.get_observed_class_distribution();
    let label = majority_class(distribution)
        .and_then(|c| header.class_attribute().value(c))
        .unwrap_or("?");
    format!("{label} ({})", distribution.iter().sum::<f64>())
}

fn node_to_json(node: &Node, header: &InstanceHeader) -> Value {
    match node {
        Node::Leaf(leaf) => {
            let distribution = leaf.get_observed_class_distribution();
            json!({
                "leaf": majority_class(distribution)
                    .and_then(|c| header.class_attribute().value(c)),
                "class_distribution": distribution,
            })
        }
        Node::Split(split) => {
            let attribute_index = split.split_test().attribute_index();
            let attribute = header.attribute_at_index(attribute_index);
            let children: serde_json::Map<String, Value> = split
                .children()
                .map(|(branch, child)| {
                    let value = attribute
                        .and_then(|a| a.value(branch))
                        .unwrap_or("?")
                        .to_string();
                    (value, node_to_json(child, header))
                })
                .collect();
            json!({
                "attribute": attribute.map(|a| a.name()),
                "merit": split.merit(),
                "class_distribution": split.get_observed_class_distribution(),
                "children": children,
            })
        }
    }
}
