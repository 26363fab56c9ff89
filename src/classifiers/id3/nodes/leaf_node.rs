#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    observed_class_distribution: Vec<f64>,
}

impl LeafNode {
    pub fn new(observed_class_distribution: Vec<f64>) -> Self {
        Self {
            observed_class_distribution,
        }
    }

    pub fn get_observed_class_distribution(&self) -> &[f64] {
        &self.observed_class_distribution
    }
}
