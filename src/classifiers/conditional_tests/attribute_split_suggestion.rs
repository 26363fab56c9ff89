use crate::classifiers::id3::instance_conditional_test::NominalAttributeMultiwayTest;

/// A scored candidate split on one nominal attribute.
#[derive(Debug, Clone)]
pub struct AttributeSplitSuggestion {
    split_test: NominalAttributeMultiwayTest,
    attribute_name: String,
    resulting_class_distribution: Vec<Vec<f64>>,
    merit: f64,
}

impl AttributeSplitSuggestion {
    pub fn new(
        split_test: NominalAttributeMultiwayTest,
        attribute_name: String,
        resulting_class_distribution: Vec<Vec<f64>>,
        merit: f64,
    ) -> Self {
        Self {
            split_test,
            attribute_name,
            resulting_class_distribution,
            merit,
        }
    }

    pub fn get_split_test(&self) -> &NominalAttributeMultiwayTest {
        &self.split_test
    }

    pub fn attribute_index(&self) -> usize {
        self.split_test.attribute_index()
    }

    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn get_merit(&self) -> f64 {
        self.merit
    }

    pub fn number_of_splits(&self) -> usize {
        self.resulting_class_distribution.len()
    }

    /// Branches that would receive at least one instance.
    pub fn number_of_non_empty_splits(&self) -> usize {
        self.resulting_class_distribution
            .iter()
            .filter(|dist| dist.iter().any(|&w| w > 0.0))
            .count()
    }

    pub fn resulting_class_distribution_from_split(&self, split_index: usize) -> Option<&[f64]> {
        self.resulting_class_distribution
            .get(split_index)
            .map(Vec::as_slice)
    }
}
