use crate::core::attributes::NominalAttribute;
use crate::error::{Result, SplitError};

/// Schema shared by every instance of a dataset: the relation name, the
/// ordered columns and which of them holds the class label.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<NominalAttribute>,
    pub class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<NominalAttribute>,
        class_index: usize,
    ) -> Result<InstanceHeader> {
        if attributes.is_empty() {
            return Err(SplitError::invalid("schema has no columns"));
        }
        if class_index >= attributes.len() {
            return Err(SplitError::invalid(format!(
                "class index {class_index} out of bounds for {} columns",
                attributes.len()
            )));
        }
        for (i, attr) in attributes.iter().enumerate() {
            if attributes[..i].iter().any(|a| a.name == attr.name) {
                return Err(SplitError::invalid(format!(
                    "duplicate column name '{}'",
                    attr.name
                )));
            }
        }
        Ok(InstanceHeader {
            relation_name,
            attributes,
            class_index,
        })
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&NominalAttribute> {
        self.attributes.get(index)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name == name)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> &NominalAttribute {
        &self.attributes[self.class_index]
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute().number_of_values()
    }

    /// Indices of every non-class column, in schema order.
    pub fn feature_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.attributes.len()).filter(move |&i| i != self.class_index)
    }

    /// Resolves `name` to a feature column index, rejecting unknown columns
    /// and the class column.
    pub fn feature_index(&self, name: &str) -> Result<usize> {
        let index = self
            .index_of_attribute(name)
            .ok_or_else(|| SplitError::invalid(format!("unknown column '{name}'")))?;
        self.check_feature_index(index)?;
        Ok(index)
    }

    pub fn check_feature_index(&self, index: usize) -> Result<()> {
        if index >= self.attributes.len() {
            return Err(SplitError::invalid(format!(
                "column index {index} out of bounds"
            )));
        }
        if index == self.class_index {
            return Err(SplitError::invalid(format!(
                "cannot split on the class column '{}'",
                self.attributes[index].name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(names: &[&str]) -> Vec<NominalAttribute> {
        names
            .iter()
            .map(|n| NominalAttribute::new(n.to_string()))
            .collect()
    }

    #[test]
    fn feature_indices_skip_class() {
        let header = InstanceHeader::new("r".into(), attrs(&["a", "label", "b"]), 1).unwrap();
        assert_eq!(header.feature_indices().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(header.class_attribute().name(), "label");
    }

    #[test]
    fn feature_index_rejects_class_and_unknown() {
        let header = InstanceHeader::new("r".into(), attrs(&["a", "label"]), 1).unwrap();
        assert_eq!(header.feature_index("a"), Ok(0));
        assert!(matches!(
            header.feature_index("label"),
            Err(SplitError::InvalidInput(_))
        ));
        assert!(matches!(
            header.feature_index("zzz"),
            Err(SplitError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_bad_schemas() {
        assert!(InstanceHeader::new("r".into(), Vec::new(), 0).is_err());
        assert!(InstanceHeader::new("r".into(), attrs(&["a"]), 1).is_err());
        assert!(InstanceHeader::new("r".into(), attrs(&["a", "a"]), 0).is_err());
    }
}
