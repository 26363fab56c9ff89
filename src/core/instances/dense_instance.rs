use crate::core::instance_header::InstanceHeader;
use crate::core::instances::instance::Instance;
use crate::error::{Result, SplitError};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DenseInstance {
    pub header: Arc<InstanceHeader>,
    pub values: Vec<usize>,
}

impl DenseInstance {
    pub fn new(header: Arc<InstanceHeader>, values: Vec<usize>) -> DenseInstance {
        DenseInstance { header, values }
    }

    /// Builds an instance from its string cells. Every cell must already be
    /// part of its column's domain.
    pub fn from_cells<S: AsRef<str>>(header: Arc<InstanceHeader>, cells: &[S]) -> Result<Self> {
        if cells.len() != header.number_of_attributes() {
            return Err(SplitError::invalid(format!(
                "expected {} cells, got {}",
                header.number_of_attributes(),
                cells.len()
            )));
        }
        let values = cells
            .iter()
            .zip(header.attributes.iter())
            .map(|(cell, attr)| {
                attr.index_of_value(cell.as_ref()).ok_or_else(|| {
                    SplitError::invalid(format!(
                        "value '{}' is not in the domain of '{}'",
                        cell.as_ref(),
                        attr.name
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(DenseInstance::new(header, values))
    }
}

impl Instance for DenseInstance {
    fn value_at_index(&self, index: usize) -> Option<usize> {
        self.values.get(index).copied()
    }

    fn nominal_value_at_index(&self, index: usize) -> Option<&str> {
        let value = self.value_at_index(index)?;
        self.header.attribute_at_index(index)?.value(value)
    }

    fn class_value(&self) -> Option<usize> {
        self.value_at_index(self.header.class_index())
    }

    fn header(&self) -> &InstanceHeader {
        &self.header
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::NominalAttribute;

    fn header() -> Arc<InstanceHeader> {
        let a = NominalAttribute::with_values("a".into(), vec!["x".into(), "y".into()]);
        let l = NominalAttribute::with_values("l".into(), vec!["0".into(), "1".into()]);
        Arc::new(InstanceHeader::new("t".into(), vec![a, l], 1).unwrap())
    }

    #[test]
    fn from_cells_resolves_domain_indices() {
        let inst = DenseInstance::from_cells(header(), &["y", "0"]).unwrap();
        assert_eq!(inst.values, vec![1, 0]);
        assert_eq!(inst.class_value(), Some(0));
        assert_eq!(inst.nominal_value_at_index(0), Some("y"));
        assert_eq!(inst.header().number_of_classes(), 2);
    }

    #[test]
    fn from_cells_rejects_unknown_value_and_arity() {
        assert!(DenseInstance::from_cells(header(), &["z", "0"]).is_err());
        assert!(DenseInstance::from_cells(header(), &["x"]).is_err());
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let inst = DenseInstance::new(header(), vec![0, 1]);
        assert_eq!(inst.value_at_index(5), None);
        assert_eq!(inst.nominal_value_at_index(5), None);
    }
}
