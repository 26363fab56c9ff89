use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::error::{Result, SplitError};
use std::sync::Arc;

/// An ordered, read-only collection of categorical instances sharing one
/// header.
///
/// Subsets produced by [`filter`](Dataset::filter) and
/// [`partition`](Dataset::partition) share the parent's header, so value
/// indices stay comparable across them.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>, instances: Vec<DenseInstance>) -> Self {
        Self { header, instances }
    }

    pub fn builder<S: AsRef<str>>(
        relation_name: &str,
        columns: &[S],
        class_column: &str,
    ) -> Result<DatasetBuilder> {
        DatasetBuilder::new(relation_name, columns, class_column)
    }

    /// Builds a dataset from rows of string cells, each cell being a category.
    pub fn from_rows<S, R, C>(
        relation_name: &str,
        columns: &[S],
        class_column: &str,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Dataset>
    where
        S: AsRef<str>,
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let mut builder = DatasetBuilder::new(relation_name, columns, class_column)?;
        for row in rows {
            builder.add_row(row.as_ref())?;
        }
        Ok(builder.build())
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn shared_header(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    pub fn rows(&self) -> &[DenseInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn class_name(&self) -> &str {
        self.header.class_attribute().name()
    }

    pub fn feature_names(&self) -> Vec<&str> {
        self.header
            .feature_indices()
            .map(|i| self.header.attributes[i].name())
            .collect()
    }

    /// Every value of column `name`, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self.column_index(name)?;
        Ok(self
            .instances
            .iter()
            .filter_map(|inst| inst.nominal_value_at_index(index))
            .collect())
    }

    /// The instances whose `column` equals `value`. A value outside the
    /// column's domain selects nothing.
    pub fn filter(&self, column: &str, value: &str) -> Result<Dataset> {
        let index = self.column_index(column)?;
        let instances = match self.header.attributes[index].index_of_value(value) {
            Some(value_index) => self
                .instances
                .iter()
                .filter(|inst| inst.value_at_index(index) == Some(value_index))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        Ok(Dataset::new(self.shared_header(), instances))
    }

    /// Per-class instance counts, indexed by class value.
    pub fn class_distribution(&self) -> Vec<f64> {
        let mut counts = vec![0.0; self.header.number_of_classes()];
        for inst in &self.instances {
            if let Some(count) = inst.class_value().and_then(|c| counts.get_mut(c)) {
                *count += 1.0;
            }
        }
        counts
    }

    /// Class distributions of the subsets induced by each value of column
    /// `attribute_index`, indexed by value. Values absent from this dataset
    /// get an all-zero distribution.
    pub fn class_distribution_per_value(&self, attribute_index: usize) -> Vec<Vec<f64>> {
        let number_of_values = self
            .header
            .attribute_at_index(attribute_index)
            .map_or(0, NominalAttribute::number_of_values);
        let mut dists = vec![vec![0.0; self.header.number_of_classes()]; number_of_values];
        for inst in &self.instances {
            if let (Some(value), Some(class)) =
                (inst.value_at_index(attribute_index), inst.class_value())
            {
                if let Some(count) = dists.get_mut(value).and_then(|d| d.get_mut(class)) {
                    *count += 1.0;
                }
            }
        }
        dists
    }

    /// Splits the dataset by the values of column `attribute_index`: one
    /// non-empty subset per value present, in domain order.
    pub fn partition(&self, attribute_index: usize) -> Vec<(usize, Dataset)> {
        let number_of_values = self
            .header
            .attribute_at_index(attribute_index)
            .map_or(0, NominalAttribute::number_of_values);
        let mut buckets: Vec<Vec<DenseInstance>> = vec![Vec::new(); number_of_values];
        for inst in &self.instances {
            if let Some(bucket) = inst
                .value_at_index(attribute_index)
                .and_then(|v| buckets.get_mut(v))
            {
                bucket.push(inst.clone());
            }
        }
        buckets
            .into_iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(value, bucket)| (value, Dataset::new(self.shared_header(), bucket)))
            .collect()
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.header
            .index_of_attribute(name)
            .ok_or_else(|| SplitError::invalid(format!("unknown column '{name}'")))
    }
}

/// Accumulates rows of string cells, growing each column's domain as new
/// values show up.
pub struct DatasetBuilder {
    header: InstanceHeader,
    rows: Vec<Vec<usize>>,
}

impl DatasetBuilder {
    pub fn new<S: AsRef<str>>(
        relation_name: &str,
        columns: &[S],
        class_column: &str,
    ) -> Result<Self> {
        let class_index = columns
            .iter()
            .position(|c| c.as_ref() == class_column)
            .ok_or_else(|| {
                SplitError::invalid(format!("class column '{class_column}' is not in the schema"))
            })?;
        let attributes = columns
            .iter()
            .map(|c| NominalAttribute::new(c.as_ref().to_string()))
            .collect();
        let header = InstanceHeader::new(relation_name.to_string(), attributes, class_index)?;
        Ok(Self {
            header,
            rows: Vec::new(),
        })
    }

    pub fn add_row<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<()> {
        let expected = self.header.number_of_attributes();
        if cells.len() != expected {
            return Err(SplitError::invalid(format!(
                "row {} has {} cells, expected {expected}",
                self.rows.len(),
                cells.len()
            )));
        }
        let values = cells
            .iter()
            .zip(self.header.attributes.iter_mut())
            .map(|(cell, attr)| attr.intern(cell.as_ref()))
            .collect();
        self.rows.push(values);
        Ok(())
    }

    pub fn build(self) -> Dataset {
        let header = Arc::new(self.header);
        let instances = self
            .rows
            .into_iter()
            .map(|values| DenseInstance::new(Arc::clone(&header), values))
            .collect();
        Dataset::new(header, instances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{worked_example, weather_nominal};

    #[test]
    fn builds_domains_in_first_seen_order() {
        let ds = worked_example();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.class_name(), "L");
        assert_eq!(ds.feature_names(), vec!["A"]);
        assert_eq!(ds.header().attributes[0].values, vec!["x", "y"]);
        assert_eq!(ds.column("L").unwrap(), vec!["0", "1", "1", "1"]);
    }

    #[test]
    fn column_names_and_cells_may_use_different_string_types() {
        let rows: Vec<Vec<String>> = vec![
            vec!["x".to_string(), "0".to_string()],
            vec!["y".to_string(), "1".to_string()],
        ];
        let ds = Dataset::from_rows("owned", &["a", "l"], "l", rows).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column("a").unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn rejects_malformed_rows_and_schema() {
        let mut builder = Dataset::builder("r", &["a", "l"], "l").unwrap();
        assert!(matches!(
            builder.add_row(&["x"]),
            Err(SplitError::InvalidInput(_))
        ));
        assert!(Dataset::builder("r", &["a", "l"], "missing").is_err());
        assert!(Dataset::builder::<&str>("r", &[], "l").is_err());
    }

    #[test]
    fn filter_selects_matching_rows_and_shares_header() {
        let ds = weather_nominal();
        let sunny = ds.filter("outlook", "sunny").unwrap();
        assert_eq!(sunny.len(), 5);
        assert!(sunny.column("outlook").unwrap().iter().all(|v| *v == "sunny"));
        assert!(std::ptr::eq(sunny.header(), ds.header()));

        assert!(ds.filter("outlook", "foggy").unwrap().is_empty());
        assert!(ds.filter("nope", "sunny").is_err());
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let ds = weather_nominal();
        let outlook = ds.header().index_of_attribute("outlook").unwrap();
        let parts = ds.partition(outlook);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts.iter().map(|(_, d)| d.len()).sum::<usize>(), ds.len());
        for (value, part) in &parts {
            assert!(part.rows().iter().all(|i| i.value_at_index(outlook) == Some(*value)));
        }
    }

    #[test]
    fn class_distributions() {
        let ds = weather_nominal();
        assert_eq!(ds.class_distribution(), vec![5.0, 9.0]);
        let outlook = ds.header().index_of_attribute("outlook").unwrap();
        let per_value = ds.class_distribution_per_value(outlook);
        let totals: Vec<f64> = per_value.iter().map(|d| d.iter().sum()).collect();
        assert_eq!(totals, vec![5.0, 4.0, 5.0]);
    }
}
