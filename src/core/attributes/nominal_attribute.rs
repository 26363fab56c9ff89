use std::collections::HashMap;

/// A categorical column: its name and the distinct values observed for it.
///
/// Values keep their first-seen order, so value indices are stable for the
/// lifetime of the header that owns the attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let mut attribute = NominalAttribute::new(name);
        for value in values {
            attribute.intern(&value);
        }
        attribute
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn index_of_value(&self, value: &str) -> Option<usize> {
        self.label_to_index.get(value).copied()
    }

    /// Returns the index of `value`, appending it to the domain when unseen.
    pub fn intern(&mut self, value: &str) -> usize {
        if let Some(&index) = self.label_to_index.get(value) {
            return index;
        }
        let index = self.values.len();
        self.values.push(value.to_string());
        self.label_to_index.insert(value.to_string(), index);
        index
    }
}
