pub mod attributes;
pub mod dataset;
pub mod instance_header;
pub mod instances;

pub use dataset::{Dataset, DatasetBuilder};
