use crate::classifiers::id3::split_criteria::SplitCriterionChoice;
use crate::error::{Result, SplitError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_max_depth() -> Option<usize> {
    None
}
fn default_min_instances_split() -> usize {
    2
}
fn default_allow_attribute_reuse() -> bool {
    false
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Id3Params {
    #[serde(default = "default_max_depth")]
    #[schemars(
        title = "Maximum depth",
        description = "Number of split levels below the root; unlimited when absent.",
        default = "default_max_depth"
    )]
    pub max_depth: Option<usize>,

    #[serde(default = "default_min_instances_split")]
    #[schemars(
        title = "Minimum instances to split",
        description = "Partitions smaller than this become leaves.",
        default = "default_min_instances_split"
    )]
    pub min_instances_split: usize,

    #[serde(default = "default_allow_attribute_reuse")]
    #[schemars(
        title = "Allow attribute reuse",
        description = "Keep features already split on by an ancestor as candidates.",
        default = "default_allow_attribute_reuse"
    )]
    pub allow_attribute_reuse: bool,

    #[serde(default)]
    #[schemars(title = "Split criterion")]
    pub split_criterion: SplitCriterionChoice,
}

impl Default for Id3Params {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            min_instances_split: default_min_instances_split(),
            allow_attribute_reuse: default_allow_attribute_reuse(),
            split_criterion: SplitCriterionChoice::default(),
        }
    }
}

impl Id3Params {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SplitError::invalid(format!("invalid ID3 parameters: {e}")))
    }
}
