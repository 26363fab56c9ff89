use crate::classifiers::id3::split_criteria::{
    GiniSplitCriterion, InfoGainSplitCriterion, SplitCriterion,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SplitCriterionChoice {
    #[default]
    #[strum(
        message = "Information gain",
        detailed_message = "Reduction in label entropy, in bits (ID3)."
    )]
    InfoGain,
    #[strum(
        message = "Gini",
        detailed_message = "Reduction in Gini impurity."
    )]
    Gini,
}

impl SplitCriterionChoice {
    pub fn build(self) -> Box<dyn SplitCriterion> {
        match self {
            SplitCriterionChoice::InfoGain => Box::new(InfoGainSplitCriterion::new()),
            SplitCriterionChoice::Gini => Box::new(GiniSplitCriterion::new()),
        }
    }
}
