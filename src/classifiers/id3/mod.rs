mod id3_params;
mod id3_tree;
pub mod instance_conditional_test;
pub mod nodes;
pub mod split_criteria;
mod split_selector;

pub use id3_params::Id3Params;
pub use id3_tree::Id3Tree;
pub use split_selector::{MERIT_TIE_TOLERANCE, SplitSelector, entropy, gain, select_best_split};
