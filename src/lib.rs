//! ID3 split selection over categorical datasets.
//!
//! [`select_best_split`] picks the feature whose partition of a [`Dataset`]
//! yields the largest information gain; [`Id3Tree`] applies it recursively
//! to build a decision tree.

pub mod classifiers;
pub mod core;
pub mod error;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use classifiers::Classifier;
pub use classifiers::id3::{Id3Params, Id3Tree, SplitSelector, entropy, gain, select_best_split};
pub use crate::core::Dataset;
pub use error::{Result, SplitError};
