pub mod classifier;
pub mod conditional_tests;
pub mod id3;

pub use classifier::Classifier;
