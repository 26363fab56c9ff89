use crate::core::Dataset;
use crate::core::instances::Instance;
use crate::error::Result;

pub trait Classifier {
    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Option<Vec<f64>>;
    fn train_on_dataset(&mut self, dataset: &Dataset) -> Result<()>;

    /// Index of the class with the most votes; the lowest index wins ties.
    fn predict(&self, instance: &dyn Instance) -> Option<usize> {
        let votes = self.get_votes_for_instance(instance)?;
        let mut best: Option<(usize, f64)> = None;
        for (i, &v) in votes.iter().enumerate() {
            if best.is_none_or(|(_, b)| v > b) {
                best = Some((i, v));
            }
        }
        best.map(|(i, _)| i)
    }
}
