/// Scores a candidate split from class-count distributions.
///
/// `pre_split_distribution` holds the class counts of the node being split;
/// `post_split_dists` holds one class-count vector per branch. Branches with
/// no instances are allowed and must not affect the merit.
pub trait SplitCriterion: Send + Sync {
    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> f64;
}

pub(crate) fn sum_of_weights(distribution: &[f64]) -> f64 {
    distribution.iter().sum()
}
