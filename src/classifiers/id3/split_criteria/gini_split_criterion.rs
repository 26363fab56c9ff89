use crate::classifiers::id3::split_criteria::split_criterion::{SplitCriterion, sum_of_weights};

#[derive(Debug, Default, Clone, Copy)]
pub struct GiniSplitCriterion {}

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }

    pub fn compute_gini(distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        if distribution_sum_of_weights <= 0.0 {
            return 0.0;
        }
        let mut gini = 1.0;
        for i in distribution {
            let rel_freq = i / distribution_sum_of_weights;
            gini -= rel_freq.powf(2.0);
        }
        gini
    }
}

impl SplitCriterion for GiniSplitCriterion {
    /// Decrease in Gini impurity from the parent to the weighted children.
    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> f64 {
        let total = sum_of_weights(pre_split_distribution);
        let parent = Self::compute_gini(pre_split_distribution, total);
        let total_post: f64 = post_split_dists.iter().map(|d| sum_of_weights(d)).sum();
        if total_post <= 0.0 {
            return 0.0;
        }
        let children: f64 = post_split_dists
            .iter()
            .map(|dist| {
                let w = sum_of_weights(dist);
                (w / total_post) * Self::compute_gini(dist, w)
            })
            .sum();
        parent - children
    }
}
