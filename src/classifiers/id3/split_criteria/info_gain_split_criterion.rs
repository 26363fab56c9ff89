use crate::classifiers::id3::split_criteria::split_criterion::{SplitCriterion, sum_of_weights};

#[derive(Debug, Default, Clone, Copy)]
pub struct InfoGainSplitCriterion {}

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }

    /// Shannon entropy, in bits, of a class-count vector. Zero counts
    /// contribute nothing; an empty distribution has entropy 0.
    pub fn compute_entropy(distribution: &[f64]) -> f64 {
        let total = sum_of_weights(distribution);
        if total <= 0.0 {
            return 0.0;
        }
        let mut entropy = 0.0;
        for &count in distribution {
            if count > 0.0 {
                let p = count / total;
                entropy -= p * p.log2();
            }
        }
        entropy
    }

    /// Entropy of the branches weighted by their share of instances.
    pub fn compute_weighted_entropy(post_split_dists: &[Vec<f64>]) -> f64 {
        let weights: Vec<f64> = post_split_dists.iter().map(|d| sum_of_weights(d)).collect();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        post_split_dists
            .iter()
            .zip(weights)
            .filter(|(_, w)| *w > 0.0)
            .map(|(dist, w)| (w / total) * Self::compute_entropy(dist))
            .sum()
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> f64 {
        Self::compute_entropy(pre_split_distribution)
            - Self::compute_weighted_entropy(post_split_dists)
    }
}
