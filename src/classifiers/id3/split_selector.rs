use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::id3::instance_conditional_test::NominalAttributeMultiwayTest;
use crate::classifiers::id3::split_criteria::{InfoGainSplitCriterion, SplitCriterion};
use crate::core::Dataset;
use crate::error::{Result, SplitError};
use tracing::{debug, trace};

/// Merits closer than this are treated as equal when choosing a split.
/// Mathematically equal gains can differ in the last bits depending on the
/// order their terms are summed in.
pub const MERIT_TIE_TOLERANCE: f64 = 1e-9;

/// Chooses the feature column whose partition of a dataset scores best under
/// a [`SplitCriterion`] (information gain unless configured otherwise).
///
/// Features are scanned in schema order and a later feature only replaces the
/// current best when its merit exceeds it by more than
/// [`MERIT_TIE_TOLERANCE`], so ties go to the earliest column.
pub struct SplitSelector {
    criterion: Box<dyn SplitCriterion>,
}

impl Default for SplitSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitSelector {
    pub fn new() -> Self {
        Self::with_criterion(Box::new(InfoGainSplitCriterion::new()))
    }

    pub fn with_criterion(criterion: Box<dyn SplitCriterion>) -> Self {
        Self { criterion }
    }

    /// Entropy, in bits, of the class column of `dataset`.
    pub fn entropy(&self, dataset: &Dataset) -> Result<f64> {
        if dataset.is_empty() {
            return Err(SplitError::EmptyDataset);
        }
        Ok(InfoGainSplitCriterion::compute_entropy(
            &dataset.class_distribution(),
        ))
    }

    /// Information gain of partitioning `dataset` on `feature`.
    pub fn gain(&self, dataset: &Dataset, feature: &str) -> Result<f64> {
        let index = dataset.header().feature_index(feature)?;
        if dataset.is_empty() {
            return Err(SplitError::EmptyDataset);
        }
        Ok(InfoGainSplitCriterion::new().get_merit_of_split(
            &dataset.class_distribution(),
            &dataset.class_distribution_per_value(index),
        ))
    }

    /// Merit of partitioning `dataset` on `feature` under this selector's
    /// criterion.
    pub fn merit(&self, dataset: &Dataset, feature: &str) -> Result<f64> {
        let index = dataset.header().feature_index(feature)?;
        Ok(self.suggestions(dataset, &[index])?[0].get_merit())
    }

    /// Name of the feature with the greatest merit.
    pub fn select_best_split(&self, dataset: &Dataset) -> Result<String> {
        let candidates: Vec<usize> = dataset.header().feature_indices().collect();
        if candidates.is_empty() {
            return Err(SplitError::invalid("dataset has no feature columns"));
        }
        let best = self.best_suggestion(dataset, &candidates)?;
        Ok(best.attribute_name().to_string())
    }

    /// Scores every candidate column, in the order given.
    pub fn suggestions(
        &self,
        dataset: &Dataset,
        candidates: &[usize],
    ) -> Result<Vec<AttributeSplitSuggestion>> {
        let header = dataset.header();
        for &index in candidates {
            header.check_feature_index(index)?;
        }
        if dataset.is_empty() {
            return Err(SplitError::EmptyDataset);
        }

        let pre_split_distribution = dataset.class_distribution();
        Ok(candidates
            .iter()
            .map(|&index| {
                let post_split_dists = dataset.class_distribution_per_value(index);
                let merit = self
                    .criterion
                    .get_merit_of_split(&pre_split_distribution, &post_split_dists);
                let name = header.attributes[index].name().to_string();
                trace!(attribute = %name, merit, "scored candidate split");
                AttributeSplitSuggestion::new(
                    NominalAttributeMultiwayTest::new(index),
                    name,
                    post_split_dists,
                    merit,
                )
            })
            .collect())
    }

    /// The first candidate reaching the maximal merit, up to
    /// [`MERIT_TIE_TOLERANCE`].
    pub fn best_suggestion(
        &self,
        dataset: &Dataset,
        candidates: &[usize],
    ) -> Result<AttributeSplitSuggestion> {
        if candidates.is_empty() {
            return Err(SplitError::invalid("no candidate features to split on"));
        }
        let mut best: Option<AttributeSplitSuggestion> = None;
        for suggestion in self.suggestions(dataset, candidates)? {
            match &best {
                Some(current)
                    if suggestion.get_merit() <= current.get_merit() + MERIT_TIE_TOLERANCE => {}
                _ => best = Some(suggestion),
            }
        }
        let best = best.ok_or_else(|| SplitError::invalid("no candidate features to split on"))?;
        debug!(
            attribute = best.attribute_name(),
            merit = best.get_merit(),
            instances = dataset.len(),
            "selected split"
        );
        Ok(best)
    }
}

/// Entropy of the class column, with the default selector.
pub fn entropy(dataset: &Dataset) -> Result<f64> {
    SplitSelector::new().entropy(dataset)
}

/// Information gain of splitting on `feature`, with the default selector.
pub fn gain(dataset: &Dataset, feature: &str) -> Result<f64> {
    SplitSelector::new().gain(dataset, feature)
}

/// The feature maximizing information gain; ties go to the earliest column.
pub fn select_best_split(dataset: &Dataset) -> Result<String> {
    SplitSelector::new().select_best_split(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::id3::split_criteria::GiniSplitCriterion;
    use crate::testing::dummies::{
        constant_label, mirrored_tie, single_feature_constant, tied_features, weather_nominal,
        worked_example, xor,
    };
    const EPS: f64 = 1e-9;

    #[test]
    fn worked_example_entropy_and_gain() {
        let ds = worked_example();
        let e = entropy(&ds).unwrap();
        let expected = -(0.25 * 0.25f64.log2() + 0.75 * 0.75f64.log2());
        assert!((e - expected).abs() < EPS);
        assert!((e - 0.8113).abs() < 1e-4);

        assert_eq!(entropy(&ds.filter("A", "x").unwrap()).unwrap(), 1.0);
        assert_eq!(entropy(&ds.filter("A", "y").unwrap()).unwrap(), 0.0);

        let g = gain(&ds, "A").unwrap();
        assert!((g - (expected - 0.5)).abs() < EPS);
        assert!((g - 0.3113).abs() < 1e-4);
    }

    #[test]
    fn weather_gains_match_the_textbook_values() {
        let ds = weather_nominal();
        assert!((entropy(&ds).unwrap() - 0.940_285_958_670_631).abs() < EPS);
        let expected = [
            ("outlook", 0.246_749_819_774_439_4),
            ("temperature", 0.029_222_565_658_954_647),
            ("humidity", 0.151_835_501_362_341_5),
            ("windy", 0.048_127_030_408_269_7),
        ];
        for (feature, value) in expected {
            assert!((gain(&ds, feature).unwrap() - value).abs() < EPS, "{feature}");
        }
        assert_eq!(select_best_split(&ds).unwrap(), "outlook");
    }

    #[test]
    fn entropy_is_bounded_by_log2_of_class_count() {
        for ds in [weather_nominal(), worked_example(), xor(), single_feature_constant()] {
            let e = entropy(&ds).unwrap();
            let k = ds.class_distribution().iter().filter(|&&c| c > 0.0).count();
            assert!(e >= 0.0);
            assert!(e <= (k as f64).log2() + EPS);
        }
        assert!((entropy(&xor()).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn gain_is_non_negative_for_every_feature() {
        for ds in [weather_nominal(), worked_example(), xor(), tied_features()] {
            for feature in ds.feature_names() {
                assert!(gain(&ds, feature).unwrap() >= -EPS);
            }
        }
    }

    #[test]
    fn constant_feature_has_exactly_zero_gain() {
        let ds = single_feature_constant();
        assert!(entropy(&ds).unwrap() > 0.0);
        assert_eq!(gain(&ds, "f").unwrap(), 0.0);
    }

    #[test]
    fn constant_label_gives_zero_entropy_and_gain() {
        let ds = constant_label();
        assert_eq!(entropy(&ds).unwrap(), 0.0);
        for feature in ds.feature_names() {
            assert_eq!(gain(&ds, feature).unwrap(), 0.0);
        }
    }

    #[test]
    fn ties_go_to_the_earlier_column() {
        let ds = tied_features();
        assert_eq!(gain(&ds, "first").unwrap(), gain(&ds, "second").unwrap());
        assert_eq!(gain(&ds, "noise").unwrap(), 0.0);
        assert_eq!(select_best_split(&ds).unwrap(), "first");

        // All-zero gains: the first feature wins.
        assert_eq!(select_best_split(&xor()).unwrap(), "a");
        assert_eq!(select_best_split(&constant_label()).unwrap(), "color");
    }

    #[test]
    fn rounding_noise_does_not_break_ties() {
        // Same partition entropies, summed in a different order.
        let ds = mirrored_tie();
        let first = gain(&ds, "first").unwrap();
        let second = gain(&ds, "second").unwrap();
        assert!((first - second).abs() < EPS);
        assert_eq!(select_best_split(&ds).unwrap(), "first");

        let selector = SplitSelector::new();
        let first_index = ds.header().index_of_attribute("first").unwrap();
        let second_index = ds.header().index_of_attribute("second").unwrap();
        let best = selector
            .best_suggestion(&ds, &[second_index, first_index])
            .unwrap();
        assert_eq!(best.attribute_name(), "second");
    }

    #[test]
    fn clearly_greater_merit_still_wins() {
        // outlook beats humidity by far more than the tie tolerance.
        let ds = weather_nominal();
        let humidity = ds.header().index_of_attribute("humidity").unwrap();
        let outlook = ds.header().index_of_attribute("outlook").unwrap();
        let best = SplitSelector::new()
            .best_suggestion(&ds, &[humidity, outlook])
            .unwrap();
        assert_eq!(best.attribute_name(), "outlook");
    }

    #[test]
    fn selector_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SplitSelector>();
        assert_send_sync::<Dataset>();
    }

    #[test]
    fn selection_is_deterministic() {
        let ds = weather_nominal();
        let selector = SplitSelector::new();
        let first = selector.select_best_split(&ds).unwrap();
        for _ in 0..10 {
            assert_eq!(selector.select_best_split(&ds).unwrap(), first);
        }
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let ds = weather_nominal().filter("outlook", "foggy").unwrap();
        assert_eq!(entropy(&ds), Err(SplitError::EmptyDataset));
        assert_eq!(gain(&ds, "outlook"), Err(SplitError::EmptyDataset));
        assert_eq!(select_best_split(&ds), Err(SplitError::EmptyDataset));
    }

    #[test]
    fn invalid_columns_are_rejected() {
        let ds = weather_nominal();
        assert!(matches!(gain(&ds, "play"), Err(SplitError::InvalidInput(_))));
        assert!(matches!(gain(&ds, "nope"), Err(SplitError::InvalidInput(_))));

        let label_only = Dataset::from_rows("l", &["label"], "label", [["a"], ["b"]]).unwrap();
        assert!(matches!(
            select_best_split(&label_only),
            Err(SplitError::InvalidInput(_))
        ));
    }

    #[test]
    fn best_suggestion_respects_candidates() {
        let ds = weather_nominal();
        let selector = SplitSelector::new();
        let humidity = ds.header().index_of_attribute("humidity").unwrap();
        let windy = ds.header().index_of_attribute("windy").unwrap();
        let best = selector.best_suggestion(&ds, &[windy, humidity]).unwrap();
        assert_eq!(best.attribute_name(), "humidity");
        assert_eq!(best.number_of_splits(), 2);
        assert!(matches!(
            selector.best_suggestion(&ds, &[]),
            Err(SplitError::InvalidInput(_))
        ));
        assert!(matches!(
            selector.best_suggestion(&ds, &[ds.header().class_index()]),
            Err(SplitError::InvalidInput(_))
        ));
    }

    #[test]
    fn gini_selector_uses_its_own_merit() {
        let ds = weather_nominal();
        let selector = SplitSelector::with_criterion(Box::new(GiniSplitCriterion::new()));
        assert_eq!(selector.select_best_split(&ds).unwrap(), "outlook");
        let merit = selector.merit(&ds, "outlook").unwrap();
        assert!((merit - selector.gain(&ds, "outlook").unwrap()).abs() > EPS);
        assert!(merit > 0.0);
    }
}
