mod datasets;

pub use datasets::{
    constant_label, mirrored_tie, single_feature_constant, tied_features, weather_nominal,
    worked_example, xor,
};
