use crate::core::Dataset;

fn build(relation: &str, columns: &[&str], class: &str, rows: &[&[&str]]) -> Dataset {
    Dataset::from_rows(relation, columns, class, rows.iter().copied())
        .expect("fixture rows match their schema")
}

/// The classic play-tennis relation (14 rows, class `play`).
pub fn weather_nominal() -> Dataset {
    build(
        "weather.symbolic",
        &["outlook", "temperature", "humidity", "windy", "play"],
        "play",
        &[
            &["sunny", "hot", "high", "FALSE", "no"],
            &["sunny", "hot", "high", "TRUE", "no"],
            &["overcast", "hot", "high", "FALSE", "yes"],
            &["rainy", "mild", "high", "FALSE", "yes"],
            &["rainy", "cool", "normal", "FALSE", "yes"],
            &["rainy", "cool", "normal", "TRUE", "no"],
            &["overcast", "cool", "normal", "TRUE", "yes"],
            &["sunny", "mild", "high", "FALSE", "no"],
            &["sunny", "cool", "normal", "FALSE", "yes"],
            &["rainy", "mild", "normal", "FALSE", "yes"],
            &["sunny", "mild", "normal", "TRUE", "yes"],
            &["overcast", "mild", "high", "TRUE", "yes"],
            &["overcast", "hot", "normal", "FALSE", "yes"],
            &["rainy", "mild", "high", "TRUE", "no"],
        ],
    )
}

/// Four rows, one binary feature `A` and a binary label `L`.
pub fn worked_example() -> Dataset {
    build(
        "worked",
        &["A", "L"],
        "L",
        &[&["x", "0"], &["x", "1"], &["y", "1"], &["y", "1"]],
    )
}

/// Columns `first` and `second` carry identical information about the
/// label; `noise` carries none.
pub fn tied_features() -> Dataset {
    build(
        "tie",
        &["noise", "first", "second", "label"],
        "label",
        &[
            &["n", "a", "p", "yes"],
            &["m", "a", "p", "yes"],
            &["n", "b", "q", "no"],
            &["m", "b", "q", "no"],
        ],
    )
}

/// `first` and `second` induce partitions with the same class-count
/// multisets, with the labels mirrored and the values in another order, so
/// their gains are equal but are summed differently.
pub fn mirrored_tie() -> Dataset {
    build(
        "mirrored",
        &["first", "second", "label"],
        "label",
        &[
            &["a", "p", "0"],
            &["b", "q", "0"],
            &["c", "q", "0"],
            &["c", "q", "0"],
            &["c", "r", "0"],
            &["c", "r", "0"],
            &["a", "p", "1"],
            &["a", "p", "1"],
            &["b", "p", "1"],
            &["b", "p", "1"],
            &["b", "q", "1"],
            &["c", "r", "1"],
        ],
    )
}

pub fn constant_label() -> Dataset {
    build(
        "constant",
        &["color", "size", "label"],
        "label",
        &[
            &["red", "s", "ok"],
            &["blue", "m", "ok"],
            &["green", "l", "ok"],
            &["red", "l", "ok"],
        ],
    )
}

/// A label that only the pair of features determines; each feature alone
/// has zero gain.
pub fn xor() -> Dataset {
    build(
        "xor",
        &["a", "b", "label"],
        "label",
        &[
            &["0", "0", "f"],
            &["0", "1", "t"],
            &["1", "0", "t"],
            &["1", "1", "f"],
        ],
    )
}

/// A feature column that never changes next to a mixed label.
pub fn single_feature_constant() -> Dataset {
    build(
        "flat",
        &["f", "label"],
        "label",
        &[&["v", "a"], &["v", "b"], &["v", "a"], &["v", "c"]],
    )
}
