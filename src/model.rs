//! The decision tree that was fitted on the iris dataset.
//!
//! The thresholds are the single precision split points of the fitted model,
//! widened to double precision, so values such as 2.45 appear as
//! 2.450000047683716.

use crate::tree::Node;
use crate::{NUM_CLASSES, NUM_FEATURES};

/// Names of the measurement in each slot of the feature vector.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "sepal length (cm)",
    "sepal width (cm)",
    "petal length (cm)",
    "petal width (cm)",
];

/// Names of the classes, by class index.
pub const CLASS_NAMES: [&str; NUM_CLASSES] =
    ["setosa", "versicolor", "virginica"];

const fn split(
    feature: usize,
    threshold: f64,
    left: usize,
    right: usize,
) -> Node {
    Node::Split {
        feature,
        threshold,
        left,
        right,
    }
}

const fn leaf(a: u32, b: u32, c: u32) -> Node {
    Node::Leaf { votes: [a, b, c] }
}

/// The fitted tree in pre-order.
pub static IRIS_NODES: [Node; 17] = [
    /* 0 */ split(2, 2.450000047683716, 1, 2),
    /* 1 */ leaf(50, 0, 0),
    /* 2 */ split(3, 1.75, 3, 12),
    /* 3 */ split(2, 4.949999809265137, 4, 7),
    /* 4 */ split(3, 1.6500000953674316, 5, 6),
    /* 5 */ leaf(0, 47, 0),
    /* 6 */ leaf(0, 0, 1),
    /* 7 */ split(3, 1.5499999523162842, 8, 9),
    /* 8 */ leaf(0, 0, 3),
    /* 9 */ split(2, 5.449999809265137, 10, 11),
    /* 10 */ leaf(0, 2, 0),
    /* 11 */ leaf(0, 0, 1),
    /* 12 */ split(2, 4.850000381469727, 13, 16),
    /* 13 */ split(0, 5.949999809265137, 14, 15),
    /* 14 */ leaf(0, 1, 0),
    /* 15 */ leaf(0, 0, 2),
    /* 16 */ leaf(0, 0, 43),
];

/// Return the name of the class 'idx', if it exists.
pub fn class_name(idx: usize) -> Option<&'static str> {
    CLASS_NAMES.get(idx).copied()
}
