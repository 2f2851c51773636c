//! A collection of utilities for handling vote counts and feature vectors.

use crate::{ClassifyError, NUM_CLASSES, NUM_FEATURES};

/// Return the index of the first maximum in 'counts'. The scan only moves to
/// a later index when its value is strictly greater, so ties go to the lowest
/// index. Returns zero for an empty slice.
pub fn find_max(counts: &[u32]) -> usize {
    let mut index = 0;
    for (i, &c) in counts.iter().enumerate() {
        if c > counts[index] {
            index = i;
        }
    }
    index
}

/// Convert vote counts into the fraction of the total that each class holds.
/// All zeros if there are no votes.
pub fn normalize(votes: &[u32; NUM_CLASSES]) -> [f64; NUM_CLASSES] {
    let total: u64 = votes.iter().map(|&v| v as u64).sum();
    let mut proba = [0.0; NUM_CLASSES];
    if total == 0 {
        return proba;
    }
    for (p, &v) in proba.iter_mut().zip(votes) {
        *p = v as f64 / total as f64;
    }
    proba
}

/// Check that 'features' holds exactly NUM_FEATURES values.
pub fn check_len(features: &[f64]) -> Result<(), ClassifyError> {
    if features.len() != NUM_FEATURES {
        return Err(ClassifyError::InvalidInput {
            expected: NUM_FEATURES,
            actual: features.len(),
        });
    }
    Ok(())
}

/// Parse textual features into a feature vector. Surrounding whitespace is
/// ignored. The length is not checked here.
pub fn parse_features<S: AsRef<str>>(
    args: &[S],
) -> Result<Vec<f64>, ClassifyError> {
    let mut features = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        let text = arg.as_ref();
        let val = text.trim().parse::<f64>().map_err(|source| {
            ClassifyError::InvalidFeature {
                index,
                value: text.to_string(),
                source,
            }
        })?;
        features.push(val);
    }
    Ok(features)
}

#[test]
fn test_normalize_votes() {
    assert_eq!(normalize(&[0, 0, 0]), [0.0, 0.0, 0.0]);
    assert_eq!(normalize(&[0, 47, 0]), [0.0, 1.0, 0.0]);
    assert_eq!(normalize(&[1, 1, 2]), [0.25, 0.25, 0.5]);
    assert_eq!(normalize(&[u32::MAX, u32::MAX, 0]), [0.5, 0.5, 0.0]);
}
