//! A decision tree classifier for the iris dataset. The fitted tree is stored
//! as a table of nodes that is walked for every prediction.

pub mod dot;
pub mod error;
pub mod model;
pub mod tree;
pub mod utils;

pub use error::ClassifyError;
pub use tree::{DecisionTree, Node};

/// The number of features in a feature vector.
pub const NUM_FEATURES: usize = 4;
/// The number of classes a sample can be assigned to.
pub const NUM_CLASSES: usize = 3;

/// Per-class vote counts held by a leaf.
pub type Votes = [u32; NUM_CLASSES];

/// A trait that defines the interface for classifying feature vectors.
pub trait Classifier {
    /// Return the vote counts of the leaf that 'features' falls into, or an
    /// error if 'features' does not hold exactly NUM_FEATURES values.
    fn votes(&self, features: &[f64]) -> Result<Votes, ClassifyError>;

    /// Return the index of the class with the most votes.
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifyError> {
        let votes = self.votes(features)?;
        Ok(utils::find_max(&votes))
    }

    /// Return the fraction of votes that each class received.
    fn predict_proba(
        &self,
        features: &[f64],
    ) -> Result<[f64; NUM_CLASSES], ClassifyError> {
        let votes = self.votes(features)?;
        Ok(utils::normalize(&votes))
    }
}

/// Classify 'features' using the built-in iris model.
pub fn predict(features: &[f64]) -> Result<usize, ClassifyError> {
    DecisionTree::iris().predict(features)
}
