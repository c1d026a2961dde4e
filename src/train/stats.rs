use serde::{Deserialize, Serialize};

/// Summary of one pass over the training set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainStats {
    /// Samples processed, each exactly once.
    pub samples: usize,
    /// Mean squared output error, measured before each sample's update.
    pub mean_loss: f64,
    /// Wall-clock duration of the pass in milliseconds.
    pub elapsed_ms: u64,
}

/// Classification results over a test set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    pub correct: usize,
    pub incorrect: usize,
    pub elapsed_ms: u64,
}

impl Evaluation {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Share of correct predictions in percent; 0 for an empty test set.
    pub fn accuracy(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total() as f64 * 100.0
    }
}
