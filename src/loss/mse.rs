pub struct MseLoss;

impl MseLoss {
    /// Mean of the squared entries of an error vector (expected - predicted).
    pub fn of_error(error: &[f64]) -> f64 {
        let n = error.len() as f64;
        error.iter().map(|e| e * e).sum::<f64>() / n
    }
}
