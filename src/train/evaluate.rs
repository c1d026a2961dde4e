use std::time::Instant;

use tracing::info;

use crate::data::dataset::Dataset;
use crate::data::provider::PixelProvider;
use crate::error::Result;
use crate::network::network::Network;
use crate::train::stats::Evaluation;

/// Classifies every sample of `dataset` by the most active output neuron and
/// counts the hits. Weights are left untouched.
pub fn evaluate<P: PixelProvider>(network: &mut Network, dataset: &Dataset<P>) -> Result<Evaluation> {
    info!(samples = dataset.len(), "Testing...");
    let t_start = Instant::now();

    let mut eval = Evaluation::default();
    for index in 0..dataset.len() {
        let (input, label) = dataset.sample(index)?;
        if network.predict(&input) == label {
            eval.correct += 1;
        } else {
            eval.incorrect += 1;
        }
    }

    eval.elapsed_ms = t_start.elapsed().as_millis() as u64;
    info!(elapsed_ms = eval.elapsed_ms, accuracy = eval.accuracy(), "Testing done");
    Ok(eval)
}
