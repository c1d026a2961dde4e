use std::time::Instant;

use tracing::info;

use crate::data::dataset::Dataset;
use crate::data::provider::PixelProvider;
use crate::error::Result;
use crate::loss::{one_hot_error, MseLoss};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::stats::TrainStats;

/// Trains `network` with one ordered pass over `dataset`, updating the
/// weights after every sample.
///
/// Every sample is normalized, propagated forward, compared with its one-hot
/// target and backpropagated. Progress is logged every `log_every` samples
/// (never when 0).
///
/// # Panics
/// Panics if the dataset's class count differs from the output layer size.
pub fn train_network<P: PixelProvider>(
    network: &mut Network,
    dataset: &Dataset<P>,
    optimizer: &Sgd,
    log_every: usize,
) -> Result<TrainStats> {
    assert_eq!(
        dataset.num_classes(),
        network.output_size(),
        "dataset classes must match output neurons"
    );

    info!(samples = dataset.len(), learning_rate = optimizer.learning_rate, "Training...");
    let t_start = Instant::now();

    let mut scratch = network.scratch();
    let mut total_loss = 0.0;

    for index in 0..dataset.len() {
        let (input, label) = dataset.sample(index)?;

        let output = network.forward(&input);
        let error = one_hot_error(label, &output);
        total_loss += MseLoss::of_error(&error);

        optimizer.step(network, &error, &mut scratch);

        if log_every > 0 && (index + 1) % log_every == 0 {
            info!(
                samples = index + 1,
                mean_loss = total_loss / (index + 1) as f64,
                "training progress"
            );
        }
    }

    let stats = TrainStats {
        samples: dataset.len(),
        mean_loss: if dataset.is_empty() { 0.0 } else { total_loss / dataset.len() as f64 },
        elapsed_ms: t_start.elapsed().as_millis() as u64,
    };
    info!(elapsed_ms = stats.elapsed_ms, mean_loss = stats.mean_loss, "Training done");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::MemoryProvider;
    use crate::network::Topology;
    use crate::train::evaluate::evaluate;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    /// Two separable 4-pixel patterns: left column lit is class 0, right
    /// column lit is class 1.
    fn columns(repeats: usize) -> Dataset<MemoryProvider> {
        let mut samples = Vec::new();
        let mut labels = Vec::new();
        for _ in 0..repeats {
            samples.push(vec![255, 0, 255, 0]);
            labels.push(0);
            samples.push(vec![0, 255, 0, 255]);
            labels.push(1);
        }
        Dataset::new(MemoryProvider::new(samples), labels, 2).unwrap()
    }

    #[test]
    fn learns_separable_patterns() {
        let topology = Topology::new(vec![4, 6, 2]).unwrap();
        let mut network = Network::seeded(&topology, 17, 0.5);
        let data = columns(1_500);

        let stats = train_network(&mut network, &data, &Sgd::new(0.5), 0).unwrap();
        assert_eq!(stats.samples, 3_000);

        let eval = evaluate(&mut network, &columns(5)).unwrap();
        assert_eq!(eval.correct, 10);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn progress_is_visible_at_info_level() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let topology = Topology::new(vec![4, 3, 2]).unwrap();
        let mut network = Network::seeded(&topology, 3, 0.5);
        tracing::subscriber::with_default(subscriber, || {
            train_network(&mut network, &columns(2), &Sgd::new(0.1), 2).unwrap();
        });

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text.matches("training progress").count(), 2);
    }

    #[test]
    fn empty_dataset_is_a_no_op() {
        let topology = Topology::new(vec![4, 3, 2]).unwrap();
        let mut network = Network::seeded(&topology, 1, 0.5);
        let before = network.clone();
        let data = Dataset::new(MemoryProvider::default(), vec![], 2).unwrap();

        let stats = train_network(&mut network, &data, &Sgd::new(0.1), 10).unwrap();
        assert_eq!(stats.samples, 0);
        assert_eq!(stats.mean_loss, 0.0);
        assert_eq!(network, before);
    }

    #[test]
    #[should_panic]
    fn class_count_must_match_outputs() {
        let topology = Topology::new(vec![4, 3, 3]).unwrap();
        let mut network = Network::new(&topology);
        train_network(&mut network, &columns(1), &Sgd::new(0.1), 0).unwrap();
    }
}
