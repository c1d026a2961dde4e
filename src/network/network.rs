use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::SlopeRule;
use crate::error::{Error, Result};
use crate::layers::layer::Layer;
use crate::math::matrix::Matrix;
use crate::network::topology::Topology;
use crate::propagation::{backpropagate_layers, propagate, Scratch};

/// Fully connected feed-forward network. Each neuron owns the weights
/// leaving it, so layer `l` carries the `size(l) × size(l+1)` weight matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Allocates the layers of `topology` with zero weights.
    pub fn new(topology: &Topology) -> Network {
        let layers = (0..topology.depth())
            .map(|l| Layer::new(topology.sizes()[l], topology.fan_out(l)))
            .collect();
        Network { layers }
    }

    /// Allocates and initializes from a generator seeded with `seed`, giving
    /// the same weights on every run.
    pub fn seeded(topology: &Topology, seed: u64, range: f64) -> Network {
        let mut network = Network::new(topology);
        network.initialize_weights_with(&mut StdRng::seed_from_u64(seed), range);
        network
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::len).collect()
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].len()
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].len()
    }

    /// Redraws every weight uniformly from `[-range, range)` with the
    /// thread-local generator.
    pub fn initialize_weights(&mut self, range: f64) {
        for layer in &mut self.layers {
            layer.initialize_weights(range);
        }
    }

    pub fn initialize_weights_with<R: Rng + ?Sized>(&mut self, rng: &mut R, range: f64) {
        for layer in &mut self.layers {
            layer.initialize_weights_with(rng, range);
        }
    }

    /// Forward pass; leaves every activation in its layer for backprop and
    /// returns the output activations.
    ///
    /// # Panics
    /// Panics if `input.len()` differs from the input layer size.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        self.layers[0].set_values(input);
        for l in 1..self.layers.len() {
            let (upstream, downstream) = self.layers.split_at_mut(l);
            propagate(&upstream[l - 1], &mut downstream[0]);
        }
        self.output_values()
    }

    pub fn output_values(&self) -> Vec<f64> {
        self.layers[self.layers.len() - 1].values()
    }

    /// Index of the most active output neuron after a forward pass on `input`.
    pub fn predict(&mut self, input: &[f64]) -> usize {
        argmax(&self.forward(input))
    }

    /// Backward pass for the activations left by the last [`Network::forward`].
    pub fn backward(
        &mut self,
        output_error: &[f64],
        learning_rate: f64,
        rule: SlopeRule,
        scratch: &mut Scratch,
    ) {
        backpropagate_layers(&mut self.layers, output_error, learning_rate, rule, scratch);
    }

    /// Scratch buffers sized for this network.
    pub fn scratch(&self) -> Scratch {
        Scratch::for_layers(&self.layers)
    }

    /// Copy of the weights from layer `l` to layer `l + 1`, one row per
    /// upstream neuron.
    ///
    /// # Panics
    /// Panics if `l` is the output layer or beyond.
    pub fn weight_matrix(&self, l: usize) -> Matrix {
        assert!(l + 1 < self.layers.len(), "layer {} has no outgoing weights", l);
        Matrix::from_data(
            self.layers[l]
                .neurons
                .iter()
                .map(|n| n.weights().to_vec())
                .collect(),
        )
    }

    /// Verifies that every neuron's weight row is exactly as long as the next
    /// layer, and that output neurons carry no weights.
    pub fn check_topology(&self) -> Result<()> {
        let sizes = self.sizes();
        for (l, layer) in self.layers.iter().enumerate() {
            let expected = sizes.get(l + 1).copied().unwrap_or(0);
            if let Some(i) = layer.neurons.iter().position(|n| n.fan_out() != expected) {
                return Err(Error::Topology(format!(
                    "neuron {} of layer {} has {} weights, expected {}",
                    i,
                    l,
                    layer[i].fan_out(),
                    expected
                )));
            }
        }
        Ok(())
    }
}

/// Index of the largest value. Ties keep the earliest index; an empty slice
/// gives 0.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    let mut max = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > max {
            max = v;
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::one_hot_error;

    fn small() -> Topology {
        Topology::new(vec![2, 2, 2]).unwrap()
    }

    #[test]
    fn argmax_keeps_first_maximum() {
        assert_eq!(argmax(&[0.5, 0.9, 0.9, 0.1]), 1);
        assert_eq!(argmax(&[0.0, 0.0]), 0);
        assert_eq!(argmax(&[0.2, 0.1, 0.7]), 2);
    }

    #[test]
    fn layout_follows_topology() {
        let network = Network::new(&Topology::default());
        assert_eq!(network.sizes(), vec![784, 60, 10]);
        assert!(network.check_topology().is_ok());
        assert_eq!(network.layers[2][0].fan_out(), 0);
    }

    #[test]
    fn check_topology_reports_broken_rows() {
        let mut network = Network::new(&small());
        network.layers[1].neurons[1] = crate::layers::Neuron::new(3);
        assert!(network.check_topology().is_err());
    }

    #[test]
    fn seeded_networks_are_identical() {
        let a = Network::seeded(&small(), 11, 0.5);
        let b = Network::seeded(&small(), 11, 0.5);
        let c = Network::seeded(&small(), 12, 0.5);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn weight_matrix_has_upstream_rows() {
        let network = Network::seeded(&Topology::new(vec![3, 4, 2]).unwrap(), 5, 0.5);
        let m = network.weight_matrix(0);
        assert_eq!((m.rows, m.cols), (3, 4));
        assert_eq!(m[(2, 1)], network.layers[0][2].weight(1));
        assert_eq!(network.weight_matrix(1).rows, 4);
    }

    #[test]
    fn forward_is_deterministic() {
        let mut network = Network::seeded(&small(), 3, 0.5);
        let first = network.forward(&[0.2, 0.8]);
        let second = network.forward(&[0.2, 0.8]);
        assert_eq!(first, second);
        assert!(first.iter().all(|&v| v > 0.0 && v < 1.0));
    }

    #[test]
    fn one_update_reduces_error_for_target_class() {
        let mut network = Network::seeded(&small(), 2024, 0.5);
        let input = [0.3, 0.9];
        let mut scratch = network.scratch();

        let output = network.forward(&input);
        let error = one_hot_error(0, &output);
        network.backward(&error, 0.1, SlopeRule::Resquashed, &mut scratch);

        let after = one_hot_error(0, &network.forward(&input));
        assert!(after[0].abs() < error[0].abs());
    }

    #[test]
    fn updates_preserve_row_lengths() {
        let topology = Topology::new(vec![5, 4, 3, 2]).unwrap();
        let mut network = Network::seeded(&topology, 8, 0.5);
        assert!(network.check_topology().is_ok());

        let mut scratch = network.scratch();
        for target in 0..2 {
            let output = network.forward(&[0.1, 0.2, 0.3, 0.4, 0.5]);
            network.backward(&one_hot_error(target, &output), 0.5, SlopeRule::Resquashed, &mut scratch);
            assert!(network.check_topology().is_ok());
        }
    }
}
