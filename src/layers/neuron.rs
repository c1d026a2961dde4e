use rand::Rng;

use crate::random;

/// Half-width of the symmetric interval fresh weights are drawn from.
pub const DEFAULT_INIT_RANGE: f64 = 0.5;

/// A single unit: its current activation plus the row of weights leaving it,
/// one per neuron of the next layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    value: f64,
    weights: Vec<f64>,
}

impl Neuron {
    /// Creates a neuron feeding `fan_out` downstream neurons, with a zero
    /// activation and zero weights. Output neurons have a fan-out of 0.
    pub fn new(fan_out: usize) -> Neuron {
        Neuron {
            value: 0.0,
            weights: vec![0.0; fan_out],
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn fan_out(&self) -> usize {
        self.weights.len()
    }

    /// Weight of the connection to downstream neuron `j`.
    ///
    /// # Panics
    /// Panics if `j >= fan_out()`.
    pub fn weight(&self, j: usize) -> f64 {
        self.weights[j]
    }

    /// # Panics
    /// Panics if `j >= fan_out()`.
    pub fn set_weight(&mut self, j: usize, weight: f64) {
        self.weights[j] = weight;
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Redraws every outgoing weight uniformly from `[-range, range)` using
    /// the thread-local generator.
    pub fn initialize_weights(&mut self, range: f64) {
        random::with_rng(|rng| self.initialize_weights_with(rng, range));
    }

    /// Same as [`Neuron::initialize_weights`], drawing from `rng`.
    pub fn initialize_weights_with<R: Rng + ?Sized>(&mut self, rng: &mut R, range: f64) {
        for w in self.weights.iter_mut() {
            *w = random::uniform_real_with(rng, -range, range);
        }
    }
}
