use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::layers::neuron::Neuron;

/// Ordered neurons with no connections between them. The order fixes which
/// weight column every downstream neuron reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    /// `size` neurons, each with `fan_out` outgoing weights.
    pub fn new(size: usize, fan_out: usize) -> Layer {
        Layer {
            neurons: (0..size).map(|_| Neuron::new(fan_out)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.neurons.iter().map(Neuron::value).collect()
    }

    /// Loads one activation per neuron.
    ///
    /// # Panics
    /// Panics if `values.len() != self.len()`.
    pub fn set_values(&mut self, values: &[f64]) {
        assert_eq!(
            values.len(),
            self.len(),
            "layer of {} neurons fed {} values",
            self.len(),
            values.len()
        );
        for (neuron, &v) in self.neurons.iter_mut().zip(values) {
            neuron.set_value(v);
        }
    }

    pub fn initialize_weights(&mut self, range: f64) {
        for neuron in &mut self.neurons {
            neuron.initialize_weights(range);
        }
    }

    pub fn initialize_weights_with<R: Rng + ?Sized>(&mut self, rng: &mut R, range: f64) {
        for neuron in &mut self.neurons {
            neuron.initialize_weights_with(rng, range);
        }
    }
}

impl Index<usize> for Layer {
    type Output = Neuron;

    fn index(&self, i: usize) -> &Neuron {
        &self.neurons[i]
    }
}

impl IndexMut<usize> for Layer {
    fn index_mut(&mut self, i: usize) -> &mut Neuron {
        &mut self.neurons[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_layer_shares_fan_out() {
        let layer = Layer::new(4, 3);
        assert_eq!(layer.len(), 4);
        assert!(layer.neurons.iter().all(|n| n.fan_out() == 3));
    }

    #[test]
    fn set_values_round_trips_in_order() {
        let mut layer = Layer::new(3, 0);
        layer.set_values(&[0.1, 0.2, 0.3]);
        assert_eq!(layer.values(), vec![0.1, 0.2, 0.3]);
        assert_eq!(layer[2].value(), 0.3);
    }

    #[test]
    #[should_panic]
    fn set_values_rejects_wrong_length() {
        Layer::new(2, 1).set_values(&[1.0]);
    }

    #[test]
    fn initialization_touches_every_neuron() {
        let mut layer = Layer::new(5, 10);
        layer.initialize_weights(0.5);
        assert!(layer.neurons.iter().all(|n| n.weights().iter().any(|&w| w != 0.0)));
    }
}
