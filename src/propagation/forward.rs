use crate::activation::sigmoid;
use crate::layers::layer::Layer;

/// Sets every downstream activation to the sigmoid of the weighted sum of all
/// upstream activations.
///
/// Upstream neuron `i` reaches downstream neuron `j` through `upstream[i].weight(j)`,
/// so every upstream weight row must be at least `downstream.len()` long.
pub fn propagate(upstream: &Layer, downstream: &mut Layer) {
    for (j, neuron) in downstream.neurons.iter_mut().enumerate() {
        let raw: f64 = upstream
            .neurons
            .iter()
            .map(|u| u.weight(j) * u.value())
            .sum();
        neuron.set_value(sigmoid(raw));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wired() -> (Layer, Layer) {
        let mut upstream = Layer::new(2, 2);
        upstream.set_values(&[1.0, 0.5]);
        upstream[0].set_weight(0, 0.4);
        upstream[0].set_weight(1, -0.2);
        upstream[1].set_weight(0, 0.6);
        upstream[1].set_weight(1, 0.8);
        (upstream, Layer::new(2, 0))
    }

    #[test]
    fn computes_sigmoid_of_weighted_sum() {
        let (upstream, mut downstream) = wired();
        propagate(&upstream, &mut downstream);

        assert_eq!(downstream[0].value(), sigmoid(0.4 * 1.0 + 0.6 * 0.5));
        assert_eq!(downstream[1].value(), sigmoid(-0.2 * 1.0 + 0.8 * 0.5));
    }

    #[test]
    fn repeated_passes_are_bit_identical() {
        let (upstream, mut downstream) = wired();
        propagate(&upstream, &mut downstream);
        let first = downstream.values();
        propagate(&upstream, &mut downstream);
        assert_eq!(first, downstream.values());
    }

    #[test]
    fn zero_weights_give_one_half() {
        let mut upstream = Layer::new(3, 4);
        upstream.set_values(&[0.9, 0.1, 0.7]);
        let mut downstream = Layer::new(4, 0);
        propagate(&upstream, &mut downstream);
        assert!(downstream.values().iter().all(|&v| v == 0.5));
    }
}
