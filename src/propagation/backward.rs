use crate::activation::SlopeRule;
use crate::layers::layer::Layer;
use crate::propagation::buffers::Scratch;

/// Pulls downstream deltas back through the current weights of `upstream`:
///
/// `out[i] = slope(upstream[i].value) * Σ_k upstream[i].weight(k) * downstream_delta[k]`
pub fn pull_back(upstream: &Layer, downstream_delta: &[f64], rule: SlopeRule, out: &mut [f64]) {
    assert_eq!(out.len(), upstream.len(), "delta buffer does not match layer size");

    for (neuron, delta) in upstream.neurons.iter().zip(out.iter_mut()) {
        let error: f64 = downstream_delta
            .iter()
            .enumerate()
            .map(|(k, d)| neuron.weight(k) * d)
            .sum();
        *delta = error * rule.slope(neuron.value());
    }
}

/// Gradient-descent step on the weights leaving `upstream`:
///
/// `w[i][k] += learning_rate * downstream_delta[k] * upstream[i].value`
pub fn descend(upstream: &mut Layer, downstream_delta: &[f64], learning_rate: f64) {
    for neuron in &mut upstream.neurons {
        let value = neuron.value();
        for (k, d) in downstream_delta.iter().enumerate() {
            let old = neuron.weight(k);
            neuron.set_weight(k, old + learning_rate * d * value);
        }
    }
}

/// One backward pass through an input → hidden → output network.
///
/// `output_error[k]` is the one-hot target minus the output activation of
/// neuron `k`. The hidden deltas are derived from the hidden → output weights
/// before either weight matrix is touched, and both updates read the hidden
/// activations left by the forward pass.
///
/// # Panics
/// Panics if `output_error` is not one entry per output neuron.
pub fn backpropagate(
    input: &mut Layer,
    hidden: &mut Layer,
    output: &Layer,
    output_error: &[f64],
    learning_rate: f64,
    rule: SlopeRule,
) {
    assert_eq!(output_error.len(), output.len(), "one error per output neuron expected");

    let mut hidden_delta = vec![0.0; hidden.len()];
    pull_back(hidden, output_error, rule, &mut hidden_delta);

    descend(input, &hidden_delta, learning_rate);
    descend(hidden, output_error, learning_rate);
}

/// [`backpropagate`] for any number of layers, input layer first.
///
/// The output layer's delta is `output_error` itself; every hidden layer's
/// delta is pulled back from the layer above it. All deltas are computed
/// before any weight changes, then every weight matrix takes its step.
///
/// # Panics
/// Panics if there are fewer than two layers, if `scratch` was sized for a
/// different topology, or if `output_error` does not match the output layer.
pub fn backpropagate_layers(
    layers: &mut [Layer],
    output_error: &[f64],
    learning_rate: f64,
    rule: SlopeRule,
    scratch: &mut Scratch,
) {
    assert!(layers.len() >= 2, "a network needs at least two layers");
    assert!(scratch.fits(layers), "scratch buffers sized for a different topology");

    let last = layers.len() - 1;
    scratch.delta_mut(last).copy_from_slice(output_error);

    for l in (1..last).rev() {
        let (delta, downstream_delta) = scratch.pair_mut(l);
        pull_back(&layers[l], downstream_delta, rule, delta);
    }

    for (l, layer) in layers[..last].iter_mut().enumerate() {
        descend(layer, scratch.delta(l + 1), learning_rate);
    }
}
