/// Vector of `len` zeros with a single 1 at `class`.
///
/// # Panics
/// Panics if `class >= len`.
pub fn one_hot(class: usize, len: usize) -> Vec<f64> {
    assert!(class < len, "class {} out of range for {} outputs", class, len);
    let mut target = vec![0.0; len];
    target[class] = 1.0;
    target
}

/// Output error fed to backpropagation: the one-hot target for `class` minus
/// the network's output, entry by entry.
pub fn one_hot_error(class: usize, outputs: &[f64]) -> Vec<f64> {
    one_hot(class, outputs.len())
        .into_iter()
        .zip(outputs)
        .map(|(target, output)| target - output)
        .collect()
}
