use crate::layers::layer::Layer;

/// Per-sample delta storage for a fixed topology.
///
/// Allocated once per training run and overwritten for every sample, so the
/// backward pass never allocates. Slot `l` holds the deltas of layer `l`; the
/// input layer has no delta and its slot stays empty.
#[derive(Debug, Clone)]
pub struct Scratch {
    deltas: Vec<Vec<f64>>,
}

impl Scratch {
    /// Buffers for layers of the given sizes, input layer first.
    pub fn for_sizes(sizes: &[usize]) -> Scratch {
        let deltas = sizes
            .iter()
            .enumerate()
            .map(|(l, &size)| if l == 0 { Vec::new() } else { vec![0.0; size] })
            .collect();
        Scratch { deltas }
    }

    pub fn for_layers(layers: &[Layer]) -> Scratch {
        let sizes: Vec<usize> = layers.iter().map(Layer::len).collect();
        Scratch::for_sizes(&sizes)
    }

    /// Whether these buffers were sized for `layers`.
    pub fn fits(&self, layers: &[Layer]) -> bool {
        self.deltas.len() == layers.len()
            && self
                .deltas
                .iter()
                .zip(layers)
                .skip(1)
                .all(|(delta, layer)| delta.len() == layer.len())
    }

    pub fn delta(&self, layer: usize) -> &[f64] {
        &self.deltas[layer]
    }

    pub fn delta_mut(&mut self, layer: usize) -> &mut [f64] {
        &mut self.deltas[layer]
    }

    /// Mutable deltas of `layer` next to the already computed deltas of
    /// `layer + 1`.
    pub fn pair_mut(&mut self, layer: usize) -> (&mut [f64], &[f64]) {
        let (head, tail) = self.deltas.split_at_mut(layer + 1);
        (&mut head[layer], &tail[0])
    }
}
