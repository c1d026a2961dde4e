use crate::activation::SlopeRule;
use crate::network::network::Network;
use crate::propagation::buffers::Scratch;

/// Plain online gradient descent with one fixed learning rate.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
    pub slope_rule: SlopeRule,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate, slope_rule: SlopeRule::default() }
    }

    pub fn with_slope_rule(mut self, slope_rule: SlopeRule) -> Sgd {
        self.slope_rule = slope_rule;
        self
    }

    /// Applies one update for the sample whose forward pass `network` holds.
    pub fn step(&self, network: &mut Network, output_error: &[f64], scratch: &mut Scratch) {
        network.backward(output_error, self.learning_rate, self.slope_rule, scratch);
    }
}
