use serde::{Deserialize, Serialize};
use std::f64::consts::E;

/// Largest `f64` below 1.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Logistic function `1 / (1 + e^-x)`, squashing any real into (0, 1).
///
/// Far from zero the exact value rounds to 0 or 1, so the result is held
/// inside the open interval.
pub fn sigmoid(x: f64) -> f64 {
    let smallest = f64::MIN_POSITIVE * f64::EPSILON;
    (1.0 / (1.0 + E.powf(-x))).clamp(smallest, BELOW_ONE)
}

/// How a hidden neuron's slope is derived from its stored activation during
/// backpropagation.
///
/// Hidden neurons keep only their post-sigmoid activation `a`, so the
/// derivative has to be rebuilt from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlopeRule {
    /// Squashes the activation a second time: `s = sigmoid(a)`, slope
    /// `s * (1 - s)`. Matches the historical training runs; not the textbook
    /// derivative.
    #[default]
    Resquashed,
    /// Textbook sigmoid derivative taken directly from the activation:
    /// `a * (1 - a)`.
    Activation,
}

impl SlopeRule {
    pub fn slope(&self, activation: f64) -> f64 {
        match self {
            SlopeRule::Resquashed => {
                let s = sigmoid(activation);
                s * (1.0 - s)
            }
            SlopeRule::Activation => activation * (1.0 - activation),
        }
    }
}
