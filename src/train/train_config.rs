use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activation::SlopeRule;
use crate::error::{Error, Result};
use crate::layers::neuron::DEFAULT_INIT_RANGE;
use crate::network::{Network, Topology};
use crate::optim::sgd::Sgd;

/// Everything needed to build and train a network, loadable from JSON.
/// Missing fields take their defaults.
///
/// ```json
/// { "topology": [784, 60, 10], "learning_rate": 0.1, "seed": 7 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub topology: Topology,
    pub learning_rate: f64,
    /// Weights start uniformly in `[-init_range, init_range)`.
    pub init_range: f64,
    /// Fixed seed for weight initialization; `None` draws from the
    /// clock-seeded thread generator.
    pub seed: Option<u64>,
    pub slope_rule: SlopeRule,
    /// Samples between progress log lines; 0 disables them.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            topology: Topology::default(),
            learning_rate: 0.1,
            init_range: DEFAULT_INIT_RANGE,
            seed: None,
            slope_rule: SlopeRule::default(),
            log_every: 500,
        }
    }
}

impl TrainConfig {
    /// Fresh network with initialized weights.
    pub fn build_network(&self) -> Network {
        match self.seed {
            Some(seed) => Network::seeded(&self.topology, seed, self.init_range),
            None => {
                let mut network = Network::new(&self.topology);
                network.initialize_weights(self.init_range);
                network
            }
        }
    }

    pub fn optimizer(&self) -> Sgd {
        Sgd::new(self.learning_rate).with_slope_rule(self.slope_rule)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<TrainConfig> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
