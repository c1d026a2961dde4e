pub mod math;
pub mod random;
pub mod activation;
pub mod layers;
pub mod propagation;
pub mod network;
pub mod loss;
pub mod optim;
pub mod data;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::{sigmoid, SlopeRule};
pub use layers::{Layer, Neuron};
pub use propagation::{backpropagate, propagate, Scratch};
pub use network::{argmax, Network, Topology};
pub use loss::{one_hot_error, MseLoss};
pub use optim::sgd::Sgd;
pub use data::{Dataset, ImageDirProvider, MemoryProvider, PixelProvider};
pub use train::{evaluate, train_network, Evaluation, TrainConfig, TrainStats};
pub use error::{Error, Result};
