pub mod evaluate;
pub mod stats;
pub mod train_config;
pub mod trainer;

pub use evaluate::evaluate;
pub use stats::{Evaluation, TrainStats};
pub use train_config::TrainConfig;
pub use trainer::train_network;
