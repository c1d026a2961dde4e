pub mod network;
pub mod topology;

pub use network::{argmax, Network};
pub use topology::Topology;
