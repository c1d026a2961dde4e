pub mod backward;
pub mod buffers;
pub mod forward;

pub use backward::{backpropagate, backpropagate_layers, descend, pull_back};
pub use buffers::Scratch;
pub use forward::propagate;
