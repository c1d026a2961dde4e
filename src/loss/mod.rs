pub mod mse;
pub mod one_hot;

pub use mse::MseLoss;
pub use one_hot::{one_hot, one_hot_error};
