pub mod random;

pub use random::{
    normal_grid, normal_grid_with, normal_real, normal_real_with, seed_thread, uniform_grid,
    uniform_grid_with, uniform_int, uniform_int_with, uniform_real, uniform_real_with, with_rng,
};
