pub mod dataset;
pub mod images;
pub mod labels;
pub mod provider;

pub use dataset::Dataset;
pub use images::ImageDirProvider;
pub use labels::{parse_ground_truth, read_ground_truth};
pub use provider::{normalize, MemoryProvider, PixelProvider};
