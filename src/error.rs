use std::path::PathBuf;

use thiserror::Error;

/// Recoverable failures of the data and configuration glue around the network.
///
/// Shape and index mistakes inside the network itself are programming errors
/// and panic instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode image '{path}': {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("image '{path}' has {actual} pixels, expected {expected}")]
    PixelCount {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("sample index {index} is out of range for a provider of {len} samples")]
    SampleIndex { index: usize, len: usize },

    #[error("label token {token:?} at position {position} is not a valid class index")]
    MalformedLabel { position: usize, token: String },

    #[error("label {label} at sample {index} is out of range for {num_classes} classes")]
    LabelRange {
        index: usize,
        label: u8,
        num_classes: usize,
    },

    #[error("{samples} samples were provided with {labels} labels")]
    CountMismatch { samples: usize, labels: usize },

    #[error("invalid topology: {0}")]
    Topology(String),
}

pub type Result<T> = std::result::Result<T, Error>;
