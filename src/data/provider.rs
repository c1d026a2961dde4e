use crate::error::{Error, Result};

/// Source of flattened 8-bit grayscale samples, addressed by index.
pub trait PixelProvider {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major pixels of sample `index`, one byte per pixel.
    fn pixels(&self, index: usize) -> Result<Vec<u8>>;
}

/// Samples already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    samples: Vec<Vec<u8>>,
}

impl MemoryProvider {
    pub fn new(samples: Vec<Vec<u8>>) -> MemoryProvider {
        MemoryProvider { samples }
    }
}

impl PixelProvider for MemoryProvider {
    fn len(&self) -> usize {
        self.samples.len()
    }

    fn pixels(&self, index: usize) -> Result<Vec<u8>> {
        self.samples
            .get(index)
            .cloned()
            .ok_or(Error::SampleIndex { index, len: self.samples.len() })
    }
}

/// Maps pixels from [0, 255] to [0.0, 1.0].
pub fn normalize(pixels: &[u8]) -> Vec<f64> {
    pixels.iter().map(|&p| p as f64 / 255.0).collect()
}
