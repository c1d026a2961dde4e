use crate::data::provider::{normalize, PixelProvider};
use crate::error::{Error, Result};

/// Pixel samples paired with their class labels.
///
/// Construction checks what the network itself never does: one label per
/// sample, each label a valid output index.
#[derive(Debug, Clone)]
pub struct Dataset<P> {
    provider: P,
    labels: Vec<u8>,
    num_classes: usize,
}

impl<P: PixelProvider> Dataset<P> {
    pub fn new(provider: P, labels: Vec<u8>, num_classes: usize) -> Result<Dataset<P>> {
        if provider.len() != labels.len() {
            return Err(Error::CountMismatch {
                samples: provider.len(),
                labels: labels.len(),
            });
        }
        if let Some((index, &label)) = labels
            .iter()
            .enumerate()
            .find(|&(_, &label)| label as usize >= num_classes)
        {
            return Err(Error::LabelRange { index, label, num_classes });
        }

        Ok(Dataset { provider, labels, num_classes })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn label(&self, index: usize) -> usize {
        self.labels[index] as usize
    }

    /// Normalized input and class label of sample `index`.
    pub fn sample(&self, index: usize) -> Result<(Vec<f64>, usize)> {
        let pixels = self.provider.pixels(index)?;
        Ok((normalize(&pixels), self.label(index)))
    }
}
