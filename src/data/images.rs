use std::path::PathBuf;

use crate::data::provider::PixelProvider;
use crate::error::{Error, Result};

/// Numbered image files on disk: sample `i` lives at `<prefix><i:04>.png`,
/// e.g. `data/digits/train/digit_0042.png`.
///
/// Images are decoded to 8-bit grayscale and inverted, so dark ink on a light
/// background becomes high pixel values.
#[derive(Debug, Clone)]
pub struct ImageDirProvider {
    prefix: String,
    count: usize,
    expected_len: usize,
}

impl ImageDirProvider {
    /// `count` images of `expected_len` pixels each.
    pub fn new(prefix: impl Into<String>, count: usize, expected_len: usize) -> ImageDirProvider {
        ImageDirProvider {
            prefix: prefix.into(),
            count,
            expected_len,
        }
    }

    pub fn path(&self, index: usize) -> PathBuf {
        PathBuf::from(format!("{}{:04}.png", self.prefix, index))
    }
}

impl PixelProvider for ImageDirProvider {
    fn len(&self) -> usize {
        self.count
    }

    fn pixels(&self, index: usize) -> Result<Vec<u8>> {
        if index >= self.count {
            return Err(Error::SampleIndex { index, len: self.count });
        }

        let path = self.path(index);
        let img = image::open(&path).map_err(|source| Error::Image {
            path: path.clone(),
            source,
        })?;
        let gray = img.to_luma8();
        let pixels: Vec<u8> = gray.pixels().map(|p| 255 - p.0[0]).collect();

        if pixels.len() != self.expected_len {
            return Err(Error::PixelCount {
                path,
                expected: self.expected_len,
                actual: pixels.len(),
            });
        }
        Ok(pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    fn write_digit(prefix: &str, index: usize, width: u32, height: u32, raw: Vec<u8>) {
        let img = GrayImage::from_raw(width, height, raw).unwrap();
        img.save(format!("{}{:04}.png", prefix, index)).unwrap();
    }

    #[test]
    fn paths_are_zero_padded() {
        let provider = ImageDirProvider::new("train/digit_", 20, 784);
        assert_eq!(provider.path(7), PathBuf::from("train/digit_0007.png"));
    }

    #[test]
    fn decodes_and_inverts_row_major() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = format!("{}/digit_", dir.path().display());
        write_digit(&prefix, 0, 2, 2, vec![255, 0, 200, 55]);

        let provider = ImageDirProvider::new(prefix, 1, 4);
        assert_eq!(provider.pixels(0).unwrap(), vec![0, 255, 55, 200]);
    }

    #[test]
    fn wrong_size_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = format!("{}/digit_", dir.path().display());
        write_digit(&prefix, 0, 3, 1, vec![1, 2, 3]);

        let provider = ImageDirProvider::new(prefix, 1, 4);
        assert!(matches!(
            provider.pixels(0),
            Err(Error::PixelCount { expected: 4, actual: 3, .. })
        ));
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ImageDirProvider::new(format!("{}/none_", dir.path().display()), 1, 4);
        assert!(matches!(provider.pixels(0), Err(Error::Image { .. })));
    }
}
