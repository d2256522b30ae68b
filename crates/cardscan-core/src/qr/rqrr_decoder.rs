//! QR decoder backed by `rqrr`.

use image::DynamicImage;
use tracing::{debug, warn};

use crate::error::QrError;

use super::BarcodeDecoder;

/// Pure Rust QR decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct RqrrDecoder;

impl RqrrDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a luma buffer, rejecting buffers whose size does not match.
    pub fn decode_checked(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Option<String>, QrError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(QrError::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        let w = width as usize;
        let mut prepared =
            rqrr::PreparedImage::prepare_from_greyscale(w, height as usize, |x, y| pixels[y * w + x]);
        let grids = prepared.detect_grids();
        debug!("Found {} QR grid candidates", grids.len());

        for grid in grids {
            match grid.decode() {
                Ok((_, content)) => {
                    debug!("Decoded QR payload of {} bytes", content.len());
                    return Ok(Some(content));
                }
                Err(e) => warn!("QR grid failed to decode: {}", e),
            }
        }
        Ok(None)
    }

    /// Decode the first QR code in an image.
    pub fn decode_image(&self, image: &DynamicImage) -> Result<Option<String>, QrError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(QrError::InvalidImage(format!(
                "{}x{}",
                image.width(),
                image.height()
            )));
        }
        let luma = image.to_luma8();
        let (width, height) = luma.dimensions();
        self.decode_checked(luma.as_raw(), width, height)
    }
}

impl BarcodeDecoder for RqrrDecoder {
    fn decode(&self, pixels: &[u8], width: u32, height: u32) -> Option<String> {
        match self.decode_checked(pixels, width, height) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }
}
