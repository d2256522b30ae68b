//! Text recognition seam for card photos.
//!
//! The recognizer turns an image into plain text with line breaks between
//! detected regions. Contact field extraction only ever sees that text, so
//! any engine that implements [`TextRecognizer`] can be plugged in.

#[cfg(feature = "native")]
mod pure_engine;

#[cfg(feature = "native")]
pub use pure_engine::PureOcrEngine;

use std::path::Path;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Height of a reading-order row, in pixels.
const ROW_HEIGHT: f32 = 20.0;

/// Read and decode a card photo.
pub fn load_image(path: &Path) -> crate::Result<DynamicImage> {
    let bytes = std::fs::read(path)?;
    Ok(image::load_from_memory(&bytes)?)
}

/// Progress event emitted while recognition runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionProgress {
    /// Stage label, e.g. "loading" or "recognizing text".
    pub status: String,

    /// Completion fraction in `0.0..=1.0`.
    pub progress: f32,
}

impl RecognitionProgress {
    pub fn new(status: impl Into<String>, progress: f32) -> Self {
        Self {
            status: status.into(),
            progress: progress.clamp(0.0, 1.0),
        }
    }
}

/// Trait for OCR engines.
pub trait TextRecognizer {
    /// Recognize the text in an image.
    ///
    /// `progress` is called zero or more times before the result is returned.
    fn recognize(
        &self,
        image: &DynamicImage,
        progress: &mut dyn FnMut(RecognitionProgress),
    ) -> Result<Recognized, OcrError>;
}

/// A detected text region with its coordinates and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    /// Quadrilateral corners (x1, y1, x2, y2, x3, y3, x4, y4).
    pub bbox: [f32; 8],

    /// Recognized text content.
    pub text: String,

    /// Recognition confidence (0.0 - 1.0).
    pub confidence: f32,
}

impl TextBox {
    /// Get the axis-aligned bounding rectangle.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Result of recognizing a card photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recognized {
    /// Full text, one detected region per line.
    pub text: String,

    /// Detected regions in reading order.
    pub boxes: Vec<TextBox>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Image dimensions (width, height).
    pub image_size: (u32, u32),
}

impl Recognized {
    /// Wrap plain text that did not come from an engine.
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// Build a result from unordered regions.
    pub fn from_boxes(boxes: Vec<TextBox>, image_size: (u32, u32), processing_time_ms: u64) -> Self {
        let mut recognized = Self {
            text: String::new(),
            boxes,
            processing_time_ms,
            image_size,
        };
        recognized.sort_by_reading_order();
        recognized
    }

    /// Sort boxes top-to-bottom, left-to-right and rebuild the text.
    pub fn sort_by_reading_order(&mut self) {
        self.boxes.sort_by(|a, b| {
            let (ax, ay, _, _) = a.rect();
            let (bx, by, _, _) = b.rect();

            let row_a = (ay / ROW_HEIGHT) as i32;
            let row_b = (by / ROW_HEIGHT) as i32;

            if row_a != row_b {
                row_a.cmp(&row_b)
            } else {
                ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
            }
        });

        self.text = self
            .boxes
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_box(text: &str, x: f32, y: f32) -> TextBox {
        TextBox {
            bbox: [x, y, x + 100.0, y, x + 100.0, y + 15.0, x, y + 15.0],
            text: text.to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn test_reading_order() {
        let boxes = vec![
            text_box("john@acme.com", 10.0, 60.0),
            text_box("Smith", 120.0, 12.0),
            text_box("John", 10.0, 5.0),
        ];
        let recognized = Recognized::from_boxes(boxes, (400, 200), 12);
        assert_eq!(recognized.text, "John\nSmith\njohn@acme.com");
        assert_eq!(recognized.image_size, (400, 200));
    }

    #[test]
    fn test_rect() {
        let b = TextBox {
            bbox: [10.0, 20.0, 50.0, 18.0, 52.0, 40.0, 8.0, 42.0],
            text: String::new(),
            confidence: 1.0,
        };
        assert_eq!(b.rect(), (8.0, 18.0, 52.0, 42.0));
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(RecognitionProgress::new("done", 1.5).progress, 1.0);
        assert_eq!(RecognitionProgress::new("start", -0.2).progress, 0.0);
    }

    struct FixedRecognizer(&'static str);

    impl TextRecognizer for FixedRecognizer {
        fn recognize(
            &self,
            _image: &DynamicImage,
            progress: &mut dyn FnMut(RecognitionProgress),
        ) -> Result<Recognized, OcrError> {
            progress(RecognitionProgress::new("recognizing text", 0.5));
            progress(RecognitionProgress::new("done", 1.0));
            Ok(Recognized::from_text(self.0))
        }
    }

    #[test]
    fn test_recognizer_reports_progress() {
        let mut events = Vec::new();
        let image = DynamicImage::new_luma8(4, 4);
        let recognized = FixedRecognizer("Jane Roe")
            .recognize(&image, &mut |p| events.push(p.progress))
            .unwrap();
        assert_eq!(recognized.text, "Jane Roe");
        assert_eq!(events, vec![0.5, 1.0]);
    }

    #[test]
    fn test_load_image_errors() {
        use crate::error::CardscanError;

        let dir = tempfile::tempdir().unwrap();
        let missing = load_image(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(missing, CardscanError::Io(_)));

        let path = dir.path().join("card.png");
        std::fs::write(&path, "not an image").unwrap();
        let garbage = load_image(&path).unwrap_err();
        assert!(matches!(garbage, CardscanError::Image(_)));
    }
}
