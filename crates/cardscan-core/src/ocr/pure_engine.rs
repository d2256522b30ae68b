//! Pure Rust OCR engine wrapper using `pure-onnx-ocr`.

use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use crate::error::OcrError;
use crate::models::config::OcrConfig;

use super::{RecognitionProgress, Recognized, TextBox, TextRecognizer};

/// Longest image side handed to the detector.
const MAX_SIDE: u32 = 2048;

/// OCR engine backed by `pure-onnx-ocr` (pure Rust, no external ONNX Runtime).
pub struct PureOcrEngine {
    engine: pure_onnx_ocr::engine::OcrEngine,
    keep_unk: bool,
}

impl PureOcrEngine {
    /// Create an engine from the model files named in the configuration.
    pub fn from_config(config: &OcrConfig) -> Result<Self, OcrError> {
        let det_path = config.model_path(&config.detection_model);
        let rec_path = config.model_path(&config.recognition_model);
        let dict_path = config.model_path(&config.dictionary);

        for path in [&det_path, &rec_path, &dict_path] {
            if !path.exists() {
                return Err(OcrError::ModelLoad(format!(
                    "model file not found: {}",
                    path.display()
                )));
            }
        }

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(&det_path)
            .rec_model_path(&rec_path)
            .dictionary_path(&dict_path)
            .build()
            .map_err(|e| OcrError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;

        info!("Loaded pure-onnx-ocr engine from {}", config.model_dir.display());

        Ok(Self {
            engine,
            keep_unk: config.keep_unk,
        })
    }

    fn clean_text(&self, text: &str) -> String {
        if self.keep_unk {
            text.to_string()
        } else {
            text.replace("[UNK]", " ").trim().to_string()
        }
    }
}

impl TextRecognizer for PureOcrEngine {
    fn recognize(
        &self,
        image: &DynamicImage,
        progress: &mut dyn FnMut(RecognitionProgress),
    ) -> Result<Recognized, OcrError> {
        let start = Instant::now();
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(OcrError::InvalidImage(format!("{}x{}", width, height)));
        }

        info!("Processing image: {}x{}", width, height);
        progress(RecognitionProgress::new("preparing image", 0.1));

        let scaled;
        let (input, scale) = if width.max(height) > MAX_SIDE {
            scaled = image.resize(MAX_SIDE, MAX_SIDE, image::imageops::FilterType::Triangle);
            let scale = width as f32 / scaled.width() as f32;
            debug!("Downscaled to {}x{}", scaled.width(), scaled.height());
            (&scaled, scale)
        } else {
            (image, 1.0)
        };

        progress(RecognitionProgress::new("recognizing text", 0.3));

        let results = self
            .engine
            .run_from_image(input)
            .map_err(|e| OcrError::Recognition(format!("pure-onnx-ocr: {}", e)))?;

        debug!("pure-onnx-ocr returned {} text regions", results.len());
        progress(RecognitionProgress::new("assembling text", 0.9));

        let boxes: Vec<TextBox> = results
            .iter()
            .map(|r| TextBox {
                bbox: polygon_to_bbox(&r.bounding_box, scale),
                text: self.clean_text(&r.text),
                confidence: r.confidence,
            })
            .filter(|b| !b.text.is_empty())
            .collect();

        let processing_time_ms = start.elapsed().as_millis() as u64;
        let recognized = Recognized::from_boxes(boxes, (width, height), processing_time_ms);

        info!(
            "OCR complete: {} text boxes in {}ms",
            recognized.boxes.len(),
            processing_time_ms
        );
        progress(RecognitionProgress::new("done", 1.0));

        Ok(recognized)
    }
}

/// Convert a `Polygon<f64>` to our `[f32; 8]` bbox format in original
/// image coordinates.
fn polygon_to_bbox(polygon: &pure_onnx_ocr::Polygon<f64>, scale: f32) -> [f32; 8] {
    let mut bbox = [0.0f32; 8];
    for (i, coord) in polygon.exterior().coords().take(4).enumerate() {
        bbox[i * 2] = coord.x as f32 * scale;
        bbox[i * 2 + 1] = coord.y as f32 * scale;
    }
    bbox
}
