//! WASM bindings for business-card contact extraction.
//!
//! The browser runs OCR and QR decoding itself and hands the resulting text
//! or payload to these functions.

use wasm_bindgen::prelude::*;

use cardscan_core::extract::BusinessCardParser;
use cardscan_core::models::config::ExtractionConfig;
use cardscan_core::models::contact::ExtractionResult;
use cardscan_core::ocr::{Recognized, TextBox};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js(result: &ExtractionResult) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract contact fields from business-card text.
///
/// Returns an object holding only the fields that were found.
#[wasm_bindgen(js_name = extractFromText)]
pub fn extract_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&cardscan_core::extract_from_text(text))
}

/// Extract a WhatsApp number from a decoded QR payload.
#[wasm_bindgen(js_name = extractPhoneFromPayload)]
pub fn extract_phone_from_payload(payload: &str) -> Option<String> {
    cardscan_core::extract_phone_from_payload(payload)
}

/// Card extractor with custom thresholds and keywords.
#[wasm_bindgen]
pub struct CardExtractor {
    parser: BusinessCardParser,
}

#[wasm_bindgen]
impl CardExtractor {
    /// Create an extractor. `config` may be omitted or hold any subset of the
    /// extraction settings.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CardExtractor, JsValue> {
        let config: ExtractionConfig = if config.is_undefined() || config.is_null() {
            ExtractionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("invalid config: {}", e)))?
        };

        Ok(Self {
            parser: BusinessCardParser::with_config(&config),
        })
    }

    /// Extract contact fields from card text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text))
    }

    /// Extract the WhatsApp number from a QR payload as a sparse object.
    #[wasm_bindgen(js_name = extractPayload)]
    pub fn extract_payload(&self, payload: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse_payload(payload))
    }

    /// Extract contact fields from boxes collected by a browser OCR engine.
    #[wasm_bindgen(js_name = extractRecognized)]
    pub fn extract_recognized(&self, recognized: &RecognizedText) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(&recognized.to_recognized().text))
    }
}

/// Text regions recognized in the browser.
#[wasm_bindgen]
#[derive(Default)]
pub struct RecognizedText {
    boxes: Vec<TextBox>,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl RecognizedText {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            boxes: Vec::new(),
            width,
            height,
        }
    }

    /// Add an axis-aligned text region.
    #[wasm_bindgen(js_name = addBox)]
    pub fn add_box(&mut self, text: &str, x: f32, y: f32, w: f32, h: f32, confidence: f32) {
        self.boxes.push(TextBox {
            bbox: [x, y, x + w, y, x + w, y + h, x, y + h],
            text: text.to_string(),
            confidence,
        });
    }

    /// Full text in reading order.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.to_recognized().text
    }

    fn to_recognized(&self) -> Recognized {
        Recognized::from_boxes(self.boxes.clone(), (self.width, self.height), 0)
    }
}
