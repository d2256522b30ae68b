//! QR code scanning: the decoder seam and the scan flow state machine.

#[cfg(feature = "native")]
mod rqrr_decoder;

#[cfg(feature = "native")]
pub use rqrr_decoder::RqrrDecoder;

use tracing::debug;

use crate::error::ScanError;
use crate::extract::extract_phone_from_payload;

/// Trait for QR decoders.
pub trait BarcodeDecoder {
    /// Decode the first QR code found in an 8-bit luma pixel buffer.
    ///
    /// `pixels` holds `width * height` bytes in row-major order. Returns
    /// `None` when no code is found.
    fn decode(&self, pixels: &[u8], width: u32, height: u32) -> Option<String>;
}

/// States of the QR scan flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    ImageSelected,
    Decoding,
    /// A code was decoded; holds the raw payload.
    Decoded(String),
    DecodeFailed,
    PhoneFound(String),
    PhoneNotFound,
}

impl ScanState {
    fn label(&self) -> &'static str {
        match self {
            ScanState::Idle => "idle",
            ScanState::ImageSelected => "image selected",
            ScanState::Decoding => "decoding",
            ScanState::Decoded(_) => "decoded",
            ScanState::DecodeFailed => "decode failed",
            ScanState::PhoneFound(_) => "phone found",
            ScanState::PhoneNotFound => "phone not found",
        }
    }

    /// Whether the flow has reached an end state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScanState::DecodeFailed | ScanState::PhoneFound(_) | ScanState::PhoneNotFound
        )
    }
}

/// Drives one QR scan: select an image, decode it, interpret the payload.
///
/// Selecting a new image is accepted from any state except `Decoding` and
/// starts over.
#[derive(Debug, Default)]
pub struct QrScan {
    state: ScanState,
    payload: Option<String>,
}

impl QrScan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Raw payload of the last decoded code, kept after interpretation.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    fn invalid(&self, event: &'static str) -> ScanError {
        ScanError::InvalidTransition {
            state: self.state.label(),
            event,
        }
    }

    fn transition(&mut self, next: ScanState) {
        debug!("QR scan: {} -> {}", self.state.label(), next.label());
        self.state = next;
    }

    /// An image was chosen.
    pub fn select_image(&mut self) -> Result<(), ScanError> {
        if self.state == ScanState::Decoding {
            return Err(self.invalid("select an image"));
        }
        self.payload = None;
        self.transition(ScanState::ImageSelected);
        Ok(())
    }

    /// Decoding of the selected image started.
    pub fn start_decoding(&mut self) -> Result<(), ScanError> {
        if self.state != ScanState::ImageSelected {
            return Err(self.invalid("start decoding"));
        }
        self.transition(ScanState::Decoding);
        Ok(())
    }

    /// The decoder finished, with or without a payload.
    pub fn finish_decoding(&mut self, payload: Option<String>) -> Result<(), ScanError> {
        if self.state != ScanState::Decoding {
            return Err(self.invalid("finish decoding"));
        }
        let next = match payload {
            Some(payload) => {
                self.payload = Some(payload.clone());
                ScanState::Decoded(payload)
            }
            None => ScanState::DecodeFailed,
        };
        self.transition(next);
        Ok(())
    }

    /// Look for a WhatsApp number in the decoded payload.
    pub fn interpret(&mut self) -> Result<Option<String>, ScanError> {
        let ScanState::Decoded(payload) = &self.state else {
            return Err(self.invalid("interpret the payload"));
        };
        let phone = extract_phone_from_payload(payload);
        let next = match &phone {
            Some(number) => ScanState::PhoneFound(number.clone()),
            None => ScanState::PhoneNotFound,
        };
        self.transition(next);
        Ok(phone)
    }

    /// Run the whole flow against a decoder.
    pub fn run(
        &mut self,
        decoder: &dyn BarcodeDecoder,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<&ScanState, ScanError> {
        self.select_image()?;
        self.start_decoding()?;
        self.finish_decoding(decoder.decode(pixels, width, height))?;
        if matches!(self.state, ScanState::Decoded(_)) {
            self.interpret()?;
        }
        Ok(&self.state)
    }
}
