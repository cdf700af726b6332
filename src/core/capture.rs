//! QR token capture.
//!
//! Manual entry is the only decoding path: a handheld scanner in keyboard
//! mode types the token followed by Enter, an operator can paste or type it.
//! Camera decoding is not available in a terminal.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Camera not available on this station, enter the QR code manually")]
    CameraUnavailable,
}

/// A decoded token, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrToken(String);

impl QrToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Default)]
pub struct QrCapture {
    suspended: bool,
}

impl QrCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand over at most one token per input. Nothing is emitted for blank
    /// input or while the previous token is still being processed; emitting
    /// a token suspends the capture until `resume`.
    pub fn submit(&mut self, raw: &str) -> Option<QrToken> {
        if self.suspended {
            return None;
        }
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        self.suspended = true;
        Some(QrToken(token.to_string()))
    }

    pub fn resume(&mut self) {
        self.suspended = false;
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Camera failures never block manual entry.
    pub fn start_camera(&mut self) -> Result<(), CaptureError> {
        Err(CaptureError::CameraUnavailable)
    }
}
