//! QR code request and result types

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned with every successful generation
pub const GENERATED_MESSAGE: &str = "QR Code generated successfully.";

/// Requested pixel size is divided by this to get the module scale
pub const MODULE_SCALE_DIVISOR: i64 = 40;

/// Quiet zone around the symbol, in modules
pub const BORDER_MODULES: u32 = 4;

/// Error returned when parsing an enumerated parameter from text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind} '{value}', expected one of: {expected}")]
pub struct ParseParamError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Kind of content being encoded.
///
/// Accepted and echoed in logs, but does not change how content is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    Url,
    Text,
    Contact,
}

impl FromStr for ContentType {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "URL" => Ok(Self::Url),
            "TEXT" => Ok(Self::Text),
            "CONTACT" => Ok(Self::Contact),
            _ => Err(ParseParamError {
                kind: "content type",
                value: s.to_string(),
                expected: "URL, TEXT, CONTACT",
            }),
        }
    }
}

/// Error-correction level, ordered by increasing redundancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CorrectionLevel {
    L,
    M,
    Q,
    H,
}

impl FromStr for CorrectionLevel {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(ParseParamError {
                kind: "correction level",
                value: s.to_string(),
                expected: "L, M, Q, H",
            }),
        }
    }
}

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// Lower-cased format name, used as the file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = ParseParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PNG" => Ok(Self::Png),
            "SVG" => Ok(Self::Svg),
            _ => Err(ParseParamError {
                kind: "format",
                value: s.to_string(),
                expected: "PNG, SVG",
            }),
        }
    }
}

/// Parameters for generating a QR code. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeRequest {
    pub content_type: ContentType,
    pub content: String,
    /// Target size in pixels
    pub size: i64,
    /// Fill color, e.g. `#00008B`
    pub color: String,
    pub correction_level: CorrectionLevel,
    pub format: ImageFormat,
}

/// Description of a generated QR code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQrCode {
    pub success: bool,
    pub message: String,
    #[serde(rename = "qrCodeId")]
    pub qr_code_id: String,
    #[serde(rename = "qrCodeURL")]
    pub qr_code_url: String,
}

impl GeneratedQrCode {
    pub fn success(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            success: true,
            message: GENERATED_MESSAGE.to_string(),
            qr_code_id: id.into(),
            qr_code_url: location.into(),
        }
    }
}
