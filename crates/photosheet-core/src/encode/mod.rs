//! Sheet export encoding.
//!
//! PNG for lossless alpha, JPEG for flattened sheets, and the export
//! fallback: when the requested encode fails, fall back to a PNG of the
//! raster that is already on screen rather than produce nothing.

mod jpeg;
mod png;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

use thiserror::Error;

use crate::decode::Raster;

/// Errors that can occur during sheet encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoding failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// The file formats a sheet can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ExportFormat {
    /// Lossless, preserves alpha. The preferred format.
    Png,
    /// Flattened over white at the given quality (1-100).
    Jpeg { quality: u8 },
}

impl ExportFormat {
    /// File extension for the download name.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg { .. } => "jpg",
        }
    }
}

/// Encode a sheet raster in the requested format.
pub fn export_sheet(sheet: &Raster, format: ExportFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        ExportFormat::Png => encode_png(&sheet.pixels, sheet.width, sheet.height),
        ExportFormat::Jpeg { quality } => {
            encode_jpeg(&sheet.pixels, sheet.width, sheet.height, quality)
        }
    }
}

/// Encode the sheet, falling back to a PNG of the preview raster when the
/// requested encode fails.
///
/// Returns the bytes together with the format they actually carry. Only
/// when both the requested encode and the fallback fail does an error
/// propagate.
pub fn export_with_fallback(
    sheet: &Raster,
    preview: Option<&Raster>,
    format: ExportFormat,
) -> Result<(Vec<u8>, ExportFormat), EncodeError> {
    match export_sheet(sheet, format) {
        Ok(bytes) => Ok((bytes, format)),
        Err(err) => match preview {
            Some(preview) => {
                let bytes = encode_png(&preview.pixels, preview.width, preview.height)?;
                Ok((bytes, ExportFormat::Png))
            }
            None => Err(err),
        },
    }
}
