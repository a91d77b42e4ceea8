//! JPEG encoding for export.
//!
//! JPEG has no alpha channel, so the RGBA sheet is flattened over white
//! before encoding — the same paper white the sheet renderer fills with,
//! so a flattened export looks identical to the PNG one.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::EncodeError;

/// Encode RGBA pixel data to JPEG bytes, flattening alpha over white.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Quality Guidelines
///
/// * 90-100: print-ready sheets
/// * 80-90: good general-purpose default
/// * Below 60: visible artifacts
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    // Flatten RGBA over opaque white
    let mut rgb = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for px in pixels.chunks_exact(4) {
        let alpha = px[3] as f32 / 255.0;
        for c in &px[0..3] {
            rgb.push((*c as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8);
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg_basic() {
        let width = 100;
        let height = 100;
        let pixels = vec![128u8; width * height * 4];

        let jpeg_bytes = encode_jpeg(&pixels, width as u32, height as u32, 90).unwrap();

        // SOI marker at the start, EOI at the end
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
        let len = jpeg_bytes.len();
        assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_invalid_dimensions() {
        let pixels = vec![0u8; 100];
        assert!(matches!(
            encode_jpeg(&pixels, 0, 10, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_jpeg(&pixels, 10, 0, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_wrong_buffer_length() {
        let pixels = vec![0u8; 10];
        let result = encode_jpeg(&pixels, 10, 10, 90);
        match result {
            Err(EncodeError::InvalidPixelData { expected, actual }) => {
                assert_eq!(expected, 10 * 10 * 4);
                assert_eq!(actual, 10);
            }
            other => panic!("Expected InvalidPixelData, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_jpeg_quality_clamped() {
        let pixels = vec![200u8; 16 * 16 * 4];
        // 0 and 255 are out of range but must not fail
        assert!(encode_jpeg(&pixels, 16, 16, 0).is_ok());
        assert!(encode_jpeg(&pixels, 16, 16, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        // A noisy gradient compresses differently at different qualities
        let mut pixels = Vec::with_capacity(64 * 64 * 4);
        for y in 0..64u32 {
            for x in 0..64u32 {
                pixels.extend_from_slice(&[
                    (x * 4) as u8,
                    (y * 4) as u8,
                    ((x + y) * 2) as u8,
                    255,
                ]);
            }
        }
        let high = encode_jpeg(&pixels, 64, 64, 95).unwrap();
        let low = encode_jpeg(&pixels, 64, 64, 20).unwrap();
        assert!(high.len() > low.len());
    }

    #[test]
    fn test_transparent_pixels_flatten_to_white() {
        // A fully transparent sheet should encode like a white one
        let transparent = vec![0u8; 8 * 8 * 4];
        let mut white = Vec::with_capacity(8 * 8 * 4);
        for _ in 0..64 {
            white.extend_from_slice(&[255, 255, 255, 255]);
        }
        let a = encode_jpeg(&transparent, 8, 8, 90).unwrap();
        let b = encode_jpeg(&white, 8, 8, 90).unwrap();
        assert_eq!(a, b);
    }
}
