//! Image decoding pipeline for Photosheet.
//!
//! This module provides functionality for:
//! - Decoding uploaded PNG/JPEG/WebP images to RGBA rasters
//! - EXIF orientation correction for JPEG uploads
//! - Resizing for crop rasterization and catalog thumbnails
//!
//! # Architecture
//!
//! The decoding pipeline is designed to be used from Web Workers via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.
//! The processed (background-removed) image the core receives from the host
//! also passes through here, so every raster entering the layout step is
//! upright RGBA.

mod resize;
mod types;
mod upload;

pub use resize::{resize, resize_to_fit};
pub use types::{DecodeError, FilterType, Orientation, Raster};
pub use upload::{decode_upload, decode_upload_no_orientation, get_orientation};
