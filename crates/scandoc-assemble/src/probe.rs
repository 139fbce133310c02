//! Header probing of encoded captures
//!
//! The writer embeds capture bytes untouched, so assembly only ever needs
//! the information a PDF viewer needs to interpret the stream: intrinsic
//! pixel dimensions and the color space. Both come from the JPEG header;
//! no pixel data is decoded.

use std::io::Cursor;

use image::codecs::jpeg::JpegDecoder;
use image::{ColorType, ImageDecoder, ImageFormat, ImageReader};

use crate::types::{AssembleError, Result};

/// PDF color space of an embedded capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRgb,
}

impl ColorSpace {
    /// Name used in the XObject dictionary
    pub fn pdf_name(self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRgb => "DeviceRGB",
        }
    }
}

/// Header information of one encoded capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    pub color_space: ColorSpace,
}

/// Probe the header of an encoded capture.
///
/// Only JPEG is accepted: it is what the capture layer produces, and it is
/// the one photographic encoding PDF embeds without re-encoding (DCTDecode).
/// Anything else fails with [`AssembleError::ImageDecode`].
pub fn probe(id: &str, bytes: &[u8]) -> Result<ImageInfo> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| decode_error(id, format!("unrecognized image data: {}", e)))?;

    match reader.format() {
        Some(ImageFormat::Jpeg) => {}
        Some(other) => {
            return Err(decode_error(
                id,
                format!("unsupported encoding {:?}, expected JPEG", other),
            ));
        }
        None => return Err(decode_error(id, "unrecognized image data".to_string())),
    }

    let decoder = JpegDecoder::new(Cursor::new(bytes))
        .map_err(|e| decode_error(id, format!("corrupt JPEG header: {}", e)))?;

    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        return Err(decode_error(
            id,
            format!("non-positive intrinsic dimensions {}x{}", width, height),
        ));
    }

    let color_space = match decoder.color_type() {
        ColorType::L8 => ColorSpace::DeviceGray,
        ColorType::Rgb8 => ColorSpace::DeviceRgb,
        other => {
            return Err(decode_error(
                id,
                format!("unsupported JPEG color type {:?}", other),
            ));
        }
    };

    Ok(ImageInfo {
        width,
        height,
        color_space,
    })
}

fn decode_error(id: &str, reason: String) -> AssembleError {
    AssembleError::ImageDecode {
        id: id.to_string(),
        reason,
    }
}
