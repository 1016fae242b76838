use crate::jpeg;
use crate::png;
use crate::types::{Dimensions, ImageFormat};

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const RIFF_TAG: &[u8] = b"RIFF";
const WEBP_TAG: &[u8] = b"WEBP";

/// Classifies a buffer by its leading byte signature alone. Total over any
/// input length; short or unrecognized buffers come back `Unknown`.
#[must_use]
pub fn detect_format(data: &[u8]) -> ImageFormat {
    if data.starts_with(JPEG_MAGIC) {
        ImageFormat::Jpeg
    } else if data.starts_with(&png::PNG_SIGNATURE) {
        ImageFormat::Png
    } else if data.len() >= 12 && &data[..4] == RIFF_TAG && &data[8..12] == WEBP_TAG {
        ImageFormat::WebP
    } else {
        ImageFormat::Unknown
    }
}

/// PNG first: the fixed-offset read is cheaper than the JPEG marker walk.
/// Both readers gate on their own signature, so the order is not load-bearing.
#[must_use]
pub fn detect_dimensions(data: &[u8]) -> Option<Dimensions> {
    png::dimensions(data).or_else(|| jpeg::dimensions(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_buffers_are_unknown() {
        assert_eq!(detect_format(&[]), ImageFormat::Unknown);
        assert_eq!(detect_format(&[0xFF]), ImageFormat::Unknown);
        assert_eq!(detect_format(&[0xFF, 0xD8]), ImageFormat::Unknown);
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(detect_format(&data), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        assert_eq!(detect_format(&data), ImageFormat::Png);
    }

    #[test]
    fn test_detect_webp() {
        let mut data = Vec::new();
        data.extend_from_slice(b"RIFF");
        data.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        data.extend_from_slice(b"WEBP");
        data.extend_from_slice(b"VP8 ");
        assert_eq!(detect_format(&data), ImageFormat::WebP);
    }

    #[test]
    fn test_riff_without_webp_tag() {
        let mut data = Vec::new();
        data.extend_from_slice(b"RIFF");
        data.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        data.extend_from_slice(b"WAVE");
        assert_eq!(detect_format(&data), ImageFormat::Unknown);
    }

    #[test]
    fn test_unrecognized_bytes() {
        assert_eq!(detect_format(b"<!DOCTYPE html>"), ImageFormat::Unknown);
    }

    #[test]
    fn test_probe_prefers_png() {
        let mut data = Vec::new();
        data.extend_from_slice(&png::PNG_SIGNATURE);
        data.extend_from_slice(&13u32.to_be_bytes());
        data.extend_from_slice(b"IHDR");
        data.extend_from_slice(&320u32.to_be_bytes());
        data.extend_from_slice(&240u32.to_be_bytes());
        assert_eq!(detect_dimensions(&data), Some(Dimensions::new(320, 240)));
    }

    #[test]
    fn test_probe_falls_through_to_jpeg() {
        let mut data = vec![0xFF, 0xD8];
        data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08, 0x01, 0x00, 0x02, 0x00]);
        data.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
        assert_eq!(detect_dimensions(&data), Some(Dimensions::new(512, 256)));
    }

    #[test]
    fn test_probe_absent_for_garbage() {
        assert_eq!(detect_dimensions(b"not an image at all, sorry"), None);
    }
}
