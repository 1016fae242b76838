use crate::types::ImageFormat;

/// Resolves the MIME type for a payload: transport metadata wins whenever it
/// claims *some* image type, with any `;` parameters stripped; anything else
/// falls back to the sniffed format's canonical string.
///
/// A server declaring `image/png` over JPEG bytes wins here. Catching that
/// lie is the auditor's comparison, not this function's.
#[must_use]
pub fn resolve_mime(declared: Option<&str>, sniffed: ImageFormat) -> String {
    if let Some(declared) = declared {
        if declared.starts_with("image/") {
            let base = declared.split(';').next().unwrap_or(declared);
            return base.trim().to_string();
        }
    }

    sniffed.mime().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_image_type_wins() {
        assert_eq!(
            resolve_mime(Some("image/png; charset=binary"), ImageFormat::Jpeg),
            "image/png"
        );
        assert_eq!(resolve_mime(Some("image/webp"), ImageFormat::Png), "image/webp");
    }

    #[test]
    fn test_absent_header_uses_sniffed() {
        assert_eq!(resolve_mime(None, ImageFormat::Jpeg), "image/jpeg");
        assert_eq!(resolve_mime(None, ImageFormat::Unknown), "application/octet-stream");
    }

    #[test]
    fn test_non_image_header_is_ignored() {
        assert_eq!(resolve_mime(Some("text/html"), ImageFormat::Png), "image/png");
        assert_eq!(
            resolve_mime(Some("application/json"), ImageFormat::Unknown),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_parameters_are_stripped() {
        assert_eq!(
            resolve_mime(Some("image/jpeg;q=0.9;foo=bar"), ImageFormat::Unknown),
            "image/jpeg"
        );
    }
}
