use std::fmt;

use serde::Serialize;

use crate::mime::resolve_mime;
use crate::sniff::{detect_dimensions, detect_format};
use crate::types::{Dimensions, ImageFormat};

/// A4 portrait at 200 DPI, the default print target.
pub const A4_PORTRAIT_200DPI: Dimensions = Dimensions {
    width: 1654,
    height: 2339,
};

/// What every audited image is expected to be.
#[derive(Debug, Clone, Serialize)]
pub struct ImageContract {
    pub mime: String,
    pub dimensions: Dimensions,
}

impl ImageContract {
    #[must_use]
    pub fn new(mime: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            mime: mime.into(),
            dimensions,
        }
    }

    /// JPEG at A4 portrait, 200 DPI.
    #[must_use]
    pub fn a4_portrait() -> Self {
        Self::new("image/jpeg", A4_PORTRAIT_200DPI)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditIssue {
    MimeMismatch { expected: String, actual: String },
    DimensionMismatch { expected: Dimensions, actual: Dimensions },
    UnreadableDimensions,
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MimeMismatch { expected, actual } => {
                write!(f, "MIME mismatch: expected {expected}, got {actual}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "resolution mismatch: expected {expected}, got {actual}")
            }
            Self::UnreadableDimensions => {
                write!(f, "no recognized header yielded pixel dimensions")
            }
        }
    }
}

/// Verdict for one image payload.
#[derive(Debug, Clone, Serialize)]
pub struct ImageAudit {
    pub format: ImageFormat,
    pub mime: String,
    pub dimensions: Option<Dimensions>,
    pub issues: Vec<AuditIssue>,
    pub matches_contract: bool,
}

/// Sniffs a payload and compares the result against the contract. Pure: the
/// caller supplies the already-downloaded bytes and the declared
/// content-type header, if the transport carried one.
#[must_use]
pub fn audit_bytes(
    data: &[u8],
    declared_mime: Option<&str>,
    contract: &ImageContract,
) -> ImageAudit {
    let format = detect_format(data);
    let mime = resolve_mime(declared_mime, format);
    let dimensions = detect_dimensions(data);

    let mut issues = Vec::new();

    if mime != contract.mime {
        issues.push(AuditIssue::MimeMismatch {
            expected: contract.mime.clone(),
            actual: mime.clone(),
        });
    }

    match dimensions {
        Some(actual) if actual != contract.dimensions => {
            issues.push(AuditIssue::DimensionMismatch {
                expected: contract.dimensions,
                actual,
            });
        }
        Some(_) => {}
        None => issues.push(AuditIssue::UnreadableDimensions),
    }

    let matches_contract = issues.is_empty();

    ImageAudit {
        format,
        mime,
        dimensions,
        issues,
        matches_contract,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contract() {
        let contract = ImageContract::a4_portrait();
        assert_eq!(contract.mime, "image/jpeg");
        assert_eq!(contract.dimensions, Dimensions::new(1654, 2339));
    }

    #[test]
    fn test_unknown_payload_collects_both_issues() {
        let contract = ImageContract::a4_portrait();
        let audit = audit_bytes(b"plainly not an image", None, &contract);

        assert_eq!(audit.format, ImageFormat::Unknown);
        assert!(!audit.matches_contract);
        assert_eq!(audit.issues.len(), 2);
        assert!(audit.issues.contains(&AuditIssue::UnreadableDimensions));
    }

    #[test]
    fn test_issue_display() {
        let issue = AuditIssue::MimeMismatch {
            expected: "image/jpeg".to_string(),
            actual: "image/png".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "MIME mismatch: expected image/jpeg, got image/png"
        );
    }
}
