use crate::types::Dimensions;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Leading word of the signature; the size probe checks only this much.
const SIGNATURE_WORD: u32 = 0x8950_4E47;

/// Signature (8) + IHDR length/tag (8) + width and height fields (8).
const MIN_PROBE_SIZE: usize = 24;

/// Reads the IHDR width and height fields at their fixed offsets.
///
/// Trusts that IHDR immediately follows the signature, as every well-formed
/// PNG lays it out. Chunk CRCs are not checked, and a file that does not
/// lead with IHDR (no conforming encoder emits one) reads whatever sits at
/// those offsets.
#[must_use]
pub fn dimensions(data: &[u8]) -> Option<Dimensions> {
    if data.len() < MIN_PROBE_SIZE {
        return None;
    }

    let word = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    if word != SIGNATURE_WORD {
        return None;
    }

    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);

    Some(Dimensions::new(width, height))
}
