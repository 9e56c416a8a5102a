//! Signature, logical screen descriptor and global color table.

use crate::color::ColorTable;
use crate::error::{LayoutError, LayoutResult};
use crate::packed::ScreenFlags;

/// Signature of the original 1987 format revision.
pub const SIGNATURE_87A: &[u8; 6] = b"GIF87a";

/// Signature of the 1989 revision; every stream this workspace writes uses it.
pub const SIGNATURE_89A: &[u8; 6] = b"GIF89a";

/// Signature size in bytes.
pub const SIGNATURE_SIZE: usize = 6;

/// Logical screen descriptor size in bytes.
///
/// width(2) + height(2) + packed(1) + background index(1) + pixel aspect(1)
pub const SCREEN_DESCRIPTOR_SIZE: usize = 2 + 2 + 1 + 1 + 1;

/// Signature plus logical screen descriptor (13 total).
pub const HEADER_SIZE: usize = SIGNATURE_SIZE + SCREEN_DESCRIPTOR_SIZE;

/// Returns `true` if `buf` starts with a recognized signature.
#[must_use]
pub fn is_signature(buf: &[u8]) -> bool {
    buf.get(..SIGNATURE_SIZE)
        .is_some_and(|sig| sig == SIGNATURE_87A || sig == SIGNATURE_89A)
}

/// The logical screen descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDescriptor {
    pub width: u16,
    pub height: u16,
    pub flags: ScreenFlags,
    pub background_index: u8,
    pub pixel_aspect: u8,
}

impl ScreenDescriptor {
    /// Reads the descriptor from its 7 raw bytes.
    pub fn parse(bytes: &[u8]) -> LayoutResult<Self> {
        let Some(bytes) = bytes.get(..SCREEN_DESCRIPTOR_SIZE) else {
            return Err(LayoutError::truncated(
                SIGNATURE_SIZE,
                SCREEN_DESCRIPTOR_SIZE,
                bytes.len(),
            ));
        };
        Ok(Self {
            width: u16::from_le_bytes([bytes[0], bytes[1]]),
            height: u16::from_le_bytes([bytes[2], bytes[3]]),
            flags: ScreenFlags::from_raw(bytes[4]),
            background_index: bytes[5],
            pixel_aspect: bytes[6],
        })
    }

    /// Encodes the descriptor into its 7 raw bytes.
    #[must_use]
    pub const fn encode(&self) -> [u8; SCREEN_DESCRIPTOR_SIZE] {
        let [w_lo, w_hi] = self.width.to_le_bytes();
        let [h_lo, h_hi] = self.height.to_le_bytes();
        [
            w_lo,
            w_hi,
            h_lo,
            h_hi,
            self.flags.raw(),
            self.background_index,
            self.pixel_aspect,
        ]
    }
}

/// Parsed GIF header: everything before the first block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// The 6-byte signature as found in the buffer.
    pub signature: &'a [u8],
    /// The raw 7-byte logical screen descriptor.
    pub screen_bytes: &'a [u8],
    /// The decoded logical screen descriptor.
    pub screen: ScreenDescriptor,
    /// The global color table, if flagged present.
    pub color_table: Option<ColorTable<'a>>,
    /// Offset of the first byte after the header and color table.
    pub body_offset: usize,
}

/// Parses the signature, screen descriptor and global color table of `buf`.
pub fn parse_header(buf: &[u8]) -> LayoutResult<Header<'_>> {
    if !is_signature(buf) {
        return Err(LayoutError::InvalidSignature {
            found: buf.iter().take(SIGNATURE_SIZE).copied().collect(),
        });
    }
    if buf.len() < HEADER_SIZE {
        return Err(LayoutError::truncated(
            SIGNATURE_SIZE,
            SCREEN_DESCRIPTOR_SIZE,
            buf.len() - SIGNATURE_SIZE,
        ));
    }

    let screen_bytes = &buf[SIGNATURE_SIZE..HEADER_SIZE];
    let screen = ScreenDescriptor::parse(screen_bytes)?;
    let table_len = screen.flags.table_len();
    let body_offset = HEADER_SIZE + table_len;
    if buf.len() < body_offset {
        return Err(LayoutError::truncated(
            HEADER_SIZE,
            table_len,
            buf.len() - HEADER_SIZE,
        ));
    }

    let color_table = screen
        .flags
        .has_color_table()
        .then(|| ColorTable::new(&buf[HEADER_SIZE..body_offset]));

    Ok(Header {
        signature: &buf[..SIGNATURE_SIZE],
        screen_bytes,
        screen,
        color_table,
        body_offset,
    })
}
