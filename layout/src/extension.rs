//! Graphic control and loop (application) extensions.

use crate::block::{
    APPLICATION_LABEL, EXTENSION_INTRODUCER, GRAPHIC_CONTROL_LABEL, LOOP_APPLICATION_ID,
};

/// Graphic control extension size in bytes (introducer through terminator).
pub const GRAPHIC_CONTROL_SIZE: usize = 8;

/// Loop extension size in bytes (introducer through terminator).
pub const LOOP_EXTENSION_SIZE: usize = 19;

const GRAPHIC_CONTROL_BLOCK_SIZE: u8 = 4;
const TRANSPARENCY_FLAG: u8 = 1;
const DISPOSAL_SHIFT: u8 = 2;
const DISPOSAL_MASK: u8 = 0b0001_1100;
const LOOP_SUB_BLOCK_SIZE: u8 = 3;
const LOOP_SUB_BLOCK_ID: u8 = 1;

/// How a renderer treats a frame's pixels before drawing the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[repr(u8)]
pub enum DisposalMethod {
    /// No disposal specified.
    Unspecified = 0,
    /// Leave the frame in place.
    Keep = 1,
    /// Restore the frame area to the background color.
    #[default]
    RestoreBackground = 2,
    /// Restore the frame area to the previous frame.
    RestorePrevious = 3,
}

impl DisposalMethod {
    /// Returns the 3-bit field value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Parses the 3-bit field value. Reserved values (4-7) return `None`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Unspecified),
            1 => Some(Self::Keep),
            2 => Some(Self::RestoreBackground),
            3 => Some(Self::RestorePrevious),
            _ => None,
        }
    }
}

/// A graphic control extension: delay, disposal and transparency for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicControl {
    /// Disposal method for the frame.
    pub disposal: DisposalMethod,
    /// Delay in hundredths of a second.
    pub delay: u16,
    /// Transparent palette index, if transparency is enabled.
    pub transparent_index: Option<u8>,
}

impl GraphicControl {
    /// Creates a control block without transparency.
    #[must_use]
    pub const fn new(disposal: DisposalMethod, delay: u16) -> Self {
        Self {
            disposal,
            delay,
            transparent_index: None,
        }
    }

    /// Returns a copy with transparency enabled at `index`.
    #[must_use]
    pub const fn with_transparent_index(mut self, index: u8) -> Self {
        self.transparent_index = Some(index);
        self
    }

    /// Returns the packed byte: disposal in bits 2-4, transparency in bit 0.
    #[must_use]
    pub const fn packed(&self) -> u8 {
        let transparency = if self.transparent_index.is_some() {
            TRANSPARENCY_FLAG
        } else {
            0
        };
        (self.disposal.bits() << DISPOSAL_SHIFT) | transparency
    }

    /// Encodes the extension into its fixed 8-byte form.
    #[must_use]
    pub const fn encode(&self) -> [u8; GRAPHIC_CONTROL_SIZE] {
        let [delay_lo, delay_hi] = self.delay.to_le_bytes();
        let index = match self.transparent_index {
            Some(index) => index,
            None => 0,
        };
        [
            EXTENSION_INTRODUCER,
            GRAPHIC_CONTROL_LABEL,
            GRAPHIC_CONTROL_BLOCK_SIZE,
            self.packed(),
            delay_lo,
            delay_hi,
            index,
            0,
        ]
    }

    /// Parses an extension block starting at its introducer.
    ///
    /// Returns `None` if the block is not a 4-byte graphic control extension.
    /// Reserved disposal values are read as [`DisposalMethod::Unspecified`].
    #[must_use]
    pub fn parse(block: &[u8]) -> Option<Self> {
        let bytes = block.get(..GRAPHIC_CONTROL_SIZE)?;
        if bytes[0] != EXTENSION_INTRODUCER
            || bytes[1] != GRAPHIC_CONTROL_LABEL
            || bytes[2] != GRAPHIC_CONTROL_BLOCK_SIZE
        {
            return None;
        }
        let packed = bytes[3];
        let disposal = DisposalMethod::from_bits((packed & DISPOSAL_MASK) >> DISPOSAL_SHIFT)
            .unwrap_or(DisposalMethod::Unspecified);
        let delay = u16::from_le_bytes([bytes[4], bytes[5]]);
        let transparent_index = (packed & TRANSPARENCY_FLAG != 0).then_some(bytes[6]);
        Some(Self {
            disposal,
            delay,
            transparent_index,
        })
    }
}

/// Encodes the `NETSCAPE2.0` application extension carrying `loop_count`.
#[must_use]
pub fn encode_loop_extension(loop_count: u16) -> [u8; LOOP_EXTENSION_SIZE] {
    let mut out = [0u8; LOOP_EXTENSION_SIZE];
    out[0] = EXTENSION_INTRODUCER;
    out[1] = APPLICATION_LABEL;
    out[2] = 11;
    out[3..14].copy_from_slice(LOOP_APPLICATION_ID);
    out[14] = LOOP_SUB_BLOCK_SIZE;
    out[15] = LOOP_SUB_BLOCK_ID;
    out[16..18].copy_from_slice(&loop_count.to_le_bytes());
    out
}

/// Reads the loop count from an application extension block.
///
/// Returns `None` unless the block is a well-formed `NETSCAPE2.0` loop extension.
#[must_use]
pub fn parse_loop_count(block: &[u8]) -> Option<u16> {
    let bytes = block.get(..LOOP_EXTENSION_SIZE)?;
    let is_loop = bytes[0] == EXTENSION_INTRODUCER
        && bytes[1] == APPLICATION_LABEL
        && bytes[2] == 11
        && &bytes[3..14] == LOOP_APPLICATION_ID
        && bytes[14] == LOOP_SUB_BLOCK_SIZE
        && bytes[15] == LOOP_SUB_BLOCK_ID;
    is_loop.then(|| u16::from_le_bytes([bytes[16], bytes[17]]))
}
