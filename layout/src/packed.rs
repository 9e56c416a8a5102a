//! Packed bit fields of the logical screen and image descriptors.

/// Number of entries in a color table with the given size exponent.
///
/// Only the low three bits of `exponent` are significant, so the result is
/// always a power of two between 2 and 256.
#[must_use]
pub const fn color_table_entries(exponent: u8) -> usize {
    2usize << (exponent & 0x07)
}

/// Byte length of a color table holding `entries` RGB triples.
#[must_use]
pub const fn color_table_byte_len(entries: usize) -> usize {
    3 * entries
}

/// Packed byte of the logical screen descriptor (offset 10 of a GIF buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenFlags(u8);

impl ScreenFlags {
    /// A global color table follows the screen descriptor.
    pub const COLOR_TABLE: u8 = 1 << 7;

    /// Color resolution bits.
    pub const RESOLUTION_MASK: u8 = 0b0111_0000;

    /// The global color table is sorted by importance.
    pub const SORTED: u8 = 1 << 3;

    /// Size exponent bits.
    pub const SIZE_MASK: u8 = 0b0000_0111;

    /// Creates flags from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw packed byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns `true` if a global color table is present.
    #[must_use]
    pub const fn has_color_table(self) -> bool {
        self.0 & Self::COLOR_TABLE != 0
    }

    /// Returns the 3-bit color resolution field.
    #[must_use]
    pub const fn color_resolution(self) -> u8 {
        (self.0 & Self::RESOLUTION_MASK) >> 4
    }

    /// Returns `true` if the sort flag is set.
    #[must_use]
    pub const fn is_sorted(self) -> bool {
        self.0 & Self::SORTED != 0
    }

    /// Returns the 3-bit table size exponent.
    #[must_use]
    pub const fn size_exponent(self) -> u8 {
        self.0 & Self::SIZE_MASK
    }

    /// Entry count declared by the size exponent, whether or not a table is present.
    #[must_use]
    pub const fn entry_count(self) -> usize {
        color_table_entries(self.size_exponent())
    }

    /// Byte length of the global color table, or 0 if none is present.
    #[must_use]
    pub const fn table_len(self) -> usize {
        if self.has_color_table() {
            color_table_byte_len(self.entry_count())
        } else {
            0
        }
    }
}

/// Packed byte of an image descriptor (last of its 10 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DescriptorFlags(u8);

impl DescriptorFlags {
    /// A local color table follows the image descriptor.
    pub const LOCAL_TABLE: u8 = 1 << 7;

    /// Image rows are interlaced.
    pub const INTERLACED: u8 = 1 << 6;

    /// The local color table is sorted.
    pub const SORTED: u8 = 1 << 5;

    /// Size exponent bits.
    pub const SIZE_MASK: u8 = 0b0000_0111;

    /// Creates flags from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw packed byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns `true` if a local color table is present.
    #[must_use]
    pub const fn has_local_table(self) -> bool {
        self.0 & Self::LOCAL_TABLE != 0
    }

    /// Returns `true` if the image is interlaced.
    #[must_use]
    pub const fn is_interlaced(self) -> bool {
        self.0 & Self::INTERLACED != 0
    }

    /// Returns `true` if the sort flag is set.
    #[must_use]
    pub const fn is_sorted(self) -> bool {
        self.0 & Self::SORTED != 0
    }

    /// Returns the 3-bit table size exponent.
    #[must_use]
    pub const fn size_exponent(self) -> u8 {
        self.0 & Self::SIZE_MASK
    }

    /// Byte length of the local color table, or 0 if none is present.
    #[must_use]
    pub const fn table_len(self) -> usize {
        if self.has_local_table() {
            color_table_byte_len(color_table_entries(self.size_exponent()))
        } else {
            0
        }
    }

    /// Sets the local table flag and replaces the size bits with `exponent`.
    ///
    /// Interlace and sort bits are preserved.
    #[must_use]
    pub const fn with_local_table(self, exponent: u8) -> Self {
        Self(((self.0 | Self::LOCAL_TABLE) & !Self::SIZE_MASK) | (exponent & Self::SIZE_MASK))
    }
}
