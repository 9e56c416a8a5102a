//! RGB triples and borrowed color table views.

use std::fmt;

/// One color table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels in table order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A color table borrowed from a GIF buffer.
///
/// Entries are packed RGB triples. A trailing partial triple, if any, is not
/// part of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable<'a> {
    bytes: &'a [u8],
}

impl<'a> ColorTable<'a> {
    /// Wraps raw table bytes.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        let whole = bytes.len() - bytes.len() % 3;
        Self {
            bytes: &bytes[..whole],
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len() / 3
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the raw table bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        let start = index.checked_mul(3)?;
        let entry = self.bytes.get(start..start.checked_add(3)?)?;
        Some(Rgb::new(entry[0], entry[1], entry[2]))
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + 'a {
        self.bytes
            .chunks_exact(3)
            .map(|entry| Rgb::new(entry[0], entry[1], entry[2]))
    }

    /// Index of the first entry equal to `color`.
    #[must_use]
    pub fn position(&self, color: Rgb) -> Option<usize> {
        self.iter().position(|entry| entry == color)
    }
}
