//! Error types for layout parsing.

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors raised while reading the block layout of a GIF buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LayoutError {
    /// The first six bytes are not a recognized signature.
    #[error("invalid signature: {found:02X?}")]
    InvalidSignature { found: Vec<u8> },

    /// A field or sub-block runs past the end of the buffer.
    #[error("truncated at offset {offset}: need {needed} bytes, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A byte where a block should start is not an introducer, separator or trailer.
    #[error("unknown block introducer 0x{byte:02X} at offset {offset}")]
    UnknownBlock { offset: usize, byte: u8 },

    /// The buffer ended without a trailer byte.
    #[error("missing trailer: buffer ended at offset {offset}")]
    MissingTrailer { offset: usize },

    /// The buffer holds no image block.
    #[error("no image block before trailer")]
    MissingImage,

    /// The buffer holds more than one image block.
    #[error("expected a single image block, found {count}")]
    MultipleImages { count: usize },

    /// A graphic control extension has an unexpected shape.
    #[error("malformed graphic control extension at offset {offset}")]
    MalformedGraphicControl { offset: usize },
}

impl LayoutError {
    pub(crate) const fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Self::Truncated {
            offset,
            needed,
            available,
        }
    }
}
