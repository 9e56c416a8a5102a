//! Error types for animation encoding.

use std::fmt;

use layout::LayoutError;

/// Result type for encoder operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that abort an animation encode. No partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// No source frames were supplied.
    #[error("no frames to encode")]
    NoFrames,

    /// The delay list does not have one entry per frame.
    #[error("frame count {frames} does not match delay count {delays}")]
    DelayCountMismatch { frames: usize, delays: usize },

    /// A source buffer does not start with a recognized signature.
    #[error("frame {frame}: not a GIF87a or GIF89a image")]
    InvalidFormat { frame: usize },

    /// A source buffer already carries a loop extension.
    #[error("frame {frame}: source is already animated")]
    AlreadyAnimated { frame: usize },

    /// A source buffer has a broken block layout.
    #[error("frame {frame}: malformed source: {source}")]
    MalformedFrame { frame: usize, source: LayoutError },

    /// The region after the color table starts with neither an extension nor an image.
    #[error("frame {frame}: unexpected block 0x{byte:02X} after color table")]
    UnexpectedBlock { frame: usize, byte: u8 },

    /// A delay does not fit the 16-bit control extension field.
    #[error("frame {frame}: delay {delay} exceeds 65535 centiseconds")]
    DelayOutOfRange { frame: usize, delay: u32 },

    /// Configured limits exceeded.
    #[error("{kind} limit exceeded: {actual} > {limit}")]
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// The trailer was already written.
    #[error("animation stream already finalized")]
    AlreadyFinalized,

    /// The stream was read before its trailer was written.
    #[error("animation stream not finalized")]
    NotFinalized,
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Frames,
    FrameBytes,
    OutputBytes,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Frames => "frame count",
            Self::FrameBytes => "frame bytes",
            Self::OutputBytes => "output bytes",
        };
        write!(f, "{name}")
    }
}
