//! Animated GIF assembly for gifweave.
//!
//! This crate merges independently rendered static GIF images into one
//! animated GIF89a stream. Each source frame's compressed image data is reused
//! verbatim; only the surrounding blocks are rewritten:
//!
//! - Validation rejects buffers that are not static single-image GIFs.
//! - The header is taken from the first frame, whose color table becomes the
//!   global table, plus an optional loop extension.
//! - Each frame gets a new graphic control extension (delay, disposal,
//!   transparency) and, when its palette differs from the global one, a local
//!   color table.
//!
//! # Design Principles
//!
//! - **No recompression** - Pixel data is copied, never decoded.
//! - **All or nothing** - Any invalid frame aborts the encode before output escapes.
//! - **Deterministic** - Same inputs produce byte-identical outputs.

mod animation;
mod config;
mod encode;
mod error;
mod frame;
mod header;
mod limits;
mod stream;

pub use animation::encode_animation;
pub use config::{AnimationConfig, DelayOverflow};
pub use encode::{encode_frame, FrameRole, FrameSummary, TableDecision};
pub use error::{EncodeError, EncodeResult, LimitKind};
pub use frame::{validate_frames, SourceFrame};
pub use header::encode_header;
pub use layout::{DisposalMethod, Rgb};
pub use limits::EncodeLimits;
pub use stream::{EncodedAnimation, StreamAssembler};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = AnimationConfig::default();
        let _ = EncodeLimits::default();
        let _ = StreamAssembler::new(0);
        let _ = FrameRole::First;
        let _ = DisposalMethod::default();
        let _ = Rgb::new(0, 0, 0);

        // Error types
        let _: EncodeResult<()> = Ok(());
    }

    #[test]
    fn public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnimationConfig>();
        assert_send_sync::<EncodedAnimation>();
        assert_send_sync::<EncodeError>();
        assert_send_sync::<SourceFrame<'static>>();
        assert_send_sync::<StreamAssembler>();
    }
}
