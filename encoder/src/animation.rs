//! The encode pipeline: validate, header, frames, trailer.

use crate::config::AnimationConfig;
use crate::encode::{encode_frame, FrameRole};
use crate::error::{EncodeError, EncodeResult};
use crate::frame::validate_frames;
use crate::header::encode_header;
use crate::limits::EncodeLimits;
use crate::stream::{EncodedAnimation, StreamAssembler};

/// Merges static GIF frames into one animated GIF89a stream.
///
/// `frames` are complete single-image GIF files in display order;
/// `config.delays` must hold one delay per frame. Every frame is validated
/// before any output is produced, and the first error aborts the encode.
pub fn encode_animation<F>(
    frames: &[F],
    config: &AnimationConfig,
    limits: &EncodeLimits,
) -> EncodeResult<EncodedAnimation>
where
    F: AsRef<[u8]>,
{
    if frames.is_empty() {
        return Err(EncodeError::NoFrames);
    }
    if frames.len() != config.delays.len() {
        return Err(EncodeError::DelayCountMismatch {
            frames: frames.len(),
            delays: config.delays.len(),
        });
    }

    let sources = validate_frames(frames, limits)?;
    let delays = config.resolve_delays()?;
    let Some(first) = sources.first() else {
        return Err(EncodeError::NoFrames);
    };
    let global = first.color_table();

    let estimate = sources.iter().map(|frame| frame.bytes().len()).sum::<usize>();
    let mut stream = StreamAssembler::with_capacity(estimate, limits.max_output_bytes);
    let header_len = stream.write_with(|out| Ok(encode_header(first, config.loop_count, out)))?;
    tracing::debug!(
        bytes = header_len,
        global_entries = global.map_or(0, |table| table.len()),
        loop_count = config.loop_count,
        "wrote animation header"
    );

    for (frame, delay) in sources.iter().zip(delays) {
        let role = FrameRole::for_index(frame.index());
        let summary =
            stream.write_with(|out| Ok(encode_frame(frame, role, delay, config, global, out)))?;
        tracing::debug!(
            frame = summary.index,
            delay,
            table = ?summary.table,
            transparent_index = ?summary.control.transparent_index,
            bytes = summary.bytes_written,
            "encoded frame"
        );
    }

    stream.finalize()?;
    tracing::info!(
        frames = sources.len(),
        bytes = stream.len(),
        loop_count = config.loop_count,
        "animation finalized"
    );
    stream.into_animation()
}
