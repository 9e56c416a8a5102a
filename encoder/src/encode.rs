//! Per-frame encoding: control extension, transparency and color table reuse.

use layout::{ColorTable, GraphicControl, IMAGE_DESCRIPTOR_SIZE};

use crate::config::AnimationConfig;
use crate::frame::SourceFrame;

/// Position of a frame in the animation.
///
/// The first frame's color table is the global table written by the header,
/// so it is never repeated as a local table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameRole {
    First,
    Subsequent,
}

impl FrameRole {
    /// Role of the frame at `index` in submission order.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index == 0 {
            Self::First
        } else {
            Self::Subsequent
        }
    }
}

/// Which palette a frame is drawn with after encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableDecision {
    /// The frame has no table of its own and falls back to the global table.
    Inherited,
    /// The first frame's table, already written as the global table.
    Global,
    /// The frame's table equals the global table and was omitted.
    Reused,
    /// The frame's table was written as a local color table.
    Embedded,
    /// The source image descriptor carries its own local table, copied as is.
    Local,
}

/// What [`encode_frame`] wrote for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    pub index: usize,
    pub role: FrameRole,
    pub control: GraphicControl,
    pub table: TableDecision,
    pub bytes_written: usize,
}

/// Encodes one frame segment into `out`.
///
/// The segment is always control extension, image descriptor, optional local
/// color table, then the frame's remaining bytes (image data) verbatim.
/// Extensions in front of the source image, usually its own control
/// extension, are dropped. `global` is the first frame's color table, if it
/// has one.
pub fn encode_frame(
    frame: &SourceFrame<'_>,
    role: FrameRole,
    delay: u16,
    config: &AnimationConfig,
    global: Option<ColorTable<'_>>,
    out: &mut Vec<u8>,
) -> FrameSummary {
    let mut control = GraphicControl::new(config.disposal, delay);
    if let Some(index) = resolve_transparency(frame, config) {
        control = control.with_transparent_index(index);
    }

    let descriptor = frame.descriptor();
    let flags = frame.descriptor_flags();
    let own = frame.color_table();
    let table = match (role, own) {
        _ if flags.has_local_table() => TableDecision::Local,
        (_, None) => TableDecision::Inherited,
        (FrameRole::First, Some(_)) => TableDecision::Global,
        (FrameRole::Subsequent, Some(own)) => {
            if global.is_some_and(|global| global.as_bytes() == own.as_bytes()) {
                TableDecision::Reused
            } else {
                TableDecision::Embedded
            }
        }
    };

    let start = out.len();
    out.extend_from_slice(&control.encode());
    match (table, own) {
        (TableDecision::Embedded, Some(own)) => {
            let exponent = frame.screen().flags.size_exponent();
            out.extend_from_slice(&descriptor[..IMAGE_DESCRIPTOR_SIZE - 1]);
            out.push(flags.with_local_table(exponent).raw());
            out.extend_from_slice(own.as_bytes());
        }
        _ => out.extend_from_slice(descriptor),
    }
    out.extend_from_slice(frame.after_descriptor());

    FrameSummary {
        index: frame.index(),
        role,
        control,
        table,
        bytes_written: out.len() - start,
    }
}

/// Index of the configured transparent color in the palette the image is
/// drawn with: the descriptor's local table if present, else the frame's own
/// color table.
///
/// Frames without either table never get a transparent index, and a color
/// missing from the palette leaves the frame opaque.
fn resolve_transparency(frame: &SourceFrame<'_>, config: &AnimationConfig) -> Option<u8> {
    let color = config.transparent?;
    let table = frame.active_table()?;
    let index = table.position(color).and_then(|j| u8::try_from(j).ok());
    if index.is_none() {
        tracing::debug!(frame = frame.index(), %color, "transparent color not in palette");
    }
    index
}
