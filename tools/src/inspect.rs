//! Structural inspection of a GIF stream. Pixels are never decoded.

use std::fmt;

use layout::{
    color_table_entries, parse_header, parse_loop_count, Block, BlockKind, BlockScanner,
    DisposalMethod, GraphicControl, LayoutError, LayoutResult, GRAPHIC_CONTROL_LABEL,
};
use serde::Serialize;

/// Block-level summary of a GIF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub signature: String,
    pub width: u16,
    pub height: u16,
    pub global_table_entries: Option<usize>,
    pub background_index: u8,
    /// Repeat count from the loop extension, if present.
    pub loop_count: Option<u16>,
    /// Extensions other than control and loop extensions.
    pub other_extensions: usize,
    pub frames: Vec<FrameReport>,
    pub total_bytes: usize,
}

/// One image block and the control extension in front of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameReport {
    pub index: usize,
    pub offset: usize,
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    pub delay: Option<u16>,
    pub disposal: Option<DisposalMethod>,
    pub transparent_index: Option<u8>,
    pub local_table_entries: Option<usize>,
    pub interlaced: bool,
    /// Length of the image data, code size byte through terminator.
    pub data_len: usize,
}

/// Walks the block layout of `bytes` and summarizes it.
pub fn inspect_animation(bytes: &[u8]) -> LayoutResult<InspectReport> {
    let header = parse_header(bytes)?;
    let mut report = InspectReport {
        signature: String::from_utf8_lossy(header.signature).into_owned(),
        width: header.screen.width,
        height: header.screen.height,
        global_table_entries: header.color_table.map(|table| table.len()),
        background_index: header.screen.background_index,
        loop_count: None,
        other_extensions: 0,
        frames: Vec::new(),
        total_bytes: bytes.len(),
    };

    let mut pending: Option<GraphicControl> = None;
    for block in BlockScanner::new(bytes, header.body_offset) {
        let block = block?;
        match block.kind {
            BlockKind::Extension {
                label: GRAPHIC_CONTROL_LABEL,
            } => {
                let control = GraphicControl::parse(block.bytes).ok_or(
                    LayoutError::MalformedGraphicControl {
                        offset: block.offset,
                    },
                )?;
                pending = Some(control);
            }
            BlockKind::Extension { .. } => match parse_loop_count(block.bytes) {
                Some(count) => report.loop_count = Some(count),
                None => report.other_extensions += 1,
            },
            BlockKind::Image => {
                let frame = frame_report(report.frames.len(), &block, pending.take());
                report.frames.push(frame);
            }
            BlockKind::Trailer => {}
        }
    }
    Ok(report)
}

fn frame_report(index: usize, block: &Block<'_>, control: Option<GraphicControl>) -> FrameReport {
    let bytes = block.bytes;
    let field = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);
    let flags = block.descriptor_flags();
    FrameReport {
        index,
        offset: block.offset,
        left: field(1),
        top: field(3),
        width: field(5),
        height: field(7),
        delay: control.map(|control| control.delay),
        disposal: control.map(|control| control.disposal),
        transparent_index: control.and_then(|control| control.transparent_index),
        local_table_entries: flags
            .filter(|flags| flags.has_local_table())
            .map(|flags| color_table_entries(flags.size_exponent())),
        interlaced: flags.is_some_and(|flags| flags.is_interlaced()),
        data_len: block.image_data().map_or(0, <[u8]>::len),
    }
}

/// Renders a report for terminal output.
pub fn format_report_pretty(report: &InspectReport) -> String {
    report.to_string()
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}x{} ({} bytes)",
            self.signature, self.width, self.height, self.total_bytes
        )?;
        match self.global_table_entries {
            Some(entries) => writeln!(f, "global table: {entries} entries")?,
            None => writeln!(f, "global table: none")?,
        }
        match self.loop_count {
            Some(0) => writeln!(f, "loop: forever")?,
            Some(count) => writeln!(f, "loop: {count}")?,
            None => writeln!(f, "loop: none")?,
        }
        if self.other_extensions > 0 {
            writeln!(f, "other extensions: {}", self.other_extensions)?;
        }
        writeln!(f, "frames: {}", self.frames.len())?;
        for frame in &self.frames {
            writeln!(f, "  {frame}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} @{}: {}x{}+{}+{} delay ",
            self.index, self.offset, self.width, self.height, self.left, self.top
        )?;
        match self.delay {
            Some(delay) => write!(f, "{delay}cs")?,
            None => f.write_str("-")?,
        }
        f.write_str(" disposal ")?;
        match self.disposal {
            Some(disposal) => write!(f, "{disposal:?}")?,
            None => f.write_str("-")?,
        }
        f.write_str(" transparent ")?;
        match self.transparent_index {
            Some(index) => write!(f, "{index}")?,
            None => f.write_str("-")?,
        }
        match self.local_table_entries {
            Some(entries) => write!(f, " table local {entries}")?,
            None => f.write_str(" table global")?,
        }
        if self.interlaced {
            f.write_str(" interlaced")?;
        }
        write!(f, " data {} bytes", self.data_len)
    }
}
