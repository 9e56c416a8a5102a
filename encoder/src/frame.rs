//! Source frame ingestion and validation.

use std::ops::Range;

use layout::{
    is_signature, parse_header, BlockKind, BlockScanner, ColorTable, DescriptorFlags, LayoutError,
    ScreenDescriptor, HEADER_SIZE, IMAGE_DESCRIPTOR_SIZE, SIGNATURE_SIZE,
};

use crate::error::{EncodeError, EncodeResult, LimitKind};
use crate::limits::EncodeLimits;

/// A validated static GIF, borrowed from the caller's buffer.
///
/// Offsets are computed once at validation; the buffer is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFrame<'a> {
    index: usize,
    bytes: &'a [u8],
    screen: ScreenDescriptor,
    table: Range<usize>,
    body: Range<usize>,
    image: usize,
}

impl<'a> SourceFrame<'a> {
    /// Validates one buffer as a static frame at position `index`.
    ///
    /// The blocks after the color table are walked up to the trailer: a
    /// `NETSCAPE` application extension rejects the buffer as already
    /// animated, and exactly one image block must be present. A first block
    /// that is neither an extension nor an image fails with
    /// [`EncodeError::UnexpectedBlock`].
    pub fn parse(index: usize, bytes: &'a [u8], limits: &EncodeLimits) -> EncodeResult<Self> {
        if bytes.len() > limits.max_frame_bytes {
            return Err(EncodeError::LimitsExceeded {
                kind: LimitKind::FrameBytes,
                limit: limits.max_frame_bytes,
                actual: bytes.len(),
            });
        }
        if !is_signature(bytes) {
            return Err(EncodeError::InvalidFormat { frame: index });
        }

        let malformed = |source| EncodeError::MalformedFrame {
            frame: index,
            source,
        };
        let header = parse_header(bytes).map_err(malformed)?;

        let mut images = 0usize;
        let mut image = None;
        let mut trailer = None;
        for block in BlockScanner::new(bytes, header.body_offset) {
            let block = block.map_err(|err| match err {
                LayoutError::UnknownBlock { offset, byte } if offset == header.body_offset => {
                    EncodeError::UnexpectedBlock { frame: index, byte }
                }
                err => malformed(err),
            })?;
            match block.kind {
                BlockKind::Extension { .. } if block.is_loop_extension() => {
                    return Err(EncodeError::AlreadyAnimated { frame: index });
                }
                BlockKind::Extension { .. } => {}
                BlockKind::Image => {
                    images += 1;
                    image = Some(block.offset);
                }
                BlockKind::Trailer => trailer = Some(block.offset),
            }
        }
        // The scanner only ends cleanly after yielding the trailer.
        let Some(trailer) = trailer else {
            return Err(malformed(LayoutError::MissingTrailer {
                offset: bytes.len(),
            }));
        };
        let image = match (images, image) {
            (1, Some(offset)) => offset,
            (0, _) | (_, None) => return Err(malformed(LayoutError::MissingImage)),
            (count, _) => return Err(malformed(LayoutError::MultipleImages { count })),
        };

        tracing::debug!(
            frame = index,
            bytes = bytes.len(),
            width = header.screen.width,
            height = header.screen.height,
            table_entries = header.color_table.map_or(0, |table| table.len()),
            "validated source frame"
        );

        Ok(Self {
            index,
            bytes,
            screen: header.screen,
            table: HEADER_SIZE..header.body_offset,
            body: header.body_offset..trailer,
            image,
        })
    }

    /// Position of the frame in the submitted sequence.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The whole source buffer.
    #[must_use]
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The 6-byte signature (`GIF87a` or `GIF89a`).
    #[must_use]
    pub fn signature(&self) -> &'a [u8] {
        &self.bytes[..SIGNATURE_SIZE]
    }

    /// The decoded logical screen descriptor.
    #[must_use]
    pub const fn screen(&self) -> &ScreenDescriptor {
        &self.screen
    }

    /// The raw 7-byte logical screen descriptor.
    #[must_use]
    pub fn screen_bytes(&self) -> &'a [u8] {
        &self.bytes[SIGNATURE_SIZE..HEADER_SIZE]
    }

    /// Returns `true` if the frame carries its own color table.
    #[must_use]
    pub const fn has_color_table(&self) -> bool {
        self.screen.flags.has_color_table()
    }

    /// The frame's own color table, if present.
    #[must_use]
    pub fn color_table(&self) -> Option<ColorTable<'a>> {
        self.has_color_table()
            .then(|| ColorTable::new(&self.bytes[self.table.clone()]))
    }

    /// Everything after the color table up to, but excluding, the trailer.
    #[must_use]
    pub fn body(&self) -> &'a [u8] {
        &self.bytes[self.body.clone()]
    }

    /// The 10-byte image descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &'a [u8] {
        &self.bytes[self.image..self.image + IMAGE_DESCRIPTOR_SIZE]
    }

    /// Packed byte of the image descriptor.
    #[must_use]
    pub fn descriptor_flags(&self) -> DescriptorFlags {
        DescriptorFlags::from_raw(self.bytes[self.image + IMAGE_DESCRIPTOR_SIZE - 1])
    }

    /// The local color table following the image descriptor, if flagged.
    #[must_use]
    pub fn local_table(&self) -> Option<ColorTable<'a>> {
        let flags = self.descriptor_flags();
        let start = self.image + IMAGE_DESCRIPTOR_SIZE;
        flags
            .has_local_table()
            .then(|| ColorTable::new(&self.bytes[start..start + flags.table_len()]))
    }

    /// The palette the image is drawn with: its local table, else the
    /// frame's own color table.
    #[must_use]
    pub fn active_table(&self) -> Option<ColorTable<'a>> {
        self.local_table().or_else(|| self.color_table())
    }

    /// Everything after the image descriptor up to, but excluding, the
    /// trailer: local table, image data and any later extensions.
    #[must_use]
    pub fn after_descriptor(&self) -> &'a [u8] {
        &self.bytes[self.image + IMAGE_DESCRIPTOR_SIZE..self.body.end]
    }
}

/// Validates every buffer in order, failing on the first bad frame.
pub fn validate_frames<'a, F>(
    frames: &'a [F],
    limits: &EncodeLimits,
) -> EncodeResult<Vec<SourceFrame<'a>>>
where
    F: AsRef<[u8]>,
{
    if frames.len() > limits.max_frames {
        return Err(EncodeError::LimitsExceeded {
            kind: LimitKind::Frames,
            limit: limits.max_frames,
            actual: frames.len(),
        });
    }
    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| SourceFrame::parse(index, frame.as_ref(), limits))
        .collect()
}
