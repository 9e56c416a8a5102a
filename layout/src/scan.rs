//! Structural walk over the blocks that follow the global color table.
//!
//! Extension and image data are framed as sub-blocks: a length byte followed
//! by that many data bytes, ended by a zero length. The scanner follows those
//! length prefixes, so compressed pixel data that happens to contain an
//! introducer or trailer byte is never mistaken for a block boundary.

use crate::block::{
    EXTENSION_INTRODUCER, IMAGE_DESCRIPTOR_SIZE, IMAGE_SEPARATOR, LOOP_IDENTIFIER, TRAILER,
};
use crate::error::{LayoutError, LayoutResult};
use crate::packed::DescriptorFlags;

/// Kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Extension block with its label byte.
    Extension { label: u8 },
    /// Image descriptor, optional local color table and image data.
    Image,
    /// Stream trailer.
    Trailer,
}

/// A top-level block borrowed from the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    /// Offset of the introducer byte in the scanned buffer.
    pub offset: usize,
    /// The whole block, introducer through terminator.
    pub bytes: &'a [u8],
}

impl<'a> Block<'a> {
    /// Returns `true` for an extension whose application identifier starts
    /// with `NETSCAPE`, the marker of an already-animated stream.
    #[must_use]
    pub fn is_loop_extension(&self) -> bool {
        matches!(self.kind, BlockKind::Extension { .. })
            && self.bytes.get(3..3 + LOOP_IDENTIFIER.len()) == Some(&LOOP_IDENTIFIER[..])
    }

    /// Packed descriptor byte of an image block.
    #[must_use]
    pub fn descriptor_flags(&self) -> Option<DescriptorFlags> {
        match self.kind {
            BlockKind::Image => self
                .bytes
                .get(IMAGE_DESCRIPTOR_SIZE - 1)
                .map(|&raw| DescriptorFlags::from_raw(raw)),
            _ => None,
        }
    }

    /// Image data of an image block: LZW code size byte through terminator.
    #[must_use]
    pub fn image_data(&self) -> Option<&'a [u8]> {
        let flags = self.descriptor_flags()?;
        self.bytes.get(IMAGE_DESCRIPTOR_SIZE + flags.table_len()..)
    }
}

/// Iterator over top-level blocks, ending after the trailer or the first error.
#[derive(Debug, Clone)]
pub struct BlockScanner<'a> {
    buf: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> BlockScanner<'a> {
    /// Starts scanning `buf` at `offset`.
    #[must_use]
    pub const fn new(buf: &'a [u8], offset: usize) -> Self {
        Self {
            buf,
            offset,
            done: false,
        }
    }

    /// Offset of the next block to be read.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for BlockScanner<'a> {
    type Item = LayoutResult<Block<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let offset = self.offset;
        let Some(&byte) = self.buf.get(offset) else {
            self.done = true;
            return Some(Err(LayoutError::MissingTrailer { offset }));
        };

        let result = match byte {
            EXTENSION_INTRODUCER => extension_end(self.buf, offset).map(|end| {
                let label = self.buf[offset + 1];
                (BlockKind::Extension { label }, end)
            }),
            IMAGE_SEPARATOR => image_end(self.buf, offset).map(|end| (BlockKind::Image, end)),
            TRAILER => Ok((BlockKind::Trailer, offset + 1)),
            _ => Err(LayoutError::UnknownBlock { offset, byte }),
        };

        match result {
            Ok((kind, end)) => {
                self.done = kind == BlockKind::Trailer;
                self.offset = end;
                Some(Ok(Block {
                    kind,
                    offset,
                    bytes: &self.buf[offset..end],
                }))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Returns the offset just past the extension block starting at `offset`.
pub fn extension_end(buf: &[u8], offset: usize) -> LayoutResult<usize> {
    let label_offset = offset + 1;
    if buf.len() <= label_offset {
        return Err(LayoutError::truncated(
            label_offset,
            1,
            buf.len().saturating_sub(label_offset),
        ));
    }
    skip_sub_blocks(buf, label_offset + 1)
}

/// Returns the offset just past the image block starting at `offset`.
pub fn image_end(buf: &[u8], offset: usize) -> LayoutResult<usize> {
    let descriptor_end = offset + IMAGE_DESCRIPTOR_SIZE;
    if buf.len() < descriptor_end {
        return Err(LayoutError::truncated(
            offset,
            IMAGE_DESCRIPTOR_SIZE,
            buf.len().saturating_sub(offset),
        ));
    }
    let flags = DescriptorFlags::from_raw(buf[descriptor_end - 1]);
    let code_size_offset = descriptor_end + flags.table_len();
    if buf.len() <= code_size_offset {
        return Err(LayoutError::truncated(
            descriptor_end,
            flags.table_len() + 1,
            buf.len() - descriptor_end,
        ));
    }
    skip_sub_blocks(buf, code_size_offset + 1)
}

fn skip_sub_blocks(buf: &[u8], mut offset: usize) -> LayoutResult<usize> {
    loop {
        let Some(&size) = buf.get(offset) else {
            return Err(LayoutError::truncated(offset, 1, 0));
        };
        offset += 1;
        if size == 0 {
            return Ok(offset);
        }
        let end = offset + usize::from(size);
        if end > buf.len() {
            return Err(LayoutError::truncated(
                offset,
                usize::from(size),
                buf.len() - offset,
            ));
        }
        offset = end;
    }
}
