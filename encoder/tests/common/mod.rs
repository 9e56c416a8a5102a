#![allow(dead_code)]

use layout::{
    encode_loop_extension, parse_header, parse_loop_count, BlockKind, BlockScanner,
    GraphicControl, GRAPHIC_CONTROL_LABEL, IMAGE_DESCRIPTOR_SIZE,
};

/// Minimal LZW stream for one pixel of index 0: code size 2, clear, 0, end.
pub const IMAGE_DATA: [u8; 5] = [0x02, 0x02, 0x44, 0x01, 0x00];

pub const BLACK: [u8; 3] = [0, 0, 0];
pub const WHITE: [u8; 3] = [255, 255, 255];
pub const MAGENTA: [u8; 3] = [255, 0, 255];
pub const GREEN: [u8; 3] = [0, 128, 0];

const DESCRIPTOR: [u8; IMAGE_DESCRIPTOR_SIZE] = [0x2C, 0, 0, 0, 0, 1, 0, 1, 0, 0x00];
const SOURCE_CONTROL: [u8; 8] = [0x21, 0xF9, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00];

fn exponent_for(entries: usize) -> u8 {
    assert!(entries.is_power_of_two() && (2..=256).contains(&entries));
    u8::try_from(entries.trailing_zeros() - 1).unwrap()
}

fn build(palette: Option<&[[u8; 3]]>, extensions: &[&[u8]]) -> Vec<u8> {
    let packed = palette.map_or(0, |p| 0x80 | exponent_for(p.len()));
    let mut buf = b"GIF89a".to_vec();
    buf.extend_from_slice(&[1, 0, 1, 0, packed, 0, 0]);
    for entry in palette.unwrap_or(&[]) {
        buf.extend_from_slice(entry);
    }
    for ext in extensions {
        buf.extend_from_slice(ext);
    }
    buf.extend_from_slice(&DESCRIPTOR);
    buf.extend_from_slice(&IMAGE_DATA);
    buf.push(0x3B);
    buf
}

/// A 1x1 static GIF whose global table is `palette` (power-of-two length).
pub fn static_frame(palette: &[[u8; 3]]) -> Vec<u8> {
    build(Some(palette), &[])
}

/// Same as [`static_frame`] with a graphic control extension before the image,
/// the shape most rasterizers write.
pub fn static_frame_with_control(palette: &[[u8; 3]]) -> Vec<u8> {
    build(Some(palette), &[&SOURCE_CONTROL])
}

/// A 1x1 static GIF with no color table at all.
pub fn frame_without_table() -> Vec<u8> {
    build(None, &[])
}

/// A 1x1 static GIF with global table `global` whose image descriptor
/// carries its own local table `local`.
pub fn frame_with_local_table(global: &[[u8; 3]], local: &[[u8; 3]]) -> Vec<u8> {
    let mut buf = static_frame(global);
    let tail = buf.split_off(buf.len() - 1 - IMAGE_DATA.len());
    let packed = buf.len() - 1;
    buf[packed] = 0x80 | exponent_for(local.len());
    buf.extend_from_slice(&table_bytes(local));
    buf.extend_from_slice(&tail);
    buf
}

/// A static GIF whose body starts with `byte` right after the color table.
pub fn frame_with_leading_byte(palette: &[[u8; 3]], byte: u8) -> Vec<u8> {
    build(Some(palette), &[&[byte]])
}

/// A GIF that already carries a loop extension.
pub fn animated_frame(palette: &[[u8; 3]]) -> Vec<u8> {
    build(Some(palette), &[&encode_loop_extension(0)])
}

/// Size of a 1x1 frame segment written by the encoder without a local table.
pub const FRAME_SEGMENT_LEN: usize = 8 + IMAGE_DESCRIPTOR_SIZE + IMAGE_DATA.len();

/// One frame as found in an encoded animation.
#[derive(Debug)]
pub struct OutputFrame {
    pub control: GraphicControl,
    pub local_table: Option<Vec<u8>>,
    pub image_data: Vec<u8>,
}

/// Structural view of an encoded animation.
#[derive(Debug)]
pub struct ParsedOutput {
    pub signature: Vec<u8>,
    pub screen: Vec<u8>,
    pub global_table: Option<Vec<u8>>,
    pub loop_count: Option<u16>,
    pub frames: Vec<OutputFrame>,
    /// Offset just past the trailer.
    pub end: usize,
}

/// Walks the output block by block. Panics on anything malformed, including
/// an image block without a control extension in front of it.
pub fn parse_output(bytes: &[u8]) -> ParsedOutput {
    let header = parse_header(bytes).expect("header");
    let mut pending: Option<GraphicControl> = None;
    let mut loop_count = None;
    let mut frames = Vec::new();
    let mut end = None;

    for block in BlockScanner::new(bytes, header.body_offset) {
        let block = block.expect("block");
        match block.kind {
            BlockKind::Extension {
                label: GRAPHIC_CONTROL_LABEL,
            } => {
                assert!(pending.is_none(), "two control extensions in a row");
                pending = Some(GraphicControl::parse(block.bytes).expect("control"));
            }
            BlockKind::Extension { .. } => {
                if let Some(count) = parse_loop_count(block.bytes) {
                    loop_count = Some(count);
                }
            }
            BlockKind::Image => {
                let flags = block.descriptor_flags().expect("descriptor");
                let local_table = flags.has_local_table().then(|| {
                    block.bytes[IMAGE_DESCRIPTOR_SIZE..IMAGE_DESCRIPTOR_SIZE + flags.table_len()]
                        .to_vec()
                });
                frames.push(OutputFrame {
                    control: pending.take().expect("control extension before image"),
                    local_table,
                    image_data: block.image_data().expect("image data").to_vec(),
                });
            }
            BlockKind::Trailer => end = Some(block.offset + 1),
        }
    }

    ParsedOutput {
        signature: header.signature.to_vec(),
        screen: header.screen_bytes.to_vec(),
        global_table: header.color_table.map(|table| table.as_bytes().to_vec()),
        loop_count,
        frames,
        end: end.expect("trailer"),
    }
}

/// Flattens a palette into table bytes.
pub fn table_bytes(palette: &[[u8; 3]]) -> Vec<u8> {
    palette.iter().flatten().copied().collect()
}
