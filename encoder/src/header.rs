//! Stream header: signature, screen descriptor, global table and loop extension.

use layout::{encode_loop_extension, SIGNATURE_89A};

use crate::frame::SourceFrame;

/// Writes the animation header derived from the first frame into `out`.
///
/// The first frame's logical screen descriptor is copied unchanged, followed
/// by its color table when it has one; that table becomes the global table of
/// the animation. The loop extension is written only when `loop_count > 0`.
/// Returns the number of bytes written.
pub fn encode_header(first: &SourceFrame<'_>, loop_count: u16, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    out.extend_from_slice(SIGNATURE_89A);
    out.extend_from_slice(first.screen_bytes());
    if let Some(table) = first.color_table() {
        out.extend_from_slice(table.as_bytes());
    }
    if loop_count > 0 {
        out.extend_from_slice(&encode_loop_extension(loop_count));
    }
    out.len() - start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::EncodeLimits;

    const IMAGE: [u8; 15] = [
        0x2C, 0, 0, 0, 0, 1, 0, 1, 0, 0x00, 0x02, 0x02, 0x44, 0x01, 0x00,
    ];

    fn source(signature: &[u8; 6], packed: u8, table: &[u8]) -> Vec<u8> {
        let mut buf = signature.to_vec();
        buf.extend_from_slice(&[2, 0, 3, 0, packed, 1, 0]);
        buf.extend_from_slice(table);
        buf.extend_from_slice(&IMAGE);
        buf.push(0x3B);
        buf
    }

    fn header_for(buf: &[u8], loop_count: u16) -> Vec<u8> {
        let frame = SourceFrame::parse(0, buf, &EncodeLimits::for_testing()).unwrap();
        let mut out = Vec::new();
        let written = encode_header(&frame, loop_count, &mut out);
        assert_eq!(written, out.len());
        out
    }

    #[test]
    fn copies_screen_and_global_table() {
        let table = [10, 20, 30, 40, 50, 60];
        let buf = source(b"GIF89a", 0x80, &table);
        let out = header_for(&buf, 0);
        assert_eq!(&out[..6], b"GIF89a");
        assert_eq!(&out[6..13], &[2, 0, 3, 0, 0x80, 1, 0]);
        assert_eq!(&out[13..], &table);
    }

    #[test]
    fn rewrites_87a_signature() {
        let buf = source(b"GIF87a", 0x80, &[0; 6]);
        let out = header_for(&buf, 0);
        assert_eq!(&out[..6], b"GIF89a");
    }

    #[test]
    fn loop_extension_only_when_positive() {
        let buf = source(b"GIF89a", 0x80, &[0; 6]);
        assert_eq!(header_for(&buf, 0).len(), 19);

        let out = header_for(&buf, 3);
        assert_eq!(out.len(), 19 + 19);
        assert_eq!(&out[19..], &encode_loop_extension(3));
    }

    #[test]
    fn screen_descriptor_kept_without_global_table() {
        let buf = source(b"GIF89a", 0x00, &[]);
        let out = header_for(&buf, 1);
        assert_eq!(&out[6..13], &[2, 0, 3, 0, 0x00, 1, 0]);
        assert_eq!(out.len(), 13 + 19);
    }

    #[test]
    fn appends_to_existing_buffer() {
        let buf = source(b"GIF89a", 0x80, &[0; 6]);
        let frame = SourceFrame::parse(0, &buf, &EncodeLimits::for_testing()).unwrap();
        let mut out = vec![0xAA];
        let written = encode_header(&frame, 0, &mut out);
        assert_eq!(written, 19);
        assert_eq!(out.len(), 20);
    }
}
