//! Byte-level GIF layout for gifweave.
//!
//! This crate knows the binary layout of the GIF container: the signature and
//! logical screen descriptor, packed color-table fields, graphic control and
//! application extensions, and the block/sub-block framing used between the
//! color table and the trailer. It does not know how frames are merged into an
//! animation; that lives in the `encoder` crate.
//!
//! # Design Principles
//!
//! - **Borrowed views** - Parsing hands out slices into the caller's buffer; pixel
//!   data is never copied or decompressed.
//! - **Bounded scanning** - Every length prefix is checked against the buffer
//!   before it is followed.
//! - **No domain knowledge** - This crate handles framing, not animation policy.

mod block;
mod color;
mod error;
mod extension;
mod header;
mod packed;
mod scan;

pub use block::{
    APPLICATION_LABEL, COMMENT_LABEL, EXTENSION_INTRODUCER, GRAPHIC_CONTROL_LABEL,
    IMAGE_DESCRIPTOR_SIZE, IMAGE_SEPARATOR, LOOP_APPLICATION_ID, LOOP_IDENTIFIER,
    PLAIN_TEXT_LABEL, TRAILER,
};
pub use color::{ColorTable, Rgb};
pub use error::{LayoutError, LayoutResult};
pub use extension::{
    encode_loop_extension, parse_loop_count, DisposalMethod, GraphicControl,
    GRAPHIC_CONTROL_SIZE, LOOP_EXTENSION_SIZE,
};
pub use header::{
    is_signature, parse_header, Header, ScreenDescriptor, HEADER_SIZE, SCREEN_DESCRIPTOR_SIZE,
    SIGNATURE_87A, SIGNATURE_89A, SIGNATURE_SIZE,
};
pub use packed::{color_table_byte_len, color_table_entries, DescriptorFlags, ScreenFlags};
pub use scan::{extension_end, image_end, Block, BlockKind, BlockScanner};
