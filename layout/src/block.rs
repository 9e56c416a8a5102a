//! Block introducers, labels and fixed sizes.

/// Introduces an extension block (`!`).
pub const EXTENSION_INTRODUCER: u8 = 0x21;

/// Introduces an image descriptor (`,`).
pub const IMAGE_SEPARATOR: u8 = 0x2C;

/// Ends the data stream (`;`).
pub const TRAILER: u8 = 0x3B;

/// Extension label for the graphic control extension.
pub const GRAPHIC_CONTROL_LABEL: u8 = 0xF9;

/// Extension label for application extensions.
pub const APPLICATION_LABEL: u8 = 0xFF;

/// Extension label for comment extensions.
pub const COMMENT_LABEL: u8 = 0xFE;

/// Extension label for plain text extensions.
pub const PLAIN_TEXT_LABEL: u8 = 0x01;

/// Image descriptor size in bytes, separator included.
///
/// separator(1) + left(2) + top(2) + width(2) + height(2) + packed(1)
pub const IMAGE_DESCRIPTOR_SIZE: usize = 1 + 2 + 2 + 2 + 2 + 1;

/// Leading bytes of the application identifier that marks a looping animation.
pub const LOOP_IDENTIFIER: &[u8; 8] = b"NETSCAPE";

/// Full application identifier plus authentication code of the loop extension.
pub const LOOP_APPLICATION_ID: &[u8; 11] = b"NETSCAPE2.0";
