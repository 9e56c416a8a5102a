//! Command-line support for gifweave.
//!
//! - Expand frame arguments (files, directories, glob filters) in display order
//! - Merge a JSON animation config with command-line overrides
//! - Report the block layout of a GIF without decoding pixels
//!
//! # Design Principles
//!
//! - **First-class tooling** - Inspection is how encoder output gets debugged.
//! - **Human-readable output** - Pretty text for terminals, JSON for scripts.

mod inputs;
mod inspect;

pub use inputs::{
    collect_frame_entries, load_config, merge_config, parse_rgb_hex, ConfigOverrides, FrameEntry,
    DEFAULT_DELAY,
};
pub use inspect::{format_report_pretty, inspect_animation, FrameReport, InspectReport};
