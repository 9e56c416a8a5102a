//! Frame discovery and configuration merging for `assemble`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use encoder::{AnimationConfig, DelayOverflow, DisposalMethod, Rgb};
use glob::Pattern;

/// Delay given to every frame when neither flags nor config name one.
pub const DEFAULT_DELAY: u32 = 10;

/// A frame file and its size on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameEntry {
    pub path: PathBuf,
    pub size: u64,
}

/// Expands `inputs` into frame files, in order.
///
/// Files are taken as given. A directory contributes its regular files,
/// filtered by `glob` (matched against the path or the file name) and sorted
/// by path.
pub fn collect_frame_entries(inputs: &[PathBuf], glob: Option<&str>) -> Result<Vec<FrameEntry>> {
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    let mut entries = Vec::new();
    for input in inputs {
        if input.is_dir() {
            entries.extend(collect_dir(input, pattern.as_ref())?);
        } else {
            let size = fs::metadata(input)
                .with_context(|| format!("stat frame {}", input.display()))?
                .len();
            entries.push(FrameEntry {
                path: input.clone(),
                size,
            });
        }
    }
    Ok(entries)
}

fn collect_dir(dir: &Path, pattern: Option<&Pattern>) -> Result<Vec<FrameEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(FrameEntry { path, size });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

/// Parses `RRGGBB`, with or without a leading `#`.
pub fn parse_rgb_hex(value: &str) -> Result<Rgb, String> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("expected RRGGBB hex color, got `{value}`"));
    }
    let channel = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16).map_err(|err| format!("{value}: {err}"))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Reads an [`AnimationConfig`] JSON document.
pub fn load_config(path: &Path) -> Result<AnimationConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&contents).context("parse config json")
}

/// Settings given on the command line; each one present replaces the
/// corresponding config value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub delays: Vec<u32>,
    pub loop_count: Option<u16>,
    pub transparent: Option<Rgb>,
    pub disposal: Option<DisposalMethod>,
    pub clamp_delays: bool,
}

/// Applies `overrides` to `base` and fills in one delay per frame.
///
/// A single delay, from flags or config, is repeated for every frame. With no
/// delay anywhere each frame gets [`DEFAULT_DELAY`].
pub fn merge_config(
    mut base: AnimationConfig,
    overrides: &ConfigOverrides,
    frames: usize,
) -> Result<AnimationConfig> {
    if !overrides.delays.is_empty() {
        base.delays.clone_from(&overrides.delays);
    }
    base.delays = match base.delays.as_slice() {
        [] => vec![DEFAULT_DELAY; frames],
        [delay] => vec![*delay; frames],
        delays if delays.len() == frames => delays.to_vec(),
        delays => bail!("{} delays given for {frames} frames", delays.len()),
    };

    if let Some(loop_count) = overrides.loop_count {
        base.loop_count = loop_count;
    }
    if let Some(color) = overrides.transparent {
        base.transparent = Some(color);
    }
    if let Some(disposal) = overrides.disposal {
        base.disposal = disposal;
    }
    if overrides.clamp_delays {
        base.delay_overflow = DelayOverflow::Clamp;
    }
    Ok(base)
}
