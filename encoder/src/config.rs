//! Animation settings supplied by the caller.

use layout::{DisposalMethod, Rgb};

use crate::error::{EncodeError, EncodeResult};

/// What to do with a delay that does not fit in 16 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum DelayOverflow {
    /// Fail the encode with [`EncodeError::DelayOutOfRange`].
    #[default]
    Reject,
    /// Saturate to 65535 centiseconds.
    Clamp,
}

/// Settings shared by every frame of one animation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AnimationConfig {
    /// Repeat count for the loop extension; 0 omits the extension.
    pub loop_count: u16,
    /// Color to mark transparent in every frame whose palette contains it.
    pub transparent: Option<Rgb>,
    /// Per-frame delays in hundredths of a second, in frame order.
    pub delays: Vec<u32>,
    /// Disposal method written into every control extension.
    pub disposal: DisposalMethod,
    /// Handling of delays above 65535.
    pub delay_overflow: DelayOverflow,
}

impl AnimationConfig {
    /// Creates a config with the given per-frame delays and defaults elsewhere.
    #[must_use]
    pub fn new(delays: Vec<u32>) -> Self {
        Self {
            delays,
            ..Self::default()
        }
    }

    /// Creates a config giving each of `frames` frames the same delay.
    #[must_use]
    pub fn uniform(delay: u32, frames: usize) -> Self {
        Self::new(vec![delay; frames])
    }

    #[must_use]
    pub fn with_loop_count(mut self, loop_count: u16) -> Self {
        self.loop_count = loop_count;
        self
    }

    #[must_use]
    pub fn with_transparent(mut self, color: Rgb) -> Self {
        self.transparent = Some(color);
        self
    }

    #[must_use]
    pub fn with_disposal(mut self, disposal: DisposalMethod) -> Self {
        self.disposal = disposal;
        self
    }

    #[must_use]
    pub fn with_delay_overflow(mut self, policy: DelayOverflow) -> Self {
        self.delay_overflow = policy;
        self
    }

    /// Converts every delay to its 16-bit wire value under the overflow policy.
    pub fn resolve_delays(&self) -> EncodeResult<Vec<u16>> {
        self.delays
            .iter()
            .enumerate()
            .map(|(frame, &delay)| self.resolve_delay(frame, delay))
            .collect()
    }

    fn resolve_delay(&self, frame: usize, delay: u32) -> EncodeResult<u16> {
        match (u16::try_from(delay), self.delay_overflow) {
            (Ok(delay), _) => Ok(delay),
            (Err(_), DelayOverflow::Reject) => Err(EncodeError::DelayOutOfRange { frame, delay }),
            (Err(_), DelayOverflow::Clamp) => {
                tracing::warn!(frame, delay, "delay clamped to 65535 centiseconds");
                Ok(u16::MAX)
            }
        }
    }
}
