//! Limits for bounded encoding.

/// Bounds enforced while validating frames and assembling the output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeLimits {
    /// Maximum number of source frames.
    pub max_frames: usize,
    /// Maximum size of one source frame in bytes.
    pub max_frame_bytes: usize,
    /// Maximum size of the assembled animation in bytes.
    pub max_output_bytes: usize,
}

impl Default for EncodeLimits {
    fn default() -> Self {
        Self {
            max_frames: 512,
            max_frame_bytes: 16 * 1024 * 1024,
            max_output_bytes: 256 * 1024 * 1024,
        }
    }
}

impl EncodeLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_frames: 16,
            max_frame_bytes: 4096,
            max_output_bytes: 64 * 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_frames: usize::MAX,
            max_frame_bytes: usize::MAX,
            max_output_bytes: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_reasonable() {
        let limits = EncodeLimits::default();
        assert!(limits.max_frames >= 60);
        assert!(limits.max_frame_bytes >= 1024 * 1024);
        assert!(limits.max_output_bytes >= limits.max_frame_bytes);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = EncodeLimits::for_testing();
        let default_limits = EncodeLimits::default();
        assert!(test_limits.max_frames < default_limits.max_frames);
        assert!(test_limits.max_frame_bytes < default_limits.max_frame_bytes);
        assert!(test_limits.max_output_bytes < default_limits.max_output_bytes);
    }

    #[test]
    fn unlimited_limits() {
        let limits = EncodeLimits::unlimited();
        assert_eq!(limits.max_frames, usize::MAX);
        assert_eq!(limits.max_output_bytes, usize::MAX);
    }

    #[test]
    fn limits_const_constructible() {
        const LIMITS: EncodeLimits = EncodeLimits::for_testing();
        assert_eq!(LIMITS.max_frames, 16);
    }
}
