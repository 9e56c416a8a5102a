//! Append-only output buffer and the finished animation.

use layout::TRAILER;

use crate::error::{EncodeError, EncodeResult, LimitKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    Building,
    Finalized,
}

/// Accumulates header and frame segments, then seals the stream with a trailer.
#[derive(Debug)]
pub struct StreamAssembler {
    buf: Vec<u8>,
    state: StreamState,
    max_bytes: usize,
}

impl StreamAssembler {
    /// Creates an empty stream that may grow to `max_bytes`.
    #[must_use]
    pub const fn new(max_bytes: usize) -> Self {
        Self {
            buf: Vec::new(),
            state: StreamState::Building,
            max_bytes,
        }
    }

    /// Creates an empty stream with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize, max_bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity.min(max_bytes)),
            state: StreamState::Building,
            max_bytes,
        }
    }

    /// Number of bytes accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` once the trailer has been written.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.state == StreamState::Finalized
    }

    /// Appends raw bytes.
    pub fn append(&mut self, bytes: &[u8]) -> EncodeResult<()> {
        self.write_with(|out| {
            out.extend_from_slice(bytes);
            Ok(())
        })
    }

    /// Lets `write` append to the buffer, then enforces the output limit.
    ///
    /// If `write` fails or the limit is exceeded, the buffer is rolled back to
    /// its previous length.
    pub fn write_with<T, F>(&mut self, write: F) -> EncodeResult<T>
    where
        F: FnOnce(&mut Vec<u8>) -> EncodeResult<T>,
    {
        self.ensure_building()?;
        let start = self.buf.len();
        let value = match write(&mut self.buf) {
            Ok(value) => value,
            Err(err) => {
                self.buf.truncate(start);
                return Err(err);
            }
        };
        if self.buf.len() > self.max_bytes {
            let actual = self.buf.len();
            self.buf.truncate(start);
            return Err(EncodeError::LimitsExceeded {
                kind: LimitKind::OutputBytes,
                limit: self.max_bytes,
                actual,
            });
        }
        Ok(value)
    }

    /// Appends the trailer. Fails if the stream is already finalized.
    pub fn finalize(&mut self) -> EncodeResult<()> {
        self.append(&[TRAILER])?;
        self.state = StreamState::Finalized;
        Ok(())
    }

    /// The finished byte sequence. Fails before [`finalize`](Self::finalize).
    pub fn expose(&self) -> EncodeResult<&[u8]> {
        match self.state {
            StreamState::Finalized => Ok(&self.buf),
            StreamState::Building => Err(EncodeError::NotFinalized),
        }
    }

    /// Consumes the assembler, yielding the finished animation.
    pub fn into_animation(self) -> EncodeResult<EncodedAnimation> {
        match self.state {
            StreamState::Finalized => Ok(EncodedAnimation { bytes: self.buf }),
            StreamState::Building => Err(EncodeError::NotFinalized),
        }
    }

    fn ensure_building(&self) -> EncodeResult<()> {
        match self.state {
            StreamState::Building => Ok(()),
            StreamState::Finalized => Err(EncodeError::AlreadyFinalized),
        }
    }
}

/// A complete animated GIF. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedAnimation {
    bytes: Vec<u8>,
}

impl EncodedAnimation {
    /// The encoded stream.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the encoded stream in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false` for a finalized stream; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the owned byte buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for EncodedAnimation {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<EncodedAnimation> for Vec<u8> {
    fn from(animation: EncodedAnimation) -> Self {
        animation.bytes
    }
}
