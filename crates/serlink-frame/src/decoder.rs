//! The decode loop: ingest, synchronize, validate, acknowledge.

use tracing::{debug, trace};

use serlink_transport::Transport;

use crate::codec::FrameConfig;
use crate::ring::RingBuffer;

/// Where the decoder stands between calls to [`FrameDecoder::poll`].
///
/// Transitions:
/// ```text
/// Empty ──fill──▶ Filling ──validate ok──▶ Ready
///   ▲                │ ▲                     │ next poll
///   │   buffer drained │                     ▼
///   └────────────────┘ └──────────── PendingDiscard
///                        (consumed marker popped, then resume filling)
/// ```
/// `Ready` persists from a successful `poll` until the next one, which is
/// the whole window the field accessors are live for. The consumed frame is
/// only discarded at the top of that next call (`PendingDiscard`), so a
/// caller that polls and then reads sees a stable payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    /// No bytes buffered, nothing decoded.
    Empty,
    /// Bytes buffered, no validated frame.
    Filling,
    /// The resident frame passed its checksum; accessors are live.
    Ready,
    /// The previously decoded frame is being dropped from the buffer.
    PendingDiscard,
}

/// Resynchronizing decoder for fixed-length marker/payload/checksum frames.
///
/// Owns its transport handle and a ring buffer sized for exactly one frame.
/// Drive it by calling [`poll`](Self::poll) from a loop; between a `poll`
/// that returns `true` and the next one, the payload is readable through
/// [`byte_at`](Self::byte_at), [`u16_at`](Self::u16_at), and
/// [`uint_at`](Self::uint_at).
///
/// Nothing on the decode path fails loudly. Garbage on the line, corrupt
/// frames, and reads outside a valid frame all collapse into "`poll`
/// returned `false`" or "accessor read 0".
pub struct FrameDecoder<T> {
    transport: T,
    config: FrameConfig,
    ring: RingBuffer,
    state: DecodeState,
}

impl<T: Transport> FrameDecoder<T> {
    /// Create a decoder for frames carrying `payload_len` bytes, with the
    /// default markers.
    pub fn new(transport: T, payload_len: usize) -> Self {
        Self::with_config(transport, FrameConfig::new(payload_len))
    }

    /// Create a decoder with explicit frame configuration.
    ///
    /// The ring buffer is allocated here, once, and never resized.
    pub fn with_config(transport: T, config: FrameConfig) -> Self {
        Self {
            transport,
            ring: RingBuffer::with_capacity(config.buffer_capacity()),
            config,
            state: DecodeState::Empty,
        }
    }

    /// Ingest available transport bytes and try to decode one frame.
    ///
    /// Returns `true` when a frame passed validation this call; the
    /// two-byte ack has then already been written to the transport. On
    /// `false`, buffered bytes and cursors persist untouched for the next
    /// call — absence of data is not an error.
    ///
    /// A checksum mismatch drops the false marker and retries against the
    /// remaining buffered and available bytes within the same call. The
    /// retry is iterative with an explicit budget (every iteration consumes
    /// at least one buffered byte), so sustained line noise costs bounded
    /// work per call and no call depth.
    pub fn poll(&mut self) -> bool {
        if self.state == DecodeState::Ready {
            self.state = DecodeState::PendingDiscard;
        }
        if self.state == DecodeState::PendingDiscard {
            // The previous frame's marker still occupies the head slot.
            self.ring.pop();
            self.state = DecodeState::Filling;
        }

        let mut budget = self.ring.len() + self.transport.available();
        loop {
            self.sync_to_marker();

            while self.transport.available() > 0 && !self.ring.is_full() {
                self.ring.push(self.transport.read());
                // Re-align after every byte so a marker is at the head the
                // instant one appears.
                self.sync_to_marker();
            }

            if !self.ring.is_full() {
                break;
            }

            // Resident candidate: offsets 0, 1..=N, N+1 from the head are
            // marker, payload, checksum.
            let n = self.config.payload_len;
            let mut checksum = 0u8;
            for offset in 1..=n {
                checksum ^= self.ring.peek(offset);
            }

            if checksum == self.ring.peek(n + 1) {
                self.transport.write(self.config.ack_marker);
                self.transport.write(checksum);
                trace!(checksum, "frame decoded, ack written");
                self.state = DecodeState::Ready;
                return true;
            }

            debug!(
                received = self.ring.peek(n + 1),
                computed = checksum,
                "checksum mismatch, dropping false marker"
            );
            self.ring.pop();

            budget = budget.saturating_sub(1);
            if budget == 0 {
                break;
            }
        }

        self.state = if self.ring.is_empty() {
            DecodeState::Empty
        } else {
            DecodeState::Filling
        };
        false
    }

    /// Drop head bytes until the head is a marker or the ring is empty.
    fn sync_to_marker(&mut self) {
        let mut dropped = 0usize;
        while !self.ring.is_empty() && self.ring.peek(0) != self.config.marker {
            self.ring.pop();
            dropped += 1;
        }
        if dropped > 0 {
            trace!(dropped, "discarded bytes ahead of marker");
        }
    }

    /// Payload byte at 0-based offset `i`, or 0 outside a valid frame.
    pub fn byte_at(&self, i: usize) -> u8 {
        if self.state != DecodeState::Ready {
            return 0;
        }
        // Offset 0 in the ring is the marker.
        self.ring.peek(i + 1)
    }

    /// 16-bit value composed from payload offsets `high` and `low` as
    /// `(byte_high << 8) | byte_low`.
    ///
    /// Reads 0 outside a valid frame.
    pub fn u16_at(&self, high: usize, low: usize) -> u16 {
        if self.state != DecodeState::Ready {
            return 0;
        }
        (u16::from(self.byte_at(high)) << 8) | u16::from(self.byte_at(low))
    }

    /// Integer spanning payload offsets `first..=last` inclusive, the byte
    /// at `first` most significant regardless of direction.
    ///
    /// `first < last` walks offsets upward, `first > last` downward, and
    /// `first == last` reads a single byte. Each step shifts the
    /// accumulator left by 8 and ors the next byte in; spans wider than
    /// four bytes wrap through the 32-bit accumulator. Reads 0 outside a
    /// valid frame.
    pub fn uint_at(&self, first: usize, last: usize) -> u32 {
        if self.state != DecodeState::Ready {
            return 0;
        }
        let mut acc = 0u32;
        if first <= last {
            for offset in first..=last {
                acc = acc.wrapping_shl(8) | u32::from(self.byte_at(offset));
            }
        } else {
            for offset in (last..=first).rev() {
                acc = acc.wrapping_shl(8) | u32::from(self.byte_at(offset));
            }
        }
        acc
    }

    /// Current decode state.
    pub fn state(&self) -> DecodeState {
        self.state
    }

    /// True while the accessors read the last decoded payload.
    pub fn is_ready(&self) -> bool {
        self.state == DecodeState::Ready
    }

    /// Number of bytes currently buffered (never exceeds `frame_len`).
    pub fn buffered(&self) -> usize {
        self.ring.len()
    }

    /// Frame configuration in effect.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Borrow the transport.
    pub fn get_ref(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the decoder and return the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }
}
