//! Fixed-capacity byte ring with head/tail cursors.

/// A circular byte buffer of fixed capacity.
///
/// One slot is intentionally never filled so that "full" and "empty" can be
/// told apart from the cursors alone: a ring created with capacity `C`
/// holds at most `C − 1` live bytes. Storage is allocated once and never
/// resized; every operation is O(1).
///
/// Out-of-range reads and overflow writes are absorbed, not reported:
/// `push` on a full ring drops the byte, `pop` on an empty ring and `peek`
/// past the live region read as 0. Callers that care check the queries
/// first.
#[derive(Debug)]
pub struct RingBuffer {
    buf: Box<[u8]>,
    head: usize,
    tail: usize,
}

impl RingBuffer {
    /// Create a ring with `capacity` total slots (holding `capacity − 1`
    /// live bytes at most).
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity >= 2);
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
        }
    }

    /// Append a byte at the tail. Silently dropped when full.
    pub fn push(&mut self, byte: u8) {
        if self.is_full() {
            return;
        }
        self.buf[self.tail] = byte;
        self.tail = (self.tail + 1) % self.buf.len();
    }

    /// Remove and return the head byte, or 0 when empty.
    pub fn pop(&mut self) -> u8 {
        if self.is_empty() {
            return 0;
        }
        let byte = self.buf[self.head];
        self.head = (self.head + 1) % self.buf.len();
        byte
    }

    /// Read the byte `offset` positions from the head without removing it,
    /// or 0 when `offset` is at or past the live region.
    pub fn peek(&self, offset: usize) -> u8 {
        if offset >= self.len() {
            return 0;
        }
        self.buf[(self.head + offset) % self.buf.len()]
    }

    /// Number of live bytes.
    pub fn len(&self) -> usize {
        (self.tail + self.buf.len() - self.head) % self.buf.len()
    }

    /// True when no live bytes are held.
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// True when the ring holds `capacity − 1` live bytes.
    pub fn is_full(&self) -> bool {
        self.len() == self.buf.len() - 1
    }

    /// Total slot count (one more than the maximum live byte count).
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}
