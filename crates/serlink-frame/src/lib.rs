//! Resynchronizing frame decoder for a fixed-format byte-stream protocol.
//!
//! Every frame on the wire is:
//! ```text
//! ┌────────────┬──────────────┬──────────────┐
//! │ Marker (1B)│ Payload (NB) │ Checksum (1B)│
//! │ 0x73 's'   │ N fixed      │ XOR of       │
//! │            │ at setup     │ payload      │
//! └────────────┴──────────────┴──────────────┘
//! ```
//! and every successfully decoded frame is answered with a two-byte ack
//! (`0x61 'a'`, checksum). The decoder tolerates an unreliable line: garbage
//! bytes are discarded until a marker reaches the front of its ring buffer,
//! and a frame that fails its checksum is skipped byte-by-byte until the
//! stream realigns.
//!
//! No partial reads, no buffer management in user code: the caller owns a
//! polling loop and calls [`FrameDecoder::poll`] once per iteration.
//! Decoded payload bytes stay readable through the field accessors until the
//! next `poll` call.

pub mod codec;
pub mod decoder;
pub mod error;
pub mod ring;

pub use codec::{encode_ack, encode_frame, xor_checksum, FrameConfig, ACK_LEN, ACK_MARKER, MARKER};
pub use decoder::{DecodeState, FrameDecoder};
pub use error::{FrameError, Result};
pub use ring::RingBuffer;
