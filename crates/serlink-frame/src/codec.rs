//! Wire constants, checksum, and the peer-side frame/ack encoders.

use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};

/// Default frame marker: `'s'`.
pub const MARKER: u8 = 0x73;

/// Default acknowledgment marker: `'a'`.
pub const ACK_MARKER: u8 = 0x61;

/// Bytes a frame adds around its payload (marker + checksum).
pub const FRAME_OVERHEAD: usize = 2;

/// Acknowledgment size: ack marker + echoed checksum.
pub const ACK_LEN: usize = 2;

/// XOR of all payload bytes.
pub fn xor_checksum(payload: &[u8]) -> u8 {
    payload.iter().fold(0, |acc, byte| acc ^ byte)
}

/// Configuration for one decoder instance.
///
/// The payload length is fixed for the lifetime of the link; both sides
/// must agree on it out of band. Markers default to the wire constants and
/// only need overriding when several sentinel schemes coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Fixed payload length N in bytes.
    pub payload_len: usize,
    /// Start-of-frame sentinel.
    pub marker: u8,
    /// First byte of the acknowledgment.
    pub ack_marker: u8,
}

impl FrameConfig {
    /// Configuration for frames carrying `payload_len` bytes, with the
    /// default markers.
    pub fn new(payload_len: usize) -> Self {
        Self {
            payload_len,
            marker: MARKER,
            ack_marker: ACK_MARKER,
        }
    }

    /// Override both sentinel bytes.
    pub fn with_markers(mut self, marker: u8, ack_marker: u8) -> Self {
        self.marker = marker;
        self.ack_marker = ack_marker;
        self
    }

    /// Total wire size of one frame (marker + payload + checksum).
    pub fn frame_len(&self) -> usize {
        self.payload_len + FRAME_OVERHEAD
    }

    /// Decode ring capacity: frame length plus the one slot the ring keeps
    /// free to tell "full" from "empty".
    pub fn buffer_capacity(&self) -> usize {
        self.frame_len() + 1
    }
}

/// Encode a frame into the wire format.
///
/// The payload must be exactly the configured fixed length; peers have no
/// way to signal any other size on the wire.
pub fn encode_frame(config: &FrameConfig, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() != config.payload_len {
        return Err(FrameError::PayloadLength {
            got: payload.len(),
            want: config.payload_len,
        });
    }
    dst.reserve(config.frame_len());
    dst.put_u8(config.marker);
    dst.put_slice(payload);
    dst.put_u8(xor_checksum(payload));
    Ok(())
}

/// Encode the two-byte acknowledgment for a validated checksum.
pub fn encode_ack(config: &FrameConfig, checksum: u8, dst: &mut BytesMut) {
    dst.reserve(ACK_LEN);
    dst.put_u8(config.ack_marker);
    dst.put_u8(checksum);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_xor_of_payload() {
        assert_eq!(xor_checksum(&[]), 0);
        assert_eq!(xor_checksum(&[0x5A]), 0x5A);
        assert_eq!(xor_checksum(&[1, 2, 3]), 0);
        assert_eq!(xor_checksum(&[0xFF, 0x0F, 0xF0]), 0x00);
        assert_eq!(xor_checksum(&[0x10, 0x20, 0x40]), 0x70);
    }

    #[test]
    fn encode_frame_layout() {
        let config = FrameConfig::new(3);
        let mut wire = BytesMut::new();

        encode_frame(&config, &[1, 2, 3], &mut wire).unwrap();

        assert_eq!(wire.as_ref(), &[MARKER, 1, 2, 3, 0x00]);
        assert_eq!(wire.len(), config.frame_len());
    }

    #[test]
    fn encode_frame_rejects_wrong_length() {
        let config = FrameConfig::new(3);
        let mut wire = BytesMut::new();

        let err = encode_frame(&config, &[1, 2], &mut wire).unwrap_err();
        assert!(matches!(
            err,
            FrameError::PayloadLength { got: 2, want: 3 }
        ));
        assert!(wire.is_empty());
    }

    #[test]
    fn encode_ack_layout() {
        let config = FrameConfig::new(3);
        let mut wire = BytesMut::new();

        encode_ack(&config, 0x42, &mut wire);

        assert_eq!(wire.as_ref(), &[ACK_MARKER, 0x42]);
    }

    #[test]
    fn custom_markers_are_used() {
        let config = FrameConfig::new(1).with_markers(0x7E, 0x06);
        let mut wire = BytesMut::new();

        encode_frame(&config, &[9], &mut wire).unwrap();
        encode_ack(&config, 9, &mut wire);

        assert_eq!(wire.as_ref(), &[0x7E, 9, 9, 0x06, 9]);
    }

    #[test]
    fn buffer_capacity_leaves_one_spare_slot() {
        let config = FrameConfig::new(3);
        assert_eq!(config.frame_len(), 5);
        assert_eq!(config.buffer_capacity(), 6);
    }
}
