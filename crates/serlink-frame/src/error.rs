/// Errors that can occur when encoding frames.
///
/// The decode path deliberately has no error type: a caller polling an
/// unreliable line learns about garbage and corrupt frames only through
/// `poll` returning `false`, and accessors read 0 outside a valid frame.
/// Encoding is the peer-side concern where misuse is reportable.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload does not match the configured fixed length.
    #[error("payload length mismatch ({got} bytes, frame carries {want})")]
    PayloadLength { got: usize, want: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
