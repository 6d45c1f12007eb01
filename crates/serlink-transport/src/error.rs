/// Errors that can occur in transport adapter operations.
///
/// The [`Transport`](crate::Transport) trait itself is infallible; these
/// errors surface only from adapter maintenance calls such as
/// [`StreamTransport::pump`](crate::StreamTransport::pump) and
/// [`StreamTransport::flush`](crate::StreamTransport::flush).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// An I/O error occurred on the underlying stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying stream reached end-of-file.
    #[error("transport closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, TransportError>;
