//! Adapter exposing any `Read + Write` stream as a polled [`Transport`].
//!
//! The [`Transport`] contract is non-blocking and infallible, so the adapter
//! splits stream I/O out into two maintenance calls the owner drives
//! explicitly: [`pump`](StreamTransport::pump) moves readable bytes into an
//! internal receive queue, and [`flush`](StreamTransport::flush) drains
//! buffered writes. Only those two calls touch the underlying stream.

use std::collections::VecDeque;
use std::io::{ErrorKind, Read, Write};

use tracing::trace;

use crate::config::LinkConfig;
use crate::error::{Result, TransportError};
use crate::traits::Transport;

const READ_CHUNK_SIZE: usize = 256;

/// A [`Transport`] backed by a byte stream.
#[derive(Debug)]
pub struct StreamTransport<S> {
    inner: S,
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    config: LinkConfig,
}

impl<S: Read + Write> StreamTransport<S> {
    /// Wrap a stream with default link configuration.
    pub fn new(inner: S) -> Self {
        Self::with_config(inner, LinkConfig::default())
    }

    /// Wrap a stream with explicit link configuration.
    pub fn with_config(inner: S, config: LinkConfig) -> Self {
        Self {
            inner,
            rx: VecDeque::new(),
            tx: Vec::new(),
            config,
        }
    }

    /// Pull readable bytes from the stream into the receive queue.
    ///
    /// Returns the number of bytes queued. A stream that has nothing to
    /// offer (`WouldBlock`) yields `Ok(0)`; end-of-file is
    /// [`TransportError::Closed`].
    pub fn pump(&mut self) -> Result<usize> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        let read = loop {
            match self.inner.read(&mut chunk) {
                Ok(0) => return Err(TransportError::Closed),
                Ok(n) => break n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => return Ok(0),
                Err(err) => return Err(TransportError::Io(err)),
            }
        };

        trace!(bytes = read, "pumped from stream");
        self.rx.extend(&chunk[..read]);
        Ok(read)
    }

    /// Write all buffered outgoing bytes to the stream and flush it.
    pub fn flush(&mut self) -> Result<()> {
        let mut offset = 0usize;
        while offset < self.tx.len() {
            match self.inner.write(&self.tx[offset..]) {
                Ok(0) => return Err(TransportError::Closed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
        self.tx.clear();

        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
    }

    /// Link configuration this transport was created with.
    pub fn config(&self) -> LinkConfig {
        self.config
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consume the adapter and return the inner stream.
    ///
    /// Queued receive bytes and unflushed writes are dropped.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Read + Write> Transport for StreamTransport<S> {
    fn available(&self) -> usize {
        self.rx.len()
    }

    fn read(&mut self) -> u8 {
        self.rx.pop_front().unwrap_or(0)
    }

    fn write(&mut self, byte: u8) {
        self.tx.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    struct Duplex<R> {
        reader: R,
        written: Vec<u8>,
        flushed: bool,
    }

    impl<R: Read> Read for Duplex<R> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.reader.read(buf)
        }
    }

    impl<R> Write for Duplex<R> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed = true;
            Ok(())
        }
    }

    fn duplex(rx: &[u8]) -> Duplex<Cursor<Vec<u8>>> {
        Duplex {
            reader: Cursor::new(rx.to_vec()),
            written: Vec::new(),
            flushed: false,
        }
    }

    #[test]
    fn pump_queues_readable_bytes() {
        let mut t = StreamTransport::new(duplex(&[1, 2, 3]));

        assert_eq!(t.pump().unwrap(), 3);
        assert_eq!(t.available(), 3);
        assert_eq!(t.read(), 1);
        assert_eq!(t.read(), 2);
        assert_eq!(t.read(), 3);
    }

    #[test]
    fn pump_at_eof_reports_closed() {
        let mut t = StreamTransport::new(duplex(&[]));
        assert!(matches!(t.pump(), Err(TransportError::Closed)));
    }

    #[test]
    fn flush_drains_buffered_writes() {
        let mut t = StreamTransport::new(duplex(&[]));
        t.write(0x61);
        t.write(0x00);

        t.flush().unwrap();

        let inner = t.into_inner();
        assert_eq!(inner.written, vec![0x61, 0x00]);
        assert!(inner.flushed);
    }

    struct WouldBlockStream;

    impl Read for WouldBlockStream {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::WouldBlock))
        }
    }

    impl Write for WouldBlockStream {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn pump_treats_would_block_as_no_data() {
        let mut t = StreamTransport::new(WouldBlockStream);
        assert_eq!(t.pump().unwrap(), 0);
        assert_eq!(t.available(), 0);
    }

    struct InterruptedOnce {
        interrupted: bool,
        data: Cursor<Vec<u8>>,
    }

    impl Read for InterruptedOnce {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    impl Write for InterruptedOnce {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn pump_retries_interrupted_reads() {
        let stream = InterruptedOnce {
            interrupted: false,
            data: Cursor::new(vec![0x73]),
        };
        let mut t = StreamTransport::new(stream);

        assert_eq!(t.pump().unwrap(), 1);
        assert_eq!(t.read(), 0x73);
    }

    #[test]
    fn io_errors_propagate() {
        struct BrokenStream;

        impl Read for BrokenStream {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(ErrorKind::BrokenPipe))
            }
        }

        impl Write for BrokenStream {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut t = StreamTransport::new(BrokenStream);
        assert!(matches!(t.pump(), Err(TransportError::Io(_))));

        t.write(0xFF);
        assert!(matches!(t.flush(), Err(TransportError::Io(_))));
    }
}
