/// A polled byte source/sink.
///
/// All three operations are non-blocking and infallible by contract:
/// callers only invoke [`read`](Transport::read) when
/// [`available`](Transport::available) reports at least one byte, and
/// [`write`](Transport::write) is assumed to be buffered by the
/// implementation. Failures belong to the implementation's own maintenance
/// surface (see `StreamTransport::pump`), never to this trait.
pub trait Transport {
    /// Number of bytes ready to be read without blocking.
    fn available(&self) -> usize;

    /// Consume and return exactly one byte.
    ///
    /// Only called when `available() > 0`.
    fn read(&mut self) -> u8;

    /// Send one byte.
    fn write(&mut self, byte: u8);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn available(&self) -> usize {
        (**self).available()
    }

    fn read(&mut self) -> u8 {
        (**self).read()
    }

    fn write(&mut self, byte: u8) {
        (**self).write(byte)
    }
}
