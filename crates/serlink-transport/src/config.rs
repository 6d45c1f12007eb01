/// Link-level configuration passed through to transport setup.
///
/// Decode logic never consults this; it exists so constructors of concrete
/// transports (serial ports in particular) receive their line parameters
/// from the same place the decoder is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkConfig {
    /// Line speed in baud.
    pub baud_rate: u32,
}

impl LinkConfig {
    /// Default line speed.
    pub const DEFAULT_BAUD_RATE: u32 = 9_600;

    /// Create a configuration with an explicit baud rate.
    pub fn new(baud_rate: u32) -> Self {
        Self { baud_rate }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            baud_rate: Self::DEFAULT_BAUD_RATE,
        }
    }
}
