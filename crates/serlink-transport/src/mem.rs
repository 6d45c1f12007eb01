//! In-memory transport for tests and loopback use.

use std::collections::VecDeque;

use crate::config::LinkConfig;
use crate::traits::Transport;

/// A transport backed by in-process queues.
///
/// Bytes queued with [`feed`](MemoryTransport::feed) become readable through
/// the [`Transport`] side; bytes the decoder writes accumulate and can be
/// inspected with [`sent`](MemoryTransport::sent) or drained with
/// [`take_sent`](MemoryTransport::take_sent).
#[derive(Debug, Default)]
pub struct MemoryTransport {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    config: LinkConfig,
}

impl MemoryTransport {
    /// Create an empty transport with default link configuration.
    pub fn new() -> Self {
        Self::with_config(LinkConfig::default())
    }

    /// Create an empty transport with explicit link configuration.
    ///
    /// The configuration is recorded but otherwise unused — there is no
    /// line to configure.
    pub fn with_config(config: LinkConfig) -> Self {
        Self {
            rx: VecDeque::new(),
            tx: Vec::new(),
            config,
        }
    }

    /// Queue bytes to be read by the consumer.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }

    /// Bytes written by the consumer so far.
    pub fn sent(&self) -> &[u8] {
        &self.tx
    }

    /// Take and clear the bytes written by the consumer.
    pub fn take_sent(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.tx)
    }

    /// Link configuration this transport was created with.
    pub fn config(&self) -> LinkConfig {
        self.config
    }
}

impl Transport for MemoryTransport {
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
