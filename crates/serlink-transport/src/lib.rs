//! Byte-oriented transport abstraction for serlink.
//!
//! The decoder never talks to a serial port, socket, or pipe directly — it
//! consumes the [`Transport`] trait declared here. This keeps the core
//! testable (see [`MemoryTransport`]) and allows any number of independent
//! decoder instances, each owning its own transport handle, with no
//! process-wide state.
//!
//! This is the lowest layer of serlink. Everything else builds on top of
//! the [`Transport`] trait provided here.

pub mod config;
pub mod error;
pub mod mem;
pub mod stream;
pub mod traits;

pub use config::LinkConfig;
pub use error::{Result, TransportError};
pub use mem::MemoryTransport;
pub use stream::StreamTransport;
pub use traits::Transport;
