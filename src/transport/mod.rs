//! Transport abstraction for delivering encoded frames
//!
//! Separates I/O concerns from encoding:
//! - **Action**: How commands become frames (handled separately)
//! - **Transport**: How frames reach the command station
//!
//! A transport does NOT handle:
//! - Frame encoding (that's the action's job)
//! - Reply parsing, sessions or reconnection
//!
//! # Adding a new transport
//!
//! 1. Create `transport/my_transport.rs`
//! 2. Implement the `Transport` trait
//! 3. Add `pub mod my_transport;` here

pub mod udp;

pub use udp::UdpTransport;

use crate::action::Frame;
use crate::error::Result;

/// Sink for finalized frames
///
/// Frames are sent verbatim; no further transformation is applied.
pub trait Transport {
    /// Deliver one frame, returning the number of bytes written
    fn send(&self, frame: &Frame) -> Result<usize>;
}
