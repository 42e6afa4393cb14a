//! Frame assembly
//!
//! A `FrameBuilder` accumulates `[family_lo, family_hi, payload...]` and
//! `finalize()` prefixes the little-endian total length. The result is an
//! immutable `Frame` ready to be written to the wire as-is.

use crate::constants::LEN_PREFIX_SIZE;
use crate::error::{Result, Z21Error};
use bytes::Bytes;
use std::fmt;
use std::ops::Deref;
use tracing::error;

/// Offset of the first payload byte in a finalized frame
const PAYLOAD_OFFSET: usize = LEN_PREFIX_SIZE + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildState {
    Empty,
    Begun,
    PayloadAppended,
    Finalized,
}

/// In-progress frame buffer
///
/// Single use: `begin` → payload writes → `finalize`.
#[derive(Debug)]
pub struct FrameBuilder {
    buf: Vec<u8>,
    state: BuildState,
}

impl FrameBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(16),
            state: BuildState::Empty,
        }
    }

    /// Append the 16-bit family identifier (little-endian)
    pub fn begin(&mut self, family: u16) -> Result<()> {
        if self.state != BuildState::Empty {
            return Err(violation("begin called on a non-empty frame"));
        }
        self.buf.extend_from_slice(&family.to_le_bytes());
        self.state = BuildState::Begun;
        Ok(())
    }

    /// Append one payload byte
    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.ensure_writable()?;
        self.buf.push(byte);
        self.state = BuildState::PayloadAppended;
        Ok(())
    }

    /// Append payload bytes
    pub fn extend(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_writable()?;
        self.buf.extend_from_slice(bytes);
        self.state = BuildState::PayloadAppended;
        Ok(())
    }

    /// Mark the payload complete without writing bytes (header-only commands)
    pub fn end_payload(&mut self) -> Result<()> {
        self.ensure_writable()?;
        self.state = BuildState::PayloadAppended;
        Ok(())
    }

    /// Payload written so far (everything after the family identifier)
    pub fn payload(&self) -> &[u8] {
        self.buf.get(2..).unwrap_or(&[])
    }

    /// Prefix the total length and produce the wire frame
    ///
    /// Fails if no payload was appended or the builder was already finalized.
    pub fn finalize(&mut self) -> Result<Frame> {
        match self.state {
            BuildState::PayloadAppended => {}
            BuildState::Finalized => return Err(violation("frame already finalized")),
            BuildState::Empty | BuildState::Begun => {
                return Err(violation("finalize called before payload"))
            }
        }

        let total = self.buf.len() + LEN_PREFIX_SIZE;
        let len = u16::try_from(total).map_err(|_| violation("frame exceeds u16 length"))?;

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&len.to_le_bytes());
        out.append(&mut self.buf);
        self.state = BuildState::Finalized;

        Ok(Frame {
            bytes: Bytes::from(out),
        })
    }

    fn ensure_writable(&self) -> Result<()> {
        match self.state {
            BuildState::Begun | BuildState::PayloadAppended => Ok(()),
            BuildState::Empty => Err(violation("payload written before family header")),
            BuildState::Finalized => Err(violation("payload written after finalize")),
        }
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn violation(reason: &'static str) -> Z21Error {
    error!("Frame builder misuse: {}", reason);
    Z21Error::ProtocolInvariantViolation { reason }
}

/// Finalized, immutable wire frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Bytes,
}

impl Frame {
    /// Raw wire bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Cheap clone of the underlying buffer
    pub fn to_bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length declared in bytes 0-1
    pub fn declared_len(&self) -> u16 {
        u16::from_le_bytes([self.bytes[0], self.bytes[1]])
    }

    /// Family identifier in bytes 2-3
    pub fn family(&self) -> u16 {
        u16::from_le_bytes([self.bytes[2], self.bytes[3]])
    }

    /// Command payload (bytes 4..)
    pub fn payload(&self) -> &[u8] {
        &self.bytes[PAYLOAD_OFFSET..]
    }

    /// Space separated upper-case hex dump, e.g. `0A 00 40 00`
    pub fn to_hex(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Deref for Frame {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_violation(r: Result<Frame>) -> bool {
        matches!(r, Err(Z21Error::ProtocolInvariantViolation { .. }))
    }

    #[test]
    fn test_finalize_prefixes_length() {
        let mut b = FrameBuilder::new();
        b.begin(0x0040).unwrap();
        b.extend(&[0x21, 0x80, 0xA1]).unwrap();
        let frame = b.finalize().unwrap();

        assert_eq!(frame.as_bytes(), &[0x07, 0x00, 0x40, 0x00, 0x21, 0x80, 0xA1]);
        assert_eq!(frame.declared_len() as usize, frame.len());
        assert_eq!(frame.family(), 0x0040);
        assert_eq!(frame.payload(), &[0x21, 0x80, 0xA1]);
    }

    #[test]
    fn test_finalize_twice_fails() {
        let mut b = FrameBuilder::new();
        b.begin(0x0040).unwrap();
        b.push(0x80).unwrap();
        assert!(b.finalize().is_ok());
        assert!(is_violation(b.finalize()));
    }

    #[test]
    fn test_finalize_before_payload_fails() {
        let mut b = FrameBuilder::new();
        assert!(is_violation(b.finalize()));

        b.begin(0x0040).unwrap();
        assert!(is_violation(b.finalize()));
    }

    #[test]
    fn test_header_only_frame() {
        let mut b = FrameBuilder::new();
        b.begin(0x0010).unwrap();
        b.end_payload().unwrap();
        let frame = b.finalize().unwrap();

        assert_eq!(frame.as_bytes(), &[0x04, 0x00, 0x10, 0x00]);
        assert!(frame.payload().is_empty());
    }

    #[test]
    fn test_write_order_enforced() {
        let mut b = FrameBuilder::new();
        assert!(b.push(0x01).is_err());

        b.begin(0x0040).unwrap();
        assert!(b.begin(0x0040).is_err());

        b.push(0x01).unwrap();
        b.finalize().unwrap();
        assert!(b.push(0x02).is_err());
    }

    #[test]
    fn test_builder_payload_view() {
        let mut b = FrameBuilder::new();
        assert!(b.payload().is_empty());
        b.begin(0x0040).unwrap();
        b.extend(&[0xE4, 0x13]).unwrap();
        assert_eq!(b.payload(), &[0xE4, 0x13]);
    }

    #[test]
    fn test_oversized_frame_rejected() {
        let mut b = FrameBuilder::new();
        b.begin(0x0040).unwrap();
        b.extend(&vec![0u8; u16::MAX as usize]).unwrap();
        assert!(is_violation(b.finalize()));
    }

    #[test]
    fn test_hex_display() {
        let mut b = FrameBuilder::new();
        b.begin(0x0040).unwrap();
        b.extend(&[0x80, 0x80]).unwrap();
        let frame = b.finalize().unwrap();

        assert_eq!(frame.to_hex(), "06 00 40 00 80 80");
        assert_eq!(frame.to_string(), frame.to_hex());
    }
}
