//! Centralized error types for the encoder and its CLI
//!
//! All errors are represented by the `Z21Error` enum.
//! Use `Result<T>` as shorthand for `std::result::Result<T, Z21Error>`.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// All encoder and CLI errors
#[derive(Debug)]
pub enum Z21Error {
    // === Encoding ===
    /// Locomotive address below 1
    InvalidAddress { address: i32 },
    /// Locomotive address wider than the 16-bit address field
    AddressOverflow { address: i32 },
    /// Speed step ID other than 0, 2 or 3
    UnsupportedStepMode { id: u8 },
    /// Loco function index outside 0..=28
    InvalidFunction { index: u8 },
    /// Frame builder used out of order (finalize twice, finalize before payload...)
    ProtocolInvariantViolation { reason: &'static str },

    // === Config ===
    /// Config file could not be read
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid config value
    ConfigValidation { field: &'static str, reason: String },

    // === Network ===
    /// Failed to create or bind the outgoing UDP socket
    UdpBind { source: std::io::Error },
    /// Failed to send a datagram to the command station
    UdpSend {
        addr: SocketAddr,
        source: std::io::Error,
    },

    // === Runtime ===
    /// Tokio runtime creation failed
    Runtime { source: std::io::Error },
}

impl std::error::Error for Z21Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigRead { source, .. }
            | Self::UdpBind { source }
            | Self::UdpSend { source, .. }
            | Self::Runtime { source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Z21Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress { address } => {
                write!(f, "Loco address out of range: {}", address)
            }
            Self::AddressOverflow { address } => {
                write!(f, "Loco address does not fit 16 bits: {}", address)
            }
            Self::UnsupportedStepMode { id } => {
                write!(f, "Unsupported speed step ID: {} (expected 0, 2 or 3)", id)
            }
            Self::InvalidFunction { index } => {
                write!(f, "Loco function index out of range: {} (max 28)", index)
            }
            Self::ProtocolInvariantViolation { reason } => {
                write!(f, "Frame invariant violated: {}", reason)
            }
            Self::ConfigRead { path, .. } => write!(f, "Cannot read config: {}", path.display()),
            Self::ConfigValidation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            Self::UdpBind { .. } => write!(f, "Cannot create UDP socket"),
            Self::UdpSend { addr, .. } => write!(f, "Cannot send to command station {}", addr),
            Self::Runtime { .. } => write!(f, "Failed to create runtime"),
        }
    }
}

/// Alias for Result with Z21Error
pub type Result<T> = std::result::Result<T, Z21Error>;
