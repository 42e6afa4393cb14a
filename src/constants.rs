//! Z21 LAN protocol constants
//!
//! LAN headers, X-bus command bytes and bit masks used on the wire, plus
//! the default command station endpoint.

// =============================================================================
// LAN headers (16-bit family identifiers, sent little-endian)
// =============================================================================

/// LAN_GET_SERIAL_NUMBER
pub const LAN_GET_SERIAL_NUMBER: u16 = 0x0010;

/// LAN_LOGOFF
pub const LAN_LOGOFF: u16 = 0x0030;

/// LAN-X command family (loco, accessory and track commands)
pub const LAN_X: u16 = 0x0040;

/// LAN_SET_BROADCASTFLAGS
pub const LAN_SET_BROADCASTFLAGS: u16 = 0x0050;

// =============================================================================
// LAN-X header bytes
// =============================================================================

/// X-header for loco drive and loco function commands
pub const X_SET_LOCO: u8 = 0xE4;

/// X-header for loco info requests
pub const X_GET_LOCO_INFO: u8 = 0xE3;

/// DB0 of LAN_X_GET_LOCO_INFO
pub const X_LOCO_INFO_DB0: u8 = 0xF0;

/// DB0 of LAN_X_SET_LOCO_FUNCTION
pub const X_LOCO_FUNCTION_DB0: u8 = 0xF8;

/// X-header for version and track power commands
pub const X_GENERAL: u8 = 0x21;

/// DB0 of LAN_X_GET_VERSION
pub const X_VERSION_DB0: u8 = 0x21;

/// DB0 of LAN_X_SET_TRACK_POWER_OFF
pub const X_TRACK_POWER_OFF_DB0: u8 = 0x80;

/// DB0 of LAN_X_SET_TRACK_POWER_ON
pub const X_TRACK_POWER_ON_DB0: u8 = 0x81;

/// X-header of LAN_X_SET_STOP
pub const X_SET_STOP: u8 = 0x80;

// =============================================================================
// Bit layout
// =============================================================================

/// Flag bits OR'ed into the address MSB for long (> 127) addresses
pub const LONG_ADDRESS_FLAG: u8 = 0b1100_0000;

/// Direction bit of the speed byte (1 = forward)
pub const DIRECTION_BIT: u8 = 0b1000_0000;

/// Highest short (7-bit) loco address
pub const MAX_SHORT_ADDRESS: u16 = 127;

/// Highest loco function index (F0..F28)
pub const MAX_FUNCTION_INDEX: u8 = 28;

/// Size of the little-endian length prefix
pub const LEN_PREFIX_SIZE: usize = 2;

// =============================================================================
// Network
// =============================================================================

/// Default command station address
pub const DEFAULT_STATION_HOST: &str = "192.168.0.111";

/// UDP port the command station listens on
pub const DEFAULT_STATION_PORT: u16 = 21105;

/// Send timeout for a single datagram (milliseconds)
pub const SEND_TIMEOUT_MS: u64 = 500;
