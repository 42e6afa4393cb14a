//! Z21 LAN command encoder
//!
//! Turns typed control intents into the exact byte frames a Z21-style
//! command station expects:
//!
//! ```
//! use z21_lan::action::{Action, SetLocoDrive};
//!
//! // Loco 3, speed 50, 128 speed steps, forward
//! let frame = SetLocoDrive::new(3, 50, 3, true)?.encode()?;
//! assert_eq!(
//!     frame.as_bytes(),
//!     &[0x0A, 0x00, 0x40, 0x00, 0xE4, 0x13, 0x00, 0x03, 0xB2, 0xA2]
//! );
//! # Ok::<(), z21_lan::error::Z21Error>(())
//! ```

pub mod action;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod transport;

pub use action::{Action, Command, Frame, FrameBuilder};
pub use error::{Result, Z21Error};
