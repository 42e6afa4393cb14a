//! Locomotive addressing and speed step types

use crate::constants::MAX_SHORT_ADDRESS;
use crate::error::{Result, Z21Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

/// Validated DCC locomotive address (1..=65535)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocoAddress(u16);

impl LocoAddress {
    /// Validate a raw address
    ///
    /// Rejects anything below 1. Values that do not fit a zero-extended
    /// 16-bit field cannot be encoded at all.
    pub fn new(address: i32) -> Result<Self> {
        if address < 1 {
            return Err(Z21Error::InvalidAddress { address });
        }
        u16::try_from(address)
            .map(Self)
            .map_err(|_| Z21Error::AddressOverflow { address })
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Long (extended) DCC address
    pub fn is_long(self) -> bool {
        self.0 > MAX_SHORT_ADDRESS
    }
}

impl fmt::Display for LocoAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Speed step mode configured on the decoder
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum SpeedSteps {
    #[serde(rename = "14")]
    #[value(name = "14")]
    Steps14,
    #[serde(rename = "28")]
    #[value(name = "28")]
    Steps28,
    #[default]
    #[serde(rename = "128")]
    #[value(name = "128")]
    Steps128,
}

impl SpeedSteps {
    /// Map the action-family step ID (0, 2, 3)
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Self::Steps14),
            2 => Ok(Self::Steps28),
            3 => Ok(Self::Steps128),
            _ => {
                error!("Unknown speed step ID {}", id);
                Err(Z21Error::UnsupportedStepMode { id })
            }
        }
    }

    /// Action-family step ID
    pub fn id(self) -> u8 {
        match self {
            Self::Steps14 => 0,
            Self::Steps28 => 2,
            Self::Steps128 => 3,
        }
    }

    /// Wire marker byte following the X-header
    pub fn marker(self) -> u8 {
        match self {
            Self::Steps14 => 0x10,
            Self::Steps28 => 0x12,
            Self::Steps128 => 0x13,
        }
    }

    /// Number of speed steps
    pub fn count(self) -> u8 {
        match self {
            Self::Steps14 => 14,
            Self::Steps28 => 28,
            Self::Steps128 => 128,
        }
    }
}
