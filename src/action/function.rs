//! LAN_X_SET_LOCO_FUNCTION
//!
//! Payload: `[0xE4, 0xF8, adr_msb, adr_lsb, TTNNNNNN, xor]` where `TT` is
//! the switch type and `NNNNNN` the function index.

use super::bits::{address_bytes, xor_checksum};
use super::frame::FrameBuilder;
use super::loco::LocoAddress;
use super::Action;
use crate::constants::{LAN_X, MAX_FUNCTION_INDEX, X_LOCO_FUNCTION_DB0, X_SET_LOCO};
use crate::error::{Result, Z21Error};

/// How a loco function is switched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FunctionSwitch {
    Off,
    #[default]
    On,
    Toggle,
}

impl FunctionSwitch {
    /// `TT` bits, already shifted into place
    fn bits(self) -> u8 {
        match self {
            Self::Off => 0b0000_0000,
            Self::On => 0b0100_0000,
            Self::Toggle => 0b1000_0000,
        }
    }
}

/// Switch a decoder function (F0..F28)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetLocoFunction {
    pub address: LocoAddress,
    pub index: u8,
    pub switch: FunctionSwitch,
}

impl SetLocoFunction {
    pub fn new(address: i32, index: u8, switch: FunctionSwitch) -> Result<Self> {
        let address = LocoAddress::new(address)?;
        if index > MAX_FUNCTION_INDEX {
            return Err(Z21Error::InvalidFunction { index });
        }
        Ok(Self {
            address,
            index,
            switch,
        })
    }
}

impl Action for SetLocoFunction {
    fn family(&self) -> u16 {
        LAN_X
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        let [msb, lsb] = address_bytes(self.address);
        let data = [
            X_SET_LOCO,
            X_LOCO_FUNCTION_DB0,
            msb,
            lsb,
            self.switch.bits() | self.index,
        ];

        frame.extend(&data)?;
        frame.push(xor_checksum(&data))
    }
}
