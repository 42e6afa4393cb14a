//! LAN_X_SET_LOCO_DRIVE
//!
//! Payload: `[0xE4, steps, adr_msb, adr_lsb, speed|dir, xor]`, where the
//! XOR covers the four bytes after the 0xE4 code.

use super::bits::{address_bytes, merge_direction, xor_checksum};
use super::frame::FrameBuilder;
use super::loco::{LocoAddress, SpeedSteps};
use super::Action;
use crate::constants::{LAN_X, X_SET_LOCO};
use crate::error::Result;

/// Set speed and direction of a locomotive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetLocoDrive {
    pub address: LocoAddress,
    /// Raw speed step value; bit 7 is replaced by `forward`
    pub speed: u8,
    pub steps: SpeedSteps,
    pub forward: bool,
}

impl SetLocoDrive {
    /// Build from raw inputs
    ///
    /// `step_id` uses the action-family IDs: 0 = 14, 2 = 28, 3 = 128 steps.
    pub fn new(address: i32, speed: u8, step_id: u8, forward: bool) -> Result<Self> {
        let address = LocoAddress::new(address)?;
        let steps = SpeedSteps::from_id(step_id)?;
        Ok(Self::with_steps(address, speed, steps, forward))
    }

    pub fn with_steps(address: LocoAddress, speed: u8, steps: SpeedSteps, forward: bool) -> Self {
        Self {
            address,
            speed,
            steps,
            forward,
        }
    }
}

impl Action for SetLocoDrive {
    fn family(&self) -> u16 {
        LAN_X
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        let [msb, lsb] = address_bytes(self.address);
        let data = [
            self.steps.marker(),
            msb,
            lsb,
            merge_direction(self.speed, self.forward),
        ];

        frame.push(X_SET_LOCO)?;
        frame.extend(&data)?;
        frame.push(xor_checksum(&data))
    }
}
