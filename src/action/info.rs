//! LAN_X_GET_LOCO_INFO: `[0xE3, 0xF0, adr_msb, adr_lsb, xor]`

use super::bits::{address_bytes, xor_checksum};
use super::frame::FrameBuilder;
use super::loco::LocoAddress;
use super::Action;
use crate::constants::{LAN_X, X_GET_LOCO_INFO, X_LOCO_INFO_DB0};
use crate::error::Result;

/// Request the state of a locomotive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetLocoInfo {
    pub address: LocoAddress,
}

impl GetLocoInfo {
    pub fn new(address: i32) -> Result<Self> {
        Ok(Self {
            address: LocoAddress::new(address)?,
        })
    }
}

impl Action for GetLocoInfo {
    fn family(&self) -> u16 {
        LAN_X
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        let [msb, lsb] = address_bytes(self.address);
        let data = [X_GET_LOCO_INFO, X_LOCO_INFO_DB0, msb, lsb];

        frame.extend(&data)?;
        frame.push(xor_checksum(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loco_info_short_address() {
        let frame = GetLocoInfo::new(3).unwrap().encode().unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[0x09, 0x00, 0x40, 0x00, 0xE3, 0xF0, 0x00, 0x03, 0xE3 ^ 0xF0 ^ 0x03]
        );
    }

    #[test]
    fn test_loco_info_long_address() {
        let frame = GetLocoInfo::new(200).unwrap().encode().unwrap();
        assert_eq!(&frame[6..8], &[0xC0, 200]);
    }
}
