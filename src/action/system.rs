//! Station-level commands with fixed or near-fixed payloads

use super::bits::xor_checksum;
use super::frame::FrameBuilder;
use super::Action;
use crate::constants::{
    LAN_GET_SERIAL_NUMBER, LAN_LOGOFF, LAN_SET_BROADCASTFLAGS, LAN_X, X_GENERAL, X_SET_STOP,
    X_TRACK_POWER_OFF_DB0, X_TRACK_POWER_ON_DB0, X_VERSION_DB0,
};
use crate::error::Result;

/// Append an X-header + DB0 pair followed by its XOR byte
fn append_x_pair(frame: &mut FrameBuilder, header: u8, db0: u8) -> Result<()> {
    let data = [header, db0];
    frame.extend(&data)?;
    frame.push(xor_checksum(&data))
}

/// LAN_GET_SERIAL_NUMBER (header only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetSerialNumber;

impl Action for GetSerialNumber {
    fn family(&self) -> u16 {
        LAN_GET_SERIAL_NUMBER
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        frame.end_payload()
    }
}

/// LAN_LOGOFF (header only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Logoff;

impl Action for Logoff {
    fn family(&self) -> u16 {
        LAN_LOGOFF
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        frame.end_payload()
    }
}

/// LAN_X_GET_VERSION
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetVersion;

impl Action for GetVersion {
    fn family(&self) -> u16 {
        LAN_X
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        append_x_pair(frame, X_GENERAL, X_VERSION_DB0)
    }
}

/// LAN_X_SET_TRACK_POWER_OFF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackPowerOff;

impl Action for TrackPowerOff {
    fn family(&self) -> u16 {
        LAN_X
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        append_x_pair(frame, X_GENERAL, X_TRACK_POWER_OFF_DB0)
    }
}

/// LAN_X_SET_TRACK_POWER_ON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackPowerOn;

impl Action for TrackPowerOn {
    fn family(&self) -> u16 {
        LAN_X
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        append_x_pair(frame, X_GENERAL, X_TRACK_POWER_ON_DB0)
    }
}

/// LAN_X_SET_STOP: halt all locomotives, track power stays on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmergencyStop;

impl Action for EmergencyStop {
    fn family(&self) -> u16 {
        LAN_X
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        // Single-byte command, XOR equals the header
        frame.push(X_SET_STOP)?;
        frame.push(xor_checksum(&[X_SET_STOP]))
    }
}

/// LAN_SET_BROADCASTFLAGS with a little-endian 32-bit flag word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetBroadcastFlags {
    pub flags: u32,
}

impl SetBroadcastFlags {
    pub fn new(flags: u32) -> Self {
        Self { flags }
    }
}

impl Action for SetBroadcastFlags {
    fn family(&self) -> u16 {
        LAN_SET_BROADCASTFLAGS
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        frame.extend(&self.flags.to_le_bytes())
    }
}
