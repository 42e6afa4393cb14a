//! Action abstraction for command frame encoding
//!
//! Every command shares the same frame contract:
//! `[len_lo, len_hi, family_lo, family_hi, payload...]`
//! - **Action**: supplies the family identifier and appends its payload
//! - **FrameBuilder**: owns the buffer, writes the header, prefixes the length
//!
//! # Adding a new command
//!
//! 1. Create `action/my_command.rs`
//! 2. Implement the `Action` trait
//! 3. Add a variant to `Command`

pub mod bits;
mod drive;
mod frame;
mod function;
mod info;
mod loco;
mod system;

pub use drive::SetLocoDrive;
pub use frame::{Frame, FrameBuilder};
pub use function::{FunctionSwitch, SetLocoFunction};
pub use info::GetLocoInfo;
pub use loco::{LocoAddress, SpeedSteps};
pub use system::{
    EmergencyStop, GetSerialNumber, GetVersion, Logoff, SetBroadcastFlags, TrackPowerOff,
    TrackPowerOn,
};

use crate::error::Result;
use tracing::debug;

/// A command that can be encoded into a wire frame
pub trait Action {
    /// 16-bit LAN header written right after the length prefix
    fn family(&self) -> u16;

    /// Append the command-specific payload (including any checksum)
    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()>;

    /// Build the complete frame
    ///
    /// On error the partial buffer is dropped; callers only ever see a
    /// finalized frame.
    fn encode(&self) -> Result<Frame> {
        let mut builder = FrameBuilder::new();
        builder.begin(self.family())?;
        self.append_payload(&mut builder)?;
        let frame = builder.finalize()?;
        debug!("Encoded frame: {}", frame);
        Ok(frame)
    }
}

/// Any supported command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetLocoDrive(SetLocoDrive),
    SetLocoFunction(SetLocoFunction),
    GetLocoInfo(GetLocoInfo),
    GetSerialNumber(GetSerialNumber),
    Logoff(Logoff),
    GetVersion(GetVersion),
    TrackPowerOff(TrackPowerOff),
    TrackPowerOn(TrackPowerOn),
    EmergencyStop(EmergencyStop),
    SetBroadcastFlags(SetBroadcastFlags),
}

impl Command {
    /// Protocol name of the command
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetLocoDrive(_) => "LAN_X_SET_LOCO_DRIVE",
            Self::SetLocoFunction(_) => "LAN_X_SET_LOCO_FUNCTION",
            Self::GetLocoInfo(_) => "LAN_X_GET_LOCO_INFO",
            Self::GetSerialNumber(_) => "LAN_GET_SERIAL_NUMBER",
            Self::Logoff(_) => "LAN_LOGOFF",
            Self::GetVersion(_) => "LAN_X_GET_VERSION",
            Self::TrackPowerOff(_) => "LAN_X_SET_TRACK_POWER_OFF",
            Self::TrackPowerOn(_) => "LAN_X_SET_TRACK_POWER_ON",
            Self::EmergencyStop(_) => "LAN_X_SET_STOP",
            Self::SetBroadcastFlags(_) => "LAN_SET_BROADCASTFLAGS",
        }
    }
}

impl Action for Command {
    fn family(&self) -> u16 {
        match self {
            Self::SetLocoDrive(a) => a.family(),
            Self::SetLocoFunction(a) => a.family(),
            Self::GetLocoInfo(a) => a.family(),
            Self::GetSerialNumber(a) => a.family(),
            Self::Logoff(a) => a.family(),
            Self::GetVersion(a) => a.family(),
            Self::TrackPowerOff(a) => a.family(),
            Self::TrackPowerOn(a) => a.family(),
            Self::EmergencyStop(a) => a.family(),
            Self::SetBroadcastFlags(a) => a.family(),
        }
    }

    fn append_payload(&self, frame: &mut FrameBuilder) -> Result<()> {
        match self {
            Self::SetLocoDrive(a) => a.append_payload(frame),
            Self::SetLocoFunction(a) => a.append_payload(frame),
            Self::GetLocoInfo(a) => a.append_payload(frame),
            Self::GetSerialNumber(a) => a.append_payload(frame),
            Self::Logoff(a) => a.append_payload(frame),
            Self::GetVersion(a) => a.append_payload(frame),
            Self::TrackPowerOff(a) => a.append_payload(frame),
            Self::TrackPowerOn(a) => a.append_payload(frame),
            Self::EmergencyStop(a) => a.append_payload(frame),
            Self::SetBroadcastFlags(a) => a.append_payload(frame),
        }
    }
}

macro_rules! impl_from_action {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Command {
                fn from(action: $variant) -> Self {
                    Self::$variant(action)
                }
            }
        )*
    };
}

impl_from_action!(
    SetLocoDrive,
    SetLocoFunction,
    GetLocoInfo,
    GetSerialNumber,
    Logoff,
    GetVersion,
    TrackPowerOff,
    TrackPowerOn,
    EmergencyStop,
    SetBroadcastFlags,
);
