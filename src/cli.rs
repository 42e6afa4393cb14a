//! Command-line interface definition using clap
//!
//! Provides structured argument parsing with automatic help generation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use z21_lan::action::{
    Command as Z21Command, EmergencyStop, FunctionSwitch, GetLocoInfo, GetSerialNumber,
    GetVersion, LocoAddress, Logoff, SetBroadcastFlags, SetLocoDrive, SetLocoFunction,
    SpeedSteps, TrackPowerOff, TrackPowerOn,
};
use z21_lan::error::Result;

// =============================================================================
// CLI Definition
// =============================================================================

/// Encode Z21 LAN commands and optionally send them to a command station
#[derive(Parser, Debug)]
#[command(name = "z21-cmd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (TOML)
    #[arg(long, value_name = "PATH", default_value = "z21.toml", global = true)]
    pub config: PathBuf,

    /// Print a JSON object instead of a hex line
    #[arg(long, global = true)]
    pub json: bool,

    /// Send the frame to the command station
    #[arg(long, global = true)]
    pub send: bool,

    /// Command station host (overrides config)
    #[arg(long, value_name = "HOST", global = true)]
    pub host: Option<String>,

    /// Command station UDP port (overrides config)
    #[arg(long, value_name = "PORT", global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Command,
}

/// Commands that can be encoded
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set loco speed and direction
    Drive {
        /// Loco address
        #[arg(allow_hyphen_values = true)]
        address: i32,
        /// Raw speed step value (0-127)
        speed: u8,
        /// Speed step mode (defaults to config)
        #[arg(long, value_enum)]
        steps: Option<SpeedSteps>,
        /// Drive backwards
        #[arg(long)]
        reverse: bool,
    },

    /// Switch a loco function
    Function {
        /// Loco address
        #[arg(allow_hyphen_values = true)]
        address: i32,
        /// Function index (0-28)
        index: u8,
        #[arg(long, value_enum, default_value_t = FunctionSwitch::On)]
        mode: FunctionSwitch,
    },

    /// Request loco state
    Info {
        /// Loco address
        #[arg(allow_hyphen_values = true)]
        address: i32,
    },

    /// Turn track power on
    PowerOn,

    /// Turn track power off
    PowerOff,

    /// Stop all locos (track power stays on)
    Stop,

    /// Request X-Bus version
    Version,

    /// Request station serial number
    Serial,

    /// Log off from the station
    Logoff,

    /// Subscribe to broadcast messages
    BroadcastFlags {
        /// Flag word, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_flags)]
        flags: u32,
    },
}

impl Command {
    /// Build the protocol command, using `default_steps` when none was given
    pub fn to_command(&self, default_steps: SpeedSteps) -> Result<Z21Command> {
        let cmd = match *self {
            Self::Drive {
                address,
                speed,
                steps,
                reverse,
            } => {
                let address = LocoAddress::new(address)?;
                let steps = steps.unwrap_or(default_steps);
                SetLocoDrive::with_steps(address, speed, steps, !reverse).into()
            }
            Self::Function {
                address,
                index,
                mode,
            } => SetLocoFunction::new(address, index, mode)?.into(),
            Self::Info { address } => GetLocoInfo::new(address)?.into(),
            Self::PowerOn => TrackPowerOn.into(),
            Self::PowerOff => TrackPowerOff.into(),
            Self::Stop => EmergencyStop.into(),
            Self::Version => GetVersion.into(),
            Self::Serial => GetSerialNumber.into(),
            Self::Logoff => Logoff.into(),
            Self::BroadcastFlags { flags } => SetBroadcastFlags::new(flags).into(),
        };
        Ok(cmd)
    }
}

fn parse_flags(s: &str) -> std::result::Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid flag word '{}': {}", s, e))
}

// =============================================================================
// Tests
// =============================================================================
