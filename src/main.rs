//! z21-cmd - encode Z21 LAN commands from the command line
//!
//! Usage:
//!   z21-cmd drive 3 50                Print the frame for loco 3, speed 50, forward
//!   z21-cmd drive 3 50 --reverse      Same, backwards
//!   z21-cmd power-off --send          Encode and send to the command station
//!   z21-cmd info 1000 --json          Print the frame as JSON

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use z21_lan::action::{Action, Frame};
use z21_lan::config;
use z21_lan::logging::init_tracing;
use z21_lan::transport::{Transport, UdpTransport};

/// JSON view of an encoded frame
#[derive(Debug, Serialize)]
struct FrameReport<'a> {
    command: &'a str,
    hex: String,
    bytes: &'a [u8],
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = config::load(&cli.config);
    if let Some(host) = &cli.host {
        cfg.station.host = host.clone();
    }
    if let Some(port) = cli.port {
        cfg.station.port = port;
    }
    cfg.validate()?;

    let command = cli
        .command
        .to_command(cfg.drive.step_mode)
        .inspect_err(|e| error!("{}", e))?;
    let frame = command.encode()?;

    print_frame(command.name(), &frame, cli.json)?;

    if cli.send {
        let transport = UdpTransport::new(cfg.station.host.clone(), cfg.station.port);
        let sent = transport.send(&frame).with_context(|| {
            format!(
                "sending {} to {}:{}",
                command.name(),
                cfg.station.host,
                cfg.station.port
            )
        })?;
        info!(
            "Sent {} ({} bytes) to {}:{}",
            command.name(),
            sent,
            cfg.station.host,
            cfg.station.port
        );
    }

    Ok(())
}

fn print_frame(name: &str, frame: &Frame, json: bool) -> Result<()> {
    if json {
        let report = FrameReport {
            command: name,
            hex: frame.to_hex(),
            bytes: frame.as_bytes(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", frame);
    }
    Ok(())
}
