//! Integration tests for command encoding
//!
//! Exercises the public API end to end: typed command → wire frame →
//! transport, plus property tests over the frame invariants.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use std::thread;
use z21_lan::action::{
    Action, Command, EmergencyStop, FrameBuilder, FunctionSwitch, GetLocoInfo, SetLocoDrive,
    SetLocoFunction, TrackPowerOff,
};
use z21_lan::transport::Transport;
use z21_lan::{Frame, Result, Z21Error};

// =============================================================================
// Mock Transport
// =============================================================================

/// Mock transport capturing every frame it is handed
#[derive(Default)]
struct MockTransport {
    captured: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl Transport for MockTransport {
    fn send(&self, frame: &Frame) -> Result<usize> {
        self.captured.lock().unwrap().push(frame.as_bytes().to_vec());
        Ok(frame.len())
    }
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn test_drive_frame_reaches_transport() {
    let transport = MockTransport::default();
    let frame = SetLocoDrive::new(3, 50, 3, true).unwrap().encode().unwrap();

    transport.send(&frame).unwrap();

    let captured = transport.captured.lock().unwrap();
    assert_eq!(
        captured[0],
        vec![0x0A, 0x00, 0x40, 0x00, 0xE4, 0x13, 0x00, 0x03, 0xB2, 0xA2]
    );
}

#[test]
fn test_command_sequence() {
    let transport = MockTransport::default();
    let commands: Vec<Command> = vec![
        SetLocoDrive::new(3, 20, 2, true).unwrap().into(),
        SetLocoFunction::new(3, 0, FunctionSwitch::On).unwrap().into(),
        GetLocoInfo::new(3).unwrap().into(),
        EmergencyStop.into(),
        TrackPowerOff.into(),
    ];

    for cmd in &commands {
        transport.send(&cmd.encode().unwrap()).unwrap();
    }

    let captured = transport.captured.lock().unwrap();
    assert_eq!(captured.len(), commands.len());
    for frame in captured.iter() {
        let declared = u16::from_le_bytes([frame[0], frame[1]]) as usize;
        assert_eq!(declared, frame.len());
    }
}

#[test]
fn test_invalid_construction_yields_no_frame() {
    assert!(matches!(
        SetLocoDrive::new(0, 50, 3, true),
        Err(Z21Error::InvalidAddress { address: 0 })
    ));
    assert!(matches!(
        SetLocoDrive::new(-1, 50, 3, true),
        Err(Z21Error::InvalidAddress { address: -1 })
    ));
    assert!(matches!(
        SetLocoDrive::new(3, 50, 7, true),
        Err(Z21Error::UnsupportedStepMode { id: 7 })
    ));
}

#[test]
fn test_manual_builder_misuse() {
    let mut builder = FrameBuilder::new();
    builder.begin(0x0040).unwrap();
    assert!(builder.finalize().is_err());

    builder.push(0x80).unwrap();
    builder.push(0x80).unwrap();
    let frame = builder.finalize().unwrap();
    assert_eq!(frame.as_bytes(), EmergencyStop.encode().unwrap().as_bytes());

    assert!(matches!(
        builder.finalize(),
        Err(Z21Error::ProtocolInvariantViolation { .. })
    ));
}

#[test]
fn test_parallel_encoding() {
    let handles: Vec<_> = (1..=8)
        .map(|addr| {
            thread::spawn(move || {
                SetLocoDrive::new(addr * 100, 10, 3, addr % 2 == 0)
                    .unwrap()
                    .encode()
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let frame = handle.join().unwrap();
        let addr = ((i as u16) + 1) * 100;
        let decoded = (u16::from(frame[6] & 0x3F) << 8) | u16::from(frame[7]);
        assert_eq!(decoded, addr);
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_short_address_bytes(addr in 1i32..=127) {
        let frame = SetLocoDrive::new(addr, 0, 3, true).unwrap().encode().unwrap();
        prop_assert_eq!(frame[6], 0x00);
        prop_assert_eq!(frame[7] as i32, addr);
    }

    #[test]
    fn prop_long_address_roundtrip(addr in 128i32..=10239) {
        let frame = SetLocoDrive::new(addr, 0, 3, true).unwrap().encode().unwrap();
        prop_assert_eq!(frame[6] & 0xC0, 0xC0);
        let decoded = (i32::from(frame[6] & 0x3F) << 8) | i32::from(frame[7]);
        prop_assert_eq!(decoded, addr);
    }

    #[test]
    fn prop_wide_address_keeps_upper_byte(addr in 256i32..=65535) {
        let frame = SetLocoDrive::new(addr, 0, 3, true).unwrap().encode().unwrap();
        prop_assert_eq!(frame[6], ((addr >> 8) as u8) | 0xC0);
        prop_assert_eq!(frame[7], addr as u8);
    }

    #[test]
    fn prop_address_beyond_u16_rejected(addr in 65536i32..=i32::MAX) {
        let rejected = matches!(
            SetLocoDrive::new(addr, 0, 3, true),
            Err(Z21Error::AddressOverflow { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_non_positive_address_rejected(addr in i32::MIN..=0) {
        let rejected = matches!(
            SetLocoDrive::new(addr, 0, 3, true),
            Err(Z21Error::InvalidAddress { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_unknown_step_id_rejected(id in any::<u8>().prop_filter("known id", |id| ![0, 2, 3].contains(id))) {
        let rejected = matches!(
            SetLocoDrive::new(3, 0, id, true),
            Err(Z21Error::UnsupportedStepMode { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_drive_frame_invariants(
        addr in 1i32..=10239,
        speed in any::<u8>(),
        step_id in prop::sample::select(vec![0u8, 2, 3]),
        forward in any::<bool>(),
    ) {
        let frame = SetLocoDrive::new(addr, speed, step_id, forward)
            .unwrap()
            .encode()
            .unwrap();

        prop_assert_eq!(frame.len(), 10);
        prop_assert_eq!(frame.declared_len() as usize, frame.len());
        prop_assert_eq!(frame.family(), 0x0040);
        prop_assert_eq!(frame[4], 0xE4);
        prop_assert_eq!(frame[5] ^ frame[6] ^ frame[7] ^ frame[8], frame[9]);
        prop_assert_eq!(frame[8] & 0x80 != 0, forward);
        prop_assert_eq!(frame[8] & 0x7F, speed & 0x7F);
    }
}
