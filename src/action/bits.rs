//! Bit-packing helpers shared by the concrete actions
//!
//! Pure functions over explicit values, no shared state.

use super::loco::LocoAddress;
use crate::constants::{DIRECTION_BIT, LONG_ADDRESS_FLAG};

/// XOR-fold of a byte range (0 for an empty range)
pub fn xor_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, b| acc ^ b)
}

/// Number of bits left after stripping leading zeros
pub fn significant_bits(value: u16) -> u32 {
    u16::BITS - value.leading_zeros()
}

/// Encode a loco address as `[MSB, LSB]`
///
/// The MSB is zero when the address fits in a single byte, otherwise the
/// upper byte of the 16-bit value. Addresses above 127 get the `11` long
/// address flag in bits 6-7 of the MSB.
pub fn address_bytes(address: LocoAddress) -> [u8; 2] {
    let value = address.get();
    let [hi, lo] = value.to_be_bytes();

    let mut msb = if significant_bits(value) <= 8 { 0 } else { hi };
    if address.is_long() {
        msb |= LONG_ADDRESS_FLAG;
    }
    [msb, lo]
}

/// Replace bit 7 of the speed byte with the direction flag
pub fn merge_direction(speed: u8, forward: bool) -> u8 {
    let speed = speed & !DIRECTION_BIT;
    if forward {
        speed | DIRECTION_BIT
    } else {
        speed
    }
}
