//! Wire-level protocol helpers shared by the Sharp memory LCD family.
//!
//! Every panel in the family speaks the same serial protocol; only the line
//! width and the number of gate lines differ.

/// Packet size for all-clear.
///
/// Layout:
/// - 1 byte mode + dummy
/// - >=13 dummy bits (sent as 2 bytes)
pub const CLEAR_PACKET_SIZE: usize = 3;

/// Bytes sent before a line payload: mode byte and gate address.
pub const LINE_HEADER_SIZE: usize = 2;

/// Transfer dummy bytes sent after a line payload.
pub const LINE_TRAILER: [u8; 2] = [0x00, 0x00];

#[inline]
const fn mode_byte(m0: bool, m1: bool, m2: bool) -> u8 {
    ((m0 as u8) << 7) | ((m1 as u8) << 6) | ((m2 as u8) << 5)
}

/// Builds a wire address byte (`AG0..AG7`) for line `1..=height`.
///
/// Returns `None` for line `0`, lines past `height`, and lines that do not
/// fit the 8-bit gate address.
#[inline]
pub fn encode_line_address(line: u16, height: usize) -> Option<u8> {
    if line == 0 || line as usize > height {
        return None;
    }

    u8::try_from(line).ok().map(u8::reverse_bits)
}

/// Builds the all-clear command packet.
#[inline]
pub fn build_clear_packet(m1_high: bool) -> [u8; CLEAR_PACKET_SIZE] {
    [mode_byte(false, m1_high, true), 0x00, 0x00]
}

/// Builds the two header bytes of a one-line update command.
///
/// The payload and [`LINE_TRAILER`] follow in the same chip-select window.
#[inline]
pub fn build_line_header(line: u16, height: usize, m1_high: bool) -> Option<[u8; LINE_HEADER_SIZE]> {
    let address = encode_line_address(line, height)?;
    Some([mode_byte(true, m1_high, false), address])
}
