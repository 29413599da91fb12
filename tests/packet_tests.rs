//! Packet Layout and Control Byte Tests
//!
//! Verifies the fixed packet geometry and the control byte field decode.

use sdr_hostlink::config::{LEGACY_PKT_LEN, MAX_UNITS_PER_PKT, PKT_PAYLOAD_IDX};
use sdr_hostlink::protocol::packet::{ControlWord, Device, Direction, PacketBuf};

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn payload_fits_packet() {
    // Two header bytes plus seven (addr, data) pairs fill the packet exactly
    assert_eq!(PKT_PAYLOAD_IDX + 2 * MAX_UNITS_PER_PKT, LEGACY_PKT_LEN);
}

#[test]
fn buffers_same_size() {
    let pkt = PacketBuf::new();
    assert_eq!(pkt.req.len(), pkt.resp.len());
}

#[test]
fn new_packet_zeroed() {
    let pkt = PacketBuf::new();
    assert!(pkt.req.iter().all(|&b| b == 0));
    assert!(pkt.resp.iter().all(|&b| b == 0));
}

#[test]
fn unit_accessors_round_trip() {
    let mut pkt = PacketBuf::new();
    pkt.req[PKT_PAYLOAD_IDX] = 0x12;
    pkt.req[PKT_PAYLOAD_IDX + 1] = 0x34;
    pkt.req[PKT_PAYLOAD_IDX + 12] = 0x56;
    pkt.req[PKT_PAYLOAD_IDX + 13] = 0x78;
    assert_eq!(pkt.req_unit(0), (0x12, 0x34));
    assert_eq!(pkt.req_unit(6), (0x56, 0x78));

    pkt.put_resp_unit(6, 0xAB, 0xCD);
    assert_eq!(pkt.resp[PKT_PAYLOAD_IDX + 12], 0xAB);
    assert_eq!(pkt.resp[PKT_PAYLOAD_IDX + 13], 0xCD);
}

// ============================================================================
// Control Byte Decode
// ============================================================================

#[test]
fn count_field_extraction() {
    for count in 0..=7u8 {
        let ctrl = ControlWord::parse(0x80 | count);
        assert_eq!(ctrl.count, count);
    }
}

#[test]
fn count_field_ignores_upper_bits() {
    let ctrl = ControlWord::parse(0xFF);
    assert_eq!(ctrl.count, 7);
}

#[test]
fn device_selector_config() {
    let ctrl = ControlWord::parse(0x80);
    assert_eq!(ctrl.device, Some(Device::Config));
}

#[test]
fn device_selector_transceiver() {
    let ctrl = ControlWord::parse(0x80 | 0x10);
    assert_eq!(ctrl.device, Some(Device::Transceiver));
}

#[test]
fn device_selector_clockgen() {
    let ctrl = ControlWord::parse(0x80 | 0x30);
    assert_eq!(ctrl.device, Some(Device::ClockGen));
}

#[test]
fn device_selector_reserved() {
    // Selector 0b10 has never been assigned
    let ctrl = ControlWord::parse(0x80 | 0x20);
    assert_eq!(ctrl.device, None);
}

#[test]
fn direction_read() {
    let ctrl = ControlWord::parse(0x80);
    assert!(ctrl.direction.contains(Direction::READ));
    assert!(!ctrl.direction.contains(Direction::WRITE));
}

#[test]
fn direction_write() {
    let ctrl = ControlWord::parse(0x40);
    assert!(ctrl.direction.contains(Direction::WRITE));
    assert!(!ctrl.direction.contains(Direction::READ));
}

#[test]
fn direction_both() {
    let ctrl = ControlWord::parse(0xC0);
    assert!(ctrl.direction.contains(Direction::READ));
    assert!(ctrl.direction.contains(Direction::WRITE));
}

#[test]
fn direction_neither() {
    let ctrl = ControlWord::parse(0x31);
    assert!(ctrl.direction.is_empty());
}
