//! Input report decoding
//!
//! Turns one raw input report into the set of input events it describes.
//! Decoding is stateless: button states are levels, wheel values are
//! per-report deltas, and nothing is accumulated between calls.

use serde::Serialize;

use crate::error::DecodeError;
use crate::protocol::{button, laser, RawInputReport};

/// Instantaneous state of the four panel buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Buttons {
    pub right: bool,
    pub left: bool,
    pub go: bool,
    pub power: bool,
}

impl Buttons {
    /// Extract button levels from the button byte (bits 0..3 ignored)
    pub fn from_bits(bits: u8) -> Self {
        Self {
            right: bits & button::RIGHT != 0,
            left: bits & button::LEFT != 0,
            go: bits & button::GO != 0,
            power: bits & button::POWER != 0,
        }
    }

    /// True if any button is held
    pub fn any(&self) -> bool {
        self.right || self.left || self.go || self.power
    }
}

/// Everything one input report says about the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InputEventSet {
    /// Laser pointer position, clamped to `0..=128`
    pub laser: u8,
    /// Selection wheel delta since the previous report
    pub selection_wheel: i8,
    /// Secondary (volume) wheel delta since the previous report
    pub secondary_wheel: i8,
    /// Button levels
    pub buttons: Buttons,
    /// Bytes 4 and 5, passed through uninterpreted
    pub reserved: [u8; 2],
}

/// Decode a raw input report.
///
/// Only the first six bytes are read. Shorter reports are rejected as a
/// whole; no partial event set is ever produced.
pub fn decode(report: &[u8]) -> Result<InputEventSet, DecodeError> {
    let raw = RawInputReport::parse(report).ok_or(DecodeError::ShortReport { len: report.len() })?;

    Ok(InputEventSet {
        laser: raw.laser.clamp(laser::MIN, laser::MAX),
        selection_wheel: raw.selection_wheel,
        secondary_wheel: raw.secondary_wheel,
        buttons: Buttons::from_bits(raw.buttons),
        reserved: raw.reserved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(b0: u8, b1: u8, b2: u8, b3: u8) -> [u8; 6] {
        [b0, b1, b2, b3, 0, 0]
    }

    #[test]
    fn test_short_reports_rejected() {
        for len in 0..6 {
            let buf = vec![0xFFu8; len];
            assert_eq!(decode(&buf), Err(DecodeError::ShortReport { len }));
        }
    }

    #[test]
    fn test_laser_clamped() {
        assert_eq!(decode(&report(0, 0, 200, 0)).unwrap().laser, 128);
        assert_eq!(decode(&report(0, 0, 129, 0)).unwrap().laser, 128);
        assert_eq!(decode(&report(0, 0, 128, 0)).unwrap().laser, 128);
        assert_eq!(decode(&report(0, 0, 50, 0)).unwrap().laser, 50);
        assert_eq!(decode(&report(0, 0, 0, 0)).unwrap().laser, 0);
    }

    #[test]
    fn test_single_button() {
        let events = decode(&report(0, 0, 0, 1 << 6)).unwrap();
        assert_eq!(
            events.buttons,
            Buttons {
                right: false,
                left: false,
                go: true,
                power: false,
            }
        );
    }

    #[test]
    fn test_all_buttons() {
        let events = decode(&report(0, 0, 0, 0xF0)).unwrap();
        assert!(events.buttons.right);
        assert!(events.buttons.left);
        assert!(events.buttons.go);
        assert!(events.buttons.power);
    }

    #[test]
    fn test_low_button_bits_ignored() {
        let events = decode(&report(0, 0, 0, 0x0F)).unwrap();
        assert_eq!(events.buttons, Buttons::default());
        assert!(!events.buttons.any());
    }

    #[test]
    fn test_signed_deltas() {
        let events = decode(&report(0xFF, 0x01, 0, 0)).unwrap();
        assert_eq!(events.selection_wheel, -1);
        assert_eq!(events.secondary_wheel, 1);

        let events = decode(&report(0x01, 0x80, 0, 0)).unwrap();
        assert_eq!(events.selection_wheel, 1);
        assert_eq!(events.secondary_wheel, -128);
    }

    #[test]
    fn test_reserved_bytes_preserved() {
        let events = decode(&[0, 0, 0, 0, 0x12, 0x34]).unwrap();
        assert_eq!(events.reserved, [0x12, 0x34]);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let short = decode(&[5, 6, 7, 0x10, 1, 2]).unwrap();
        let long = decode(&[5, 6, 7, 0x10, 1, 2, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let buf = [0x80, 0x7F, 0xC8, 0xA0, 0x01, 0x02, 0x03];
        assert_eq!(decode(&buf), decode(&buf));
    }
}
