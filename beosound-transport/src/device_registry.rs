//! Device registry - USB identity of the supported panel
//!
//! Only one product exists. Matching is kept here so discovery and the CLI
//! agree on what counts as a BeoSound 5.

/// Bang & Olufsen vendor ID
pub const VENDOR_ID: u16 = 0x0CD4;

/// BeoSound 5 panel product ID
pub const PRODUCT_ID: u16 = 0x1112;

/// Name used for the virtual input device and LED identifiers
pub const DEVICE_NAME: &str = "beosound5";

/// Check if a VID/PID pair is a BeoSound 5 panel
#[inline]
pub fn is_beosound5(vid: u16, pid: u16) -> bool {
    vid == VENDOR_ID && pid == PRODUCT_ID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_panel() {
        assert!(is_beosound5(0x0CD4, 0x1112));
    }

    #[test]
    fn test_other_devices_rejected() {
        assert!(!is_beosound5(0x0CD4, 0x1113));
        assert!(!is_beosound5(0x3151, 0x1112));
        assert!(!is_beosound5(0x0000, 0x0000));
    }
}
