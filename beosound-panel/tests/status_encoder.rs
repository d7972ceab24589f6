//! Integration tests for the status encoder and input polling.
//!
//! All tests run against `MemoryTransport`, which records every command the
//! encoder transmits.

use std::sync::Arc;
use std::thread;

use beosound_panel::{
    IndicatorMode, Panel, PanelError, PollOutcome, RecordingSink, StatusByte, StatusEncoder,
};
use beosound_transport::protocol::status;
use beosound_transport::{DecodeError, MemoryTransport, TransportError};

fn setup() -> (Arc<MemoryTransport>, StatusEncoder) {
    let transport = Arc::new(MemoryTransport::new());
    let encoder = StatusEncoder::new(transport.clone());
    (transport, encoder)
}

#[test]
fn first_command_carries_default_status() {
    let (transport, encoder) = setup();
    assert!(encoder.status().screen_on());
    assert_eq!(encoder.status().indicator(), IndicatorMode::Off);

    encoder.sync().unwrap();
    let sent = transport.sent_commands();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_bytes(), [0x00, 0x40]);
}

#[test]
fn solid_then_blink_clears_solid() {
    let (transport, encoder) = setup();
    encoder.set_indicator(IndicatorMode::Solid).unwrap();
    encoder.set_indicator(IndicatorMode::Blink).unwrap();

    let bits = encoder.status().bits();
    assert_ne!(bits & status::LED_BLINK, 0);
    assert_eq!(bits & status::LED_SOLID, 0);
    assert_eq!(transport.sent_statuses(), vec![0xC0, 0x50]);
}

#[test]
fn indicator_bits_never_both_set() {
    let (transport, encoder) = setup();
    let sequence = [
        IndicatorMode::Blink,
        IndicatorMode::Solid,
        IndicatorMode::Solid,
        IndicatorMode::Off,
        IndicatorMode::Blink,
        IndicatorMode::Off,
        IndicatorMode::Solid,
        IndicatorMode::Blink,
    ];
    for mode in sequence {
        encoder.set_indicator(mode).unwrap();
        assert_eq!(encoder.status().indicator(), mode);
    }
    for byte in transport.sent_statuses() {
        assert_ne!(byte & status::LED_MASK, status::LED_MASK, "byte 0x{byte:02X}");
    }
}

#[test]
fn repeated_request_is_transmitted_again() {
    let (transport, encoder) = setup();
    encoder.set_screen(true).unwrap();
    encoder.set_screen(true).unwrap();
    assert_eq!(transport.sent_statuses(), vec![0x40, 0x40]);
}

#[test]
fn screen_and_indicator_are_orthogonal() {
    let (_transport, encoder) = setup();
    encoder.set_indicator(IndicatorMode::Blink).unwrap();
    encoder.set_screen(false).unwrap();
    assert_eq!(encoder.status().indicator(), IndicatorMode::Blink);
    assert!(!encoder.status().screen_on());

    encoder.set_indicator(IndicatorMode::Solid).unwrap();
    assert!(!encoder.status().screen_on());
    encoder.set_screen(true).unwrap();
    assert_eq!(encoder.status().indicator(), IndicatorMode::Solid);
}

#[test]
fn out_of_range_level_keeps_status_and_still_transmits() {
    let (transport, encoder) = setup();
    encoder.set_indicator(IndicatorMode::Solid).unwrap();
    let before = encoder.status();

    encoder.set_indicator_level(3).unwrap();
    encoder.set_indicator_level(u32::MAX).unwrap();

    assert_eq!(encoder.status(), before);
    assert_eq!(
        transport.sent_statuses(),
        vec![before.bits(), before.bits(), before.bits()]
    );
}

#[test]
fn in_range_levels_map_to_modes() {
    let (transport, encoder) = setup();
    encoder.set_indicator_level(1).unwrap();
    encoder.set_indicator_level(2).unwrap();
    encoder.set_indicator_level(0).unwrap();
    assert_eq!(transport.sent_statuses(), vec![0xC0, 0x50, 0x40]);
}

#[test]
fn failed_transmission_keeps_new_state() {
    let (transport, encoder) = setup();
    transport.set_fail_sends(true);

    let err = encoder.set_screen(false).unwrap_err();
    assert!(matches!(
        err,
        PanelError::Transport(TransportError::Disconnected)
    ));
    assert!(!encoder.status().screen_on());
    assert!(transport.sent_statuses().is_empty());

    // No retry happened; the next request carries the diverged state
    transport.set_fail_sends(false);
    encoder.set_indicator(IndicatorMode::Blink).unwrap();
    assert_eq!(transport.sent_statuses(), vec![0x10]);
}

#[test]
fn concurrent_changes_are_never_lost() {
    for _ in 0..200 {
        let transport = Arc::new(MemoryTransport::new());
        let encoder = Arc::new(StatusEncoder::new(transport.clone()));

        let screen = {
            let encoder = Arc::clone(&encoder);
            thread::spawn(move || encoder.set_screen(false))
        };
        let indicator = {
            let encoder = Arc::clone(&encoder);
            thread::spawn(move || encoder.set_indicator(IndicatorMode::Blink))
        };
        screen.join().unwrap().unwrap();
        indicator.join().unwrap().unwrap();

        let expected = StatusByte::new(false, IndicatorMode::Blink);
        assert_eq!(encoder.status(), expected);
        let sent = transport.sent_statuses();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1], expected.bits());
    }
}

#[test]
fn panel_start_sends_configured_status() {
    let transport = Arc::new(MemoryTransport::new());
    let panel = Panel::with_status(
        transport.clone(),
        StatusByte::new(false, IndicatorMode::Solid),
    );
    panel.start().unwrap();
    assert_eq!(transport.sent_statuses(), vec![0x80]);
}

#[test]
fn poll_delivers_drops_and_idles() {
    let transport = Arc::new(MemoryTransport::new());
    transport.push_report(&[0x01, 0xFF, 0xC8, 0x10, 0x00, 0x00]);
    transport.push_report(&[0x01, 0x02, 0x03]);
    let panel = Panel::new(transport.clone());
    let mut sink = RecordingSink::default();

    let outcome = panel.poll(&mut sink, 10).unwrap();
    let PollOutcome::Delivered(events) = outcome else {
        panic!("expected a delivered report, got {outcome:?}");
    };
    assert_eq!(events.selection_wheel, 1);
    assert_eq!(events.secondary_wheel, -1);
    assert_eq!(events.laser, 128);
    assert!(events.buttons.right);

    assert_eq!(
        panel.poll(&mut sink, 10).unwrap(),
        PollOutcome::Dropped(DecodeError::ShortReport { len: 3 })
    );
    assert_eq!(panel.poll(&mut sink, 10).unwrap(), PollOutcome::Idle);

    assert_eq!(sink.events.len(), 1);
    assert_eq!(sink.events[0], events);
    assert!(transport.sent_statuses().is_empty());
}
