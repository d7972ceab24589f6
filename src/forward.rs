//! Input forwarding loop
//!
//! Polls the panel for input reports and hands each decoded event set to a
//! sink until asked to stop. Malformed reports are dropped; a transport
//! failure ends the loop.

use std::sync::atomic::{AtomicBool, Ordering};

use beosound_panel::{EventSink, Panel, PanelError, PollOutcome};
use tracing::{debug, info};

/// Counters for one forwarding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardStats {
    pub delivered: u64,
    pub dropped: u64,
}

/// Forward input from `panel` to `sink` until `running` is cleared.
pub fn run(
    panel: &Panel,
    sink: &mut dyn EventSink,
    running: &AtomicBool,
    read_timeout_ms: i32,
) -> Result<ForwardStats, PanelError> {
    let mut stats = ForwardStats::default();

    while running.load(Ordering::SeqCst) {
        match panel.poll(sink, read_timeout_ms)? {
            PollOutcome::Delivered(_) => stats.delivered += 1,
            PollOutcome::Dropped(e) => {
                stats.dropped += 1;
                debug!("Dropped report #{}: {}", stats.dropped, e);
            }
            PollOutcome::Idle => {}
        }
    }

    info!(
        "Forwarding stopped: {} delivered, {} dropped",
        stats.delivered, stats.dropped
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beosound_panel::InputEventSet;
    use beosound_transport::MemoryTransport;
    use std::sync::Arc;

    /// Sink that stops the loop once it has seen `limit` event sets
    struct StopAfter<'a> {
        seen: Vec<InputEventSet>,
        limit: usize,
        running: &'a AtomicBool,
    }

    impl EventSink for StopAfter<'_> {
        fn emit(&mut self, events: &InputEventSet) -> Result<(), PanelError> {
            self.seen.push(*events);
            if self.seen.len() >= self.limit {
                self.running.store(false, Ordering::SeqCst);
            }
            Ok(())
        }
    }

    #[test]
    fn test_forwards_and_counts() {
        let transport = Arc::new(MemoryTransport::new());
        transport.push_report(&[1, 0, 10, 0, 0, 0]);
        transport.push_report(&[0xAA]);
        transport.push_report(&[0, 1, 20, 0x80, 0, 0]);
        let panel = Panel::new(transport);

        let running = AtomicBool::new(true);
        let mut sink = StopAfter {
            seen: Vec::new(),
            limit: 2,
            running: &running,
        };
        let stats = run(&panel, &mut sink, &running, 0).unwrap();

        assert_eq!(
            stats,
            ForwardStats {
                delivered: 2,
                dropped: 1
            }
        );
        assert_eq!(sink.seen[0].laser, 10);
        assert!(sink.seen[1].buttons.power);
    }

    #[test]
    fn test_sink_failure_stops_loop() {
        struct Broken;
        impl EventSink for Broken {
            fn emit(&mut self, _events: &InputEventSet) -> Result<(), PanelError> {
                Err(PanelError::Sink("uinput gone".into()))
            }
        }

        let transport = Arc::new(MemoryTransport::new());
        transport.push_report(&[0; 6]);
        let panel = Panel::new(transport);
        let running = AtomicBool::new(true);

        let err = run(&panel, &mut Broken, &running, 0).unwrap_err();
        assert!(matches!(err, PanelError::Sink(_)));
    }
}
