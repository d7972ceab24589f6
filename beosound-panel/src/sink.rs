//! Event sinks for decoded input

use beosound_transport::InputEventSet;

use crate::error::PanelError;

/// Receives one decoded event set per input report
///
/// Button values are levels; a sink that needs press/release edges must
/// derive them itself. Wheel values are deltas and must be accumulated by the
/// sink if an absolute count is wanted.
pub trait EventSink {
    fn emit(&mut self, events: &InputEventSet) -> Result<(), PanelError>;
}

/// Sink that keeps every event set it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<InputEventSet>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, events: &InputEventSet) -> Result<(), PanelError> {
        self.events.push(*events);
        Ok(())
    }
}
