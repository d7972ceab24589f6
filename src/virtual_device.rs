//! Virtual input device using evdev/uinput
//!
//! Republishes the panel's decoded input as a standard Linux input device:
//! the laser pointer as `ABS_X`, the wheels as `REL_Y`/`REL_Z` and the four
//! buttons as gamepad d-pad/select/mode keys.

use beosound_panel::{EventSink, InputEventSet, PanelError};
use beosound_transport::protocol::laser;
use evdev::{
    uinput::{VirtualDevice, VirtualDeviceBuilder},
    AbsInfo, AbsoluteAxisType, AttributeSet, EventType, InputEvent, Key, RelativeAxisType,
    UinputAbsSetup,
};
use thiserror::Error;
use tracing::trace;

/// Key codes for right, left, go, power
pub const BUTTON_KEYS: [Key; 4] = [
    Key::BTN_DPAD_RIGHT,
    Key::BTN_DPAD_LEFT,
    Key::BTN_SELECT,
    Key::BTN_MODE,
];

/// Axis carrying the laser position
pub const LASER_AXIS: AbsoluteAxisType = AbsoluteAxisType::ABS_X;
/// Axis carrying selection wheel deltas
pub const SELECTION_AXIS: RelativeAxisType = RelativeAxisType::REL_Y;
/// Axis carrying secondary wheel deltas
pub const SECONDARY_AXIS: RelativeAxisType = RelativeAxisType::REL_Z;

/// Errors from virtual device operations
#[derive(Debug, Error)]
pub enum VirtualDeviceError {
    #[error("Failed to create virtual device: {0}")]
    CreateDevice(#[source] std::io::Error),
    #[error("Failed to emit event: {0}")]
    EmitEvent(#[source] std::io::Error),
}

/// Virtual input device mirroring one panel
pub struct VirtualPanel {
    device: VirtualDevice,
    invert_wheels: bool,
}

impl VirtualPanel {
    /// Create the uinput device
    ///
    /// # Arguments
    /// * `name` - Device name (shown in `evtest` and input settings)
    /// * `invert_wheels` - Negate wheel deltas before emitting
    pub fn new(name: &str, invert_wheels: bool) -> Result<Self, VirtualDeviceError> {
        let mut keys = AttributeSet::<Key>::new();
        for key in BUTTON_KEYS {
            keys.insert(key);
        }

        let mut rel_axes = AttributeSet::<RelativeAxisType>::new();
        rel_axes.insert(SELECTION_AXIS);
        rel_axes.insert(SECONDARY_AXIS);

        let laser_setup = UinputAbsSetup::new(
            LASER_AXIS,
            AbsInfo::new(0, i32::from(laser::MIN), i32::from(laser::MAX), 0, 0, 0),
        );

        let device = VirtualDeviceBuilder::new()
            .map_err(VirtualDeviceError::CreateDevice)?
            .name(name)
            .with_keys(&keys)
            .map_err(VirtualDeviceError::CreateDevice)?
            .with_relative_axes(&rel_axes)
            .map_err(VirtualDeviceError::CreateDevice)?
            .with_absolute_axis(&laser_setup)
            .map_err(VirtualDeviceError::CreateDevice)?
            .build()
            .map_err(VirtualDeviceError::CreateDevice)?;

        Ok(Self {
            device,
            invert_wheels,
        })
    }

    /// Get the device path (e.g., /dev/input/eventX)
    pub fn device_path(&mut self) -> Option<std::path::PathBuf> {
        self.device
            .enumerate_dev_nodes_blocking()
            .ok()?
            .next()?
            .ok()
    }

    /// Emit one decoded event set (a SYN_REPORT is appended by evdev)
    pub fn send(&mut self, events: &InputEventSet) -> Result<(), VirtualDeviceError> {
        let batch = to_input_events(events, self.invert_wheels);
        trace!("Emitting {} input events", batch.len());
        self.device
            .emit(&batch)
            .map_err(VirtualDeviceError::EmitEvent)
    }
}

impl EventSink for VirtualPanel {
    fn emit(&mut self, events: &InputEventSet) -> Result<(), PanelError> {
        self.send(events)
            .map_err(|e| PanelError::Sink(e.to_string()))
    }
}

/// Translate one event set into evdev events.
///
/// Buttons and the laser axis are always reported (the kernel drops repeats).
/// Zero wheel deltas are skipped.
pub fn to_input_events(events: &InputEventSet, invert_wheels: bool) -> Vec<InputEvent> {
    let buttons = [
        events.buttons.right,
        events.buttons.left,
        events.buttons.go,
        events.buttons.power,
    ];

    let mut batch: Vec<InputEvent> = BUTTON_KEYS
        .iter()
        .zip(buttons)
        .map(|(key, pressed)| InputEvent::new(EventType::KEY, key.code(), i32::from(pressed)))
        .collect();

    batch.push(InputEvent::new(
        EventType::ABSOLUTE,
        LASER_AXIS.0,
        i32::from(events.laser),
    ));

    let sign = if invert_wheels { -1 } else { 1 };
    for (axis, delta) in [
        (SELECTION_AXIS, events.selection_wheel),
        (SECONDARY_AXIS, events.secondary_wheel),
    ] {
        if delta != 0 {
            batch.push(InputEvent::new(
                EventType::RELATIVE,
                axis.0,
                sign * i32::from(delta),
            ));
        }
    }

    batch
}
