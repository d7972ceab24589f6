// BeoSound 5 Linux Driver - Shared Library
// Configuration, status store, virtual input device and input forwarding

pub mod config;
pub mod forward;
pub mod state;
pub mod virtual_device;

pub use config::DriverConfig;
pub use forward::ForwardStats;
pub use state::StatusStore;
pub use virtual_device::{VirtualDeviceError, VirtualPanel};
