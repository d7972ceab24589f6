//! Last transmitted status, kept between CLI invocations
//!
//! Every output command opens its own panel session. The status the previous
//! session put on the wire is stored as TOML beside the config file, and the
//! next session starts from it instead of the configured initial state.

use std::path::{Path, PathBuf};

use beosound_panel::{IndicatorMode, Panel, PanelError, StatusByte};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// File name of the status store, placed in the config directory
pub const STATUS_FILE: &str = "status.toml";

/// On-disk form of a status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SavedStatus {
    screen_on: bool,
    indicator: IndicatorMode,
}

impl From<StatusByte> for SavedStatus {
    fn from(status: StatusByte) -> Self {
        Self {
            screen_on: status.screen_on(),
            indicator: status.indicator(),
        }
    }
}

/// Persists the last status that reached the panel
#[derive(Debug, Clone)]
pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store living in the same directory as `config_path`
    pub fn beside(config_path: &Path) -> Self {
        let dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        Self::new(dir.join(STATUS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored status, `None` if nothing was stored yet
    pub fn load(&self) -> anyhow::Result<Option<StatusByte>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let saved: SavedStatus = toml::from_str(&content)?;
        Ok(Some(StatusByte::new(saved.screen_on, saved.indicator)))
    }

    /// Write `status` to the store
    pub fn save(&self, status: StatusByte) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&SavedStatus::from(status))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Status a new session should start from: the stored one, else `fallback`
    pub fn seed(&self, fallback: StatusByte) -> StatusByte {
        match self.load() {
            Ok(Some(status)) => {
                debug!("Resuming from stored status {}", status);
                status
            }
            Ok(None) => fallback,
            Err(e) => {
                warn!(
                    "Ignoring unreadable status file {}: {}",
                    self.path.display(),
                    e
                );
                fallback
            }
        }
    }

    /// Run one output request on `panel` and store the resulting status once
    /// it has been transmitted. A failed transmission leaves the store as it was.
    pub fn apply<F>(&self, panel: &Panel, request: F) -> Result<StatusByte, PanelError>
    where
        F: FnOnce(&Panel) -> Result<(), PanelError>,
    {
        request(panel)?;
        let status = panel.status();
        if let Err(e) = self.save(status) {
            warn!("Could not store status in {}: {}", self.path.display(), e);
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beosound_transport::MemoryTransport;
    use std::sync::Arc;

    fn store() -> (tempfile::TempDir, StatusStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = StatusStore::beside(&dir.path().join("config.toml"));
        (dir, store)
    }

    /// One CLI invocation: a fresh session seeded from the store
    fn session(store: &StatusStore, transport: &Arc<MemoryTransport>) -> Panel {
        Panel::with_status(transport.clone(), store.seed(StatusByte::default()))
    }

    #[test]
    fn test_beside_config() {
        let store = StatusStore::beside(Path::new("/etc/beosound5/config.toml"));
        assert_eq!(store.path(), Path::new("/etc/beosound5/status.toml"));
    }

    #[test]
    fn test_missing_file_uses_fallback() {
        let (_dir, store) = store();
        assert_eq!(store.load().unwrap(), None);
        let fallback = StatusByte::new(false, IndicatorMode::Solid);
        assert_eq!(store.seed(fallback), fallback);
    }

    #[test]
    fn test_unreadable_file_uses_fallback() {
        let (_dir, store) = store();
        std::fs::write(store.path(), "indicator = \"strobe\"\n").unwrap();
        assert!(store.load().is_err());
        assert_eq!(store.seed(StatusByte::default()), StatusByte::default());
    }

    #[test]
    fn test_indicator_survives_later_screen_change() {
        let (_dir, store) = store();
        let transport = Arc::new(MemoryTransport::new());

        let first = session(&store, &transport);
        store
            .apply(&first, |panel| panel.set_indicator(IndicatorMode::Blink))
            .unwrap();

        let second = session(&store, &transport);
        let status = store
            .apply(&second, |panel| panel.set_screen(false))
            .unwrap();

        assert_eq!(status, StatusByte::new(false, IndicatorMode::Blink));
        assert_eq!(transport.sent_statuses(), vec![0x50, 0x10]);
        assert_eq!(store.load().unwrap(), Some(status));
    }

    #[test]
    fn test_failed_transmission_not_stored() {
        let (_dir, store) = store();
        let transport = Arc::new(MemoryTransport::new());

        let first = session(&store, &transport);
        store
            .apply(&first, |panel| panel.set_indicator(IndicatorMode::Solid))
            .unwrap();

        transport.set_fail_sends(true);
        let second = session(&store, &transport);
        assert!(store.apply(&second, |panel| panel.set_screen(false)).is_err());

        transport.set_fail_sends(false);
        let third = session(&store, &transport);
        assert_eq!(third.status(), StatusByte::new(true, IndicatorMode::Solid));
    }
}
