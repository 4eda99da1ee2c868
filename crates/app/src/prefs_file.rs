//! Persistent viewer preferences: minimap zoom and visibility.

use directories::ProjectDirs;
use maze_core::GameSession;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub const PREFS_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ViewerPrefsFile {
    pub format_version: u32,
    pub minimap_zoom: u32,
    pub show_minimap: bool,
}

impl ViewerPrefsFile {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("viewer_prefs.json");
            path
        })
    }

    pub fn from_session(session: &GameSession) -> Self {
        Self {
            format_version: PREFS_FORMAT_VERSION,
            minimap_zoom: session.zoom().value(),
            show_minimap: session.show_minimap(),
        }
    }

    /// Zoom goes through the session's clamp, so a hand-edited file cannot escape the band.
    pub fn apply_to(&self, session: &mut GameSession) {
        session.zoom_mut().set(self.minimap_zoom);
        session.set_show_minimap(self.show_minimap);
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let prefs: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if prefs.format_version != PREFS_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported prefs format version {}", prefs.format_version),
            ));
        }
        Ok(prefs)
    }
}
