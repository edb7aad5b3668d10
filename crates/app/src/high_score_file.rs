//! The one persisted value: the local high score, stored as a small JSON
//! file and written atomically (tmp + rename).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HighScoreFile {
    pub format_version: u32,
    pub high_score: u32,
}

impl HighScoreFile {
    pub fn new(high_score: u32) -> Self {
        Self { format_version: 1, high_score }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("high_score.json");
            path
        })
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
        serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Read the stored high score; a missing or unreadable file counts as zero.
pub fn load_or_zero(path: &Path) -> u32 {
    HighScoreFile::load(path).map_or(0, |file| file.high_score)
}
