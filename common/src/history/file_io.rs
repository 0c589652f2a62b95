use std::io::ErrorKind;
use std::path::Path;

use super::HISTORY_VERSION;
use super::record::MatchHistory;

#[derive(Debug)]
pub enum HistoryError {
    Io(std::io::Error),
    Decode(serde_yaml_ng::Error),
    Encode(serde_yaml_ng::Error),
    UnsupportedVersion { found: u8, expected: u8 },
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "IO error: {}", e),
            HistoryError::Decode(e) => write!(f, "Failed to read history: {}", e),
            HistoryError::Encode(e) => write!(f, "Failed to write history: {}", e),
            HistoryError::UnsupportedVersion { found, expected } => {
                write!(f, "Unsupported history version: found {}, expected {}", found, expected)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<std::io::Error> for HistoryError {
    fn from(e: std::io::Error) -> Self {
        HistoryError::Io(e)
    }
}

/// Missing file means no games played yet.
pub fn load_history(path: &Path) -> Result<MatchHistory, HistoryError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(MatchHistory::default()),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(MatchHistory::default());
    }

    let history: MatchHistory =
        serde_yaml_ng::from_str(&content).map_err(HistoryError::Decode)?;
    if history.version != HISTORY_VERSION {
        return Err(HistoryError::UnsupportedVersion {
            found: history.version,
            expected: HISTORY_VERSION,
        });
    }

    Ok(history)
}

pub fn save_history(path: &Path, history: &MatchHistory) -> Result<(), HistoryError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_yaml_ng::to_string(history).map_err(HistoryError::Encode)?;
    std::fs::write(path, content)?;
    Ok(())
}
