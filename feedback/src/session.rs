//! Explicit session state owned by the presentation layer.
//!
//! The core pipeline is stateless between calls; whatever scenario,
//! difficulty, and draft prompt the user is working with lives in a
//! [`SessionState`] that the presentation layer persists and passes into
//! core calls by value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::scenario::Difficulty;

/// Errors from session persistence.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session state corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The user's current training session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Selected difficulty tier.
    pub difficulty: Difficulty,
    /// Scenario currently being practiced, if one was drawn.
    pub scenario: Option<String>,
    /// Last submitted prompt, so the user can pick up where they left off.
    pub prompt: Option<String>,
    /// When this state was last saved.
    pub saved_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            scenario: None,
            prompt: None,
            saved_at: Utc::now(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Difficulty::Beginner)
    }
}

/// Save session state as pretty-printed JSON.
pub fn save_session_state(state: &SessionState, path: &Path) -> Result<(), SessionError> {
    let mut state = state.clone();
    state.saved_at = Utc::now();
    let json = serde_json::to_string_pretty(&state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load session state from a JSON file; `Ok(None)` when none exists yet.
pub fn load_session_state(path: &Path) -> Result<Option<SessionState>, SessionError> {
    if !path.exists() {
        return Ok(None);
    }
    let json = std::fs::read_to_string(path)?;
    let state: SessionState = serde_json::from_str(&json)?;
    Ok(Some(state))
}

/// Delete the persisted session file, if any.
pub fn clear_session_state(path: &Path) -> Result<(), SessionError> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut state = SessionState::new(Difficulty::Intermediate);
        state.scenario = Some("Write a case study.".to_string());
        state.prompt = Some("Draft it with three sections.".to_string());

        save_session_state(&state, &path).unwrap();
        let loaded = load_session_state(&path).unwrap().unwrap();

        assert_eq!(loaded.difficulty, Difficulty::Intermediate);
        assert_eq!(loaded.scenario, state.scenario);
        assert_eq!(loaded.prompt, state.prompt);
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_session_state(&dir.path().join("missing.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_corrupt_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            load_session_state(&path),
            Err(SessionError::Corrupt(_))
        ));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        save_session_state(&SessionState::default(), &path).unwrap();
        clear_session_state(&path).unwrap();
        clear_session_state(&path).unwrap();
        assert!(!path.exists());
    }
}
