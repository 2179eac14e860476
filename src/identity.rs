//! Participant identity provider
//!
//! The participant identifier is an opaque string key persisted
//! locally. Absence means "no personalization possible", never an
//! error.

use std::path::PathBuf;
use tracing::debug;

/// Source of the current participant's opaque identifier.
pub trait IdentityProvider {
    /// The participant id, or `None` when identity is unavailable.
    fn participant_id(&self) -> Option<String>;
}

/// Fixed identifier, e.g. supplied on the command line.
pub struct FixedIdentity(pub String);

impl IdentityProvider for FixedIdentity {
    fn participant_id(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No identity available.
pub struct AnonymousIdentity;

impl IdentityProvider for AnonymousIdentity {
    fn participant_id(&self) -> Option<String> {
        None
    }
}

/// File-backed identity: reads a persisted id, generating and storing
/// a fresh one on first use. Storage failures degrade to `None` rather
/// than erroring.
pub struct FileIdentity {
    path: PathBuf,
}

impl FileIdentity {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location under the platform data directory.
    pub fn default_location() -> Option<Self> {
        dirs::data_local_dir().map(|d| Self::new(d.join("brewsight").join("participant-id")))
    }
}

impl IdentityProvider for FileIdentity {
    fn participant_id(&self) -> Option<String> {
        if let Ok(existing) = std::fs::read_to_string(&self.path) {
            let trimmed = existing.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }

        let generated = uuid::Uuid::new_v4().simple().to_string();
        if let Some(parent) = self.path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return None;
            }
        }
        match std::fs::write(&self.path, &generated) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Generated new participant id");
                Some(generated)
            }
            Err(_) => None,
        }
    }
}
