use crate::error::CoreError;
use crate::model::{Registration, Tournament, TournamentRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub trait TournamentStore: Send + Sync {
    /// # Errors
    /// Returns `NotFound` for an unknown id.
    fn tournament(&self, id: &str) -> Result<Tournament, CoreError>;

    /// Registrations for a tournament in submission order.
    ///
    /// # Errors
    /// Returns `NotFound` if the tournament is unknown.
    fn registrations(&self, tournament_id: &str) -> Result<Vec<Registration>, CoreError>;
}

/// On-disk document shape for `JsonStore`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct StoreDocument {
    #[serde(default)]
    pub tournaments: Vec<TournamentRecord>,
    #[serde(default)]
    pub registrations: Vec<Registration>,
}

/// Read-only store over a JSON document of tournaments and registrations.
/// Tournament records are checked when the store loads, so a bad record
/// fails early instead of at card time.
#[derive(Clone, Debug)]
pub struct JsonStore {
    tournaments: Vec<Tournament>,
    registrations: Vec<Registration>,
}

impl JsonStore {
    /// # Errors
    /// Returns an error if a tournament record cannot be converted.
    pub fn from_document(doc: StoreDocument) -> Result<Self, CoreError> {
        let tournaments = doc
            .tournaments
            .into_iter()
            .map(Tournament::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            tournaments,
            registrations: doc.registrations,
        })
    }

    /// # Errors
    /// Returns an error for malformed JSON or an invalid tournament record.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Other(format!("read {}: {e}", path.display())))?;
        let store = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            tournaments = store.tournaments.len(),
            registrations = store.registrations.len(),
            "loaded store"
        );
        Ok(store)
    }

    #[must_use]
    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }
}

impl TournamentStore for JsonStore {
    fn tournament(&self, id: &str) -> Result<Tournament, CoreError> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("tournament {id}")))
    }

    fn registrations(&self, tournament_id: &str) -> Result<Vec<Registration>, CoreError> {
        if !self.tournaments.iter().any(|t| t.id == tournament_id) {
            return Err(CoreError::NotFound(format!("tournament {tournament_id}")));
        }
        Ok(self
            .registrations
            .iter()
            .filter(|r| r.tournament_id == tournament_id)
            .cloned()
            .collect())
    }
}
