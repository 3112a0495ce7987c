//! The single application snapshot the collaborator loads and stores whole.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::{
        common::find_by_id, household::FamilyData, period::BudgetPeriod,
        settlement::ContributionPool,
    },
    errors::Result,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Personal mode: the running period plus every period started before it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonalData {
    #[serde(default)]
    pub current_period: Option<BudgetPeriod>,
    #[serde(default)]
    pub history: Vec<BudgetPeriod>,
}

impl PersonalData {
    /// Finds a period by id, checking the current slot before the history.
    pub fn period(&self, id: Uuid) -> Option<&BudgetPeriod> {
        self.current_period
            .as_ref()
            .filter(|period| period.id == id)
            .or_else(|| find_by_id(&self.history, id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSnapshot {
    #[serde(default = "AppSnapshot::schema_version_default")]
    pub schema_version: u8,
    #[serde(default)]
    pub personal: PersonalData,
    #[serde(default)]
    pub family: FamilyData,
    #[serde(default)]
    pub mess: ContributionPool,
}

impl AppSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            personal: PersonalData::default(),
            family: FamilyData::default(),
            mess: ContributionPool::default(),
        }
    }
}

/// Serializes a snapshot to pretty-printed JSON.
pub fn to_json(snapshot: &AppSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parses a snapshot blob, filling absent sections with their defaults.
pub fn from_json(data: &str) -> Result<AppSnapshot> {
    Ok(serde_json::from_str(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_has_placeholder_members() {
        let snapshot = AppSnapshot::new();
        assert_eq!(snapshot.schema_version, 1);
        assert!(snapshot.personal.current_period.is_none());
        assert!(snapshot.personal.history.is_empty());
        assert_eq!(snapshot.family.members.len(), 2);
        assert_eq!(snapshot.mess.members.len(), 2);
        assert!(snapshot.mess.entries.is_empty());
    }

    #[test]
    fn partial_blob_fills_defaults() {
        let snapshot = from_json(r#"{ "personal": { "history": [] } }"#).expect("parse");
        assert_eq!(snapshot.schema_version, 1);
        assert_eq!(snapshot.family.members.len(), 2);
        assert_eq!(snapshot.mess.members.len(), 2);
    }

    #[test]
    fn malformed_blob_is_a_storage_error() {
        let err = from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::errors::PocketError::StorageError(_)));
    }
}
