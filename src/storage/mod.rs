pub mod json_backend;

use crate::{domain::snapshot::AppSnapshot, errors::Result};

/// Whole-snapshot persistence. Implementations replace the stored blob on
/// every save; there is no partial update.
pub trait SnapshotStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<AppSnapshot>>;
    fn save(&self, key: &str, snapshot: &AppSnapshot) -> Result<()>;

    /// A fresh snapshot (placeholder members, empty lists) when nothing is stored under `key`.
    fn load_or_default(&self, key: &str) -> Result<AppSnapshot> {
        Ok(self.load(key)?.unwrap_or_default())
    }
}

pub use json_backend::JsonSnapshotStore;
