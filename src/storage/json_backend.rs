use std::{fs, path::PathBuf};

use tracing::debug;

use crate::{
    core::utils::{ensure_dir, write_atomic, PathResolver},
    domain::snapshot::{self, AppSnapshot},
    errors::{PocketError, Result},
};

use super::SnapshotStore;

const SNAPSHOT_EXTENSION: &str = "json";
const ESCAPE: char = '_';

/// One pretty-printed JSON file per key under `<root>/snapshots`.
#[derive(Clone)]
pub struct JsonSnapshotStore {
    snapshots_dir: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let app_root = PathResolver::resolve_base(root);
        let snapshots_dir = PathResolver::snapshot_dir_in(&app_root);
        ensure_dir(&snapshots_dir)?;
        Ok(Self { snapshots_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn snapshot_path(&self, key: &str) -> PathBuf {
        self.snapshots_dir
            .join(format!("{}.{}", canonical_name(key), SNAPSHOT_EXTENSION))
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self, key: &str) -> Result<Option<AppSnapshot>> {
        let path = self.snapshot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        let parsed = snapshot::from_json(&data).map_err(|err| {
            PocketError::StorageError(format!("{}: {}", path.display(), err))
        })?;
        Ok(Some(parsed))
    }

    fn save(&self, key: &str, snapshot: &AppSnapshot) -> Result<()> {
        let path = self.snapshot_path(key);
        let json = snapshot::to_json(snapshot)?;
        write_atomic(&path, &json)?;
        debug!(path = %path.display(), "snapshot saved");
        Ok(())
    }
}

/// File stem for `key`. Lowercase ASCII letters, digits and `-` pass through;
/// every other byte becomes `_` plus two hex digits, so distinct keys never
/// share a file. The empty key maps to a bare `_`.
fn canonical_name(key: &str) -> String {
    if key.is_empty() {
        return ESCAPE.to_string();
    }
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'-' => name.push(char::from(byte)),
            _ => {
                name.push(ESCAPE);
                name.push_str(&hex::encode([byte]));
            }
        }
    }
    name
}
