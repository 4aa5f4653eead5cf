use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{KEYSTORE_FILE, WALLET_DIR};
use crate::error::KeystoreError;

/// On-disk record: the minimal state needed to rebuild the active wallet.
/// Keys and the address are re-derived on load, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeystoreRecord {
    pub mnemonic: String,
    pub algo: String,
}

/// Single-file JSON keystore. Saves overwrite the file wholesale; there is
/// no rotation, locking or encryption.
pub struct Keystore {
    path: PathBuf,
}

impl Keystore {
    /// Keystore at the default location, `~/.polysig/keystore.json`.
    pub fn open_default() -> Result<Self, KeystoreError> {
        let home = dirs::home_dir().ok_or(KeystoreError::NoHomeDir)?;
        Ok(Self::at(home.join(WALLET_DIR).join(KEYSTORE_FILE)))
    }

    /// Keystore at an explicit path (used by tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the record, replacing any previous keystore.
    pub fn save(&self, record: &KeystoreRecord) -> Result<(), KeystoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
                set_secure_permissions(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        set_secure_file_permissions(&self.path)?;
        Ok(())
    }

    /// Read the record if a usable one exists. A missing file is the normal
    /// first-run case. An unreadable or malformed file is logged and treated
    /// the same way: startup must never fail on bad local state.
    pub fn load(&self) -> Option<KeystoreRecord> {
        if !self.path.exists() {
            return None;
        }
        match self.read_record() {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!(
                    "ignoring unusable keystore at {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    fn read_record(&self) -> Result<KeystoreRecord, KeystoreError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn set_secure_permissions(path: &Path) -> Result<(), KeystoreError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

fn set_secure_file_permissions(path: &Path) -> Result<(), KeystoreError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record() -> KeystoreRecord {
        KeystoreRecord {
            mnemonic: "legal winner thank year wave sausage worth useful legal winner thank yellow"
                .to_string(),
            algo: "ed25519".to_string(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let keystore = Keystore::at(dir.path().join("keystore.json"));
        keystore.save(&record()).unwrap();
        assert_eq!(keystore.load(), Some(record()));
    }

    #[test]
    fn missing_file_loads_as_absent() {
        let dir = TempDir::new().unwrap();
        let keystore = Keystore::at(dir.path().join("keystore.json"));
        assert_eq!(keystore.load(), None);
    }

    #[test]
    fn malformed_json_loads_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keystore.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Keystore::at(&path).load(), None);
    }

    #[test]
    fn missing_fields_load_as_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("keystore.json");
        std::fs::write(&path, r#"{"mnemonic": "only half a record"}"#).unwrap();
        assert_eq!(Keystore::at(&path).load(), None);
    }

    #[test]
    fn save_creates_the_parent_directory() {
        let dir = TempDir::new().unwrap();
        let keystore = Keystore::at(dir.path().join("nested").join("keystore.json"));
        keystore.save(&record()).unwrap();
        assert!(keystore.path().exists());
    }

    #[test]
    fn save_overwrites_the_previous_record() {
        let dir = TempDir::new().unwrap();
        let keystore = Keystore::at(dir.path().join("keystore.json"));
        keystore.save(&record()).unwrap();
        let replacement = KeystoreRecord {
            mnemonic: record().mnemonic,
            algo: "schnorr".to_string(),
        };
        keystore.save(&replacement).unwrap();
        assert_eq!(keystore.load(), Some(replacement));
    }
}
