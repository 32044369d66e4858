use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::errors::PrefsError;
use super::model::UiPrefs;

/// Status describing how preferences were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum PrefsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading preferences from disk.
#[derive(Debug, Clone)]
pub(crate) struct PrefsLoad {
    prefs: UiPrefs,
    status: PrefsLoadStatus,
}

impl PrefsLoad {
    pub(crate) fn new(prefs: UiPrefs, status: PrefsLoadStatus) -> Self {
        Self { prefs, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (UiPrefs, PrefsLoadStatus) {
        (self.prefs, self.status)
    }
}

/// Change signal for the prefs file consumed by the poll watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PrefsFingerprint {
    modified: SystemTime,
    len: u64,
}

/// Durable store for UI preferences, backed by a single JSON file.
///
/// The path is held explicitly so tests can point several stores at one
/// shared temp file, standing in for independent running instances.
#[derive(Debug, Clone)]
pub(crate) struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn at_default_location() -> Self {
        Self::new(prefs_path())
    }

    /// Load preferences, falling back to defaults on a missing file or
    /// malformed content. Only real IO failures surface as errors.
    pub(crate) fn load(&self) -> Result<PrefsLoad, PrefsError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PrefsLoad::new(
                    UiPrefs::default(),
                    PrefsLoadStatus::Missing,
                ));
            },
            Err(err) => return Err(err.into()),
        };

        let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
            Ok(value) => value,
            Err(err) => {
                return Ok(PrefsLoad::new(
                    UiPrefs::default(),
                    PrefsLoadStatus::Invalid(format!("{err}")),
                ));
            },
        };

        Ok(PrefsLoad::new(
            UiPrefs::from_json(&parsed),
            PrefsLoadStatus::Loaded,
        ))
    }

    /// Persist preferences atomically so concurrent readers in other
    /// instances never observe a torn document.
    pub(crate) fn save(&self, prefs: &UiPrefs) -> Result<(), PrefsError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_string_pretty(prefs)?;
        write_atomic(&self.path, payload.as_bytes())?;

        Ok(())
    }

    /// Return the current change fingerprint, or `None` while the file
    /// does not exist.
    pub(crate) fn fingerprint(&self) -> Option<PrefsFingerprint> {
        let metadata = fs::metadata(&self.path).ok()?;
        let modified = metadata.modified().ok()?;

        Some(PrefsFingerprint {
            modified,
            len: metadata.len(),
        })
    }
}

fn prefs_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("crewdesk")
            .join("ui_prefs.json");
    }

    std::env::temp_dir().join("crewdesk").join("ui_prefs.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{PrefsLoadStatus, PrefsStore, UiPrefs};

    #[test]
    fn given_saved_flag_when_loaded_then_round_trip_matches() {
        let root = test_temp_dir("round_trip");
        let store = PrefsStore::new(root.join("ui_prefs.json"));

        for collapsed in [true, false] {
            let mut prefs = UiPrefs::default();
            prefs.set_sidebar_collapsed(collapsed);

            store.save(&prefs).expect("prefs should save successfully");
            let loaded =
                store.load().expect("prefs should load successfully");
            let (loaded_prefs, loaded_status) = loaded.into_parts();

            assert!(matches!(loaded_status, PrefsLoadStatus::Loaded));
            assert_eq!(loaded_prefs, prefs);
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_file_when_loaded_then_defaults_with_missing_status() {
        let root = test_temp_dir("missing");
        let store = PrefsStore::new(root.join("ui_prefs.json"));

        let loaded = store.load().expect("missing file should not error");
        let (loaded_prefs, loaded_status) = loaded.into_parts();

        assert_eq!(loaded_prefs, UiPrefs::default());
        assert!(matches!(loaded_status, PrefsLoadStatus::Missing));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_loaded_then_defaults_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("ui_prefs.json");
        fs::write(&path, "not json at all")
            .expect("invalid test payload should be written");
        let store = PrefsStore::new(path);

        let loaded = store
            .load()
            .expect("loading invalid prefs should not fail with io error");
        let (loaded_prefs, loaded_status) = loaded.into_parts();

        assert_eq!(loaded_prefs, UiPrefs::default());
        match loaded_status {
            PrefsLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    pub(crate) fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "crewdesk-prefs-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
