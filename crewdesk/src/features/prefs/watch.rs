use super::model::UiPrefs;
use super::storage::{PrefsFingerprint, PrefsLoadStatus, PrefsStore};

/// Observes prefs writes made by other running instances.
///
/// The watcher fingerprints the whole backing file, so any write — even
/// one that leaves the sidebar entry untouched — triggers a re-read of
/// the full document. Callers filter by divergence, not the watcher.
#[derive(Debug)]
pub(crate) struct PrefsWatcher {
    last: Option<PrefsFingerprint>,
}

impl PrefsWatcher {
    pub(crate) fn new(initial: Option<PrefsFingerprint>) -> Self {
        Self { last: initial }
    }

    /// Return the freshly loaded preferences when the backing file
    /// changed since the previous poll, `None` otherwise. A removed file
    /// is not republished; the last observed value stays in effect.
    pub(crate) fn poll(&mut self, store: &PrefsStore) -> Option<UiPrefs> {
        let current = store.fingerprint();
        if current == self.last {
            return None;
        }
        self.last = current;

        let load = match store.load() {
            Ok(load) => load,
            Err(err) => {
                log::warn!("prefs reload failed: {err}");
                return None;
            },
        };
        let (prefs, status) = load.into_parts();
        if matches!(status, PrefsLoadStatus::Missing) {
            return None;
        }

        Some(prefs)
    }

    /// Advance past the store's current state without republishing.
    ///
    /// Called after this instance's own save completes, mirroring the
    /// rule that a writer never observes its own change notification.
    pub(crate) fn mark_current(&mut self, store: &PrefsStore) {
        self.last = store.fingerprint();
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::super::storage::tests::test_temp_dir;
    use super::{PrefsStore, PrefsWatcher, UiPrefs};

    #[test]
    fn given_write_by_other_instance_when_polled_then_new_prefs_returned() {
        let root = test_temp_dir("cross_instance");
        let path = root.join("ui_prefs.json");
        let writer = PrefsStore::new(path.clone());
        let reader = PrefsStore::new(path);
        let mut watcher = PrefsWatcher::new(reader.fingerprint());

        let mut prefs = UiPrefs::default();
        prefs.set_sidebar_collapsed(true);
        writer.save(&prefs).expect("prefs should save successfully");

        let observed = watcher.poll(&reader);

        assert_eq!(observed, Some(prefs));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unchanged_file_when_polled_again_then_nothing_is_republished() {
        let root = test_temp_dir("no_duplicates");
        let path = root.join("ui_prefs.json");
        let store = PrefsStore::new(path);
        store
            .save(&UiPrefs::default())
            .expect("prefs should save successfully");
        let mut watcher = PrefsWatcher::new(None);

        assert!(watcher.poll(&store).is_some());
        assert!(watcher.poll(&store).is_none());
        assert!(watcher.poll(&store).is_none());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_own_save_when_marked_current_then_poll_stays_quiet() {
        let root = test_temp_dir("own_write");
        let path = root.join("ui_prefs.json");
        let store = PrefsStore::new(path);
        let mut watcher = PrefsWatcher::new(store.fingerprint());

        let mut prefs = UiPrefs::default();
        prefs.set_sidebar_collapsed(true);
        store.save(&prefs).expect("prefs should save successfully");
        watcher.mark_current(&store);

        assert!(watcher.poll(&store).is_none());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }
}
