use iced::Task;

use super::event::PrefsEvent;
use super::model::UiPrefs;
use super::storage::{PrefsLoadStatus, PrefsStore};
use super::watch::PrefsWatcher;
use crate::app::Event as AppEvent;
use crate::features::Feature;

/// Prefs feature root: the persisted collapse flag, its store, and the
/// cross-instance watcher.
#[derive(Debug)]
pub(crate) struct PrefsFeature {
    store: PrefsStore,
    watcher: PrefsWatcher,
    prefs: UiPrefs,
}

impl PrefsFeature {
    /// Load preferences from the default store location, falling back to
    /// defaults when the file is missing or unreadable.
    pub(crate) fn load() -> Self {
        Self::with_store(PrefsStore::at_default_location())
    }

    /// Construct the feature over an explicit store.
    pub(crate) fn with_store(store: PrefsStore) -> Self {
        let prefs = match store.load() {
            Ok(load) => {
                let (prefs, status) = load.into_parts();
                if let PrefsLoadStatus::Invalid(message) = &status {
                    log::warn!("prefs file invalid: {message}");
                }
                prefs
            },
            Err(err) => {
                log::warn!("prefs read failed: {err}");
                UiPrefs::default()
            },
        };
        let watcher = PrefsWatcher::new(store.fingerprint());

        Self {
            store,
            watcher,
            prefs,
        }
    }

    /// Return whether the docked sidebar renders as the narrow rail.
    pub(crate) fn sidebar_collapsed(&self) -> bool {
        self.prefs.sidebar_collapsed()
    }
}

impl Feature for PrefsFeature {
    type Event = PrefsEvent;
    type Ctx<'a> = ();

    /// Reduce a prefs event into state updates and persistence tasks.
    fn reduce<'a>(
        &mut self,
        event: PrefsEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            PrefsEvent::ToggleCollapsed => {
                self.prefs
                    .set_sidebar_collapsed(!self.prefs.sidebar_collapsed());
                request_save(self.store.clone(), self.prefs)
            },
            PrefsEvent::WatchTick => {
                if let Some(prefs) = self.watcher.poll(&self.store) {
                    if prefs != self.prefs {
                        self.prefs = prefs;
                    }
                }
                Task::none()
            },
            PrefsEvent::SaveCompleted => {
                self.watcher.mark_current(&self.store);
                Task::none()
            },
            PrefsEvent::SaveFailed(message) => {
                log::warn!("prefs save failed: {message}");
                Task::none()
            },
        }
    }
}

fn request_save(store: PrefsStore, prefs: UiPrefs) -> Task<AppEvent> {
    Task::perform(
        async move {
            store.save(&prefs).map_err(|err| format!("{err}"))
        },
        |result| match result {
            Ok(()) => AppEvent::Prefs(PrefsEvent::SaveCompleted),
            Err(message) => AppEvent::Prefs(PrefsEvent::SaveFailed(message)),
        },
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::super::storage::tests::test_temp_dir;
    use super::{PrefsEvent, PrefsFeature, PrefsStore, UiPrefs};
    use crate::features::Feature;

    #[test]
    fn given_toggle_event_when_reduced_then_collapse_flag_flips() {
        let root = test_temp_dir("toggle");
        let mut feature =
            PrefsFeature::with_store(PrefsStore::new(root.join("p.json")));
        assert!(!feature.sidebar_collapsed());

        let _task = feature.reduce(PrefsEvent::ToggleCollapsed, &());

        assert!(feature.sidebar_collapsed());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_other_instance_write_when_tick_reduced_then_cache_converges() {
        let root = test_temp_dir("converge");
        let path = root.join("p.json");
        let mut feature =
            PrefsFeature::with_store(PrefsStore::new(path.clone()));
        assert!(!feature.sidebar_collapsed());

        let other_instance = PrefsStore::new(path);
        let mut prefs = UiPrefs::default();
        prefs.set_sidebar_collapsed(true);
        other_instance
            .save(&prefs)
            .expect("prefs should save successfully");

        let _task = feature.reduce(PrefsEvent::WatchTick, &());

        assert!(feature.sidebar_collapsed());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_prefs_file_when_loaded_then_defaults_are_used() {
        let root = test_temp_dir("defaults");
        let feature =
            PrefsFeature::with_store(PrefsStore::new(root.join("p.json")));

        assert!(!feature.sidebar_collapsed());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }
}
