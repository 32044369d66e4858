/// Poll cadence for cross-instance prefs changes.
pub(crate) const PREFS_WATCH_TICK_MS: u64 = 750;

/// Events handled by the prefs feature reducer.
#[derive(Debug, Clone)]
pub(crate) enum PrefsEvent {
    ToggleCollapsed,
    WatchTick,
    SaveCompleted,
    SaveFailed(String),
}
