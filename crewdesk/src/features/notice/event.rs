use super::model::NoticeKind;

/// Expiry tick cadence while notices are on screen.
pub(crate) const NOTICE_TICK_MS: u64 = 250;

/// Events handled by the notice feature reducer.
#[derive(Debug, Clone)]
pub(crate) enum NoticeEvent {
    Push {
        kind: NoticeKind,
        title: String,
        detail: Option<String>,
    },
    Dismiss {
        id: u64,
    },
    Tick,
}
