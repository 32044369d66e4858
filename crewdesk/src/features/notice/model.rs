/// Visual category of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Success,
    Error,
}

/// A transient notice shown in the corner of the window.
#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub(crate) id: u64,
    pub(crate) kind: NoticeKind,
    pub(crate) title: String,
    pub(crate) detail: Option<String>,
    pub(crate) remaining_ms: u64,
}
