use iced::Task;

use super::event::{NOTICE_TICK_MS, NoticeEvent};
use super::model::{Notice, NoticeKind};
use crate::app::Event as AppEvent;
use crate::features::Feature;

const NOTICE_LIFETIME_MS: u64 = 4000;

/// Notice feature root: the queue of transient notices.
#[derive(Debug, Default)]
pub(crate) struct NoticeFeature {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeFeature {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return the notices currently on screen, oldest first.
    pub(crate) fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Return whether the expiry tick subscription should be alive.
    pub(crate) fn has_active(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Build a push event for a success notice.
    pub(crate) fn success(title: &str) -> NoticeEvent {
        NoticeEvent::Push {
            kind: NoticeKind::Success,
            title: String::from(title),
            detail: None,
        }
    }

    /// Build a push event for an error notice with a detail line.
    pub(crate) fn error(title: &str, detail: String) -> NoticeEvent {
        NoticeEvent::Push {
            kind: NoticeKind::Error,
            title: String::from(title),
            detail: Some(detail),
        }
    }
}

impl Feature for NoticeFeature {
    type Event = NoticeEvent;
    type Ctx<'a> = ();

    /// Reduce a notice event into queue updates.
    fn reduce<'a>(
        &mut self,
        event: NoticeEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            NoticeEvent::Push {
                kind,
                title,
                detail,
            } => {
                let id = self.next_id;
                self.next_id += 1;
                self.notices.push(Notice {
                    id,
                    kind,
                    title,
                    detail,
                    remaining_ms: NOTICE_LIFETIME_MS,
                });
                Task::none()
            },
            NoticeEvent::Dismiss { id } => {
                self.notices.retain(|notice| notice.id != id);
                Task::none()
            },
            NoticeEvent::Tick => {
                for notice in &mut self.notices {
                    notice.remaining_ms =
                        notice.remaining_ms.saturating_sub(NOTICE_TICK_MS);
                }
                self.notices.retain(|notice| notice.remaining_ms > 0);
                Task::none()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NOTICE_LIFETIME_MS, NOTICE_TICK_MS};
    use super::{NoticeEvent, NoticeFeature};
    use crate::features::Feature;

    #[test]
    fn given_pushed_notice_when_lifetime_elapses_then_notice_expires() {
        let mut feature = NoticeFeature::new();
        let _task =
            feature.reduce(NoticeFeature::success("Profile updated"), &());
        assert!(feature.has_active());

        let ticks = NOTICE_LIFETIME_MS / NOTICE_TICK_MS;
        for _ in 0..ticks {
            let _task = feature.reduce(NoticeEvent::Tick, &());
        }

        assert!(!feature.has_active());
    }

    #[test]
    fn given_dismiss_event_when_reduced_then_only_that_notice_is_removed() {
        let mut feature = NoticeFeature::new();
        let _task = feature.reduce(NoticeFeature::success("first"), &());
        let _task = feature.reduce(
            NoticeFeature::error("second", String::from("detail")),
            &(),
        );
        let first_id = feature.notices()[0].id;

        let _task =
            feature.reduce(NoticeEvent::Dismiss { id: first_id }, &());

        assert_eq!(feature.notices().len(), 1);
        assert_eq!(feature.notices()[0].title, "second");
    }
}
