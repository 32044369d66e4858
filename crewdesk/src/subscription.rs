use std::time::Duration;

use iced::{Subscription, window};

use super::{App, Event};
use crate::features::notice::{NOTICE_TICK_MS, NoticeEvent};
use crate::features::prefs::{PREFS_WATCH_TICK_MS, PrefsEvent};

pub(super) fn subscription(app: &App) -> Subscription<Event> {
    let win_subs = window::events().map(|(_id, event)| Event::Window(event));
    let prefs_watch =
        iced::time::every(Duration::from_millis(PREFS_WATCH_TICK_MS))
            .map(|_| Event::Prefs(PrefsEvent::WatchTick));

    let mut subs = vec![win_subs, prefs_watch];
    if app.features.notice().has_active() {
        subs.push(
            iced::time::every(Duration::from_millis(NOTICE_TICK_MS))
                .map(|_| Event::Notice(NoticeEvent::Tick)),
        );
    }

    Subscription::batch(subs)
}
