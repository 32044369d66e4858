use iced::{Task, window};

use super::{App, Event};
use crate::features::Feature;
use crate::features::prefs::PrefsEvent;
use crate::features::profile::{ProfileCtx, ProfileEvent};
use crate::features::shell::{ShellCtx, ShellEvent, ShellPage};
use crate::ui::widgets::{dashboard, header, sidebar};

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    match event {
        Event::IcedReady => {
            app.state.mark_ready();
            Task::none()
        },
        Event::Header(header::HeaderEvent::ToggleSidebar) => {
            reduce_shell(app, ShellEvent::ToggleSidebar)
        },
        Event::Sidebar(event) => match event {
            sidebar::SidebarEvent::SelectPage(page) => select_page(app, page),
            sidebar::SidebarEvent::ToggleCollapsed => app
                .features
                .prefs_mut()
                .reduce(PrefsEvent::ToggleCollapsed, &()),
        },
        Event::Dashboard(dashboard::DashboardEvent::OpenProfile) => {
            select_page(app, ShellPage::Profile)
        },
        Event::Shell(event) => reduce_shell(app, event),
        Event::Prefs(event) => app.features.prefs_mut().reduce(event, &()),
        Event::Profile(event) => {
            let ctx = ProfileCtx { api: &app.api };
            app.features.profile_mut().reduce(event, &ctx)
        },
        Event::Notice(event) => {
            app.features.notice_mut().reduce(event, &())
        },
        Event::Window(window::Event::Resized(size)) => {
            app.state.window_size = size;
            Task::none()
        },
        Event::Window(_) => Task::none(),
    }
}

fn reduce_shell(app: &mut App, event: ShellEvent) -> Task<Event> {
    let ctx = ShellCtx {
        viewport_width: app.state.window_size.width,
    };
    app.features.shell_mut().reduce(event, &ctx)
}

/// Navigate to a page, kicking off the profile fetch on its first visit.
fn select_page(app: &mut App, page: ShellPage) -> Task<Event> {
    let shell_task = reduce_shell(app, ShellEvent::SelectPage(page));

    if page == ShellPage::Profile
        && !app.features.profile().state().is_loaded()
    {
        return Task::batch(vec![
            shell_task,
            Task::done(Event::Profile(ProfileEvent::Fetch)),
        ]);
    }

    shell_task
}
