use iced::widget::{Space, column, container, mouse_area, row};
use iced::{Element, Length, Theme};

use super::{App, Event};
use crate::features::shell::{ShellEvent, ShellPage};
use crate::state::{MainRegionLayout, SidebarColumn, main_region_layout};
use crate::theme::ThemeProps;
use crate::ui::widgets::{
    dashboard, header, notices, profile, profile_editor, sidebar,
};

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props = ThemeProps::new(theme);

    let shell = app.features.shell();
    let collapsed = app.features.prefs().sidebar_collapsed();
    let viewport_width = app.state.window_size.width;
    let layout = main_region_layout(collapsed, viewport_width);

    let header = header::view(header::HeaderProps {
        title: shell.active_page().title(),
        sidebar_open: shell.is_sidebar_open(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(Event::Header);

    let body = view_body(app, theme_props, layout);

    let shell_column = column![header, body]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut root_layers: Vec<Element<'_, Event, Theme, iced::Renderer>> =
        vec![shell_column.into()];

    if app.features.profile().state().is_editor_open() {
        root_layers.push(
            profile_editor::view(profile_editor::ProfileEditorProps {
                state: app.features.profile().state(),
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(Event::Profile),
        );
    }

    if app.features.notice().has_active() {
        root_layers.push(
            notices::view(notices::NoticesProps {
                notices: app.features.notice().notices(),
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(Event::Notice),
        );
    }

    iced::widget::Stack::with_children(root_layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the sidebar and content region for the current layout: a docked
/// column at or above the breakpoint, a floating overlay below it.
fn view_body<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    layout: MainRegionLayout,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let shell = app.features.shell();
    let collapsed = app.features.prefs().sidebar_collapsed();

    let content = mouse_area(
        container(view_page(app, theme_props))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(layout.padding),
    )
    .on_press(Event::Shell(ShellEvent::RegionPressed {
        within_sidebar: false,
    }));

    if layout.column != SidebarColumn::None {
        let sidebar = sidebar::view(sidebar::SidebarProps {
            width: layout.column.width(),
            collapsed,
            docked: true,
            active_page: shell.active_page(),
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(Event::Sidebar);

        return row![sidebar, content]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let mut layers: Vec<Element<'_, Event, Theme, iced::Renderer>> =
        vec![content.into()];

    if shell.is_sidebar_open() {
        let overlay = mouse_area(
            sidebar::view(sidebar::SidebarProps {
                width: SidebarColumn::Wide.width(),
                collapsed: false,
                docked: false,
                active_page: shell.active_page(),
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(Event::Sidebar),
        )
        .on_press(Event::Shell(ShellEvent::RegionPressed {
            within_sidebar: true,
        }));

        let positioned = row![
            overlay,
            Space::new().width(Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        layers.push(positioned.into());
    }

    iced::widget::Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the active page, gated on readiness: until the first
/// runtime-ready signal the reported window size is not trustworthy.
fn view_page<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    if !app.state.ready {
        return container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    match app.features.shell().active_page() {
        ShellPage::Dashboard => dashboard::view(dashboard::DashboardProps {
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(Event::Dashboard),
        ShellPage::Profile => profile::view(profile::ProfileProps {
            state: app.features.profile().state(),
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(Event::Profile),
    }
}
