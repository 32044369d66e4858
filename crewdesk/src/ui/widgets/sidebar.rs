use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Border, Element, Length, alignment};

use crate::features::shell::ShellPage;
use crate::fonts::FontsConfig;
use crate::icons::{
    NAV_DASHBOARD, NAV_PROFILE, SIDEBAR_COLLAPSE, SIDEBAR_EXPAND,
};
use crate::theme::ThemeProps;

const NAV_BUTTON_HEIGHT: f32 = 44.0;
const NAV_ICON_SIZE: f32 = 20.0;
const NAV_BUTTON_PADDING: f32 = 12.0;
const NAV_SPACING: f32 = 2.0;
const ACTIVE_BORDER_WIDTH: f32 = 3.0;

/// UI events emitted by the sidebar.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    SelectPage(ShellPage),
    ToggleCollapsed,
}

/// Props for rendering the sidebar navigation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) width: f32,
    pub(crate) collapsed: bool,
    /// True when the sidebar is a docked column; the floating overlay
    /// always renders at full width with labels and no collapse toggle.
    pub(crate) docked: bool,
    pub(crate) active_page: ShellPage,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the sidebar: navigation entries plus the collapse toggle that
/// writes the shared width preference.
pub(crate) fn view<'a>(props: SidebarProps<'a>) -> Element<'a, SidebarEvent> {
    let palette = props.theme.theme.palette();
    let show_labels = !props.docked || !props.collapsed;

    let nav = column![
        nav_button(
            NAV_DASHBOARD,
            ShellPage::Dashboard,
            show_labels,
            props,
        ),
        nav_button(NAV_PROFILE, ShellPage::Profile, show_labels, props),
    ]
    .spacing(NAV_SPACING)
    .width(Length::Fill);

    let mut content = column![nav]
        .width(Length::Fill)
        .height(Length::Fill);

    if props.docked {
        let toggle_icon = if props.collapsed {
            SIDEBAR_EXPAND
        } else {
            SIDEBAR_COLLAPSE
        };
        let toggle = plain_button(
            toggle_icon,
            if props.collapsed { None } else { Some("Collapse") },
            false,
            props,
            SidebarEvent::ToggleCollapsed,
        );

        content = content
            .push(Space::new().height(Length::Fill))
            .push(toggle);
    }

    container(content)
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                color: palette.outline,
                width: 1.0,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn nav_button<'a>(
    icon: &'static [u8],
    page: ShellPage,
    show_label: bool,
    props: SidebarProps<'a>,
) -> Element<'a, SidebarEvent> {
    let is_active = props.active_page == page;
    let label = show_label.then_some(page.title());

    plain_button(icon, label, is_active, props, SidebarEvent::SelectPage(page))
}

fn plain_button<'a>(
    icon: &'static [u8],
    label: Option<&'static str>,
    is_active: bool,
    props: SidebarProps<'a>,
    on_press: SidebarEvent,
) -> Element<'a, SidebarEvent> {
    let palette = props.theme.theme.palette();
    let base_color = palette.dim_foreground;
    let active_color = palette.accent;

    let icon = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(NAV_ICON_SIZE))
        .height(Length::Fixed(NAV_ICON_SIZE))
        .style(move |_, status| {
            let color = if is_active {
                active_color
            } else if status == svg::Status::Hovered {
                active_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let mut entry = row![icon]
        .spacing(NAV_BUTTON_PADDING)
        .align_y(alignment::Vertical::Center);

    if let Some(label) = label {
        entry = entry.push(text(label).size(props.fonts.ui.size));
    }

    let entry_container = container(entry)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(if label.is_some() {
            alignment::Horizontal::Left
        } else {
            alignment::Horizontal::Center
        })
        .align_y(alignment::Vertical::Center)
        .padding([0.0, NAV_BUTTON_PADDING]);

    let border_color = if is_active {
        palette.accent
    } else {
        iced::Color::TRANSPARENT
    };

    let border_strip = container(Space::new())
        .width(Length::Fixed(ACTIVE_BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(border_color.into()),
            ..Default::default()
        });

    let content = row![border_strip, entry_container]
        .spacing(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let background = if is_active {
        Some(palette.accent_soft.into())
    } else {
        None
    };
    let text_color = if is_active {
        palette.accent
    } else {
        palette.foreground
    };

    button(content)
        .on_press(on_press)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(NAV_BUTTON_HEIGHT))
        .style(move |_, _| iced::widget::button::Style {
            background,
            text_color,
            border: Border::default(),
            ..Default::default()
        })
        .into()
}
