use iced::widget::{container, row, svg, text};
use iced::{Element, Length, alignment};

use crate::fonts::FontsConfig;
use crate::icons::{CLOSE, LOGO_SMALL, MENU};
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    IconButton, IconButtonProps, IconButtonVariant,
};

pub(crate) const HEADER_HEIGHT: f32 = 56.0;
const HEADER_TITLE_SCALE: f32 = 1.15;
const HEADER_TOGGLE_BUTTON_SIZE: f32 = 36.0;
const HEADER_TOGGLE_ICON_SIZE: f32 = 20.0;
const HEADER_LOGO_ICON_SIZE: f32 = 22.0;
const HEADER_HORIZONTAL_PADDING: f32 = 12.0;
const HEADER_SPACING: f32 = 10.0;

/// UI events emitted by the header bar.
#[derive(Debug, Clone)]
pub(crate) enum HeaderEvent {
    ToggleSidebar,
}

/// Props for rendering the header bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) sidebar_open: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the header: sidebar toggle, product mark, and page title.
pub(crate) fn view<'a>(props: HeaderProps<'a>) -> Element<'a, HeaderEvent> {
    let palette = props.theme.theme.palette();

    let toggle_icon = if props.sidebar_open { CLOSE } else { MENU };
    let toggle_button = IconButton::new(IconButtonProps {
        icon: toggle_icon,
        theme: props.theme,
        size: HEADER_TOGGLE_BUTTON_SIZE,
        icon_size: HEADER_TOGGLE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .view()
    .map(|_| HeaderEvent::ToggleSidebar);

    let logo = svg::Svg::new(svg::Handle::from_memory(LOGO_SMALL))
        .width(Length::Fixed(HEADER_LOGO_ICON_SIZE))
        .height(Length::Fixed(HEADER_LOGO_ICON_SIZE));

    let title = text(props.title.to_owned())
        .font(props.fonts.ui.font_type)
        .size(props.fonts.ui.size * HEADER_TITLE_SCALE);

    let content = row![toggle_button, logo, title]
        .spacing(HEADER_SPACING)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_HORIZONTAL_PADDING])
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}
