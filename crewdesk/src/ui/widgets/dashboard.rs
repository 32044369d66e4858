use iced::widget::{button, column, container, text};
use iced::{Border, Element, Length, alignment};

use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

const CARD_PADDING: f32 = 24.0;
const CARD_SPACING: f32 = 12.0;
const CARD_MAX_WIDTH: f32 = 560.0;
const TITLE_SCALE: f32 = 1.5;
const ACTION_BUTTON_HEIGHT: f32 = 36.0;
const ACTION_BUTTON_PADDING_X: f32 = 16.0;

/// UI events emitted by the dashboard page.
#[derive(Debug, Clone)]
pub(crate) enum DashboardEvent {
    OpenProfile,
}

/// Props for rendering the dashboard page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DashboardProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the landing page card.
pub(crate) fn view<'a>(
    props: DashboardProps<'a>,
) -> Element<'a, DashboardEvent> {
    let palette = props.theme.theme.palette();

    let title = text("Welcome to Crewdesk")
        .size(props.fonts.ui.size * TITLE_SCALE);
    let blurb = text(
        "Review your personal record, keep your contact details current, \
         and update your profile picture from the profile page.",
    )
    .size(props.fonts.ui.size);

    let open_profile = button(
        container(text("Open my profile").size(props.fonts.ui.size))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(DashboardEvent::OpenProfile)
    .padding([0.0, ACTION_BUTTON_PADDING_X])
    .height(Length::Fixed(ACTION_BUTTON_HEIGHT))
    .style(move |_, status| {
        let background = match status {
            iced::widget::button::Status::Hovered
            | iced::widget::button::Status::Pressed => palette.accent_soft,
            _ => palette.surface,
        };

        iced::widget::button::Style {
            background: Some(background.into()),
            text_color: palette.accent,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    });

    let card = container(
        column![title, blurb, open_profile].spacing(CARD_SPACING),
    )
    .max_width(CARD_MAX_WIDTH)
    .padding(CARD_PADDING)
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.foreground),
        border: Border {
            color: palette.outline,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    });

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
