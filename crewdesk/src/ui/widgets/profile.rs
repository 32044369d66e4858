use iced::widget::{Space, button, column, container, row, text};
use iced::{Border, Element, Length, alignment};

use crate::features::profile::{Employee, ProfileEvent, ProfileState};
use crate::fonts::FontsConfig;
use crate::helpers::ellipsize;
use crate::theme::ThemeProps;

const CARD_PADDING: f32 = 24.0;
const CARD_SPACING: f32 = 10.0;
const CARD_MAX_WIDTH: f32 = 640.0;
const AVATAR_BADGE_SIZE: f32 = 64.0;
const NAME_SCALE: f32 = 1.4;
const DETAIL_MAX_CHARS: usize = 40;
const ACTION_BUTTON_HEIGHT: f32 = 36.0;
const ACTION_BUTTON_PADDING_X: f32 = 16.0;

/// Props for rendering the profile page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfileProps<'a> {
    pub(crate) state: &'a ProfileState,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the profile page: the loaded record or its loading states.
pub(crate) fn view<'a>(props: ProfileProps<'a>) -> Element<'a, ProfileEvent> {
    let content: Element<'a, ProfileEvent> = if props.state.is_loading() {
        status_line("Loading profile\u{2026}", props)
    } else if let Some(employee) = props.state.employee() {
        profile_card(employee, props)
    } else {
        missing_profile(props)
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_line<'a>(
    message: &'a str,
    props: ProfileProps<'a>,
) -> Element<'a, ProfileEvent> {
    let palette = props.theme.theme.palette();

    container(text(message).size(props.fonts.ui.size))
        .padding(CARD_PADDING)
        .style(move |_| iced::widget::container::Style {
            text_color: Some(palette.dim_foreground),
            ..Default::default()
        })
        .into()
}

fn missing_profile<'a>(
    props: ProfileProps<'a>,
) -> Element<'a, ProfileEvent> {
    let retry = action_button("Retry", true, ProfileEvent::Fetch, props);

    let content = column![
        text("Profile is not available.").size(props.fonts.ui.size),
        retry,
    ]
    .spacing(CARD_SPACING);

    container(content).padding(CARD_PADDING).into()
}

fn profile_card<'a>(
    employee: &'a Employee,
    props: ProfileProps<'a>,
) -> Element<'a, ProfileEvent> {
    let palette = props.theme.theme.palette();
    let fonts = props.fonts;

    let badge = container(
        text(initials(&employee.name)).size(fonts.ui.size * NAME_SCALE),
    )
    .width(Length::Fixed(AVATAR_BADGE_SIZE))
    .height(Length::Fixed(AVATAR_BADGE_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.accent_soft.into()),
        text_color: Some(palette.accent),
        border: Border {
            radius: (AVATAR_BADGE_SIZE / 2.0).into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let status_badge = container(
        text(employee.status.to_string()).size(fonts.ui.size * 0.85),
    )
    .padding([2.0, 10.0])
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.accent_soft.into()),
        text_color: Some(palette.accent),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let identity = column![
        text(employee.name.clone()).size(fonts.ui.size * NAME_SCALE),
        text(format!(
            "{} \u{2022} {}",
            employee.position, employee.department
        ))
        .size(fonts.ui.size),
    ]
    .spacing(4.0);

    let head = row![badge, identity, Space::new().width(Length::Fill)]
        .spacing(16.0)
        .align_y(alignment::Vertical::Center);

    let mut details = column![
        detail_line("Email", employee.email.clone(), props),
        detail_line("Phone", employee.phone.clone(), props),
        detail_line("Location", employee.location.clone(), props),
        detail_line("Manager", employee.manager.clone(), props),
    ]
    .spacing(6.0);

    if let Some(avatar) = &employee.avatar {
        details = details.push(detail_line(
            "Picture",
            ellipsize(avatar, DETAIL_MAX_CHARS),
            props,
        ));
    }

    let bio = text(employee.bio.clone()).size(fonts.ui.size);

    let edit_button =
        action_button("Edit Profile", true, ProfileEvent::OpenEditor, props);

    let card = container(
        column![head, status_badge, details, bio, edit_button]
            .spacing(CARD_SPACING),
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

    card.into()
}

fn detail_line<'a>(
    label: &'a str,
    value: String,
    props: ProfileProps<'a>,
) -> Element<'a, ProfileEvent> {
    let palette = props.theme.theme.palette();

    let label = container(text(label).size(props.fonts.ui.size * 0.9))
        .width(Length::Fixed(90.0))
        .style(move |_| iced::widget::container::Style {
            text_color: Some(palette.dim_foreground),
            ..Default::default()
        });

    row![label, text(value).size(props.fonts.ui.size)]
        .spacing(8.0)
        .align_y(alignment::Vertical::Center)
        .into()
}

pub(super) fn action_button<'a>(
    label: &'a str,
    enabled: bool,
    event: ProfileEvent,
    props: ProfileProps<'a>,
) -> Element<'a, ProfileEvent> {
    let palette = props.theme.theme.palette();
    let content = container(text(label).size(props.fonts.ui.size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut button = button(content)
        .padding([0.0, ACTION_BUTTON_PADDING_X])
        .height(Length::Fixed(ACTION_BUTTON_HEIGHT))
        .style(move |_, status| {
            let background = if !enabled {
                let mut color = palette.accent;
                color.a = 0.4;
                color
            } else {
                match status {
                    iced::widget::button::Status::Hovered
                    | iced::widget::button::Status::Pressed => {
                        let mut color = palette.accent;
                        color.a = 0.85;
                        color
                    },
                    _ => palette.accent,
                }
            };

            iced::widget::button::Style {
                background: Some(background.into()),
                text_color: palette.surface,
                border: Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

    if enabled {
        button = button.on_press(event);
    }

    button.into()
}

/// Initials shown in the avatar badge: first letters of the first two
/// name words.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn given_full_name_when_initials_built_then_two_letters_are_used() {
        assert_eq!(initials("dana reyes"), "DR");
    }

    #[test]
    fn given_three_part_name_when_initials_built_then_extra_words_ignored()
    {
        assert_eq!(initials("Ana Maria Costa"), "AM");
    }

    #[test]
    fn given_empty_name_when_initials_built_then_result_is_empty() {
        assert_eq!(initials(""), "");
    }
}
