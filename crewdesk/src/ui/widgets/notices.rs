use iced::widget::{Space, button, column, container, row, text};
use iced::{Border, Element, Length, alignment};

use crate::features::notice::{Notice, NoticeEvent, NoticeKind};
use crate::fonts::FontsConfig;
use crate::helpers::ellipsize;
use crate::theme::ThemeProps;

const NOTICE_WIDTH: f32 = 320.0;
const NOTICE_PADDING: f32 = 12.0;
const NOTICE_SPACING: f32 = 8.0;
const NOTICE_MARGIN: f32 = 16.0;
const DETAIL_MAX_CHARS: usize = 80;

/// Props for rendering the transient notice stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NoticesProps<'a> {
    pub(crate) notices: &'a [Notice],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the notice stack pinned to the bottom-right corner.
pub(crate) fn view<'a>(props: NoticesProps<'a>) -> Element<'a, NoticeEvent> {
    let mut stack = column![].spacing(NOTICE_SPACING);

    for notice in props.notices {
        stack = stack.push(notice_card(notice, props));
    }

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(NOTICE_MARGIN)
        .into()
}

fn notice_card<'a>(
    notice: &'a Notice,
    props: NoticesProps<'a>,
) -> Element<'a, NoticeEvent> {
    let palette = props.theme.theme.palette();
    let accent = match notice.kind {
        NoticeKind::Success => palette.success,
        NoticeKind::Error => palette.danger,
    };

    let mut lines = column![
        text(notice.title.clone()).size(props.fonts.ui.size),
    ]
    .spacing(2.0);

    if let Some(detail) = &notice.detail {
        let detail_color = palette.dim_foreground;
        lines = lines.push(
            container(
                text(ellipsize(detail, DETAIL_MAX_CHARS))
                    .size(props.fonts.ui.size * 0.85),
            )
            .style(move |_| iced::widget::container::Style {
                text_color: Some(detail_color),
                ..Default::default()
            }),
        );
    }

    let id = notice.id;
    let dismiss = button(text("\u{00d7}").size(props.fonts.ui.size))
        .on_press(NoticeEvent::Dismiss { id })
        .padding(0)
        .style(|_, _| iced::widget::button::Style::default());

    let content = row![
        container(Space::new())
            .width(Length::Fixed(3.0))
            .height(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(accent.into()),
                ..Default::default()
            }),
        lines,
        Space::new().width(Length::Fill),
        dismiss,
    ]
    .spacing(NOTICE_SPACING)
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fixed(NOTICE_WIDTH))
        .padding(NOTICE_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            text_color: Some(palette.foreground),
            border: Border {
                color: palette.outline,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .into()
}
