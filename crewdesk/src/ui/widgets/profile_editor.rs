use iced::widget::{
    Space, column, container, mouse_area, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Border, Element, Length, alignment};

use crate::features::profile::{EmployeeStatus, ProfileEvent, ProfileState};
use crate::fonts::FontsConfig;
use crate::helpers::ellipsize;
use crate::icons::CLOSE;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    IconButton, IconButtonProps, IconButtonVariant,
};
use crate::ui::widgets::profile::{ProfileProps, action_button};

const DIALOG_WIDTH: f32 = 600.0;
const CLOSE_BUTTON_SIZE: f32 = 28.0;
const CLOSE_ICON_SIZE: f32 = 16.0;
const DIALOG_PADDING: f32 = 24.0;
const DIALOG_SPACING: f32 = 14.0;
const FIELD_SPACING: f32 = 6.0;
const FIELD_ROW_SPACING: f32 = 16.0;
const INPUT_PADDING_X: f32 = 10.0;
const INPUT_PADDING_Y: f32 = 8.0;
const AVATAR_PATH_MAX_CHARS: usize = 36;

/// Props for rendering the profile editor dialog.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfileEditorProps<'a> {
    pub(crate) state: &'a ProfileState,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the modal editor over a window-filling scrim. A press on the
/// scrim closes the dialog without saving.
pub(crate) fn view<'a>(
    props: ProfileEditorProps<'a>,
) -> Element<'a, ProfileEvent> {
    let palette = props.theme.theme.palette();

    let scrim = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(palette.scrim.into()),
                ..Default::default()
            }),
    )
    .on_press(ProfileEvent::CloseEditor);

    let dialog = container(dialog_content(props))
        .width(Length::Fixed(DIALOG_WIDTH))
        .padding(DIALOG_PADDING)
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
    let dialog =
        mouse_area(dialog).on_press(ProfileEvent::EditorPressed);

    let dialog_layer = container(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    iced::widget::Stack::with_children(vec![
        scrim.into(),
        dialog_layer.into(),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn dialog_content<'a>(
    props: ProfileEditorProps<'a>,
) -> Element<'a, ProfileEvent> {
    let draft = props.state.draft();
    let fonts = props.fonts;

    let close_button = IconButton::new(IconButtonProps {
        icon: CLOSE,
        theme: props.theme,
        size: CLOSE_BUTTON_SIZE,
        icon_size: CLOSE_ICON_SIZE,
        variant: IconButtonVariant::Danger,
    })
    .view()
    .map(|_| ProfileEvent::CloseEditor);

    let title = row![
        text("Edit Profile")
            .font(fonts.ui.font_type)
            .size(fonts.ui.size * 1.25),
        Space::new().width(Length::Fill),
        close_button,
    ]
    .align_y(alignment::Vertical::Center);

    let name_email = row![
        labeled_input("Full Name", &draft.name, ProfileEvent::NameChanged, props),
        labeled_input("Email", &draft.email, ProfileEvent::EmailChanged, props),
    ]
    .spacing(FIELD_ROW_SPACING);

    let position_department = row![
        labeled_input(
            "Position",
            &draft.position,
            ProfileEvent::PositionChanged,
            props,
        ),
        labeled_input(
            "Department",
            &draft.department,
            ProfileEvent::DepartmentChanged,
            props,
        ),
    ]
    .spacing(FIELD_ROW_SPACING);

    let phone_location = row![
        labeled_input("Phone", &draft.phone, ProfileEvent::PhoneChanged, props),
        labeled_input(
            "Location",
            &draft.location,
            ProfileEvent::LocationChanged,
            props,
        ),
    ]
    .spacing(FIELD_ROW_SPACING);

    let status_field = column![
        field_label("Status", props),
        pick_list(
            &EmployeeStatus::ALL[..],
            Some(draft.status),
            ProfileEvent::StatusSelected,
        )
        .width(Length::Fill)
        .text_size(fonts.ui.size),
    ]
    .spacing(FIELD_SPACING)
    .width(Length::Fill);

    let status_manager = row![
        status_field,
        labeled_input(
            "Manager",
            &draft.manager,
            ProfileEvent::ManagerChanged,
            props,
        ),
    ]
    .spacing(FIELD_ROW_SPACING);

    let salary_input = draft.salary_input();
    let salary_field = column![
        field_label("Salary", props),
        text_input("", &salary_input)
            .on_input(ProfileEvent::SalaryChanged)
            .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
            .size(fonts.ui.size)
            .width(Length::Fill),
    ]
    .spacing(FIELD_SPACING)
    .width(Length::Fill);

    let salary_avatar = row![salary_field, avatar_field(props)]
        .spacing(FIELD_ROW_SPACING);

    let bio_field = labeled_input(
        "Bio",
        &draft.bio,
        ProfileEvent::BioChanged,
        props,
    );

    let footer = footer(props);

    let form = column![
        name_email,
        position_department,
        phone_location,
        status_manager,
        salary_avatar,
        bio_field,
    ]
    .spacing(DIALOG_SPACING);

    let form_scroll = scrollable::Scrollable::new(form)
        .width(Length::Fill)
        .height(Length::Shrink);

    column![title, form_scroll, footer]
        .spacing(DIALOG_SPACING)
        .width(Length::Fill)
        .into()
}

fn avatar_field<'a>(
    props: ProfileEditorProps<'a>,
) -> Element<'a, ProfileEvent> {
    let page_props = page_props(props);
    let uploading = props.state.is_uploading();

    let upload_label = if uploading { "Uploading\u{2026}" } else { "Upload" };
    let upload_button = action_button(
        upload_label,
        !uploading,
        ProfileEvent::UploadAvatar,
        page_props,
    );

    let path_input = text_input(
        "Path to a picture file",
        props.state.avatar_input(),
    )
    .on_input(ProfileEvent::AvatarPathChanged)
    .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
    .size(props.fonts.ui.size)
    .width(Length::Fill);

    let mut field = column![
        field_label("Profile Picture", props),
        row![path_input, upload_button]
            .spacing(FIELD_SPACING)
            .align_y(alignment::Vertical::Center),
    ]
    .spacing(FIELD_SPACING)
    .width(Length::Fill);

    if let Some(avatar) = &props.state.draft().avatar {
        let palette = props.theme.theme.palette();
        let stored = container(
            text(ellipsize(avatar, AVATAR_PATH_MAX_CHARS))
                .size(props.fonts.ui.size * 0.85),
        )
        .style(move |_| iced::widget::container::Style {
            text_color: Some(palette.dim_foreground),
            ..Default::default()
        });
        field = field.push(stored);
    }

    field.into()
}

fn footer<'a>(props: ProfileEditorProps<'a>) -> Element<'a, ProfileEvent> {
    let page_props = page_props(props);
    let submitting = props.state.is_submitting();

    let cancel =
        action_button("Cancel", true, ProfileEvent::CloseEditor, page_props);
    let save_label = if submitting {
        "Saving\u{2026}"
    } else {
        "Save Changes"
    };
    let save =
        action_button(save_label, !submitting, ProfileEvent::Submit, page_props);

    row![Space::new().width(Length::Fill), cancel, save]
        .spacing(FIELD_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn labeled_input<'a>(
    label: &'a str,
    value: &str,
    on_input: fn(String) -> ProfileEvent,
    props: ProfileEditorProps<'a>,
) -> Element<'a, ProfileEvent> {
    column![
        field_label(label, props),
        text_input("", value)
            .on_input(on_input)
            .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
            .size(props.fonts.ui.size)
            .width(Length::Fill),
    ]
    .spacing(FIELD_SPACING)
    .width(Length::Fill)
    .into()
}

fn field_label<'a>(
    label: &'a str,
    props: ProfileEditorProps<'a>,
) -> Element<'a, ProfileEvent> {
    let palette = props.theme.theme.palette();

    container(text(label).size(props.fonts.ui.size * 0.9))
        .style(move |_| iced::widget::container::Style {
            text_color: Some(palette.dim_foreground),
            ..Default::default()
        })
        .into()
}

fn page_props<'a>(props: ProfileEditorProps<'a>) -> ProfileProps<'a> {
    ProfileProps {
        state: props.state,
        theme: props.theme,
        fonts: props.fonts,
    }
}
