use std::path::PathBuf;

use iced::Task;

use super::event::ProfileEvent;
use super::model::EmployeeDraft;
use super::state::ProfileState;
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::notice::NoticeFeature;
use crate::services::api::ApiClient;

/// Context snapshot threaded into the profile reducer for each event.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfileCtx<'a> {
    pub(crate) api: &'a ApiClient,
}

/// Profile feature root that owns editor state and reduction logic.
#[derive(Debug)]
pub(crate) struct ProfileFeature {
    state: ProfileState,
}

impl ProfileFeature {
    /// Construct the feature for the given employee id.
    pub(crate) fn new(employee_id: u64) -> Self {
        Self {
            state: ProfileState::new(employee_id),
        }
    }

    /// Return read-only access to profile state for the view layer.
    pub(crate) fn state(&self) -> &ProfileState {
        &self.state
    }
}

impl Feature for ProfileFeature {
    type Event = ProfileEvent;
    type Ctx<'a> = ProfileCtx<'a>;

    /// Reduce a profile event into state updates and API tasks.
    fn reduce<'a>(
        &mut self,
        event: ProfileEvent,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            ProfileEvent::Fetch => {
                if self.state.is_loading() {
                    return Task::none();
                }
                self.state.mark_loading();
                request_fetch(ctx.api.clone(), self.state.employee_id())
            },
            ProfileEvent::FetchLoaded(employee) => {
                self.state.apply_loaded(employee);
                Task::none()
            },
            ProfileEvent::FetchFailed(message) => {
                log::warn!("profile fetch failed: {message}");
                self.state.mark_load_failed();
                Task::done(AppEvent::Notice(NoticeFeature::error(
                    "Failed to load profile",
                    message,
                )))
            },
            ProfileEvent::OpenEditor => {
                self.state.open_editor();
                Task::none()
            },
            ProfileEvent::CloseEditor => {
                self.state.close_editor();
                Task::none()
            },
            // Presses on the dialog surface must not reach the scrim.
            ProfileEvent::EditorPressed => Task::none(),
            ProfileEvent::NameChanged(value) => {
                self.state.draft_mut().name = value;
                Task::none()
            },
            ProfileEvent::EmailChanged(value) => {
                self.state.draft_mut().email = value;
                Task::none()
            },
            ProfileEvent::PositionChanged(value) => {
                self.state.draft_mut().position = value;
                Task::none()
            },
            ProfileEvent::DepartmentChanged(value) => {
                self.state.draft_mut().department = value;
                Task::none()
            },
            ProfileEvent::PhoneChanged(value) => {
                self.state.draft_mut().phone = value;
                Task::none()
            },
            ProfileEvent::LocationChanged(value) => {
                self.state.draft_mut().location = value;
                Task::none()
            },
            ProfileEvent::ManagerChanged(value) => {
                self.state.draft_mut().manager = value;
                Task::none()
            },
            ProfileEvent::BioChanged(value) => {
                self.state.draft_mut().bio = value;
                Task::none()
            },
            ProfileEvent::SalaryChanged(value) => {
                self.state.draft_mut().set_salary_input(&value);
                Task::none()
            },
            ProfileEvent::StatusSelected(status) => {
                self.state.draft_mut().status = status;
                Task::none()
            },
            ProfileEvent::AvatarPathChanged(value) => {
                self.state.set_avatar_input(value);
                Task::none()
            },
            ProfileEvent::UploadAvatar => {
                if self.state.avatar_input().is_empty()
                    || self.state.is_uploading()
                {
                    return Task::none();
                }
                self.state.mark_uploading();
                request_upload(
                    ctx.api.clone(),
                    self.state.employee_id(),
                    PathBuf::from(self.state.avatar_input()),
                )
            },
            ProfileEvent::AvatarUploaded(file) => {
                self.state.apply_uploaded(file.path);
                Task::done(AppEvent::Notice(NoticeFeature::success(
                    "Profile picture uploaded successfully",
                )))
            },
            ProfileEvent::AvatarUploadFailed(message) => {
                log::warn!("avatar upload failed: {message}");
                self.state.mark_upload_failed();
                Task::done(AppEvent::Notice(NoticeFeature::error(
                    "Failed to upload profile picture",
                    message,
                )))
            },
            ProfileEvent::Submit => {
                if self.state.is_submitting() {
                    return Task::none();
                }
                if !self.state.draft().has_required_fields() {
                    return Task::done(AppEvent::Notice(
                        NoticeFeature::error(
                            "Failed to update profile",
                            String::from(
                                "Name, email, position and department \
                                 are required",
                            ),
                        ),
                    ));
                }
                self.state.mark_submitting();
                request_update(
                    ctx.api.clone(),
                    self.state.employee_id(),
                    self.state.draft().clone(),
                )
            },
            ProfileEvent::SubmitCompleted(employee) => {
                self.state.apply_saved(employee);
                Task::done(AppEvent::Notice(NoticeFeature::success(
                    "Profile updated successfully",
                )))
            },
            ProfileEvent::SubmitFailed(message) => {
                log::warn!("profile update failed: {message}");
                self.state.mark_submit_failed();
                Task::done(AppEvent::Notice(NoticeFeature::error(
                    "Failed to update profile",
                    message,
                )))
            },
        }
    }
}

fn request_fetch(api: ApiClient, employee_id: u64) -> Task<AppEvent> {
    Task::perform(
        async move {
            api.employee(employee_id)
                .await
                .map_err(|err| format!("{err}"))
        },
        |result| match result {
            Ok(employee) => {
                AppEvent::Profile(ProfileEvent::FetchLoaded(employee))
            },
            Err(message) => {
                AppEvent::Profile(ProfileEvent::FetchFailed(message))
            },
        },
    )
}

fn request_update(
    api: ApiClient,
    employee_id: u64,
    draft: EmployeeDraft,
) -> Task<AppEvent> {
    Task::perform(
        async move {
            api.update_employee(employee_id, &draft)
                .await
                .map_err(|err| format!("{err}"))
        },
        |result| match result {
            Ok(employee) => {
                AppEvent::Profile(ProfileEvent::SubmitCompleted(employee))
            },
            Err(message) => {
                AppEvent::Profile(ProfileEvent::SubmitFailed(message))
            },
        },
    )
}

fn request_upload(
    api: ApiClient,
    employee_id: u64,
    path: PathBuf,
) -> Task<AppEvent> {
    Task::perform(
        async move {
            api.upload_avatar(employee_id, path)
                .await
                .map_err(|err| format!("{err}"))
        },
        |result| match result {
            Ok(file) => {
                AppEvent::Profile(ProfileEvent::AvatarUploaded(file))
            },
            Err(message) => {
                AppEvent::Profile(ProfileEvent::AvatarUploadFailed(message))
            },
        },
    )
}

#[cfg(test)]
mod tests {
    use super::{ProfileCtx, ProfileEvent, ProfileFeature};
    use crate::features::Feature;
    use crate::features::profile::model::{Employee, EmployeeStatus};
    use crate::services::api::ApiClient;

    fn sample_employee() -> Employee {
        Employee {
            id: 1,
            name: String::from("Dana Reyes"),
            position: String::from("HR Partner"),
            department: String::from("People"),
            email: String::from("dana@example.com"),
            phone: String::from("555-0101"),
            location: String::from("Lisbon"),
            status: EmployeeStatus::Active,
            manager: String::from("Sam Ortiz"),
            salary: 72000,
            bio: String::from("People operations generalist."),
            avatar: None,
        }
    }

    fn feature_with_employee() -> ProfileFeature {
        let mut feature = ProfileFeature::new(1);
        let api = ApiClient::new(String::from("http://127.0.0.1:9"));
        let ctx = ProfileCtx { api: &api };
        let _task = feature
            .reduce(ProfileEvent::FetchLoaded(sample_employee()), &ctx);
        feature
    }

    #[test]
    fn given_loaded_employee_when_editor_opened_then_draft_mirrors_record() {
        let mut feature = feature_with_employee();
        let api = ApiClient::new(String::from("http://127.0.0.1:9"));
        let ctx = ProfileCtx { api: &api };

        let _task = feature.reduce(ProfileEvent::OpenEditor, &ctx);

        assert!(feature.state().is_editor_open());
        assert_eq!(feature.state().draft().name, "Dana Reyes");
        assert_eq!(feature.state().draft().salary, 72000);
    }

    #[test]
    fn given_incomplete_draft_when_submitted_then_no_request_is_started() {
        let mut feature = feature_with_employee();
        let api = ApiClient::new(String::from("http://127.0.0.1:9"));
        let ctx = ProfileCtx { api: &api };
        let _task = feature.reduce(ProfileEvent::OpenEditor, &ctx);
        let _task = feature
            .reduce(ProfileEvent::NameChanged(String::new()), &ctx);

        let _task = feature.reduce(ProfileEvent::Submit, &ctx);

        assert!(!feature.state().is_submitting());
        assert!(feature.state().is_editor_open());
    }

    #[test]
    fn given_complete_draft_when_submitted_then_request_is_in_flight() {
        let mut feature = feature_with_employee();
        let api = ApiClient::new(String::from("http://127.0.0.1:9"));
        let ctx = ProfileCtx { api: &api };
        let _task = feature.reduce(ProfileEvent::OpenEditor, &ctx);

        let _task = feature.reduce(ProfileEvent::Submit, &ctx);

        assert!(feature.state().is_submitting());
    }

    #[test]
    fn given_saved_employee_when_submit_completes_then_editor_closes() {
        let mut feature = feature_with_employee();
        let api = ApiClient::new(String::from("http://127.0.0.1:9"));
        let ctx = ProfileCtx { api: &api };
        let _task = feature.reduce(ProfileEvent::OpenEditor, &ctx);
        let mut saved = sample_employee();
        saved.position = String::from("Senior HR Partner");

        let _task =
            feature.reduce(ProfileEvent::SubmitCompleted(saved), &ctx);

        assert!(!feature.state().is_editor_open());
        assert!(!feature.state().is_submitting());
        let employee = feature.state().employee().expect("employee loaded");
        assert_eq!(employee.position, "Senior HR Partner");
    }

    #[test]
    fn given_empty_avatar_path_when_upload_requested_then_nothing_happens() {
        let mut feature = feature_with_employee();
        let api = ApiClient::new(String::from("http://127.0.0.1:9"));
        let ctx = ProfileCtx { api: &api };
        let _task = feature.reduce(ProfileEvent::OpenEditor, &ctx);

        let _task = feature.reduce(ProfileEvent::UploadAvatar, &ctx);

        assert!(!feature.state().is_uploading());
    }
}
