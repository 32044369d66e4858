use super::model::{Employee, EmployeeStatus};
use crate::services::api::UploadedFile;

/// UI and internal events handled by the profile feature reducer.
#[derive(Debug, Clone)]
pub(crate) enum ProfileEvent {
    Fetch,
    FetchLoaded(Employee),
    FetchFailed(String),
    OpenEditor,
    CloseEditor,
    EditorPressed,
    NameChanged(String),
    EmailChanged(String),
    PositionChanged(String),
    DepartmentChanged(String),
    PhoneChanged(String),
    LocationChanged(String),
    ManagerChanged(String),
    BioChanged(String),
    SalaryChanged(String),
    StatusSelected(EmployeeStatus),
    AvatarPathChanged(String),
    UploadAvatar,
    AvatarUploaded(UploadedFile),
    AvatarUploadFailed(String),
    Submit,
    SubmitCompleted(Employee),
    SubmitFailed(String),
}
