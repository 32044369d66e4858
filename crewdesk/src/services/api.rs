use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::features::profile::{Employee, EmployeeDraft};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Errors emitted by the employee backend client.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Backend(String),
    #[error("avatar file unreadable: {0}")]
    File(#[from] std::io::Error),
}

/// Stored file descriptor returned by the avatar upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UploadedFile {
    pub(crate) path: String,
}

/// Envelope returned by the employee endpoints.
#[derive(Debug, Deserialize)]
struct EmployeeEnvelope {
    data: Option<Employee>,
    error: Option<String>,
}

/// Envelope returned by the avatar upload endpoint.
#[derive(Debug, Deserialize)]
struct UploadEnvelope {
    success: bool,
    file: Option<UploadedFile>,
    message: Option<String>,
}

/// HTTP client for the employee profile backend.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub(crate) fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    /// Build the client from `CREWDESK_API_URL`, or the local default.
    pub(crate) fn from_env() -> Self {
        let base_url = std::env::var("CREWDESK_API_URL")
            .unwrap_or_else(|_| String::from(DEFAULT_BASE_URL));
        Self::new(base_url)
    }

    /// Fetch one employee record.
    pub(crate) async fn employee(
        &self,
        id: u64,
    ) -> Result<Employee, ApiError> {
        let url = format!("{}/api/employees/{id}", self.base_url);
        let envelope = self
            .http
            .get(url)
            .send()
            .await?
            .json::<EmployeeEnvelope>()
            .await?;

        employee_from_envelope(envelope)
    }

    /// Update an employee with the edited fields.
    pub(crate) async fn update_employee(
        &self,
        id: u64,
        draft: &EmployeeDraft,
    ) -> Result<Employee, ApiError> {
        let url = format!("{}/api/employees/{id}", self.base_url);
        let envelope = self
            .http
            .put(url)
            .json(draft)
            .send()
            .await?
            .json::<EmployeeEnvelope>()
            .await?;

        employee_from_envelope(envelope)
    }

    /// Upload a profile picture and return its stored path.
    ///
    /// The backend stores whatever arrives; no file-type check happens on
    /// either side of this call.
    pub(crate) async fn upload_avatar(
        &self,
        employee_id: u64,
        path: PathBuf,
    ) -> Result<UploadedFile, ApiError> {
        let bytes = std::fs::read(&path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("avatar"));

        let part =
            reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new()
            .part("avatar", part)
            .text("userId", employee_id.to_string());

        let url = format!("{}/api/profile/upload-avatar", self.base_url);
        let envelope = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await?
            .json::<UploadEnvelope>()
            .await?;

        uploaded_file_from_envelope(envelope)
    }
}

fn employee_from_envelope(
    envelope: EmployeeEnvelope,
) -> Result<Employee, ApiError> {
    if let Some(error) = envelope.error {
        return Err(ApiError::Backend(error));
    }

    envelope
        .data
        .ok_or_else(|| ApiError::Backend(String::from("empty response")))
}

fn uploaded_file_from_envelope(
    envelope: UploadEnvelope,
) -> Result<UploadedFile, ApiError> {
    if !envelope.success {
        return Err(ApiError::Backend(
            envelope
                .message
                .unwrap_or_else(|| String::from("upload rejected")),
        ));
    }

    envelope
        .file
        .ok_or_else(|| ApiError::Backend(String::from("missing file entry")))
}

#[cfg(test)]
mod tests {
    use super::{
        ApiError, EmployeeEnvelope, UploadEnvelope, employee_from_envelope,
        uploaded_file_from_envelope,
    };

    #[test]
    fn given_data_envelope_when_decoded_then_employee_is_returned() {
        let envelope: EmployeeEnvelope = serde_json::from_str(
            r#"{
                "data": {
                    "id": 7,
                    "name": "Dana Reyes",
                    "position": "HR Partner",
                    "department": "People",
                    "email": "dana@example.com",
                    "status": "onleave"
                },
                "error": null
            }"#,
        )
        .expect("envelope should decode");

        let employee = employee_from_envelope(envelope)
            .expect("envelope should carry an employee");

        assert_eq!(employee.id, 7);
        assert_eq!(employee.salary, 0);
        assert_eq!(employee.avatar, None);
    }

    #[test]
    fn given_error_envelope_when_decoded_then_backend_error_is_returned() {
        let envelope: EmployeeEnvelope = serde_json::from_str(
            r#"{ "data": null, "error": "employee not found" }"#,
        )
        .expect("envelope should decode");

        let err = employee_from_envelope(envelope)
            .expect_err("envelope should carry an error");

        assert!(matches!(err, ApiError::Backend(message)
            if message == "employee not found"));
    }

    #[test]
    fn given_successful_upload_envelope_then_stored_path_is_returned() {
        let envelope: UploadEnvelope = serde_json::from_str(
            r#"{ "success": true, "file": { "path": "/uploads/a.png" } }"#,
        )
        .expect("envelope should decode");

        let file = uploaded_file_from_envelope(envelope)
            .expect("upload should succeed");

        assert_eq!(file.path, "/uploads/a.png");
    }

    #[test]
    fn given_rejected_upload_envelope_then_message_is_surfaced() {
        let envelope: UploadEnvelope = serde_json::from_str(
            r#"{ "success": false, "message": "file too large" }"#,
        )
        .expect("envelope should decode");

        let err = uploaded_file_from_envelope(envelope)
            .expect_err("upload should be rejected");

        assert!(matches!(err, ApiError::Backend(message)
            if message == "file too large"));
    }
}
