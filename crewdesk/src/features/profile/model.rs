use std::fmt;

use serde::{Deserialize, Serialize};

/// Employment status values accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum EmployeeStatus {
    Active,
    OnLeave,
    Inactive,
}

impl EmployeeStatus {
    /// Options offered by the status picker, in display order.
    pub(crate) const ALL: [EmployeeStatus; 3] = [
        EmployeeStatus::Active,
        EmployeeStatus::OnLeave,
        EmployeeStatus::Inactive,
    ];
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Inactive => "Inactive",
        };
        write!(f, "{label}")
    }
}

/// Employee record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Employee {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) position: String,
    pub(crate) department: String,
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) phone: String,
    #[serde(default)]
    pub(crate) location: String,
    pub(crate) status: EmployeeStatus,
    #[serde(default)]
    pub(crate) manager: String,
    #[serde(default)]
    pub(crate) salary: u64,
    #[serde(default)]
    pub(crate) bio: String,
    #[serde(default)]
    pub(crate) avatar: Option<String>,
}

/// Editable copy of an employee sent as the update payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct EmployeeDraft {
    pub(crate) name: String,
    pub(crate) position: String,
    pub(crate) department: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) location: String,
    pub(crate) status: EmployeeStatus,
    pub(crate) manager: String,
    pub(crate) salary: u64,
    pub(crate) bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) avatar: Option<String>,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: String::new(),
            department: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            status: EmployeeStatus::Active,
            manager: String::new(),
            salary: 0,
            bio: String::new(),
            avatar: None,
        }
    }
}

impl EmployeeDraft {
    pub(crate) fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            location: employee.location.clone(),
            status: employee.status,
            manager: employee.manager.clone(),
            salary: employee.salary,
            bio: employee.bio.clone(),
            avatar: employee.avatar.clone(),
        }
    }

    /// Apply a keystroke to the salary field. Only all-digit input is
    /// accepted; clearing the field resets the amount to zero.
    pub(crate) fn set_salary_input(&mut self, value: &str) {
        if value.is_empty() {
            self.salary = 0;
            return;
        }

        if !value.chars().all(|c| c.is_ascii_digit()) {
            return;
        }

        if let Ok(amount) = value.parse::<u64>() {
            self.salary = amount;
        }
    }

    /// Salary text shown in the editor; a zero amount reads as empty.
    pub(crate) fn salary_input(&self) -> String {
        if self.salary == 0 {
            String::new()
        } else {
            self.salary.to_string()
        }
    }

    /// Return whether every required field is filled in.
    pub(crate) fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.position.trim().is_empty()
            && !self.department.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{EmployeeDraft, EmployeeStatus};

    #[test]
    fn given_digit_input_when_salary_set_then_amount_is_parsed() {
        let mut draft = EmployeeDraft::default();

        draft.set_salary_input("84500");

        assert_eq!(draft.salary, 84500);
        assert_eq!(draft.salary_input(), "84500");
    }

    #[test]
    fn given_non_digit_input_when_salary_set_then_amount_is_kept() {
        let mut draft = EmployeeDraft::default();
        draft.set_salary_input("42000");

        draft.set_salary_input("42000a");

        assert_eq!(draft.salary, 42000);
    }

    #[test]
    fn given_cleared_input_when_salary_set_then_amount_resets_to_zero() {
        let mut draft = EmployeeDraft::default();
        draft.set_salary_input("42000");

        draft.set_salary_input("");

        assert_eq!(draft.salary, 0);
        assert_eq!(draft.salary_input(), "");
    }

    #[test]
    fn given_missing_required_field_then_draft_reports_incomplete() {
        let mut draft = EmployeeDraft {
            name: String::from("Dana Reyes"),
            email: String::from("dana@example.com"),
            position: String::from("HR Partner"),
            department: String::from("People"),
            ..EmployeeDraft::default()
        };
        assert!(draft.has_required_fields());

        draft.email = String::from("  ");

        assert!(!draft.has_required_fields());
    }

    #[test]
    fn given_status_when_serialized_then_backend_spelling_is_used() {
        let payload = serde_json::to_string(&EmployeeStatus::OnLeave)
            .expect("status should serialize");

        assert_eq!(payload, "\"onleave\"");
    }
}
