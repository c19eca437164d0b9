//! Report domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::UserSummary;

/// A user-filed report against another user, optionally tied to a ride.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub reporter: UserSummary,
    pub reported: UserSummary,
    pub reason: String,
    pub beep_id: Option<Uuid>,
    pub notes: Option<String>,
    /// Admin who marked the report handled. Cleared explicitly on un-handle.
    pub handled_by: Option<UserSummary>,
    pub timestamp: DateTime<Utc>,
}

impl Report {
    pub fn handled(&self) -> bool {
        self.handled_by.is_some()
    }
}

/// Request payload for filing a report.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    /// The user being reported.
    pub user_id: Uuid,

    #[validate(length(min = 5, max = 255, message = "Reason must be 5-255 characters"))]
    pub reason: String,

    pub beep_id: Option<Uuid>,
}

/// Request payload for the admin update of a report.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportInput {
    #[validate(length(min = 5, max = 255, message = "Reason must be 5-255 characters"))]
    pub reason: Option<String>,

    #[validate(length(max = 1024, message = "Notes must be at most 1024 characters"))]
    pub notes: Option<String>,

    /// `true` attaches the acting admin as handler, `false` clears it.
    pub handled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_input_validation() {
        let input = ReportInput {
            user_id: Uuid::new_v4(),
            reason: "Driver was over capacity".to_string(),
            beep_id: None,
        };
        assert!(validator::Validate::validate(&input).is_ok());

        let input = ReportInput {
            user_id: Uuid::new_v4(),
            reason: "bad".to_string(),
            beep_id: None,
        };
        assert!(validator::Validate::validate(&input).is_err());
    }

    #[test]
    fn test_handled_derived_from_handler() {
        let summary = UserSummary {
            id: Uuid::new_v4(),
            first: "Banks".to_string(),
            last: "Nussman".to_string(),
            username: "banks".to_string(),
            photo: None,
        };
        let mut report = Report {
            id: Uuid::new_v4(),
            reporter: summary.clone(),
            reported: summary.clone(),
            reason: "No show at pickup".to_string(),
            beep_id: None,
            notes: None,
            handled_by: None,
            timestamp: Utc::now(),
        };
        assert!(!report.handled());
        report.handled_by = Some(summary);
        assert!(report.handled());
    }
}
