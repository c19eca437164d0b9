//! Queue domain models.
//!
//! A queue entry is one rider's pending ride request against one beeper.
//! Entries move through a small status progression driven by the beeper;
//! terminal statuses drop the entry out of the active queue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Waiting,
    Accepted,
    OnTheWay,
    Here,
    InProgress,
    Complete,
    Canceled,
    Denied,
}

impl QueueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueStatus::Waiting => "waiting",
            QueueStatus::Accepted => "accepted",
            QueueStatus::OnTheWay => "on_the_way",
            QueueStatus::Here => "here",
            QueueStatus::InProgress => "in_progress",
            QueueStatus::Complete => "complete",
            QueueStatus::Canceled => "canceled",
            QueueStatus::Denied => "denied",
        }
    }

    /// Whether an entry with this status still occupies a queue slot.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            QueueStatus::Waiting
                | QueueStatus::Accepted
                | QueueStatus::OnTheWay
                | QueueStatus::Here
                | QueueStatus::InProgress
        )
    }
}

impl FromStr for QueueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(QueueStatus::Waiting),
            "accepted" => Ok(QueueStatus::Accepted),
            "on_the_way" => Ok(QueueStatus::OnTheWay),
            "here" => Ok(QueueStatus::Here),
            "in_progress" => Ok(QueueStatus::InProgress),
            "complete" => Ok(QueueStatus::Complete),
            "canceled" => Ok(QueueStatus::Canceled),
            "denied" => Ok(QueueStatus::Denied),
            _ => Err(format!("Invalid queue status: {}", s)),
        }
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The rider details a beeper sees for each entry in their queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiderSummary {
    pub id: Uuid,
    pub name: String,
    pub first: String,
    pub last: String,
    pub phone: String,
    pub venmo: Option<String>,
    pub cashapp: Option<String>,
    pub photo: Option<String>,
    pub rating: Option<f64>,
}

/// One rider waiting on (or riding with) a beeper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub id: Uuid,
    pub beeper_id: Uuid,
    pub rider: RiderSummary,
    pub origin: String,
    pub destination: String,
    pub group_size: i32,
    pub status: QueueStatus,
    pub created_at: DateTime<Utc>,
}

/// Request payload for a rider joining a beeper's queue.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JoinQueueRequest {
    pub beeper_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Origin is required"))]
    pub origin: String,

    #[validate(length(min = 1, max = 255, message = "Destination is required"))]
    pub destination: String,

    #[validate(custom(function = "shared::validation::validate_group_size"))]
    pub group_size: i32,
}

/// Request payload for the beeper advancing an entry's status.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQueueEntryRequest {
    pub status: QueueStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            QueueStatus::Waiting,
            QueueStatus::Accepted,
            QueueStatus::OnTheWay,
            QueueStatus::Here,
            QueueStatus::InProgress,
            QueueStatus::Complete,
            QueueStatus::Canceled,
            QueueStatus::Denied,
        ] {
            assert_eq!(QueueStatus::from_str(status.as_str()).unwrap(), status);
        }
        assert!(QueueStatus::from_str("teleporting").is_err());
    }

    #[test]
    fn test_active_statuses() {
        assert!(QueueStatus::Waiting.is_active());
        assert!(QueueStatus::InProgress.is_active());
        assert!(!QueueStatus::Complete.is_active());
        assert!(!QueueStatus::Canceled.is_active());
        assert!(!QueueStatus::Denied.is_active());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&QueueStatus::OnTheWay).unwrap();
        assert_eq!(json, r#""on_the_way""#);
    }

    #[test]
    fn test_join_queue_request_validation() {
        let request = JoinQueueRequest {
            beeper_id: Uuid::new_v4(),
            origin: "The Library".to_string(),
            destination: "Cottages of Boone".to_string(),
            group_size: 3,
        };
        assert!(validator::Validate::validate(&request).is_ok());

        let request = JoinQueueRequest {
            group_size: 0,
            ..request
        };
        assert!(validator::Validate::validate(&request).is_err());
    }
}
