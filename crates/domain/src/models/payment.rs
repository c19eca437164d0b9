//! Payment domain model.
//!
//! Payments are written by the external payment processor integration and are
//! read-only in this service: the admin surface lists them, nothing mutates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserSummary;

/// A purchased promotion (for example, a beeper-list top slot).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub user: UserSummary,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl Payment {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_is_expired() {
        let now = Utc::now();
        let payment = Payment {
            id: Uuid::new_v4(),
            user: UserSummary {
                id: Uuid::new_v4(),
                first: "Banks".to_string(),
                last: "Nussman".to_string(),
                username: "banks".to_string(),
                photo: None,
            },
            created: now - Duration::days(30),
            expires: now - Duration::days(1),
        };
        assert!(payment.is_expired(now));
        assert!(!payment.is_expired(now - Duration::days(2)));
    }
}
