//! Typed pub/sub topics and event payloads.
//!
//! Live updates are scoped to one user: a location topic carries coordinate
//! updates published by that user, and a queue topic carries the refreshed
//! queue of one beeper. Subscribers on one topic never observe another
//! topic's payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::location::Point;
use crate::models::queue::QueueEntry;

/// A pub/sub channel scoping push notifications to one user's updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Coordinate updates published by this user.
    Location(Uuid),
    /// Queue changes for this beeper.
    Queue(Uuid),
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Location(user_id) => write!(f, "location:{}", user_id),
            Topic::Queue(user_id) => write!(f, "queue:{}", user_id),
        }
    }
}

/// Payload pushed to subscribers of a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Event {
    /// New coordinate for the topic's user.
    Location(Point),
    /// Full active queue for the topic's beeper, oldest entry first.
    Queue(Vec<QueueEntry>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_display_is_scoped_by_user() {
        let id = Uuid::new_v4();
        assert_eq!(Topic::Location(id).to_string(), format!("location:{}", id));
        assert_eq!(Topic::Queue(id).to_string(), format!("queue:{}", id));
    }

    #[test]
    fn test_topics_for_same_user_are_distinct() {
        let id = Uuid::new_v4();
        assert_ne!(Topic::Location(id), Topic::Queue(id));
    }

    #[test]
    fn test_location_event_wire_format() {
        let event = Event::Location(Point {
            latitude: 36.2,
            longitude: -81.6,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"location\""));
        assert!(json.contains("\"latitude\":36.2"));
    }

    #[test]
    fn test_queue_event_wire_format() {
        let event = Event::Queue(vec![]);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"queue\""));
        assert!(json.contains("\"data\":[]"));
    }
}
