//! In-process pub/sub for live location and queue updates.
//!
//! Each topic owns its own broadcast channel, created lazily on the first
//! subscribe or publish. Subscribers on one topic never observe another
//! topic's payloads; publishing with no subscribers is a no-op.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;

use domain::events::{Event, Topic};

/// Buffered events per topic before slow subscribers start lagging.
const CHANNEL_CAPACITY: usize = 64;

/// Maps topics to broadcast channels.
#[derive(Clone)]
pub struct EventBus {
    topics: Arc<RwLock<HashMap<Topic, broadcast::Sender<Event>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            topics: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribe to a topic, creating its channel if needed.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        {
            let topics = self.topics.read().unwrap();
            if let Some(sender) = topics.get(&topic) {
                return sender.subscribe();
            }
        }

        let mut topics = self.topics.write().unwrap();
        topics
            .entry(topic)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Publish an event to a topic's subscribers.
    ///
    /// Returns the number of subscribers that received the event. A topic
    /// with no channel or no live receivers drops the event; the dead
    /// channel is removed so disconnected topics do not accumulate.
    pub fn publish(&self, topic: Topic, event: Event) -> usize {
        let delivered = {
            let topics = self.topics.read().unwrap();
            match topics.get(&topic) {
                Some(sender) => sender.send(event).unwrap_or(0),
                None => return 0,
            }
        };

        if delivered == 0 {
            let mut topics = self.topics.write().unwrap();
            if let Some(sender) = topics.get(&topic) {
                if sender.receiver_count() == 0 {
                    topics.remove(&topic);
                }
            }
        }

        delivered
    }

    /// Number of live subscribers on a topic.
    pub fn subscriber_count(&self, topic: &Topic) -> usize {
        self.topics
            .read()
            .unwrap()
            .get(topic)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::location::Point;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = EventBus::new();
        let user_id = Uuid::new_v4();
        let mut rx = bus.subscribe(Topic::Location(user_id));

        let delivered = bus.publish(
            Topic::Location(user_id),
            Event::Location(Point {
                latitude: 36.2,
                longitude: -81.6,
            }),
        );
        assert_eq!(delivered, 1);

        match rx.recv().await.unwrap() {
            Event::Location(point) => assert_eq!(point.latitude, 36.2),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_topics_are_isolated() {
        let bus = EventBus::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let mut alice_rx = bus.subscribe(Topic::Location(alice));
        let _bob_rx = bus.subscribe(Topic::Location(bob));

        bus.publish(
            Topic::Location(bob),
            Event::Location(Point {
                latitude: 1.0,
                longitude: 2.0,
            }),
        );

        // Alice's topic stays quiet while Bob's receives the event.
        assert!(matches!(
            alice_rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_queue_and_location_topics_for_same_user_are_distinct() {
        let bus = EventBus::new();
        let user_id = Uuid::new_v4();

        let mut location_rx = bus.subscribe(Topic::Location(user_id));
        bus.publish(Topic::Queue(user_id), Event::Queue(vec![]));

        assert!(matches!(
            location_rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let bus = EventBus::new();
        let delivered = bus.publish(
            Topic::Location(Uuid::new_v4()),
            Event::Location(Point {
                latitude: 0.0,
                longitude: 0.0,
            }),
        );
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn test_dead_channel_is_pruned() {
        let bus = EventBus::new();
        let user_id = Uuid::new_v4();
        let topic = Topic::Queue(user_id);

        let rx = bus.subscribe(topic);
        assert_eq!(bus.subscriber_count(&topic), 1);
        drop(rx);

        bus.publish(topic, Event::Queue(vec![]));
        assert_eq!(bus.subscriber_count(&topic), 0);
        assert!(bus.topics.read().unwrap().is_empty());
    }
}
