//! Route handlers.

pub mod auth;
pub mod beepers;
pub mod cars;
pub mod health;
pub mod locations;
pub mod payments;
pub mod queue;
pub mod ratings;
pub mod reports;
pub mod users;

use axum::extract::ws::Message;
use futures_util::{Sink, SinkExt, Stream, StreamExt};
use tokio::sync::broadcast;

use domain::events::Event;

/// Forwards events from a topic subscription to a WebSocket as JSON text
/// frames until either side disconnects.
///
/// A lagged subscriber skips the overwritten events and keeps streaming;
/// subscribers get the latest state, not a replayable log.
///
/// Generic over the socket so the loop can be driven by an in-memory duplex;
/// the handlers pass the upgraded WebSocket.
pub(crate) async fn stream_events<S>(socket: S, mut rx: broadcast::Receiver<Event>)
where
    S: Stream<Item = Result<Message, axum::Error>> + Sink<Message>,
{
    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Ok(event) => {
                    let payload = match serde_json::to_string(&event) {
                        Ok(payload) => payload,
                        Err(e) => {
                            tracing::error!("Failed to serialize event: {}", e);
                            continue;
                        }
                    };
                    if sink.send(Message::Text(payload)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Subscriber lagged, events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Err(_)) => break,
                Some(Ok(_)) => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use domain::events::Topic;
    use domain::models::location::Point;
    use std::pin::Pin;
    use std::task::{Context, Poll};
    use tokio::sync::mpsc;
    use uuid::Uuid;

    /// In-memory stand-in for an upgraded WebSocket: the test holds the far
    /// ends of both channels.
    struct DuplexSocket {
        incoming: mpsc::UnboundedReceiver<Result<Message, axum::Error>>,
        outgoing: mpsc::UnboundedSender<Message>,
    }

    impl Stream for DuplexSocket {
        type Item = Result<Message, axum::Error>;

        fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
            self.incoming.poll_recv(cx)
        }
    }

    impl Sink<Message> for DuplexSocket {
        type Error = axum::Error;

        fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn start_send(self: Pin<&mut Self>, item: Message) -> Result<(), Self::Error> {
            self.get_mut()
                .outgoing
                .send(item)
                .map_err(|e| axum::Error::new(e.to_string()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
    }

    type ClientEnd = (
        mpsc::UnboundedSender<Result<Message, axum::Error>>,
        mpsc::UnboundedReceiver<Message>,
    );

    fn socket_pair() -> (DuplexSocket, ClientEnd) {
        let (incoming_tx, incoming_rx) = mpsc::unbounded_channel();
        let (outgoing_tx, outgoing_rx) = mpsc::unbounded_channel();
        let socket = DuplexSocket {
            incoming: incoming_rx,
            outgoing: outgoing_tx,
        };
        (socket, (incoming_tx, outgoing_rx))
    }

    #[tokio::test]
    async fn test_stream_forwards_only_the_subscribed_topic() {
        let bus = EventBus::new();
        let watched = Uuid::new_v4();
        let other = Uuid::new_v4();
        let rx = bus.subscribe(Topic::Location(watched));

        let (socket, (_client_tx, mut client_rx)) = socket_pair();
        let task = tokio::spawn(stream_events(socket, rx));

        bus.publish(
            Topic::Location(other),
            Event::Location(Point {
                latitude: 1.0,
                longitude: 2.0,
            }),
        );
        bus.publish(
            Topic::Location(watched),
            Event::Location(Point {
                latitude: 36.2168,
                longitude: -81.6746,
            }),
        );

        match client_rx.recv().await {
            Some(Message::Text(payload)) => {
                assert!(payload.contains("\"type\":\"location\""));
                assert!(payload.contains("36.2168"));
            }
            frame => panic!("expected a text frame, got {:?}", frame),
        }

        task.abort();
    }

    #[tokio::test]
    async fn test_queue_events_arrive_as_json_frames() {
        let bus = EventBus::new();
        let beeper_id = Uuid::new_v4();
        let rx = bus.subscribe(Topic::Queue(beeper_id));

        let (socket, (_client_tx, mut client_rx)) = socket_pair();
        let task = tokio::spawn(stream_events(socket, rx));

        bus.publish(Topic::Queue(beeper_id), Event::Queue(vec![]));

        match client_rx.recv().await {
            Some(Message::Text(payload)) => {
                assert!(payload.contains("\"type\":\"queue\""));
                assert!(payload.contains("\"data\":[]"));
            }
            frame => panic!("expected a text frame, got {:?}", frame),
        }

        task.abort();
    }

    #[tokio::test]
    async fn test_close_frame_ends_the_stream() {
        let bus = EventBus::new();
        let rx = bus.subscribe(Topic::Location(Uuid::new_v4()));

        let (socket, (client_tx, _client_rx)) = socket_pair();
        let task = tokio::spawn(stream_events(socket, rx));

        client_tx.send(Ok(Message::Close(None))).unwrap();
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_client_disconnect_ends_the_stream() {
        let bus = EventBus::new();
        let rx = bus.subscribe(Topic::Location(Uuid::new_v4()));

        let (socket, (client_tx, _client_rx)) = socket_pair();
        let task = tokio::spawn(stream_events(socket, rx));

        drop(client_tx);
        task.await.unwrap();
    }
}
