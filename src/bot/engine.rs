//! The event loop: reads chat updates one at a time and replies.

use futures::StreamExt;
use teloxide::prelude::*;
use teloxide::types::UpdateKind;
use teloxide::update_listeners::{AsUpdateStream, polling_default};
use tracing::{debug, error, info, warn};

use crate::bot::beaches;
use crate::bot::commands;
use crate::bot::reply::{self, Reply};
use crate::bot::telegram::TelegramClient;
use crate::config::Config;

/// Sent while the nearby-beach lookup is in flight.
const CHECKING_TEXT: &str = "Thank you, we're checking...";

/// One inbound chat event, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Command { chat_id: i64, name: String },
    Location { chat_id: i64, latitude: f64, longitude: f64 },
    Other,
}

impl Event {
    /// Classify a raw message. Command text wins over a location payload;
    /// anything else has no reply path.
    pub fn classify(chat_id: i64, text: Option<&str>, location: Option<(f64, f64)>) -> Self {
        if let Some(name) = text.and_then(commands::command_name) {
            return Self::Command {
                chat_id,
                name: name.to_string(),
            };
        }
        if let Some((latitude, longitude)) = location {
            return Self::Location {
                chat_id,
                latitude,
                longitude,
            };
        }
        Self::Other
    }
}

/// Run the bot until the update stream ends.
pub async fn run(config: &Config) {
    let bot = Bot::new(&config.telegram_bot_token);

    match bot.get_me().await {
        Ok(me) => info!("authorized as @{}", me.username()),
        Err(e) => warn!("could not fetch bot identity: {e}"),
    }

    let telegram = TelegramClient::new(bot.clone());
    let beaches = beaches::Client::new();

    let mut listener = polling_default(bot).await;
    let stream = listener.as_stream();
    futures::pin_mut!(stream);

    // Strictly sequential: each update is fully handled, including any
    // outbound HTTP call, before the next one is read.
    while let Some(update) = stream.next().await {
        match update {
            Ok(update) => {
                if let UpdateKind::Message(message) = update.kind {
                    let event = Event::classify(
                        message.chat.id.0,
                        message.text(),
                        message.location().map(|l| (l.latitude, l.longitude)),
                    );
                    handle_event(event, &telegram, &beaches).await;
                }
            }
            Err(e) => error!("update stream error: {e}"),
        }
    }

    warn!("update stream closed, shutting down");
}

async fn handle_event(event: Event, telegram: &TelegramClient, beaches: &beaches::Client) {
    match event {
        Event::Command { chat_id, name } => {
            info!("command /{name} from chat {chat_id}");
            match commands::dispatch(&name, chat_id) {
                Ok(reply) => {
                    let _ = telegram.send(&reply).await;
                }
                // Unrecognized commands get a log line, never a reply.
                Err(e) => warn!("{e}"),
            }
        }
        Event::Location { chat_id, latitude, longitude } => {
            info!("location {latitude} {longitude} from chat {chat_id}");
            handle_location(chat_id, latitude, longitude, telegram, beaches).await;
        }
        Event::Other => debug!("ignoring message with no reply path"),
    }
}

/// Acknowledge first, then fetch; on failure the sender keeps the
/// acknowledgement and nothing more is sent.
async fn handle_location(
    chat_id: i64,
    latitude: f64,
    longitude: f64,
    telegram: &TelegramClient,
    beaches: &beaches::Client,
) {
    let _ = telegram.send(&Reply::plain(chat_id, CHECKING_TEXT)).await;

    match beaches.nearby(latitude, longitude).await {
        Ok(list) => {
            for beach in &list {
                let _ = telegram.send(&reply::beach_details(chat_id, beach)).await;
            }
        }
        Err(e) => error!("beach lookup failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_command() {
        let event = Event::classify(42, Some("/start"), None);
        assert_eq!(
            event,
            Event::Command {
                chat_id: 42,
                name: "start".to_string()
            }
        );
    }

    #[test]
    fn test_classify_unrecognized_command_token() {
        // Classification only requires the command shape; recognition is
        // the dispatcher's job.
        let event = Event::classify(42, Some("/weather"), None);
        assert_eq!(
            event,
            Event::Command {
                chat_id: 42,
                name: "weather".to_string()
            }
        );
    }

    #[test]
    fn test_classify_location() {
        let event = Event::classify(7, None, Some((53.0, -6.0)));
        assert_eq!(
            event,
            Event::Location {
                chat_id: 7,
                latitude: 53.0,
                longitude: -6.0
            }
        );
    }

    #[test]
    fn test_classify_free_text_is_other() {
        assert_eq!(Event::classify(7, Some("hello there"), None), Event::Other);
    }

    #[test]
    fn test_classify_empty_message_is_other() {
        assert_eq!(Event::classify(7, None, None), Event::Other);
    }

    #[test]
    fn test_command_text_wins_over_location() {
        let event = Event::classify(7, Some("/list"), Some((53.0, -6.0)));
        assert!(matches!(event, Event::Command { .. }));
    }
}
