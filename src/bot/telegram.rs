//! Outgoing Telegram plumbing built on teloxide.

use teloxide::prelude::*;
use teloxide::types::{ButtonRequest, KeyboardButton, KeyboardMarkup, ParseMode};
use tracing::warn;

use crate::bot::reply::Reply;

/// Telegram API client.
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    /// Send one reply, applying its formatting and keyboard options.
    pub async fn send(&self, reply: &Reply) -> Result<(), String> {
        let mut request = self.bot.send_message(ChatId(reply.chat_id), reply.text.clone());

        if reply.markdown {
            request = request.parse_mode(ParseMode::Markdown);
        }
        if reply.request_location {
            request = request.reply_markup(location_keyboard());
        }

        request.await.map(drop).map_err(|e| {
            let msg = format!("failed to send to chat {}: {e}", reply.chat_id);
            warn!("{}", msg);
            msg
        })
    }
}

/// One-shot keyboard asking the sender to share their location.
fn location_keyboard() -> KeyboardMarkup {
    let share = KeyboardButton::new("Get Location").request(ButtonRequest::Location);
    KeyboardMarkup::new([[share]]).one_time_keyboard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_keyboard_is_single_use() {
        let keyboard = location_keyboard();
        assert!(keyboard.one_time_keyboard);
        assert_eq!(keyboard.keyboard.len(), 1);
        assert_eq!(keyboard.keyboard[0].len(), 1);
        assert_eq!(keyboard.keyboard[0][0].text, "Get Location");
        assert!(matches!(
            keyboard.keyboard[0][0].request,
            Some(ButtonRequest::Location)
        ));
    }
}
