//! Outgoing message values and their text formatting.

use crate::bot::beaches::Beach;

/// One outgoing chat message, built and sent within a single loop
/// iteration.
///
/// `chat_id` stays a plain `i64` here; conversion to the platform type
/// happens in the transport wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub chat_id: i64,
    pub text: String,
    /// Render with Markdown markup instead of plain text.
    pub markdown: bool,
    /// Attach a one-shot keyboard asking the sender to share their location.
    pub request_location: bool,
}

impl Reply {
    pub fn plain(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            markdown: false,
            request_location: false,
        }
    }

    pub fn markdown(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            markdown: true,
            ..Self::plain(chat_id, text)
        }
    }

    pub fn with_location_request(mut self) -> Self {
        self.request_location = true;
        self
    }
}

/// Detail message for one beach.
pub fn beach_details(chat_id: i64, beach: &Beach) -> Reply {
    Reply::markdown(
        chat_id,
        format!(
            "*Name:* {}\n*County:* {}\n*Code:* {}",
            beach.name, beach.county, beach.code
        ),
    )
}
