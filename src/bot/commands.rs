//! Recognized commands and their canned replies.

use std::fmt;

use crate::bot::reply::Reply;

pub const BANNER_TEXT: &str = "Welcome to *Beaches.ie* Bot
I'm here to help you ☺️
type /help to see commands
";

pub const HELP_TEXT: &str = "
*Commands*
/list - Beaches near you
/restrictions - Restrictions near you
/search text - Search beaches by name
/county name - List beaches in a county
/favourites id1,id2,... - Adding favourites beaches to your profile
/jelly - take a photo, send it to us and our AI software is going to recognize it
/report - take a photo and report an beach incident
";

const LOCATION_PROMPT: &str = "Give me your location";

/// A recognized command, fixed at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    List,
}

/// The command token was not one of the recognized commands.
#[derive(Debug)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no command found: /{}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

/// Extract the command token from a message text.
///
/// Returns `None` when the text is not a command at all. Arguments after
/// the token are ignored and a `@botname` mention is stripped, so
/// `/list@BeachesBot now` yields `list`.
pub fn command_name(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('/')?;
    let token = rest.split_whitespace().next()?;
    token.split('@').next().filter(|name| !name.is_empty())
}

impl Command {
    pub fn parse(name: &str) -> Result<Self, UnknownCommand> {
        match name {
            "start" => Ok(Self::Start),
            "help" => Ok(Self::Help),
            "list" => Ok(Self::List),
            other => Err(UnknownCommand(other.to_string())),
        }
    }

    /// The canned reply for this command.
    pub fn reply(self, chat_id: i64) -> Reply {
        match self {
            Self::Start => Reply::markdown(chat_id, BANNER_TEXT),
            Self::Help => Reply::markdown(chat_id, HELP_TEXT),
            Self::List => Reply::markdown(chat_id, LOCATION_PROMPT).with_location_request(),
        }
    }
}

/// Map a command token to its reply. Never touches the network.
pub fn dispatch(name: &str, chat_id: i64) -> Result<Reply, UnknownCommand> {
    Command::parse(name).map(|command| command.reply(chat_id))
}
