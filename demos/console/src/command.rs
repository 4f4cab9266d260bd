//! Console command grammar.
//!
//! ```text
//! <user> toss <target>
//! <user> steal <target>
//! <user> cook
//! where
//! leaderboard
//! channel <name>
//! room <name>
//! help | quit
//! ```

/// Users whose name starts with this are bots and can't receive potatoes.
pub const BOT_PREFIX: &str = "bot:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toss { actor: String, target: String },
    Steal { actor: String, target: String },
    Cook { actor: String },
    Where,
    Leaderboard,
    Channel(String),
    Room(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty line")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(ParseError::Empty),
            ["where"] => Ok(Self::Where),
            ["leaderboard"] => Ok(Self::Leaderboard),
            ["help"] => Ok(Self::Help),
            ["quit"] | ["exit"] => Ok(Self::Quit),
            ["channel", name] => Ok(Self::Channel(name.to_string())),
            ["channel", ..] => Err(ParseError::Usage("channel <name>")),
            ["room", name] => Ok(Self::Room(name.to_string())),
            ["room", ..] => Err(ParseError::Usage("room <name>")),
            [actor, "toss", target] => Ok(Self::Toss {
                actor: actor.to_string(),
                target: target.to_string(),
            }),
            [_, "toss", ..] => Err(ParseError::Usage("<user> toss <target>")),
            [actor, "steal", target] => Ok(Self::Steal {
                actor: actor.to_string(),
                target: target.to_string(),
            }),
            [_, "steal", ..] => Err(ParseError::Usage("<user> steal <target>")),
            [actor, "cook"] => Ok(Self::Cook {
                actor: actor.to_string(),
            }),
            [_, "cook", ..] => Err(ParseError::Usage("<user> cook")),
            [first, ..] => Err(ParseError::Unknown(first.to_string())),
        }
    }
}

/// Returns `true` if `user` is a bot.
pub fn is_bot(user: &str) -> bool {
    user.starts_with(BOT_PREFIX)
}
