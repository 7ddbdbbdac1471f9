//! Parsing of `/command[@bot] args...` messages.

use std::fmt;

/// Commands registered with the chat platform: (name, description).
pub const COMMANDS: &[(&str, &str)] = &[
    ("nfpa", "Generate an NFPA diamond: /nfpa <health> <flammability> <reactivity> [special]"),
    ("help", "Get a guide for labeling NFPA signs"),
];

pub const USAGE: &str = "Usage: /nfpa <health 0-4> <flammability 0-4> <reactivity 0-4> [special]\n\
Special hazards: ACID (Acid), ALK (Alkaline), COR (Corrosive), OX (Oxidizer), RADIO (Radioactive), W (Use No Water)";

/// Raw `/nfpa` arguments; ranges are checked when the placard is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfpaArgs {
    pub health: i64,
    pub flammability: i64,
    pub reactivity: i64,
    /// Remaining words joined by a space; empty when omitted.
    pub special: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
    Nfpa(NfpaArgs),
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments or a non-integer rating.
    Usage,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Usage => f.write_str(USAGE),
        }
    }
}

/// Parses `text` as a command.
///
/// Returns `None` for plain text and for commands addressed to another bot (`/nfpa@other`).
/// The `@name` suffix is compared case-insensitively with `bot_username` when it is known.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<Result<BotCommand, CommandError>> {
    let mut words = text.split_whitespace();
    let head = words.next()?.strip_prefix('/')?;
    let (name, target) = match head.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (head, None),
    };
    if let (Some(target), Some(me)) = (target, bot_username) {
        if !target.eq_ignore_ascii_case(me) {
            return None;
        }
    }
    if name.is_empty() {
        return None;
    }

    let command = match name.to_ascii_lowercase().as_str() {
        "start" => Ok(BotCommand::Start),
        "help" => Ok(BotCommand::Help),
        "nfpa" => parse_nfpa_args(words.collect()).map(BotCommand::Nfpa),
        _ => Ok(BotCommand::Unknown(name.to_string())),
    };
    Some(command)
}

fn parse_nfpa_args(args: Vec<&str>) -> Result<NfpaArgs, CommandError> {
    if args.len() < 3 {
        return Err(CommandError::Usage);
    }
    let rating = |s: &str| s.parse::<i64>().map_err(|_| CommandError::Usage);
    Ok(NfpaArgs {
        health: rating(args[0])?,
        flammability: rating(args[1])?,
        reactivity: rating(args[2])?,
        special: args[3..].join(" "),
    })
}
