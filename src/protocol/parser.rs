//! Query command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the session loop can dispatch on.

use crate::board::{Position, Side};

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake; replies with identity and rules version.
    Rules,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Replace the board and turn from a BFEN string.
    Position { bfen: String },

    /// Set the turn counter.
    Turn(u32),

    /// Report the season of the current turn.
    Season,

    /// Print the current snapshot as BFEN.
    Board,

    Deploy { side: Side, position: Position },

    Move { side: Side, from: Position, to: Position },

    Engage { side: Side, from: Position, to: Position },

    Bonuses(Position),

    /// List legal destinations of the unit at a position.
    Moves(Position),

    /// List legal deployment cells for a side.
    Deployments(Side),

    /// Pick a random legal action for a side.
    Random(Side),

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, args) = tokens.split_first()?;

    match head {
        "rules" => Some(Command::Rules),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "season" => Some(Command::Season),
        "board" => Some(Command::Board),

        "setoption" => parse_setoption(args),
        "position" => parse_position(args),
        "turn" => parse_turn(args),
        "deploy" => parse_deploy(args),
        "move" => parse_action(args).map(|(side, from, to)| Command::Move { side, from, to }),
        "engage" => parse_action(args).map(|(side, from, to)| Command::Engage { side, from, to }),
        "bonuses" => single_position(head, args).map(Command::Bonuses),
        "moves" => single_position(head, args).map(Command::Moves),
        "deployments" => single_side(head, args).map(Command::Deployments),
        "random" => single_side(head, args).map(Command::Random),

        other => {
            tracing::warn!(command = other, "unknown command");
            None
        }
    }
}

fn side_arg(token: &str) -> Option<Side> {
    let side = Side::from_name(token);
    if side.is_none() {
        tracing::warn!(token, "unknown side");
    }
    side
}

fn position_arg(token: &str) -> Option<Position> {
    match token.parse::<u32>().map(Position::new) {
        Ok(Ok(p)) => Some(p),
        _ => {
            tracing::warn!(token, "invalid position");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(args: &[&str]) -> Option<Command> {
    if args.len() < 2 || args[0] != "name" {
        tracing::warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = args.iter().position(|&t| t == "value");
    let (name_parts, value_parts) = match value_idx {
        Some(vi) => (&args[1..vi], &args[vi + 1..]),
        None => (&args[1..], &args[args.len()..]),
    };
    if name_parts.is_empty() {
        tracing::warn!("malformed setoption: empty name");
        return None;
    }

    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };
    Some(Command::SetOption {
        name: name_parts.join(" "),
        value,
    })
}

/// Parses `position <bfen>`.
fn parse_position(args: &[&str]) -> Option<Command> {
    match args {
        [bfen] => Some(Command::Position {
            bfen: bfen.to_string(),
        }),
        _ => {
            tracing::warn!("malformed position: expected 'position <bfen>'");
            None
        }
    }
}

/// Parses `turn <n>`; the turn must be at least 1.
fn parse_turn(args: &[&str]) -> Option<Command> {
    match args {
        [n] => match n.parse::<u32>() {
            Ok(turn) if turn >= 1 => Some(Command::Turn(turn)),
            _ => {
                tracing::warn!(value = *n, "invalid turn");
                None
            }
        },
        _ => {
            tracing::warn!("malformed turn: expected 'turn <n>'");
            None
        }
    }
}

/// Parses `deploy <side> <pos>`.
fn parse_deploy(args: &[&str]) -> Option<Command> {
    match args {
        [side, position] => Some(Command::Deploy {
            side: side_arg(side)?,
            position: position_arg(position)?,
        }),
        _ => {
            tracing::warn!("malformed deploy: expected 'deploy <side> <pos>'");
            None
        }
    }
}

/// Parses `<side> <from> <to>` for `move` and `engage`.
fn parse_action(args: &[&str]) -> Option<(Side, Position, Position)> {
    match args {
        [side, from, to] => Some((side_arg(side)?, position_arg(from)?, position_arg(to)?)),
        _ => {
            tracing::warn!("malformed action: expected '<side> <from> <to>'");
            None
        }
    }
}

fn single_position(command: &str, args: &[&str]) -> Option<Position> {
    match args {
        [p] => position_arg(p),
        _ => {
            tracing::warn!(command, "expected a single position");
            None
        }
    }
}

fn single_side(command: &str, args: &[&str]) -> Option<Side> {
    match args {
        [s] => side_arg(s),
        _ => {
            tracing::warn!(command, "expected a single side");
            None
        }
    }
}
