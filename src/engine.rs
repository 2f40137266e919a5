//! Session state management.
//!
//! Holds the current board snapshot, turn counter and ruleset between
//! commands, and answers each rule query on the output stream. Every
//! rejection is reported with its exact error code.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Board, Position, Side};
use crate::combat::Bonuses;
use crate::movegen::{can_move_unit, legal_moves, Action};
use crate::protocol::bfen::{encode_bfen, parse_bfen, BfenError};
use crate::protocol::parser::Command;
use crate::ruleset::{Ruleset, RULES_VERSION};

/// Holds the mutable state of the engine between commands.
pub struct Session {
    pub board: Board,
    pub turn: u32,
    pub ruleset: Ruleset,
    rng: SmallRng,
}

fn format_bonuses(b: Bonuses) -> String {
    format!("attack {} defense {} speed {}", b.attack, b.defense, b.speed)
}

fn join_positions(positions: impl IntoIterator<Item = Position>) -> String {
    positions
        .into_iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Session {
    /// Creates a session on an empty board at turn 1.
    pub fn new(ruleset: Ruleset) -> Self {
        Session {
            board: Board::empty(),
            turn: 1,
            ruleset,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Like [`Session::new`], with a fixed seed for `random`.
    pub fn with_seed(ruleset: Ruleset, seed: u64) -> Self {
        Session {
            rng: SmallRng::seed_from_u64(seed),
            ..Session::new(ruleset)
        }
    }

    /// Replaces the board and turn from a BFEN string.
    pub fn set_position(&mut self, bfen: &str) -> Result<(), BfenError> {
        let snapshot = parse_bfen(bfen)?;
        self.board = snapshot.board;
        self.turn = snapshot.turn;
        Ok(())
    }

    /// Applies a `setoption`. Unknown names and bad values are logged and ignored.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) {
        match (name, value.map(str::parse::<u32>)) {
            ("TurnsPerSeason", Some(Ok(n))) if n >= 1 => self.ruleset.turns_per_season = n,
            ("TurnsPerSeason", _) => tracing::warn!(?value, "TurnsPerSeason needs a value of at least 1"),
            _ => tracing::warn!(name, "unknown option"),
        }
    }

    /// Dispatches one command. Returns `Ok(false)` on `quit`.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<bool> {
        match command {
            Command::Rules => self.handle_rules(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::SetOption { name, value } => self.set_option(&name, value.as_deref()),
            Command::Position { bfen } => {
                if let Err(e) = self.set_position(&bfen) {
                    tracing::warn!(error = %e, "failed to parse BFEN");
                }
            }
            Command::Turn(turn) => self.turn = turn,
            Command::Season => self.handle_season(out)?,
            Command::Board => writeln!(out, "position {}", encode_bfen(self.turn, &self.board))?,
            Command::Deploy { side, position } => {
                match self.ruleset.can_deploy(position, side, self.turn, &self.board) {
                    Ok(()) => writeln!(out, "legal")?,
                    Err(e) => writeln!(out, "illegal {}", e.code())?,
                }
            }
            Command::Move { side, from, to } => self.handle_move(side, from, to, out)?,
            Command::Engage { side, from, to } => {
                match self.ruleset.can_engage(from, to, side, &self.board) {
                    Ok(e) => writeln!(
                        out,
                        "legal attacker {} defender {}",
                        format_bonuses(e.attacker_bonuses),
                        format_bonuses(e.defender_bonuses)
                    )?,
                    Err(e) => writeln!(out, "illegal {}", e.code())?,
                }
            }
            Command::Bonuses(position) => {
                let b = self.ruleset.compute_bonuses(position, &self.board);
                writeln!(out, "bonuses {}", format_bonuses(b))?;
            }
            Command::Moves(from) => {
                let moves: Vec<String> = legal_moves(from, &self.board)
                    .into_iter()
                    .map(|(to, effect)| format!("{}:{}", to, effect.name()))
                    .collect();
                writeln!(out, "moves {}", moves.join(" "))?;
            }
            Command::Deployments(side) => {
                match self.ruleset.legal_deployments(side, self.turn, &self.board) {
                    Ok(spots) => writeln!(out, "deployments {}", join_positions(spots))?,
                    Err(e) => writeln!(out, "illegal {}", e.code())?,
                }
            }
            Command::Random(side) => self.handle_random(side, out)?,
            Command::Quit => return Ok(false),
        }
        out.flush()?;
        Ok(true)
    }

    /// Handshake: identity, rules version, then `rulesok`.
    pub fn handle_rules<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name ashwood-rules")?;
        writeln!(
            out,
            "option name TurnsPerSeason type spin default {} min 1",
            self.ruleset.turns_per_season
        )?;
        writeln!(out, "rules_version {}", RULES_VERSION)?;
        writeln!(out, "rulesok")
    }

    fn handle_season<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let season = self.ruleset.season_for_turn(self.turn);
        let left = self.ruleset.turns_left_in_season(self.turn);
        match (season, left) {
            (Ok(season), Ok(left)) => {
                writeln!(out, "season {} turns_left {}", season.name(), left)
            }
            (Err(e), _) | (_, Err(e)) => writeln!(out, "illegal {}", e.code()),
        }
    }

    fn handle_move<W: Write>(
        &self,
        side: Side,
        from: Position,
        to: Position,
        out: &mut W,
    ) -> io::Result<()> {
        match can_move_unit(from, to, side, &self.board) {
            Ok(effect) => writeln!(out, "legal {}", effect.name()),
            Err(e) => writeln!(out, "illegal {}", e.code()),
        }
    }

    fn handle_random<W: Write>(&mut self, side: Side, out: &mut W) -> io::Result<()> {
        match self.ruleset.random_action(side, self.turn, &self.board, &mut self.rng) {
            Ok(Some(Action::Deploy { position })) => writeln!(out, "action deploy {}", position),
            Ok(Some(Action::Move { from, to, effect })) => {
                writeln!(out, "action move {} {} {}", from, to, effect.name())
            }
            Ok(Some(Action::Engage { from, to })) => writeln!(out, "action engage {} {}", from, to),
            Ok(None) => writeln!(out, "action none"),
            Err(e) => writeln!(out, "illegal {}", e.code()),
        }
    }
}
