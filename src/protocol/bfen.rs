//! BFEN (battlefield FEN) encoding and decoding.
//!
//! BFEN is a one-line notation for a board snapshot plus the turn counter.
//!
//! Format: `<turn>/<units>`
//!
//! Units are comma-separated `<side><class><position>:<atk>.<def>.<spd>.<spc>`
//! entries, e.g. `ic5:6.2.6.0` for an invader cavalry on 5. An empty board
//! is written `-`.

use crate::board::{Board, Position, Side, Unit, UnitClass};

/// A board together with the turn it is evaluated on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub turn: u32,
    pub board: Board,
}

impl Snapshot {
    pub fn new(turn: u32, board: Board) -> Self {
        Snapshot { turn, board }
    }
}

/// Errors that can occur during BFEN parsing.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BfenError {
    #[error("expected 2 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("invalid turn: '{0}'")]
    InvalidTurn(String),

    #[error("invalid side character: '{0}'")]
    InvalidSide(char),

    #[error("invalid class character: '{0}'")]
    InvalidClass(char),

    #[error("invalid position: '{0}'")]
    InvalidPosition(String),

    #[error("invalid stats: '{0}'")]
    InvalidStats(String),

    #[error("invalid unit entry: '{0}'")]
    InvalidUnitEntry(String),

    #[error("duplicate unit at position {0}")]
    DuplicateUnit(Position),
}

fn parse_turn(s: &str) -> Result<u32, BfenError> {
    match s.parse::<u32>() {
        Ok(turn) if turn >= 1 => Ok(turn),
        _ => Err(BfenError::InvalidTurn(s.to_string())),
    }
}

/// Parses `atk.def.spd.spc`.
fn parse_stats(s: &str) -> Result<[u32; 4], BfenError> {
    let bad = || BfenError::InvalidStats(s.to_string());
    let mut stats = [0u32; 4];
    let mut parts = s.split('.');
    for slot in stats.iter_mut() {
        *slot = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    }
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok(stats)
}

fn parse_unit_entry(entry: &str) -> Result<(Position, Side, Unit), BfenError> {
    let (head, stats) = entry
        .split_once(':')
        .ok_or_else(|| BfenError::InvalidUnitEntry(entry.to_string()))?;

    let mut chars = head.chars();
    let (side_char, class_char) = match (chars.next(), chars.next()) {
        (Some(s), Some(c)) => (s, c),
        _ => return Err(BfenError::InvalidUnitEntry(entry.to_string())),
    };
    let pos_str = chars.as_str();

    let side = Side::from_notation_char(side_char).ok_or(BfenError::InvalidSide(side_char))?;
    let class =
        UnitClass::from_notation_char(class_char).ok_or(BfenError::InvalidClass(class_char))?;
    let position = pos_str
        .parse::<u32>()
        .ok()
        .and_then(|n| Position::new(n).ok())
        .ok_or_else(|| BfenError::InvalidPosition(pos_str.to_string()))?;

    let [attack, defense, speed, special] = parse_stats(stats)?;
    let unit = Unit::new(class, attack, defense, speed).with_special(special);
    Ok((position, side, unit))
}

fn parse_units(s: &str, board: &mut Board) -> Result<(), BfenError> {
    if s == "-" {
        return Ok(());
    }

    for entry in s.split(',') {
        let (position, side, unit) = parse_unit_entry(entry)?;
        if !board.place(position, side, unit) {
            return Err(BfenError::DuplicateUnit(position));
        }
    }

    Ok(())
}

/// Parses a BFEN string into a snapshot.
pub fn parse_bfen(s: &str) -> Result<Snapshot, BfenError> {
    let sections: Vec<&str> = s.trim().split('/').collect();
    if sections.len() != 2 {
        return Err(BfenError::WrongSectionCount(sections.len()));
    }

    let turn = parse_turn(sections[0])?;
    let mut board = Board::empty();
    parse_units(sections[1], &mut board)?;

    Ok(Snapshot { turn, board })
}

/// Encodes a board and turn as canonical BFEN, units in ascending position.
pub fn encode_bfen(turn: u32, board: &Board) -> String {
    let entries: Vec<String> = board
        .occupants()
        .map(|(p, o)| {
            format!(
                "{}{}{}:{}.{}.{}.{}",
                o.side.notation_char(),
                o.unit.class.notation_char(),
                p,
                o.unit.attack,
                o.unit.defense,
                o.unit.speed,
                o.unit.special
            )
        })
        .collect();

    let units = if entries.is_empty() {
        "-".to_string()
    } else {
        entries.join(",")
    };
    format!("{}/{}", turn, units)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKIRMISH: &str = "9/ii1:5.4.3.0,ic5:6.2.6.0,ds8:1.3.2.4,dp29:3.7.1.0";

    fn pos(n: u32) -> Position {
        Position::new(n).unwrap()
    }

    #[test]
    fn parse_skirmish() {
        let snap = parse_bfen(SKIRMISH).expect("failed to parse BFEN");
        assert_eq!(snap.turn, 9);
        assert_eq!(snap.board.len(), 4);

        let cav = snap.board.get(pos(5)).unwrap();
        assert_eq!(cav.side, Side::Invader);
        assert_eq!(cav.unit, Unit::new(UnitClass::Cavalry, 6, 2, 6));

        let support = snap.board.get(pos(8)).unwrap();
        assert_eq!(support.side, Side::Defender);
        assert_eq!(support.unit.special, 4);
    }

    #[test]
    fn encode_is_canonical() {
        // Out-of-order input re-encodes in ascending position.
        let snap = parse_bfen("9/dp29:3.7.1.0,ii1:5.4.3.0,ds8:1.3.2.4,ic5:6.2.6.0").unwrap();
        assert_eq!(encode_bfen(snap.turn, &snap.board), SKIRMISH);
    }

    #[test]
    fn empty_board() {
        let snap = parse_bfen("1/-").unwrap();
        assert!(snap.board.is_empty());
        assert_eq!(encode_bfen(1, &snap.board), "1/-");
    }

    #[test]
    fn section_count() {
        assert_eq!(parse_bfen("1"), Err(BfenError::WrongSectionCount(1)));
        assert_eq!(parse_bfen("1/-/-"), Err(BfenError::WrongSectionCount(3)));
    }

    #[test]
    fn turn_must_be_positive() {
        assert_eq!(parse_bfen("0/-"), Err(BfenError::InvalidTurn("0".into())));
        assert_eq!(parse_bfen("x/-"), Err(BfenError::InvalidTurn("x".into())));
    }

    #[test]
    fn bad_entries() {
        assert_eq!(parse_bfen("1/xi1:1.1.1.0"), Err(BfenError::InvalidSide('x')));
        assert_eq!(parse_bfen("1/iz1:1.1.1.0"), Err(BfenError::InvalidClass('z')));
        assert_eq!(
            parse_bfen("1/ii55:1.1.1.0"),
            Err(BfenError::InvalidPosition("55".into()))
        );
        assert_eq!(parse_bfen("1/ii1:1.1.1"), Err(BfenError::InvalidStats("1.1.1".into())));
        assert_eq!(
            parse_bfen("1/ii1:1.1.1.0.0"),
            Err(BfenError::InvalidStats("1.1.1.0.0".into()))
        );
        assert_eq!(parse_bfen("1/ii1"), Err(BfenError::InvalidUnitEntry("ii1".into())));
        assert_eq!(parse_bfen("1/i:1.1.1.0"), Err(BfenError::InvalidUnitEntry("i:1.1.1.0".into())));
    }

    #[test]
    fn duplicate_unit() {
        assert_eq!(
            parse_bfen("1/ii1:1.1.1.0,dp1:1.1.1.0"),
            Err(BfenError::DuplicateUnit(pos(1)))
        );
    }
}
