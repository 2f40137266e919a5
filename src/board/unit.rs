//! Unit classes and stat descriptors.

use serde::{Deserialize, Serialize};

/// The class of a unit, which decides how it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    Infantry,
    Pike,
    Archer,
    Cavalry,
    Elite,
    Support,
}

/// All unit classes.
pub const ALL_CLASSES: [UnitClass; 6] = [
    UnitClass::Infantry,
    UnitClass::Pike,
    UnitClass::Archer,
    UnitClass::Cavalry,
    UnitClass::Elite,
    UnitClass::Support,
];

impl UnitClass {
    /// Returns the single-character notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            UnitClass::Infantry => 'i',
            UnitClass::Pike => 'p',
            UnitClass::Archer => 'a',
            UnitClass::Cavalry => 'c',
            UnitClass::Elite => 'e',
            UnitClass::Support => 's',
        }
    }

    /// Parses a class from its single-character notation abbreviation.
    pub fn from_notation_char(c: char) -> Option<UnitClass> {
        match c {
            'i' => Some(UnitClass::Infantry),
            'p' => Some(UnitClass::Pike),
            'a' => Some(UnitClass::Archer),
            'c' => Some(UnitClass::Cavalry),
            'e' => Some(UnitClass::Elite),
            's' => Some(UnitClass::Support),
            _ => None,
        }
    }
}

/// A unit's class and base stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub class: UnitClass,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    #[serde(default)]
    pub special: u32,
}

impl Unit {
    pub const fn new(class: UnitClass, attack: u32, defense: u32, speed: u32) -> Self {
        Unit {
            class,
            attack,
            defense,
            speed,
            special: 0,
        }
    }

    pub const fn with_special(mut self, special: u32) -> Self {
        self.special = special;
        self
    }
}
