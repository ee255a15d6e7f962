use std::ops::Not;
use strum_macros::{EnumCount, EnumIter, FromRepr};

/// The eight animal ranks, weakest (Rat, rank 1) to strongest (Elephant, rank 8).
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, EnumCount, FromRepr)]
pub enum Piece {
    Rat = 0,
    Cat = 1,
    Dog = 2,
    Wolf = 3,
    Leopard = 4,
    Tiger = 5,
    Lion = 6,
    Elephant = 7,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, EnumCount, FromRepr)]
pub enum Color {
    Orange = 0,
    Yellow = 1,
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Color::Orange => Color::Yellow,
            Color::Yellow => Color::Orange,
        }
    }
}

/// Movement abilities of a rank. This is static game configuration: the board
/// core reads it but never changes it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceTraits {
    pub swims: bool,
    pub jumps_vertically: bool,
    pub jumps_horizontally: bool,
}

const LAND_ONLY: PieceTraits = PieceTraits {
    swims: false,
    jumps_vertically: false,
    jumps_horizontally: false,
};

const SWIMMER: PieceTraits = PieceTraits {
    swims: true,
    jumps_vertically: false,
    jumps_horizontally: false,
};

const JUMPER: PieceTraits = PieceTraits {
    swims: false,
    jumps_vertically: true,
    jumps_horizontally: true,
};

impl Piece {
    /// Capture rank, 1 (weakest) to 8 (strongest).
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    pub const fn traits(self) -> PieceTraits {
        match self {
            Piece::Rat | Piece::Dog => SWIMMER,
            Piece::Tiger | Piece::Lion => JUMPER,
            _ => LAND_ONLY,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'r' => Some(Piece::Rat),
            'c' => Some(Piece::Cat),
            'd' => Some(Piece::Dog),
            'w' => Some(Piece::Wolf),
            'p' => Some(Piece::Leopard),
            't' => Some(Piece::Tiger),
            'l' => Some(Piece::Lion),
            'e' => Some(Piece::Elephant),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Piece::Rat      => 'r',
            Piece::Cat      => 'c',
            Piece::Dog      => 'd',
            Piece::Wolf     => 'w',
            Piece::Leopard  => 'p',
            Piece::Tiger    => 't',
            Piece::Lion     => 'l',
            Piece::Elephant => 'e',
        }
    }

    pub fn to_emoji(&self) -> char {
        // We change the player via Ansi codes
        match self {
            Piece::Rat => '🐀',
            Piece::Cat => '🐈',
            Piece::Dog => '🐕',
            Piece::Wolf => '🐺',
            Piece::Leopard => '🐆',
            Piece::Tiger => '🐅',
            Piece::Lion => '🦁',
            Piece::Elephant => '🐘',
        }
    }
}
