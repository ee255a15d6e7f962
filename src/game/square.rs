use crate::utils::bitboard::Bitboard;

/// Index into the 9x7 board, counted left-to-right and top-to-bottom:
/// a9 is 0, g9 is 6, a1 is 56, g1 is 62. Bit 63 is never used.
pub type BoardSquare = u8;

pub const BOARD_WIDTH: u8 = 7;
pub const BOARD_HEIGHT: u8 = 9;
pub const SQUARE_COUNT: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

#[allow(dead_code)]
pub trait BoardSquareExt {
    fn get_x(&self) -> u8;
    fn get_y(&self) -> u8;
    fn get_rank(&self) -> u8;
    fn parse(string: &str) -> Option<BoardSquare>;
    fn unparse(&self) -> Option<String>;
    fn from_position(x: u8, y: u8) -> BoardSquare;
    fn to_mask(&self) -> Bitboard;

    const A9: BoardSquare = 0;
    const A8: BoardSquare = 7;
    const A7: BoardSquare = 14;
    const A6: BoardSquare = 21;
    const A5: BoardSquare = 28;
    const A4: BoardSquare = 35;
    const A3: BoardSquare = 42;
    const A2: BoardSquare = 49;
    const A1: BoardSquare = 56;

    const B9: BoardSquare = 1;
    const B8: BoardSquare = 8;
    const B7: BoardSquare = 15;
    const B6: BoardSquare = 22;
    const B5: BoardSquare = 29;
    const B4: BoardSquare = 36;
    const B3: BoardSquare = 43;
    const B2: BoardSquare = 50;
    const B1: BoardSquare = 57;

    const C9: BoardSquare = 2;
    const C8: BoardSquare = 9;
    const C7: BoardSquare = 16;
    const C6: BoardSquare = 23;
    const C5: BoardSquare = 30;
    const C4: BoardSquare = 37;
    const C3: BoardSquare = 44;
    const C2: BoardSquare = 51;
    const C1: BoardSquare = 58;

    const D9: BoardSquare = 3;
    const D8: BoardSquare = 10;
    const D7: BoardSquare = 17;
    const D6: BoardSquare = 24;
    const D5: BoardSquare = 31;
    const D4: BoardSquare = 38;
    const D3: BoardSquare = 45;
    const D2: BoardSquare = 52;
    const D1: BoardSquare = 59;

    const E9: BoardSquare = 4;
    const E8: BoardSquare = 11;
    const E7: BoardSquare = 18;
    const E6: BoardSquare = 25;
    const E5: BoardSquare = 32;
    const E4: BoardSquare = 39;
    const E3: BoardSquare = 46;
    const E2: BoardSquare = 53;
    const E1: BoardSquare = 60;

    const F9: BoardSquare = 5;
    const F8: BoardSquare = 12;
    const F7: BoardSquare = 19;
    const F6: BoardSquare = 26;
    const F5: BoardSquare = 33;
    const F4: BoardSquare = 40;
    const F3: BoardSquare = 47;
    const F2: BoardSquare = 54;
    const F1: BoardSquare = 61;

    const G9: BoardSquare = 6;
    const G8: BoardSquare = 13;
    const G7: BoardSquare = 20;
    const G6: BoardSquare = 27;
    const G5: BoardSquare = 34;
    const G4: BoardSquare = 41;
    const G3: BoardSquare = 48;
    const G2: BoardSquare = 55;
    const G1: BoardSquare = 62;
}

impl BoardSquareExt for u8 {
    fn get_x(&self) -> u8 {
        self % BOARD_WIDTH
    }

    /// Row counted from the top of the board (row 9 has y = 0).
    fn get_y(&self) -> u8 {
        self / BOARD_WIDTH
    }

    /// Rank as printed in coordinates (1..9, counted from the bottom).
    fn get_rank(&self) -> u8 {
        BOARD_HEIGHT - self.get_y()
    }

    fn parse(string: &str) -> Option<BoardSquare> {
        let mut chars = string.chars();

        match (chars.next(), chars.next()) {
            (Some(file @ 'a'..='g'), Some(rank @ '1'..='9')) => Some(BoardSquare::from_position(
                file as u8 - b'a',
                BOARD_HEIGHT - (rank as u8 - b'0'),
            )),
            (_, _) => None,
        }
    }

    fn unparse(&self) -> Option<String> {
        if *self as usize >= SQUARE_COUNT {
            return None;
        }

        Some(format!(
            "{}{}",
            (self.get_x() + b'a') as char,
            (self.get_rank() + b'0') as char
        ))
    }

    fn from_position(x: u8, y: u8) -> BoardSquare {
        x + y * BOARD_WIDTH
    }

    fn to_mask(&self) -> Bitboard {
        1 << self
    }
}
