use super::pieces::{Color, Piece};
use super::square::{BoardSquare, BoardSquareExt, SQUARE_COUNT};
use super::zobrist;
use crate::utils::bitboard::{Bitboard, BitboardExt, NEIGHBORS, WATER, is_position_valid, jump_path};
use strum::{EnumCount, IntoEnumIterator};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardMove {
    pub from: BoardSquare,
    pub to: BoardSquare,
}

impl BoardMove {
    pub fn parse(string: &str) -> Option<BoardMove> {
        if string.len() != 4 || !string.is_ascii() {
            return None;
        }

        match (
            BoardSquare::parse(&string[0..2]),
            BoardSquare::parse(&string[2..4]),
        ) {
            (Some(from), Some(to)) => Some(BoardMove { from, to }),
            (_, _) => None,
        }
    }

    pub fn unparse(&self) -> String {
        format!(
            "{}{}",
            self.from.unparse().unwrap_or_else(|| "??".to_string()),
            self.to.unparse().unwrap_or_else(|| "??".to_string())
        )
    }
}

/// Opening layout of the player on the top side of the board; the other
/// player's layout is the same mirrored through the board center.
const OPENING_LAYOUT: [(Piece, u8, u8); Piece::COUNT] = [
    (Piece::Lion, b'a', 9),
    (Piece::Tiger, b'g', 9),
    (Piece::Dog, b'b', 8),
    (Piece::Cat, b'f', 8),
    (Piece::Rat, b'a', 7),
    (Piece::Leopard, b'c', 7),
    (Piece::Wolf, b'e', 7),
    (Piece::Elephant, b'g', 7),
];

/// A full game position: one bitboard per (player, rank), the derived
/// occupancy boards, the side to move, the externally-driven hungry flags,
/// and the Zobrist key kept incrementally in sync by every mutator.
#[derive(Debug, Clone)]
pub struct Position {
    pub piece_bitboards: [[Bitboard; Piece::COUNT]; Color::COUNT],
    pub color_bitboards: [Bitboard; Color::COUNT],
    pub occupied: Bitboard,

    pub side: Color,
    pub hungry: [Bitboard; Color::COUNT],

    pub zobrist_key: u64,
}

impl Position {
    pub fn empty() -> Position {
        Position {
            piece_bitboards: [[Bitboard::default(); Piece::COUNT]; Color::COUNT],
            color_bitboards: [Bitboard::default(); Color::COUNT],
            occupied: Bitboard::default(),
            side: Color::Orange,
            hungry: [Bitboard::default(); Color::COUNT],
            zobrist_key: 0,
        }
    }

    pub fn new() -> Position {
        let mut position = Position::empty();

        for (piece, file, rank) in OPENING_LAYOUT {
            let x = file - b'a';
            let y = 9 - rank;

            position.place_piece(piece, Color::Orange, BoardSquare::from_position(x, y));
            position.place_piece(
                piece,
                Color::Yellow,
                BoardSquare::from_position(6 - x, 8 - y),
            );
        }

        position
    }

    /// The piece occupying a square, if any. At most one of the 16 piece
    /// boards can have the bit set, which the mutators guarantee.
    pub fn piece_at(&self, square: BoardSquare) -> Option<(Piece, Color)> {
        if !self.occupied.is_set(square) {
            return None;
        }

        for color in Color::iter() {
            if !self.color_bitboards[color as usize].is_set(square) {
                continue;
            }

            for piece in Piece::iter() {
                if self.piece_bitboards[color as usize][piece as usize].is_set(square) {
                    return Some((piece, color));
                }
            }
        }

        None
    }

    pub fn place_piece(&mut self, piece: Piece, color: Color, square: BoardSquare) {
        if square as usize >= SQUARE_COUNT {
            log::warn!("place_piece: square {} is off the board", square);
            return;
        }

        if self.occupied.is_set(square) {
            log::warn!(
                "place_piece: square {} is already occupied",
                square.unparse().unwrap_or_default()
            );
            return;
        }

        let mask = square.to_mask();

        self.piece_bitboards[color as usize][piece as usize] |= mask;
        self.color_bitboards[color as usize] |= mask;
        self.occupied |= mask;

        self.zobrist_key = zobrist::toggle_piece(self.zobrist_key, color, piece, square);

        debug_assert_eq!(self.zobrist_key, self.compute_hash());
    }

    pub fn remove_piece(&mut self, piece: Piece, color: Color, square: BoardSquare) {
        if !self.piece_bitboards[color as usize][piece as usize].is_set(square) {
            log::warn!(
                "remove_piece: no {:?} {:?} on square {}",
                color,
                piece,
                square.unparse().unwrap_or_default()
            );
            return;
        }

        let mask = square.to_mask();

        self.piece_bitboards[color as usize][piece as usize] &= !mask;
        self.color_bitboards[color as usize] &= !mask;
        self.occupied &= !mask;

        self.zobrist_key = zobrist::toggle_piece(self.zobrist_key, color, piece, square);

        debug_assert_eq!(self.zobrist_key, self.compute_hash());
    }

    pub fn switch_side(&mut self) {
        self.side = !self.side;
        self.zobrist_key = zobrist::toggle_side(self.zobrist_key);

        debug_assert_eq!(self.zobrist_key, self.compute_hash());
    }

    /// Flips a hungry flag if it differs from the requested state. What makes
    /// a piece hungry is the rules layer's business; the flag only needs to
    /// participate in position identity here.
    pub fn set_hungry(&mut self, color: Color, square: BoardSquare, hungry: bool) {
        if square as usize >= SQUARE_COUNT {
            log::warn!("set_hungry: square {} is off the board", square);
            return;
        }

        if self.hungry[color as usize].is_set(square) == hungry {
            return;
        }

        self.hungry[color as usize] ^= square.to_mask();
        self.zobrist_key = zobrist::toggle_hungry(self.zobrist_key, color, square);

        debug_assert_eq!(self.zobrist_key, self.compute_hash());
    }

    /// Moves the side-to-move's piece, capturing whatever sits on the target
    /// square, and passes the turn. Whether the capture is legal by rank is
    /// the caller's responsibility.
    pub fn make_move(&mut self, board_move: BoardMove) {
        let Some((piece, color)) = self.piece_at(board_move.from) else {
            log::warn!("make_move: no piece on {}", board_move.unparse());
            return;
        };

        if let Some((captured, captured_color)) = self.piece_at(board_move.to) {
            self.remove_piece(captured, captured_color, board_move.to);
        }

        self.remove_piece(piece, color, board_move.from);
        self.place_piece(piece, color, board_move.to);

        self.switch_side();
    }

    /// Full Zobrist recomputation. Only needed when creating or loading a
    /// position; the mutators keep `zobrist_key` in step incrementally.
    pub fn compute_hash(&self) -> u64 {
        let mut hash = 0;

        for color in Color::iter() {
            for piece in Piece::iter() {
                for square in self.piece_bitboards[color as usize][piece as usize].iter_positions()
                {
                    hash ^= zobrist::ZOBRIST.pieces[color as usize][piece as usize][square as usize];
                }
            }

            for square in self.hungry[color as usize].iter_positions() {
                hash ^= zobrist::ZOBRIST.hungry[color as usize][square as usize];
            }
        }

        if self.side == Color::Yellow {
            hash ^= zobrist::ZOBRIST.side_to_move;
        }

        hash
    }

    /// Union of the player's amphibious ranks' boards.
    pub fn amphibious_pieces(&self, color: Color) -> Bitboard {
        let mut board = Bitboard::default();

        for piece in Piece::iter() {
            if piece.traits().swims {
                board |= self.piece_bitboards[color as usize][piece as usize];
            }
        }

        board
    }

    /// Whether the (from, to) jump is unobstructed for the attacking player.
    /// A pair with no precomputed water path is not a jump at all and reports
    /// blocked. Otherwise the jump is clear iff no opposing amphibious piece
    /// sits on the traversed river squares.
    pub fn jump_path_clear(&self, from: BoardSquare, to: BoardSquare, color: Color) -> bool {
        let path = jump_path(from, to);

        if path == 0 {
            return false;
        }

        path & self.amphibious_pieces(!color) == 0
    }

    fn jump_target(&self, from: BoardSquare, x: isize, y: isize, color: Color) -> Bitboard {
        if !is_position_valid(x, y) {
            return Bitboard::default();
        }

        let to = BoardSquare::from_position(x as u8, y as u8);

        // jumps land on dry ground only
        if WATER.is_set(to) {
            return Bitboard::default();
        }

        if !self.jump_path_clear(from, to, color) {
            return Bitboard::default();
        }

        to.to_mask()
    }

    /// The squares a single piece standing on `square` threatens.
    pub fn piece_attacks(&self, piece: Piece, color: Color, square: BoardSquare) -> Bitboard {
        if square as usize >= SQUARE_COUNT {
            return Bitboard::default();
        }

        let traits = piece.traits();
        let on_water = WATER.is_set(square);

        if on_water && !traits.swims {
            // unreachable through the mutators, but a malformed position must
            // degrade instead of taking down the search above us
            log::warn!(
                "piece_attacks: non-swimming {:?} on water square {}",
                piece,
                square.unparse().unwrap_or_default()
            );
            return Bitboard::default();
        }

        let mut targets = NEIGHBORS[square as usize];

        if !traits.swims {
            targets &= !WATER;
        }

        if !on_water && (traits.jumps_vertically || traits.jumps_horizontally) {
            let x = square.get_x() as isize;
            let y = square.get_y() as isize;

            if traits.jumps_vertically {
                targets |= self.jump_target(square, x, y - 4, color);
                targets |= self.jump_target(square, x, y + 4, color);
            }

            if traits.jumps_horizontally {
                targets |= self.jump_target(square, x - 3, y, color);
                targets |= self.jump_target(square, x + 3, y, color);
            }
        }

        // A swimming Rat cannot threaten the Elephant, even when adjacent.
        // Deliberately not generalized: the rule is about these two ranks
        // exactly, with no counterpart for an Elephant attacking a Rat.
        if piece == Piece::Rat && on_water {
            targets &= !self.piece_bitboards[(!color) as usize][Piece::Elephant as usize];
        }

        targets
    }

    /// Every square the player's pieces threaten, as one bitboard. The result
    /// is an unordered set, so iteration order over pieces does not matter.
    pub fn attacked_squares(&self, color: Color) -> Bitboard {
        let mut attacks = Bitboard::default();

        for piece in Piece::iter() {
            let mut board = self.piece_bitboards[color as usize][piece as usize];

            while board != 0 {
                let square = board.lsb_index() as BoardSquare;
                board = board.without_bit(square);

                attacks |= self.piece_attacks(piece, color, square);
            }
        }

        attacks
    }
}
