use crate::game::pieces::{Color, Piece};
use crate::game::square::{BoardSquare, SQUARE_COUNT};
use strum::EnumCount;

pub struct LCG {
    state: u64,
}

impl LCG {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub const fn next_u64(mut self) -> (u64, Self) {
        // Knuth's MMIX constants
        // https://en.wikipedia.org/wiki/Linear_congruential_generator
        const A: u64 = 6364136223846793005;
        const C: u64 = 1442695040888963407;

        self.state = self.state.wrapping_mul(A).wrapping_add(C);

        (self.state, self)
    }

    /// Every key must be non-zero, otherwise a fact could XOR into the hash
    /// without changing it; redraw on the (astronomically unlikely) zero.
    pub const fn next_nonzero_u64(mut self) -> (u64, Self) {
        loop {
            let (value, next) = self.next_u64();

            if value != 0 {
                return (value, next);
            }

            self = next;
        }
    }
}

/// One independent random key per independent fact a position can hold:
/// a piece of a given rank and player on a square, a player's hungry flag on
/// a square, and the second player being the one to move.
///
/// Built in const context, so the keys exist before any lookup can happen.
pub struct ZobristKeys {
    pub pieces: [[[u64; SQUARE_COUNT]; Piece::COUNT]; Color::COUNT],
    pub hungry: [[u64; SQUARE_COUNT]; Color::COUNT],
    pub side_to_move: u64,
}

impl ZobristKeys {
    pub const fn new() -> Self {
        let mut rng = LCG::new(0x9e3779b97f4a7c15);

        let mut pieces = [[[0u64; SQUARE_COUNT]; Piece::COUNT]; Color::COUNT];
        let mut color = 0;
        while color < Color::COUNT {
            let mut piece = 0;
            while piece < Piece::COUNT {
                let mut square = 0;
                while square < SQUARE_COUNT {
                    let (value, new_rng) = rng.next_nonzero_u64();
                    pieces[color][piece][square] = value;
                    rng = new_rng;
                    square += 1;
                }

                piece += 1;
            }

            color += 1;
        }

        let mut hungry = [[0u64; SQUARE_COUNT]; Color::COUNT];
        let mut color = 0;
        while color < Color::COUNT {
            let mut square = 0;
            while square < SQUARE_COUNT {
                let (value, new_rng) = rng.next_nonzero_u64();
                hungry[color][square] = value;
                rng = new_rng;
                square += 1;
            }

            color += 1;
        }

        let (side_to_move, _) = rng.next_nonzero_u64();

        Self {
            pieces,
            hungry,
            side_to_move,
        }
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

/// XORs in the key for one piece entering or leaving a square. Must be called
/// exactly once per actual bitboard change, or the hash silently drifts away
/// from the position; the mutators in `Position` do this for you.
pub fn toggle_piece(hash: u64, color: Color, piece: Piece, square: BoardSquare) -> u64 {
    if square as usize >= SQUARE_COUNT {
        log::warn!("zobrist: piece toggle for out-of-range square {}", square);
        return hash;
    }

    hash ^ ZOBRIST.pieces[color as usize][piece as usize][square as usize]
}

pub fn toggle_side(hash: u64) -> u64 {
    hash ^ ZOBRIST.side_to_move
}

pub fn toggle_hungry(hash: u64, color: Color, square: BoardSquare) -> u64 {
    if square as usize >= SQUARE_COUNT {
        log::warn!("zobrist: hungry toggle for out-of-range square {}", square);
        return hash;
    }

    hash ^ ZOBRIST.hungry[color as usize][square as usize]
}
