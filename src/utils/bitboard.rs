use crate::game::pieces::Color;
use crate::game::square::{BOARD_HEIGHT, BOARD_WIDTH, BoardSquare, SQUARE_COUNT};
use strum::EnumCount;

/// Bit i encodes a boolean fact about board square i (a9 = 0 .. g1 = 62).
pub type Bitboard = u64;

const _: () = assert!(BOARD_WIDTH as usize * BOARD_HEIGHT as usize == SQUARE_COUNT);

pub trait BitboardExt {
    fn with_bit(&self, index: BoardSquare) -> Bitboard;
    fn without_bit(&self, index: BoardSquare) -> Bitboard;
    fn is_set(&self, index: BoardSquare) -> bool;
    fn pop_count(&self) -> u32;
    fn lsb_index(&self) -> i32;
    fn iter_positions(&self) -> BitboardIterator;
    fn print(&self, title: Option<&str>, position: Option<BoardSquare>);
}

// used like this because we can't have a const fn as a trait,
// but we want it for the compile-time table calculation
pub const fn position_to_bitmask(x: u32, y: u32) -> u64 {
    1u64 << (x + y * BOARD_WIDTH as u32)
}

pub const fn is_position_valid(x: isize, y: isize) -> bool {
    x >= 0 && x < BOARD_WIDTH as isize && y >= 0 && y < BOARD_HEIGHT as isize
}

impl BitboardExt for u64 {
    // The bit operations tolerate out-of-range indices instead of panicking:
    // callers on the attack-generation path have already validated squares
    // through the coordinate mapping.
    fn with_bit(&self, index: BoardSquare) -> Bitboard {
        if index > 63 {
            return *self;
        }

        self | (1 << index)
    }

    fn without_bit(&self, index: BoardSquare) -> Bitboard {
        if index > 63 {
            return *self;
        }

        self & !(1 << index)
    }

    fn is_set(&self, index: BoardSquare) -> bool {
        if index > 63 {
            return false;
        }

        self & (1 << index) != 0
    }

    /// Counts set bits by repeatedly clearing the lowest one, so the cost
    /// scales with the number of pieces rather than the board width.
    fn pop_count(&self) -> u32 {
        let mut remaining = *self;
        let mut count = 0;

        while remaining != 0 {
            remaining &= remaining - 1;
            count += 1;
        }

        count
    }

    /// Index of the lowest set bit, or -1 for an empty board.
    fn lsb_index(&self) -> i32 {
        if *self == 0 {
            return -1;
        }

        self.trailing_zeros() as i32
    }

    fn iter_positions(&self) -> BitboardIterator {
        BitboardIterator { remaining: *self }
    }

    fn print(&self, title: Option<&str>, position: Option<BoardSquare>) {
        if let Some(title_text) = title {
            log::debug!(
                "\x1b[97m{}{}\x1b[0m",
                " ".repeat((3 * BOARD_WIDTH as usize).saturating_sub(title_text.len()) / 2),
                title_text
            );
        }

        for y in 0..BOARD_HEIGHT {
            let mut line = String::new();
            for x in 0..BOARD_WIDTH {
                let index = x + y * BOARD_WIDTH;
                let is_marked_position = position.is_some_and(|p| p == index);

                line.push_str(match (self.is_set(index), is_marked_position) {
                    (_, true) => "\x1b[93m ● \x1b[0m",
                    (true, false) => "\x1b[97m 1 \x1b[0m",
                    (false, false) => "\x1b[90m 0 \x1b[0m",
                });
            }
            log::debug!("{}", line);
        }

        if title.is_some() {
            log::debug!("");
        }
    }
}

pub struct BitboardIterator {
    remaining: u64,
}

impl Iterator for BitboardIterator {
    type Item = BoardSquare;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let index = self.remaining.trailing_zeros() as u8;
        self.remaining &= self.remaining - 1; // Clear the lowest set bit

        Some(index)
    }
}

/// Resolves a named coordinate (file letter, rank digit) to a square index.
/// Terrain data must be internally consistent, so a coordinate outside the
/// board is a fatal error; since all tables are built in const context, it
/// aborts the build instead of the process.
const fn resolve_square(file: u8, rank: u8) -> usize {
    if file < b'a' || file >= b'a' + BOARD_WIDTH || rank < 1 || rank > BOARD_HEIGHT {
        panic!("terrain coordinate outside the 9x7 board");
    }

    (file - b'a') as usize + (BOARD_HEIGHT - rank) as usize * BOARD_WIDTH as usize
}

/// The two 3x2 ponds flanking the center column, rows 4 through 6.
const WATER_COORDINATES: [(u8, u8); 12] = [
    (b'b', 4), (b'c', 4), (b'e', 4), (b'f', 4),
    (b'b', 5), (b'c', 5), (b'e', 5), (b'f', 5),
    (b'b', 6), (b'c', 6), (b'e', 6), (b'f', 6),
];

/// Traps beside the Orange den; an Orange piece is unaffected by them, so
/// they afflict Yellow, and vice versa.
const ORANGE_DEN_TRAP_COORDINATES: [(u8, u8); 3] = [(b'c', 9), (b'd', 8), (b'e', 9)];
const YELLOW_DEN_TRAP_COORDINATES: [(u8, u8); 3] = [(b'c', 1), (b'd', 2), (b'e', 1)];

/// Orange plays from the top of the board, Yellow from the bottom.
const DEN_COORDINATES: [(u8, u8); Color::COUNT] = [(b'd', 9), (b'd', 1)];

const fn mask_of_coordinates<const N: usize>(coordinates: [(u8, u8); N]) -> Bitboard {
    let mut mask = 0;

    let mut i = 0;
    while i < N {
        mask |= 1u64 << resolve_square(coordinates[i].0, coordinates[i].1);
        i += 1;
    }

    mask
}

pub const fn build_water_mask() -> Bitboard {
    mask_of_coordinates(WATER_COORDINATES)
}

/// Trap masks indexed by the player whose pieces they afflict.
pub const fn build_trap_masks() -> [Bitboard; Color::COUNT] {
    let mut masks = [0; Color::COUNT];

    masks[Color::Orange as usize] = mask_of_coordinates(YELLOW_DEN_TRAP_COORDINATES);
    masks[Color::Yellow as usize] = mask_of_coordinates(ORANGE_DEN_TRAP_COORDINATES);

    masks
}

/// Den masks indexed by the owning player.
pub const fn build_den_masks() -> [Bitboard; Color::COUNT] {
    let mut masks = [0; Color::COUNT];

    let mut color = 0;
    while color < Color::COUNT {
        masks[color] = 1u64 << resolve_square(DEN_COORDINATES[color].0, DEN_COORDINATES[color].1);
        color += 1;
    }

    masks
}

pub const fn build_center_column_mask() -> Bitboard {
    let center = (BOARD_WIDTH / 2) as u32;
    let mut mask = 0;

    let mut y = 0;
    while y < BOARD_HEIGHT as u32 {
        mask |= position_to_bitmask(center, y);
        y += 1;
    }

    mask
}

/// The four rows closest to the opponent's den, indexed by the advancing
/// player. Consumed by the evaluation layer, not by the move generator.
pub const fn build_advance_zone_masks() -> [Bitboard; Color::COUNT] {
    let mut masks = [0; Color::COUNT];

    let mut y = 0;
    while y < 4u32 {
        let mut x = 0;
        while x < BOARD_WIDTH as u32 {
            // Orange advances towards the bottom rows, Yellow towards the top
            masks[Color::Orange as usize] |= position_to_bitmask(x, BOARD_HEIGHT as u32 - 1 - y);
            masks[Color::Yellow as usize] |= position_to_bitmask(x, y);
            x += 1;
        }
        y += 1;
    }

    masks
}

/// Orthogonal neighbor mask for every square, bounds-checked so rows never
/// wrap into one another.
pub const fn build_neighbor_masks() -> [Bitboard; SQUARE_COUNT] {
    const DELTAS: [[isize; 2]; 4] = [[1, 0], [-1, 0], [0, 1], [0, -1]];

    let mut masks = [0; SQUARE_COUNT];

    let mut square = 0;
    while square < SQUARE_COUNT {
        let x = (square % BOARD_WIDTH as usize) as isize;
        let y = (square / BOARD_WIDTH as usize) as isize;

        let mut d = 0;
        while d < DELTAS.len() {
            let nx = x + DELTAS[d][0];
            let ny = y + DELTAS[d][1];

            if is_position_valid(nx, ny) {
                masks[square] |= position_to_bitmask(nx as u32, ny as u32);
            }

            d += 1;
        }

        square += 1;
    }

    masks
}

/// Flattened (from, to) table of the water squares a jump travels over.
/// An entry of zero means the pair is not a valid jump geometry at all.
///
/// A vertical jump covers 4 rows (3 of water), a horizontal one 3 columns
/// (2 of water). Candidates whose traversal is not entirely water are
/// skipped; they are ordinary non-jump squares, not an error.
pub const fn build_jump_path_masks() -> [Bitboard; SQUARE_COUNT * SQUARE_COUNT] {
    // (dx, dy, distance)
    const JUMP_DELTAS: [(isize, isize, isize); 4] = [(0, -1, 4), (0, 1, 4), (-1, 0, 3), (1, 0, 3)];

    let water = build_water_mask();
    let mut table = [0u64; SQUARE_COUNT * SQUARE_COUNT];

    let mut from = 0;
    while from < SQUARE_COUNT {
        // jumps start on land only
        if water & (1u64 << from) == 0 {
            let x = (from % BOARD_WIDTH as usize) as isize;
            let y = (from / BOARD_WIDTH as usize) as isize;

            let mut d = 0;
            while d < JUMP_DELTAS.len() {
                let (dx, dy, distance) = JUMP_DELTAS[d];
                let tx = x + dx * distance;
                let ty = y + dy * distance;

                // and land on land
                if is_position_valid(tx, ty) && water & position_to_bitmask(tx as u32, ty as u32) == 0 {
                    let to = (tx + ty * BOARD_WIDTH as isize) as usize;

                    let mut mask = 0u64;
                    let mut traverses_water_only = true;

                    let mut step = 1;
                    while step < distance {
                        let ix = x + dx * step;
                        let iy = y + dy * step;

                        if !is_position_valid(ix, iy) {
                            panic!("jump traversal left the board");
                        }

                        if water & position_to_bitmask(ix as u32, iy as u32) == 0 {
                            traverses_water_only = false;
                        }

                        mask |= position_to_bitmask(ix as u32, iy as u32);
                        step += 1;
                    }

                    if traverses_water_only {
                        table[from * SQUARE_COUNT + to] = mask;
                    }
                }

                d += 1;
            }
        }

        from += 1;
    }

    table
}

pub const WATER: Bitboard = build_water_mask();
pub const TRAPS: [Bitboard; Color::COUNT] = build_trap_masks();
pub const ALL_TRAPS: Bitboard = TRAPS[Color::Orange as usize] | TRAPS[Color::Yellow as usize];
pub const DENS: [Bitboard; Color::COUNT] = build_den_masks();
pub const CENTER_COLUMN: Bitboard = build_center_column_mask();
pub const ADVANCE_ZONES: [Bitboard; Color::COUNT] = build_advance_zone_masks();
pub const NEIGHBORS: [Bitboard; SQUARE_COUNT] = build_neighbor_masks();
pub const JUMP_PATHS: [Bitboard; SQUARE_COUNT * SQUARE_COUNT] = build_jump_path_masks();

/// Water mask traversed by the (from, to) jump, or zero when the pair is not
/// a valid jump geometry (including out-of-range squares).
pub fn jump_path(from: BoardSquare, to: BoardSquare) -> Bitboard {
    if from as usize >= SQUARE_COUNT || to as usize >= SQUARE_COUNT {
        return 0;
    }

    JUMP_PATHS[from as usize * SQUARE_COUNT + to as usize]
}
