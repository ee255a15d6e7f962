use crate::game::board::{BoardMove, Position};
use crate::game::history::PositionHistory;
use crate::game::pieces::Color;
use crate::game::square::{BOARD_HEIGHT, BOARD_WIDTH, BoardSquare, BoardSquareExt};
use crate::utils::bitboard::{ALL_TRAPS, Bitboard, BitboardExt, DENS, WATER};

#[derive(Debug)]
pub enum MoveResultType {
    Success,         // successful move
    InvalidNotation, // wrong algebraic notation
    InvalidMove,     // invalid move
}

pub struct GameController {
    pub position: Position,
    pub history: PositionHistory,
}

impl GameController {
    pub fn new() -> Self {
        let position = Position::new();
        let mut history = PositionHistory::new();
        history.push(position.zobrist_key);

        Self { position, history }
    }

    pub fn reset_board(&mut self) {
        self.position = Position::new();
        self.history = PositionHistory::new();
        self.history.push(self.position.zobrist_key);
    }

    /// Squares the piece on `from` may move to right now: its attack set,
    /// minus its own pieces and its own den. Rank-based capture legality is
    /// the rules layer's concern and is not checked here.
    pub fn valid_targets(&self, from: BoardSquare) -> Bitboard {
        let Some((piece, color)) = self.position.piece_at(from) else {
            return Bitboard::default();
        };

        self.position.piece_attacks(piece, color, from)
            & !self.position.color_bitboards[color as usize]
            & !DENS[color as usize]
    }

    pub fn try_move_piece(&mut self, long_algebraic_notation: &str) -> MoveResultType {
        match BoardMove::parse(long_algebraic_notation) {
            Some(board_move) => {
                match self.position.piece_at(board_move.from) {
                    Some((_, color)) if color == self.position.side => {}
                    _ => return MoveResultType::InvalidMove,
                }

                if !self.valid_targets(board_move.from).is_set(board_move.to) {
                    return MoveResultType::InvalidMove;
                }

                self.position.make_move(board_move);
                self.history.push(self.position.zobrist_key);

                if self.is_threefold_repetition() {
                    log::info!("position repeated three times");
                }

                MoveResultType::Success
            }
            None => MoveResultType::InvalidNotation,
        }
    }

    /// Whether the current position has now been seen three times. The
    /// history already contains the current position, so this is a plain
    /// occurrence count with no look-ahead adjustment.
    pub fn is_threefold_repetition(&self) -> bool {
        self.history.occurrences(self.position.zobrist_key) >= 3
    }

    pub fn print(&self) {
        self.print_with_targets(Bitboard::default());
    }

    pub fn print_attacks(&self, color: Color) {
        self.print_with_targets(self.position.attacked_squares(color));
    }

    fn print_with_targets(&self, targets: Bitboard) {
        const RESET: &str = "\x1b[0m";
        const LAND_BG: &str = "\x1b[48;5;22m";
        const WATER_BG: &str = "\x1b[48;5;25m";
        const TRAP_BG: &str = "\x1b[48;5;52m";
        const DEN_BG: &str = "\x1b[48;5;94m";
        const ORANGE_PIECE: &str = "\x1b[1;38;5;208m";
        const YELLOW_PIECE: &str = "\x1b[1;38;5;226m";
        const TARGET_HIGHLIGHT: &str = "\x1b[1;34m";
        const HEADING_BG: &str = "\x1b[48;5;240m";

        let heading_text = match self.position.side {
            Color::Orange => "Orange to move",
            Color::Yellow => "Yellow to move",
        };
        let heading_color = match self.position.side {
            Color::Orange => ORANGE_PIECE,
            Color::Yellow => YELLOW_PIECE,
        };

        // Board width is 7 squares * 3 chars each = 21 chars
        let board_width = 3 * BOARD_WIDTH as usize;
        let padding = (board_width - heading_text.len()) / 2;
        let right_padding = board_width - heading_text.len() - padding;

        println!(
            "{}{}{}{}{}{}",
            HEADING_BG,
            " ".repeat(padding),
            heading_color,
            heading_text,
            " ".repeat(right_padding),
            RESET
        );

        for y in 0..BOARD_HEIGHT {
            let mut line = String::new();

            for x in 0..BOARD_WIDTH {
                let square = BoardSquare::from_position(x, y);

                let bg_color = if WATER.is_set(square) {
                    WATER_BG
                } else if ALL_TRAPS.is_set(square) {
                    TRAP_BG
                } else if DENS[Color::Orange as usize].is_set(square)
                    || DENS[Color::Yellow as usize].is_set(square)
                {
                    DEN_BG
                } else {
                    LAND_BG
                };
                line.push_str(bg_color);

                match self.position.piece_at(square) {
                    Some((piece, color)) => {
                        let piece_color = match color {
                            Color::Orange => ORANGE_PIECE,
                            Color::Yellow => YELLOW_PIECE,
                        };
                        line.push_str(&format!(
                            "{} {} {}",
                            piece_color,
                            piece.to_char().to_ascii_uppercase(),
                            RESET
                        ));
                    }
                    None => {
                        if targets.is_set(square) {
                            line.push_str(&format!("{} ● {}", TARGET_HIGHLIGHT, RESET));
                        } else {
                            line.push_str("   ");
                        }
                    }
                }

                line.push_str(RESET);
            }

            println!("{} {}", line, BOARD_HEIGHT - y);
        }

        let files = ('a'..='g').map(|f| format!(" {} ", f)).collect::<String>();
        println!("{}", files);
    }

    pub fn print_hash(&self) {
        println!(
            "0x{:016x} (seen {} time(s))",
            self.position.zobrist_key,
            self.history.occurrences(self.position.zobrist_key)
        );
    }
}
