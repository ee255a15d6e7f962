pub mod board;
pub mod history;
pub mod pieces;
pub mod square;
pub mod zobrist;

pub use board::*;
pub use history::*;
pub use pieces::*;
pub use square::*;
