pub mod controller;
pub mod engine;
pub mod game;
pub mod utils;


pub use crate::utils::bitboard::{Bitboard, BitboardExt};
