use serde::{Deserialize, Serialize};

mod action;
mod board;
mod error;
mod game;
mod mines;
mod piece;
mod scenario;
mod session;

pub use action::*;
pub use board::*;
pub use error::*;
pub use game::*;
pub use mines::*;
pub use piece::*;
pub use scenario::*;
pub use session::*;

pub const BOARD_SIZE: usize = 8;

#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}
