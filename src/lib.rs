pub mod arena;
pub mod board;
pub mod bot;
pub mod game;
pub mod protocol;
pub mod web;

pub use arena::*;
pub use board::*;
pub use bot::*;
pub use game::*;
