//! A single-screen grid chase: eat pellets, dodge four greedy ghosts.
//!
//! The engine (`maze` up to `session`) is free of terminal code; `input` and
//! `render` adapt it to crossterm.

pub mod clock;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod ghost;
pub mod input;
pub mod level;
pub mod look;
pub mod maze;
pub mod movement;
pub mod pellets;
pub mod progression;
pub mod render;
pub mod session;
pub mod store;

pub use difficulty::Difficulty;
pub use game::{Game, GameEvent, Phase};
pub use maze::{Dir, Maze};
pub use session::{Command, Session};
