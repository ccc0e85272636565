//! Playlist parsing

pub mod parser;

pub use parser::{load, Playlist};
