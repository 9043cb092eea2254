//! Hollowbrook as a library.
//!
//! The game runs through `main.rs`; this crate root exists so the headless
//! suite under `tests/` can reach the clock, world state, and movement
//! systems directly instead of booting a window.

pub mod shared;
pub mod input;
pub mod grid;
pub mod clock;
pub mod world;
pub mod player;
