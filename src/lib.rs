//! A terminal Pac-Man: fixed-rate simulation of the maze, the player, and
//! four ghosts with distinct pursuit personalities.
//!
//! The simulation is deliberately deterministic: one [`game::Game`] value
//! owns all mutable state, every tick runs the same fixed update order, and
//! the only randomness (the frightened ghost walk) flows through an
//! injectable seeded RNG.

pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod game;
pub mod map;
pub mod pathfind;
pub mod render;
