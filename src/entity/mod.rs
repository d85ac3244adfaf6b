//! The moving entities of the simulation.

pub mod ghost;
pub mod pacman;
