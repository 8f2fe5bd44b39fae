//! Theme Park Library
//!
//! A grid-based theme park game that can run headless or with a Bevy UI.

pub mod game;

#[cfg(feature = "ui")]
pub mod ui;
