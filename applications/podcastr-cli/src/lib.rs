//! Podcastr Player - Terminal front end
//!
//! Plays a podcast catalog against a simulated audio environment so the
//! playback core can be driven from a shell.

pub mod config;
pub mod listing;
pub mod session;
pub mod simulator;
