//! StoryFlow - Terminal Project Tracker Library
//!
//! A terminal-based collaborative project and task tracker, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
