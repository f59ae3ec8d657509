//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! the session marker file, the simulated auth API, and the system
//! clipboard.

pub mod persistence;
pub mod auth;
pub mod clipboard;

pub use persistence::*;
pub use auth::*;
pub use clipboard::*;
