//! Platform abstraction layer
//!
//! # Structure
//! - `haptics.rs` - Feedback pulse backend

pub mod haptics;

pub use haptics::HapticEngine;
