//! Animation support for release transitions
//!
//! The draggable button springs back to rest using a time-based analytical
//! solution rather than frame-by-frame integration, so any redraw cadence
//! samples the same curve.

pub mod spring;

pub use spring::{Spring, SpringParams};
