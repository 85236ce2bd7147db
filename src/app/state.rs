// src/app/state.rs
//! Application state definitions

use crate::features::Settings;
use crate::platform::HapticEngine;

/// Main application state
pub struct App {
    /// Persisted user preferences
    pub settings: Settings,
    /// Current tally value. Lives and dies with the process; never persisted.
    pub counter: i64,
    /// Feedback pulse backend. `None` when no audio output device exists.
    pub haptics: Option<HapticEngine>,
}

impl App {
    /// Build the initial state from loaded settings
    pub fn with_settings(settings: Settings) -> Self {
        let haptics = HapticEngine::new()
            .map_err(|e| tracing::warn!("feedback pulses disabled: {e}"))
            .ok();

        Self {
            settings,
            counter: 0,
            haptics,
        }
    }
}
