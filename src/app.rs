//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // Load settings first so the initial theme and feedback state are correct
        let settings = crate::features::Settings::load();
        tracing::info!(
            dark_mode = settings.appearance.dark_mode,
            feedback = settings.feedback.enabled,
            "settings loaded"
        );

        (Self::with_settings(settings), Task::none())
    }

    /// Application theme derived from settings
    pub fn theme(&self) -> Theme {
        if self.settings.appearance.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
