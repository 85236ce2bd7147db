//! Settings change handlers

use iced::Task;

use crate::app::helpers;
use crate::app::{App, Message};

impl App {
    pub(super) fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DarkModeToggled(dark) => {
                self.settings.appearance.dark_mode = *dark;
                Some(self.save_settings())
            }
            Message::FeedbackToggled(enabled) => {
                self.settings.feedback.enabled = *enabled;
                Some(self.save_settings())
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    tracing::warn!("failed to save settings: {e}");
                }
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// Persist the current settings off the UI thread
    fn save_settings(&self) -> Task<Message> {
        let settings = self.settings.clone();
        Task::perform(helpers::save_settings(settings), |result| {
            Message::SettingsSaved(result.map_err(|e| e.to_string()))
        })
    }
}
