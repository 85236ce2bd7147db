//! Application messages

use crate::ui::widgets::SlideAction;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// A gesture completed on the sliding counter
    Counter(SlideAction),
    /// Dark mode toggled in the footer
    DarkModeToggled(bool),
    /// Feedback pulses toggled in the footer
    FeedbackToggled(bool),
    /// Result of an asynchronous settings save
    SettingsSaved(Result<(), String>),
}
