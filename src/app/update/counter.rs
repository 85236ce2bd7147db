//! Counter mutation handlers
//!
//! Gesture release inside the widget publishes a [`SlideAction`]; the
//! mutation and the feedback pulse both run here, on the application's
//! update loop, never inside the widget's event handling.

use std::time::Duration;

use iced::Task;

use crate::app::{App, Message};
use crate::ui::widgets::SlideAction;

impl App {
    pub(super) fn handle_counter(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Counter(action) => {
                self.apply_action(*action);
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// Apply a completed gesture: mutate the tally and fire the pulse
    fn apply_action(&mut self, action: SlideAction) {
        self.counter = match action {
            SlideAction::Increment => self.counter + 1,
            SlideAction::Decrement => self.counter - 1,
            SlideAction::Reset => 0,
        };
        tracing::debug!(?action, counter = self.counter, "gesture applied");

        if self.settings.feedback.enabled {
            if let Some(haptics) = &self.haptics {
                let millis = match action {
                    SlideAction::Reset => self.settings.feedback.reset_pulse_ms,
                    _ => self.settings.feedback.step_pulse_ms,
                };
                haptics.pulse(Duration::from_millis(millis));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;

    fn app() -> App {
        App {
            settings: Settings::default(),
            counter: 0,
            haptics: None,
        }
    }

    #[test]
    fn test_increment_adds_one() {
        let mut app = app();
        app.counter = 5;
        app.apply_action(SlideAction::Increment);
        assert_eq!(app.counter, 6);
    }

    #[test]
    fn test_decrement_subtracts_one() {
        let mut app = app();
        app.apply_action(SlideAction::Decrement);
        assert_eq!(app.counter, -1);
    }

    #[test]
    fn test_reset_clears_any_value() {
        let mut app = app();
        app.counter = 42;
        app.apply_action(SlideAction::Reset);
        assert_eq!(app.counter, 0);

        app.counter = -7;
        app.apply_action(SlideAction::Reset);
        assert_eq!(app.counter, 0);
    }
}
