// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, row, text, toggler};
use iced::{Alignment, Background, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::theme;
use crate::ui::widgets::sliding_counter;

impl App {
    /// Build the application view: the counter centered, preferences below
    pub fn view(&self) -> Element<'_, Message> {
        let mut counter = sliding_counter(self.counter).on_action(Message::Counter);
        if let Some(color) = self.settings.appearance.counter_color() {
            counter = counter.color(color);
        }

        let hint = text("slide to count, pull down to reset")
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            });

        let label = |content| {
            text(content).size(14).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
        };

        let footer = row![
            label("Dark mode"),
            toggler(self.settings.appearance.dark_mode)
                .on_toggle(Message::DarkModeToggled)
                .size(18),
            Space::new().width(16),
            label("Feedback pulse"),
            toggler(self.settings.feedback.enabled)
                .on_toggle(Message::FeedbackToggled)
                .size(18),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        container(
            column![
                Space::new().height(Fill),
                counter,
                hint,
                Space::new().height(Fill),
                footer,
            ]
            .spacing(16)
            .align_x(Alignment::Center)
            .height(Fill),
        )
        .padding(24)
        .center_x(Fill)
        .style(|theme| container::Style {
            background: Some(Background::Color(theme::background(theme))),
            ..Default::default()
        })
        .into()
    }
}
