//! Slidetally - a sliding tally counter for the desktop
//! One draggable control: slide right to add, left to subtract, pull
//! vertically to reset. Built with iced.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod platform;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title("Slidetally")
        .theme(app::App::theme)
        .window(iced::window::Settings {
            size: iced::Size::new(420.0, 560.0),
            min_size: Some(iced::Size::new(280.0, 360.0)),
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
