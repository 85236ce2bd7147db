//! Sliding counter widget
//!
//! A pill-shaped control with a draggable button. Dragging the button to
//! full extension right or left and releasing emits an increment or
//! decrement; pulling it past the vertical threshold emits a reset. The
//! button springs back to rest after every release.
//!
//! The drag position lives in the widget tree state: the event handler is
//! its only writer, and the draw pass derives every visual (parallax,
//! glyph opacities, button offset) from it per frame. Counter mutation and
//! feedback pulses are *not* performed here; release publishes a single
//! [`SlideAction`] message into the application update loop.

pub mod gesture;

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::svg;
use iced::advanced::text::{self, Text};
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::time::Instant;
use iced::touch;
use iced::window;
use iced::{
    Background, Color, Element, Event, Length, Pixels, Point, Rectangle, Size, Theme, Vector,
    alignment,
};

use super::counter_icon::{CounterIcon, Glyph};
use crate::ui::animation::{Spring, SpringParams};
use crate::ui::theme;

pub use gesture::SlideAction;

/// Sliding counter widget
pub struct SlidingCounter<'a, Message> {
    value: i64,
    width: f32,
    height: f32,
    on_action: Option<Box<dyn Fn(SlideAction) -> Message + 'a>>,
    style: Box<dyn Fn(&Theme, Status) -> Style + 'a>,
    status: Option<Status>,
}

impl<'a, Message> SlidingCounter<'a, Message>
where
    Message: Clone,
{
    pub const DEFAULT_WIDTH: f32 = 170.0;
    pub const DEFAULT_HEIGHT: f32 = 70.0;

    /// Font size of the tally number
    const NUMBER_SIZE: f32 = 25.0;
    /// Horizontal padding inside the draggable button
    const BUTTON_PADDING_X: f32 = 15.0;
    /// Width reserved per digit at `NUMBER_SIZE`
    const DIGIT_WIDTH: f32 = 14.0;
    /// Height of the draggable button
    const BUTTON_HEIGHT: f32 = 37.0;

    pub fn new(value: i64) -> Self {
        Self {
            value,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            on_action: None,
            style: Box::new(default_style),
            status: None,
        }
    }

    /// Message published when a completed gesture maps to an action
    pub fn on_action<F>(mut self, on_action: F) -> Self
    where
        F: 'a + Fn(SlideAction) -> Message,
    {
        self.on_action = Some(Box::new(on_action));
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Override the pill background, keeping the rest of the default style
    pub fn color(mut self, color: Color) -> Self {
        self.style = Box::new(move |theme, status| Style {
            background: Background::Color(color),
            ..default_style(theme, status)
        });
        self
    }

    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self {
        self.style = Box::new(style);
        self
    }

    /// Size of the draggable button, widened for longer tallies
    fn button_size(&self) -> Size {
        let digits = self.value.to_string().len() as f32;
        Size::new(
            Self::BUTTON_PADDING_X * 2.0 + Self::DIGIT_WIDTH * digits,
            Self::BUTTON_HEIGHT,
        )
    }

    /// Bounds of the draggable button at the given drag offset
    fn button_bounds(&self, bounds: Rectangle, position: Vector) -> Rectangle {
        let size = self.button_size();
        Rectangle {
            x: bounds.center_x() - size.width / 2.0 + position.x,
            y: bounds.center_y() - size.height / 2.0 + position.y,
            width: size.width,
            height: size.height,
        }
    }
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for SlidingCounter<'_, Message>
where
    Message: Clone,
    Renderer: renderer::Renderer + svg::Renderer + text::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fixed(self.width),
            height: Length::Fixed(self.height),
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();
        let limit = bounds.width * gesture::OFFSET_LIMIT_RATIO;

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                let button = self.button_bounds(bounds, state.position);
                if let Some(cursor_position) = cursor.position_over(button) {
                    // Grabbing mid-flight freezes the spring where it is;
                    // translation accumulates from the new touch-down point.
                    state.spring = None;
                    state.drag = Some(Drag {
                        origin: cursor_position,
                    });
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.drag.take().is_some() {
                    if let Some(action) = gesture::release_action(state.position, limit) {
                        if let Some(on_action) = &self.on_action {
                            shell.publish((on_action)(action));
                        }
                    }

                    if state.position != Vector::new(0.0, 0.0) {
                        state.spring = Some(SpringBack::new(state.position, Instant::now()));
                    }
                    shell.capture_event();
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if let Some(drag) = state.drag {
                    if let Some(pos) = cursor.land().position() {
                        state.position = gesture::clamp_translation(pos - drag.origin, limit);
                        shell.capture_event();
                        shell.request_redraw();
                    }
                }
            }
            Event::Window(window::Event::RedrawRequested(now)) => {
                if let Some(spring) = &state.spring {
                    if spring.settled(*now) {
                        state.position = Vector::new(0.0, 0.0);
                        state.spring = None;
                    } else {
                        state.position = spring.position(*now);
                        shell.request_redraw();
                    }
                }
            }
            _ => {}
        }

        let current_status = if state.drag.is_some() {
            Status::Dragged
        } else if cursor.is_over(self.button_bounds(bounds, state.position)) {
            Status::Hovered
        } else {
            Status::Active
        };

        if let Event::Window(window::Event::RedrawRequested(_now)) = event {
            self.status = Some(current_status);
        } else if self.status.is_some_and(|status| status != current_status) {
            shell.request_redraw();
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let limit = bounds.width * gesture::OFFSET_LIMIT_RATIO;
        let position = state.position;
        let style = (self.style)(theme, self.status.unwrap_or(Status::Active));

        // Pill and glyphs trail the button at a tenth of its offset
        let cluster_offset = Vector::new(
            position.x * gesture::PARALLAX,
            position.y * gesture::PARALLAX,
        );
        let pill = bounds + cluster_offset;

        renderer.fill_quad(
            renderer::Quad {
                bounds: pill,
                border: Border {
                    radius: (pill.height / 2.0).into(),
                    width: 0.0,
                    color: Color::TRANSPARENT,
                },
                ..renderer::Quad::default()
            },
            style.background,
        );

        // Glyph slots sit at the quarter points of the pill
        let opacities = gesture::glyph_opacities(position, limit);
        let slot = |center_ratio: f32| Rectangle {
            x: pill.x + pill.width * center_ratio - SLOT_SIZE / 2.0,
            y: pill.center_y() - SLOT_SIZE / 2.0,
            width: SLOT_SIZE,
            height: SLOT_SIZE,
        };

        CounterIcon::new(Glyph::Minus)
            .color(style.glyph_color)
            .draw(renderer, slot(0.25), opacities.step);
        CounterIcon::new(Glyph::Close)
            .color(style.close_glyph_color)
            .size(30.0)
            .draw(renderer, slot(0.5), opacities.reset);
        CounterIcon::new(Glyph::Plus)
            .color(style.glyph_color)
            .draw(renderer, slot(0.75), opacities.step);

        // The button tracks the drag 1:1
        let button = self.button_bounds(bounds, position);
        renderer.fill_quad(
            renderer::Quad {
                bounds: button,
                border: Border {
                    radius: (button.height / 2.0).into(),
                    width: 1.0,
                    color: style.button_border,
                },
                ..renderer::Quad::default()
            },
            style.button_background,
        );

        renderer.fill_text(
            Text {
                content: self.value.to_string(),
                bounds: button.size(),
                size: Pixels(Self::NUMBER_SIZE),
                line_height: text::LineHeight::default(),
                font: renderer.default_font(),
                align_x: text::Alignment::Center,
                align_y: alignment::Vertical::Center,
                shaping: text::Shaping::Basic,
                wrapping: text::Wrapping::default(),
            },
            button.center(),
            style.number_color,
            button,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        let button = self.button_bounds(layout.bounds(), state.position);

        if state.drag.is_some() {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(button) {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<SlidingCounter<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: renderer::Renderer + svg::Renderer + text::Renderer + 'a,
{
    fn from(counter: SlidingCounter<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(counter)
    }
}

/// Side of the square each glyph is centered in
const SLOT_SIZE: f32 = 40.0;

/// Internal widget state: the drag session, the live offset, and the
/// release animation. Written only by the event handler.
#[derive(Debug, Clone, Copy, Default)]
struct State {
    drag: Option<Drag>,
    position: Vector,
    spring: Option<SpringBack>,
}

/// An active drag session
#[derive(Debug, Clone, Copy)]
struct Drag {
    /// Where the pointer went down; translation accumulates from here
    origin: Point,
}

/// Spring-back of both axes toward rest after release
#[derive(Debug, Clone, Copy)]
struct SpringBack {
    x: Spring,
    y: Spring,
    started: Instant,
}

impl SpringBack {
    fn new(from: Vector, started: Instant) -> Self {
        Self {
            x: Spring::new(from.x, 0.0, 0.0, SpringParams::RELEASE),
            y: Spring::new(from.y, 0.0, 0.0, SpringParams::RELEASE),
            started,
        }
    }

    fn elapsed(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.started).as_secs_f32()
    }

    fn position(&self, now: Instant) -> Vector {
        let elapsed = self.elapsed(now);
        Vector::new(self.x.position(elapsed), self.y.position(elapsed))
    }

    fn settled(&self, now: Instant) -> bool {
        let elapsed = self.elapsed(now);
        self.x.settled(elapsed) && self.y.settled(elapsed)
    }
}

/// Status of the sliding counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Hovered,
    Dragged,
}

/// Style for the sliding counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Pill background
    pub background: Background,
    /// Draggable button background
    pub button_background: Background,
    /// Draggable button border
    pub button_border: Color,
    /// Tally number color
    pub number_color: Color,
    /// Plus and minus glyph color
    pub glyph_color: Color,
    /// Close glyph color
    pub close_glyph_color: Color,
}

/// Default style: a dark pill regardless of the surrounding theme
pub fn default_style(_theme: &Theme, status: Status) -> Style {
    let button_background = match status {
        Status::Dragged => theme::COUNTER_BUTTON_ACTIVE,
        _ => theme::COUNTER_BUTTON,
    };

    Style {
        background: Background::Color(theme::COUNTER_PILL),
        button_background: Background::Color(button_background),
        button_border: theme::COUNTER_FOREGROUND,
        number_color: theme::COUNTER_FOREGROUND,
        glyph_color: theme::COUNTER_FOREGROUND,
        close_glyph_color: theme::ACCENT_RED,
    }
}

/// Create a sliding counter for the given tally value
pub fn sliding_counter<'a, Message>(value: i64) -> SlidingCounter<'a, Message>
where
    Message: Clone,
{
    SlidingCounter::new(value)
}
