//! Glyph leaf for the sliding counter
//!
//! Renders one of the three control glyphs with an externally supplied
//! opacity. Stateless: a pure function of its inputs, painted by the parent
//! widget every frame.

use iced::advanced::svg;
use iced::{Color, Rectangle};
use once_cell::sync::Lazy;

use crate::ui::theme;

/// Glyph selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Minus,
    Close,
    Plus,
}

/// A single decorative glyph with caller-driven opacity
#[derive(Debug, Clone, Copy)]
pub struct CounterIcon {
    glyph: Glyph,
    color: Color,
    size: f32,
}

impl CounterIcon {
    pub const DEFAULT_SIZE: f32 = 20.0;

    pub fn new(glyph: Glyph) -> Self {
        Self {
            glyph,
            color: theme::COUNTER_FOREGROUND,
            size: Self::DEFAULT_SIZE,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Paint the glyph centered in `bounds` at the given opacity
    pub fn draw<Renderer>(&self, renderer: &mut Renderer, bounds: Rectangle, opacity: f32)
    where
        Renderer: svg::Renderer,
    {
        if opacity <= 0.0 {
            return;
        }

        let side = self.size.min(bounds.width).min(bounds.height);
        let target = Rectangle {
            x: bounds.center_x() - side / 2.0,
            y: bounds.center_y() - side / 2.0,
            width: side,
            height: side,
        };

        renderer.draw_svg(
            svg::Svg::new(self.handle())
                .color(self.color)
                .opacity(opacity.min(1.0)),
            target,
            bounds,
        );
    }

    fn handle(&self) -> svg::Handle {
        match self.glyph {
            Glyph::Minus => MINUS_HANDLE.clone(),
            Glyph::Close => CLOSE_HANDLE.clone(),
            Glyph::Plus => PLUS_HANDLE.clone(),
        }
    }
}

const MINUS_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round">
  <path d="M5 12h14"/>
</svg>"#;

const CLOSE_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round">
  <path d="M18 6 6 18"/>
  <path d="m6 6 12 12"/>
</svg>"#;

const PLUS_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round">
  <path d="M12 5v14"/>
  <path d="M5 12h14"/>
</svg>"#;

static MINUS_HANDLE: Lazy<svg::Handle> =
    Lazy::new(|| svg::Handle::from_memory(MINUS_ICON.as_bytes()));
static CLOSE_HANDLE: Lazy<svg::Handle> =
    Lazy::new(|| svg::Handle::from_memory(CLOSE_ICON.as_bytes()));
static PLUS_HANDLE: Lazy<svg::Handle> =
    Lazy::new(|| svg::Handle::from_memory(PLUS_ICON.as_bytes()));
