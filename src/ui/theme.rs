//! Theme system for the sliding counter application
//! Supports both dark and light modes with a consistent color palette

use iced::{Color, Theme, color};

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0d0d0d);
    pub const TEXT_MUTED: Color = color!(0x666666);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf5f5f5);
    pub const TEXT_MUTED: Color = color!(0x999999);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

// ============================================================================
// Counter control palette
// ============================================================================

/// Pill background of the sliding counter
pub const COUNTER_PILL: Color = color!(0x111111);

/// Background of the draggable button
pub const COUNTER_BUTTON: Color = color!(0x444444);

/// Background of the draggable button while dragged
pub const COUNTER_BUTTON_ACTIVE: Color = color!(0x4e4e4e);

/// Border of the draggable button, also the number color
pub const COUNTER_FOREGROUND: Color = color!(0xfafafa);

/// Reset glyph accent
pub const ACCENT_RED: Color = color!(0xf32013);
