//! Drag-to-action mapping for the sliding counter
//!
//! Everything here is a pure function of the drag vector. The widget feeds
//! these from its event handler and its draw pass; no iced state is touched.

use iced::Vector;

/// Fraction of the control width the button may travel on either axis
pub const OFFSET_LIMIT_RATIO: f32 = 0.3;

/// Fraction of the drag offset applied to the pill and its glyphs
pub const PARALLAX: f32 = 0.1;

/// Outcome of a completed gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    /// Button released at full extension to the right
    Increment,
    /// Button released at full extension to the left
    Decrement,
    /// Button pulled past the vertical threshold in either direction
    Reset,
}

/// Clamp a raw drag translation to the per-axis travel range
pub fn clamp_translation(raw: Vector, limit: f32) -> Vector {
    Vector::new(raw.x.clamp(-limit, limit), raw.y.clamp(-limit, limit))
}

/// Vertical offset beyond which release resets the tally
pub fn reset_threshold(limit: f32) -> f32 {
    limit / 1.5
}

/// Map a released (already clamped) position to its action.
///
/// The vertical reset check runs first and excludes both horizontal
/// outcomes. The horizontal checks compare for exact equality with the
/// travel limit: the clamp pins a full pull exactly to `limit`, so boundary
/// equality means the drag reached full extension.
pub fn release_action(position: Vector, limit: f32) -> Option<SlideAction> {
    if position.y.abs() > reset_threshold(limit) {
        return Some(SlideAction::Reset);
    }

    if position.x == limit {
        return Some(SlideAction::Increment);
    }

    if position.x == -limit {
        return Some(SlideAction::Decrement);
    }

    None
}

/// Piecewise-linear mapping of `value` over matching stop/output lists.
///
/// Stops must be ascending. Values outside the stops saturate at the end
/// outputs; the caller's clamp keeps inputs inside them anyway.
pub fn interpolate(value: f32, stops: &[f32], outputs: &[f32]) -> f32 {
    debug_assert!(stops.len() == outputs.len() && stops.len() >= 2);

    if value <= stops[0] {
        return outputs[0];
    }

    for i in 0..stops.len() - 1 {
        let (a, b) = (stops[i], stops[i + 1]);
        if value <= b {
            if b - a <= f32::EPSILON {
                return outputs[i + 1];
            }
            let t = (value - a) / (b - a);
            return outputs[i] + t * (outputs[i + 1] - outputs[i]);
        }
    }

    outputs[outputs.len() - 1]
}

/// Per-frame glyph opacities derived from the clamped position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphOpacities {
    /// Plus and minus glyphs
    pub step: f32,
    /// Close glyph
    pub reset: f32,
}

/// Derive glyph opacities from the clamped drag position.
///
/// The step glyphs peak at rest (0.8) and fade toward both travel limits;
/// any vertical offset fades them further. The close glyph only appears
/// once the vertical offset passes a third of the limit.
pub fn glyph_opacities(position: Vector, limit: f32) -> GlyphOpacities {
    let step_x = interpolate(position.x, &[-limit, 0.0, limit], &[0.4, 0.8, 0.4]);
    let step_y = interpolate(position.y, &[-limit, 0.0, limit], &[0.0, 1.0, 0.0]);

    let reset = interpolate(
        position.y,
        &[-limit, -limit / 3.0, limit / 3.0, limit],
        &[1.0, 0.0, 0.0, 1.0],
    );

    GlyphOpacities {
        step: step_x * step_y,
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0.3 × the default 170 px control width
    const LIMIT: f32 = 51.0;

    #[test]
    fn test_clamp_translation() {
        let clamped = clamp_translation(Vector::new(80.0, -200.0), LIMIT);
        assert_eq!(clamped, Vector::new(LIMIT, -LIMIT));

        let inside = clamp_translation(Vector::new(10.0, 5.0), LIMIT);
        assert_eq!(inside, Vector::new(10.0, 5.0));
    }

    #[test]
    fn test_release_requires_full_extension() {
        assert_eq!(release_action(Vector::new(LIMIT / 2.0, 0.0), LIMIT), None);
        assert_eq!(release_action(Vector::new(-LIMIT + 0.5, 0.0), LIMIT), None);
        assert_eq!(release_action(Vector::new(0.0, 0.0), LIMIT), None);
    }

    #[test]
    fn test_release_increment_at_limit() {
        let position = clamp_translation(Vector::new(120.0, 10.0), LIMIT);
        assert_eq!(
            release_action(position, LIMIT),
            Some(SlideAction::Increment)
        );
    }

    #[test]
    fn test_release_decrement_at_negative_limit() {
        let position = clamp_translation(Vector::new(-90.0, -20.0), LIMIT);
        assert_eq!(
            release_action(position, LIMIT),
            Some(SlideAction::Decrement)
        );
    }

    #[test]
    fn test_reset_wins_over_horizontal() {
        // full horizontal extension, but the vertical pull is past the
        // threshold, so reset takes priority
        let position = Vector::new(LIMIT, reset_threshold(LIMIT) + 0.1);
        assert_eq!(release_action(position, LIMIT), Some(SlideAction::Reset));

        let upward = Vector::new(-LIMIT, -reset_threshold(LIMIT) - 0.1);
        assert_eq!(release_action(upward, LIMIT), Some(SlideAction::Reset));
    }

    #[test]
    fn test_reset_threshold_is_exclusive() {
        let position = Vector::new(0.0, reset_threshold(LIMIT));
        assert_eq!(release_action(position, LIMIT), None);
    }

    #[test]
    fn test_step_opacity_peaks_at_rest() {
        let at_rest = glyph_opacities(Vector::new(0.0, 0.0), LIMIT);
        assert!((at_rest.step - 0.8).abs() < 1e-6);
        assert!(at_rest.reset.abs() < 1e-6);
    }

    #[test]
    fn test_step_opacity_fades_with_travel() {
        let mut previous = glyph_opacities(Vector::new(0.0, 0.0), LIMIT).step;
        for i in 1..=10 {
            let x = LIMIT * i as f32 / 10.0;
            let current = glyph_opacities(Vector::new(x, 0.0), LIMIT).step;
            assert!(current < previous, "opacity must fall as x grows");
            previous = current;
        }

        // a vertical pull to the limit hides the step glyphs entirely
        let hidden = glyph_opacities(Vector::new(0.0, LIMIT), LIMIT);
        assert!(hidden.step.abs() < 1e-6);
    }

    #[test]
    fn test_reset_opacity_visible_past_third() {
        assert!(glyph_opacities(Vector::new(0.0, LIMIT / 3.0), LIMIT).reset < 1e-6);
        let half = glyph_opacities(Vector::new(0.0, LIMIT * 2.0 / 3.0), LIMIT).reset;
        assert!(half > 0.0 && half < 1.0);
        let full = glyph_opacities(Vector::new(0.0, -LIMIT), LIMIT).reset;
        assert!((full - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_interpolate_endpoints_and_midpoints() {
        let stops = [-LIMIT, 0.0, LIMIT];
        let outputs = [0.4, 0.8, 0.4];
        assert!((interpolate(-LIMIT, &stops, &outputs) - 0.4).abs() < 1e-6);
        assert!((interpolate(LIMIT / 2.0, &stops, &outputs) - 0.6).abs() < 1e-6);
        // saturates outside the stops
        assert!((interpolate(LIMIT * 2.0, &stops, &outputs) - 0.4).abs() < 1e-6);
    }
}
