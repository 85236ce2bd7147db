//! Spring physics for the release animation
//!
//! Uses time-based analytical solutions rather than frame-by-frame
//! integration.
//!
//! Overdamped condition: `1.0 <= damping / (2.0 * sqrt(stiffness * mass))`
//!
//! ### Overdamped formula
//! ```text
//! angular_frequency = -sqrt(stiffness / mass)
//! leftover = -angular_frequency * delta - velocity
//! position(t) = to - (delta + t * leftover) * e^(t * angular_frequency)
//! ```
//!
//! ### Underdamped formula
//! ```text
//! damping_frequency = sqrt(4 * mass * stiffness - damping^2)
//! leftover = (damping * delta - 2 * mass * velocity) / damping_frequency
//! dfm = 0.5 * damping_frequency / mass
//! dm = -0.5 * damping / mass
//! position(t) = to - (cos(t * dfm) * delta + sin(t * dfm) * leftover) * e^(t * dm)
//! ```

/// Numerical derivative step size, in seconds
const H: f32 = 0.001;

/// Distance from target below which the spring counts as settled, in pixels
const SETTLE_DISTANCE: f32 = 0.01;

/// Velocity below which the spring counts as settled, in pixels per second
const SETTLE_VELOCITY: f32 = 1.0;

/// Spring parameters for physics simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: f32,
    pub damping: f32,
    pub stiffness: f32,
}

impl SpringParams {
    /// Spring used when the dragged button is released
    pub const RELEASE: Self = Self {
        mass: 1.0,
        damping: 10.0,
        stiffness: 270.0,
    };

    /// Check if overdamped: `1.0 <= damping / (2.0 * sqrt(stiffness * mass))`
    fn is_overdamped(&self) -> bool {
        1.0 <= self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
        }
    }
}

/// One-dimensional spring released toward a fixed target
///
/// The spring is immutable after creation: [`Spring::position`] evaluates
/// the closed-form solution at any elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    from: f32,
    to: f32,
    velocity: f32,
    params: SpringParams,
}

impl Spring {
    /// Release a spring at `from` with the given initial velocity
    pub fn new(from: f32, to: f32, velocity: f32, params: SpringParams) -> Self {
        Self {
            from,
            to,
            velocity,
            params,
        }
    }

    /// Position `elapsed` seconds after release
    pub fn position(&self, elapsed: f32) -> f32 {
        if elapsed <= 0.0 {
            return self.from;
        }

        let SpringParams {
            mass,
            damping,
            stiffness,
        } = self.params;
        let delta = self.to - self.from;
        let t = elapsed;

        if self.params.is_overdamped() {
            let angular_frequency = -(stiffness / mass).sqrt();
            let leftover = -angular_frequency * delta - self.velocity;
            self.to - (delta + t * leftover) * (t * angular_frequency).exp()
        } else {
            let damping_frequency = (4.0 * mass * stiffness - damping * damping).sqrt();
            let leftover = (damping * delta - 2.0 * mass * self.velocity) / damping_frequency;
            let dfm = 0.5 * damping_frequency / mass;
            let dm = -0.5 * damping / mass;
            self.to - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * (t * dm).exp()
        }
    }

    /// Velocity `elapsed` seconds after release (numerical derivative)
    pub fn velocity(&self, elapsed: f32) -> f32 {
        (self.position(elapsed + H) - self.position(elapsed - H)) / (2.0 * H)
    }

    /// Check if the spring has arrived at its target
    pub fn settled(&self, elapsed: f32) -> bool {
        (self.position(elapsed) - self.to).abs() < SETTLE_DISTANCE
            && self.velocity(elapsed).abs() < SETTLE_VELOCITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_from() {
        let spring = Spring::new(51.0, 0.0, 0.0, SpringParams::RELEASE);
        assert!((spring.position(0.0) - 51.0).abs() < 1e-3);
    }

    #[test]
    fn test_converges_to_target() {
        let spring = Spring::new(51.0, 0.0, 0.0, SpringParams::RELEASE);
        assert!(spring.position(10.0).abs() < 1e-2);
        assert!(spring.settled(10.0));
    }

    #[test]
    fn test_release_spring_overshoots() {
        // stiffness 270 / damping 10 is underdamped, so the button crosses
        // the rest position at least once before settling
        let spring = Spring::new(51.0, 0.0, 0.0, SpringParams::RELEASE);
        let crossed = (1..200).any(|i| spring.position(i as f32 * 0.01) < 0.0);
        assert!(crossed);
    }

    #[test]
    fn test_overdamped_never_overshoots() {
        let params = SpringParams {
            mass: 1.0,
            damping: 50.0,
            stiffness: 100.0,
        };
        assert!(params.is_overdamped());
        let spring = Spring::new(51.0, 0.0, 0.0, params);
        let crossed = (1..500).any(|i| spring.position(i as f32 * 0.01) < -1e-3);
        assert!(!crossed);
    }

    #[test]
    fn test_not_settled_right_after_release() {
        let spring = Spring::new(51.0, 0.0, 0.0, SpringParams::RELEASE);
        assert!(!spring.settled(0.0));
        assert!(!spring.settled(0.05));
    }
}
