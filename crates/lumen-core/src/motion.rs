//! Exponential-approach followers and the camera built from them.
//!
//! Motion is frame-driven: one `tick` per logical frame, no clock input, so
//! the same sequence of targets always produces the same sequence of values.

use crate::geometry::Point;

/// Snap distance used by the camera.
pub const CAMERA_EPSILON: f32 = 0.1;
/// Snap distance used by list selection boxes.
pub const UI_EPSILON: f32 = 0.5;
pub const DEFAULT_CAMERA_EASING: f32 = 0.4;

/// Scalar that closes a fixed fraction of the gap to its target each tick
/// and snaps once the gap is within `epsilon`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    current: f32,
    target: f32,
    coefficient: f32,
    epsilon: f32,
}

impl Follower {
    pub fn new(value: f32, coefficient: f32, epsilon: f32) -> Self {
        Self {
            current: value,
            target: value,
            coefficient: sanitize_coefficient(coefficient),
            epsilon: if epsilon > 0.0 { epsilon } else { 0.0 },
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Moves both value and target, skipping the animation.
    pub fn jump_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    pub fn tick(&mut self) {
        let delta = self.target - self.current;
        if abs(delta) <= self.epsilon {
            self.current = self.target;
            return;
        }

        let next = self.current + delta * self.coefficient;
        // A step too small to register in f32 would never converge.
        self.current = if next == self.current { self.target } else { next };
    }

    /// Current value rounded half away from zero.
    pub fn value(&self) -> i32 {
        round_half_away(self.current)
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub easing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            easing: DEFAULT_CAMERA_EASING,
        }
    }
}

impl CameraConfig {
    pub const fn with_easing(mut self, easing: f32) -> Self {
        self.easing = easing;
        self
    }
}

/// World-to-screen offset, eased on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    x: Follower,
    y: Follower,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            x: Follower::new(0.0, config.easing, CAMERA_EPSILON),
            y: Follower::new(0.0, config.easing, CAMERA_EPSILON),
        }
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn jump_to(&mut self, x: f32, y: f32) {
        self.x.jump_to(x);
        self.y.jump_to(y);
    }

    pub fn update(&mut self) {
        self.x.tick();
        self.y.tick();
    }

    pub fn x(&self) -> i32 {
        self.x.value()
    }

    pub fn y(&self) -> i32 {
        self.y.value()
    }

    pub fn position(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    pub fn target(&self) -> (f32, f32) {
        (self.x.target(), self.y.target())
    }

    pub fn y_follower(&self) -> &Follower {
        &self.y
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}

fn sanitize_coefficient(coefficient: f32) -> f32 {
    if coefficient.is_finite() && coefficient > 0.0 {
        if coefficient > 1.0 { 1.0 } else { coefficient }
    } else {
        1.0
    }
}

fn abs(value: f32) -> f32 {
    if value < 0.0 { -value } else { value }
}

pub(crate) fn round_half_away(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}
