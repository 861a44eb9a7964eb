// Damped spring follower for the moon parallax. Semi-implicit Euler, tuned
// underdamped so the moon drifts a touch past the pointer before settling.

use glam::Vec2;

/// Integration steps above this delta are clamped; a background tab can wake
/// up with a multi-second dt that would blow the integration apart.
const MAX_STEP_SEC: f32 = 0.05;

#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    pub position: Vec2,
    pub velocity: Vec2,
    stiffness: f32,
    damping: f32,
}

impl Spring2 {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            stiffness,
            damping,
        }
    }

    /// Advance toward `target` by `dt` seconds and return the new position.
    pub fn step(&mut self, target: Vec2, dt: f32) -> Vec2 {
        let dt = dt.clamp(0.0, MAX_STEP_SEC);
        let accel = (target - self.position) * self.stiffness - self.velocity * self.damping;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
        self.position
    }

    /// True once the spring has effectively stopped moving at `target`.
    pub fn settled(&self, target: Vec2, epsilon: f32) -> bool {
        (self.position - target).length() < epsilon && self.velocity.length() < epsilon
    }
}
