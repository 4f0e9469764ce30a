//! Per-frame input as handed over by the platform layer.
//!
//! Key polling happens outside the simulation; the core only sees a
//! normalized movement vector and an optional primary-action target.

use glam::Vec2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Zero when no direction is held, otherwise unit length
    pub movement: Vec2,
    /// World-space target of the primary action, if it was pressed this frame
    pub primary_action: Option<Vec2>,
}

impl FrameInput {
    /// Build from raw axis values (e.g. -1/0/1 per key pair)
    pub fn from_axes(x: f32, y: f32) -> Self {
        Self {
            movement: Vec2::new(x, y).normalize_or_zero(),
            primary_action: None,
        }
    }

    pub fn with_action(mut self, target: Vec2) -> Self {
        self.primary_action = Some(target);
        self
    }

    pub fn idle() -> Self {
        Self::default()
    }
}
