//! Animation and frame-timing constants.

/// Maximum simulated step per frame (seconds). Slow frames are clamped to this.
pub const MAX_FRAME_DT: f32 = 0.05;
/// Default seconds each animation frame is shown
pub const DEFAULT_TIME_PER_FRAME: f32 = 0.15;
/// Slice animation frame time (the whole effect lives for 3 frames)
pub const SLICE_TIME_PER_FRAME: f32 = 0.06;
/// How long each on/off phase of the invulnerability flash lasts
pub const IFRAME_FLASH_PERIOD: f32 = 0.08;
/// Shadow offset below an actor's anchor (world units)
pub const SHADOW_OFFSET_Y: f32 = 10.0;
/// Tint shown during the "on" phase of the invulnerability flash
pub const IFRAME_FLASH_TINT: [f32; 3] = [1.0, 0.25, 0.25];
