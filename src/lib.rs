//! Brickfall - a classic paddle-and-ball block breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, fixed-step tick)
//! - `config`: Immutable game configuration, optionally loaded from JSON
//! - `render`: Abstract draw-sink seam (no real rendering lives here)

pub mod config;
pub mod render;
pub mod sim;

pub use config::GameConfig;

/// Fixed engine constants
///
/// Everything here is derived from the sprite sheet the game was drawn
/// around and never changes at runtime. Tunable values (field size, speeds,
/// damage, layout) live in [`config::GameConfig`] instead.
pub mod consts {
    /// Scale factor applied to 384x128 block tiles so ten columns plus nine
    /// gaps fill the default 1280-unit field width
    pub const BLOCK_SCALE: f32 = (1280.0 - 3.0 * 9.0) / (384.0 * 10.0);
    /// Block cell size after scaling
    pub const BLOCK_WIDTH: f32 = BLOCK_SCALE * 384.0;
    pub const BLOCK_HEIGHT: f32 = BLOCK_SCALE * 128.0;
    /// Gap between adjacent blocks, both axes
    pub const BLOCK_GAP: f32 = 3.0;
    /// Vertical offset of the first block row from the top edge
    pub const BLOCK_TOP_OFFSET: f32 = 25.0;

    /// Paddle sprite (384x64 tile) at block scale
    pub const PADDLE_WIDTH: f32 = BLOCK_SCALE * 384.0;
    pub const PADDLE_HEIGHT: f32 = BLOCK_SCALE * 64.0;
    /// Paddle spawn center sits this far above the bottom edge
    pub const PADDLE_SPAWN_OFFSET: f32 = 50.0;

    /// Ball sprite (128x128 tile) drawn at 0.20 scale
    pub const BALL_SIZE: f32 = 128.0 * 0.20;

    /// Laser bolt size
    pub const LASER_WIDTH: f32 = 8.0;
    pub const LASER_HEIGHT: f32 = 30.0;
    /// Upward laser travel per tick
    pub const LASER_SPEED: f32 = 2.0;
    /// Lasers this far past the top edge are discarded
    pub const LASER_OFFSCREEN_MARGIN: f32 = 100.0;

    /// Upgrade capsule sprite (384x128 tile) at 0.15 scale
    pub const UPGRADE_WIDTH: f32 = 384.0 * 0.15;
    pub const UPGRADE_HEIGHT: f32 = 128.0 * 0.15;
    /// Downward upgrade travel per tick
    pub const UPGRADE_FALL_SPEED: f32 = 3.0;

    /// Heart icon (128x128 tile) at 0.15 scale
    pub const HEART_SIZE: f32 = 128.0 * 0.15;
    /// Gap between heart icons in the HUD row
    pub const HEART_GAP: f32 = 2.0;
    /// HUD row inset from the top-left corner
    pub const HEART_MARGIN: f32 = 5.0;
}
