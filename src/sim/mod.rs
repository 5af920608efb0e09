//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::{ContactSide, Rect, classify_contact};
pub use state::{
    Ball, BallState, Block, DamageOutcome, GameEvent, GamePhase, GameState, Laser, Paddle,
    Upgrade, UpgradeKind,
};
pub use tick::{TickInput, build_grid, tick};
