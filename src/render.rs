//! Abstract rendering seam
//!
//! The core never blits anything itself. [`render_frame`] walks the game
//! state and issues draw calls against a [`RenderSink`] supplied by the
//! host. A sink that fails to draw is logged and otherwise ignored:
//! rendering failures must never affect the simulation state machine.

use std::fmt;

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, UpgradeKind};

/// Everything the game ever asks a host to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    /// A block at the given visual tier (1..=20); see [`block_sprite_index`]
    Block { tier: u32 },
    Paddle,
    Ball,
    Laser,
    Upgrade(UpgradeKind),
    Heart,
}

/// A draw failure reported by the host
#[derive(Debug)]
pub struct RenderError {
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render error: {}", self.message)
    }
}

impl std::error::Error for RenderError {}

/// Host-provided draw target
pub trait RenderSink {
    /// Draw a sprite with its top-left corner at `pos`
    fn draw(&mut self, sprite: Sprite, pos: Vec2) -> Result<(), RenderError>;
    /// Draw status text centered on `center`
    fn draw_text(&mut self, text: &str, center: Vec2) -> Result<(), RenderError>;
}

/// A sink that draws nothing; used by the headless demo runner and tests
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw(&mut self, _sprite: Sprite, _pos: Vec2) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_text(&mut self, _text: &str, _center: Vec2) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Sprite-sheet index for a block tier. Tiles come in damaged/undamaged
/// pairs, so even tiers map one below and odd tiers one above.
pub fn block_sprite_index(tier: u32) -> u32 {
    if tier.is_multiple_of(2) { tier - 1 } else { tier + 1 }
}

/// Sprite-sheet index for an upgrade capsule
pub fn upgrade_sprite_index(kind: UpgradeKind) -> u32 {
    match kind {
        UpgradeKind::Slow => 41,
        UpgradeKind::Fast => 42,
        UpgradeKind::Laser => 53,
        UpgradeKind::Heart => 60,
    }
}

/// Issue one frame's draw calls in back-to-front order: background, blocks,
/// hearts, upgrades, paddle, ball, lasers. Terminal phases draw only the
/// background and a centered status line.
pub fn render_frame<S: RenderSink>(state: &GameState, config: &GameConfig, sink: &mut S) {
    draw(sink, Sprite::Background, Vec2::ZERO);

    let field_center = Vec2::new(config.field_width / 2.0, config.field_height / 2.0);
    match state.phase {
        GamePhase::GameOver => {
            draw_text(sink, "Game Over", field_center);
            return;
        }
        GamePhase::Won => {
            draw_text(sink, "Winner", field_center);
            return;
        }
        GamePhase::Playing => {}
    }

    for block in &state.blocks {
        draw(sink, Sprite::Block { tier: block.tier }, block.rect.min);
    }

    // Hearts HUD: fixed-width icons left to right with a small gap
    for i in 0..state.paddle.hearts {
        let x = i as f32 * (HEART_SIZE + HEART_GAP) + HEART_MARGIN;
        draw(sink, Sprite::Heart, Vec2::new(x, HEART_MARGIN));
    }

    for upgrade in &state.upgrades {
        draw(sink, Sprite::Upgrade(upgrade.kind), upgrade.rect.min);
    }

    draw(sink, Sprite::Paddle, state.paddle.rect.min);
    draw(sink, Sprite::Ball, state.ball.rect.min);

    for laser in &state.paddle.lasers {
        draw(sink, Sprite::Laser, laser.rect.min);
    }
}

fn draw<S: RenderSink>(sink: &mut S, sprite: Sprite, pos: Vec2) {
    if let Err(err) = sink.draw(sprite, pos) {
        log::warn!("Dropped draw call for {sprite:?}: {err}");
    }
}

fn draw_text<S: RenderSink>(sink: &mut S, text: &str, center: Vec2) {
    if let Err(err) = sink.draw_text(text, center) {
        log::warn!("Dropped status text {text:?}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_sprite_pairs() {
        assert_eq!(block_sprite_index(2), 1);
        assert_eq!(block_sprite_index(1), 2);
        assert_eq!(block_sprite_index(4), 3);
        assert_eq!(block_sprite_index(3), 4);
        assert_eq!(block_sprite_index(20), 19);
        assert_eq!(block_sprite_index(19), 20);
    }

    #[test]
    fn failing_sink_does_not_disturb_state() {
        struct BrokenSink;
        impl RenderSink for BrokenSink {
            fn draw(&mut self, _: Sprite, _: Vec2) -> Result<(), RenderError> {
                Err(RenderError { message: "no surface".into() })
            }
            fn draw_text(&mut self, _: &str, _: Vec2) -> Result<(), RenderError> {
                Err(RenderError { message: "no surface".into() })
            }
        }

        let config = GameConfig::default();
        let state = GameState::new(5, &config);
        let before = state.clone();
        let mut sink = BrokenSink;
        render_frame(&state, &config, &mut sink);

        assert_eq!(state.blocks.len(), before.blocks.len());
        assert_eq!(state.paddle.rect, before.paddle.rect);
        assert_eq!(state.ball.rect, before.ball.rect);
    }
}
