//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the whole game by one step. All entity
//! updates happen sequentially here; the session controller is the sole
//! mutator of game state.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::rect::{ContactSide, classify_contact};
use super::state::{
    Ball, BallState, Block, DamageOutcome, GameEvent, GamePhase, GameState, Paddle, Upgrade,
    UpgradeKind,
};
use crate::config::GameConfig;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left-move key held this tick
    pub move_left: bool,
    /// Right-move key held this tick
    pub move_right: bool,
    /// Edge-triggered launch signal (Attached -> Free)
    pub launch: bool,
}

/// Advance the game state by one fixed timestep.
///
/// `now_ms` is the session's wall-clock elapsed time; the laser cooldown is
/// compared against it rather than the tick counter so its real duration
/// holds up under frame-rate variation.
pub fn tick(state: &mut GameState, config: &GameConfig, input: &TickInput, now_ms: u64) {
    if state.phase.is_terminal() {
        return;
    }

    // Terminal conditions are evaluated before any entity update this tick
    if state.paddle.hearts == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at tick {}", state.time_ticks);
        return;
    }
    if state.blocks.is_empty() {
        state.phase = GamePhase::Won;
        log::info!("Grid cleared at tick {}", state.time_ticks);
        return;
    }

    state.time_ticks += 1;

    let GameState {
        rng,
        paddle,
        ball,
        blocks,
        upgrades,
        events,
        ..
    } = state;

    advance_upgrades(upgrades, paddle, config);
    move_paddle(paddle, input, config);

    // The laser weapon only operates while the ball is in play
    if ball.state == BallState::Free {
        advance_lasers(paddle, blocks, events, rng, config, now_ms);
    }

    advance_ball(ball, paddle, blocks, events, rng, input, config);

    // Drain the spawn-request queue collected during this tick
    for event in events.drain(..) {
        match event {
            GameEvent::SpawnUpgrade { kind, pos } => {
                log::debug!("Upgrade {kind:?} dropped at ({}, {})", pos.x, pos.y);
                upgrades.push(Upgrade::new(pos, kind));
            }
        }
    }
}

/// Build the block grid from the layout table.
///
/// Placement is deterministic by row/column index; one uniformly chosen
/// column per row is promoted to the rare tier (`value + 5`).
pub fn build_grid(config: &GameConfig, rng: &mut Pcg32) -> Vec<Block> {
    let mut blocks = Vec::new();
    for (row, values) in config.layout.iter().enumerate() {
        if values.is_empty() {
            continue;
        }
        let rare_col = rng.random_range(0..values.len());
        for (col, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let value = if col == rare_col { value + 5 } else { value };
            blocks.push(Block::new(value, row as u32, col as u32, config, rng));
        }
    }
    blocks
}

/// Advance falling upgrades, cull the ones past the bottom edge, and apply
/// any the paddle caught
fn advance_upgrades(upgrades: &mut Vec<Upgrade>, paddle: &mut Paddle, config: &GameConfig) {
    let mut collected = Vec::new();
    upgrades.retain_mut(|upgrade| {
        upgrade.rect.min.y += UPGRADE_FALL_SPEED;
        if upgrade.rect.overlaps(&paddle.rect) {
            collected.push(upgrade.kind);
            return false;
        }
        upgrade.rect.top() < config.field_height
    });
    for kind in collected {
        log::debug!("Collected upgrade {kind:?}");
        paddle.apply_upgrade(kind, config);
    }
}

/// Move the paddle by its speed per held direction, then clamp. The clamp
/// runs unconditionally: it is the only horizontal boundary enforcement.
fn move_paddle(paddle: &mut Paddle, input: &TickInput, config: &GameConfig) {
    if input.move_right {
        paddle.rect.min.x += paddle.speed;
    }
    if input.move_left {
        paddle.rect.min.x -= paddle.speed;
    }
    paddle.constrain(config.field_width);
}

/// Recharge/fire the laser weapon and advance in-flight shots.
///
/// A shot dies on its first tick of block contact but damages every block
/// it overlaps on that tick, unlike the ball's single-candidate rule.
fn advance_lasers(
    paddle: &mut Paddle,
    blocks: &mut Vec<Block>,
    events: &mut Vec<GameEvent>,
    rng: &mut Pcg32,
    config: &GameConfig,
    now_ms: u64,
) {
    if paddle.ammo > 0 {
        paddle.laser_recharge(now_ms, config.laser_cooldown_ms);
    }
    if paddle.can_fire() {
        let laser = paddle.fire(now_ms);
        log::debug!("Laser fired, {} shots left", paddle.ammo);
        paddle.lasers.push(laser);
    }

    let lasers = &mut paddle.lasers;
    lasers.retain_mut(|laser| {
        laser.rect.min.y -= LASER_SPEED;
        // Off-screen shots are discarded regardless of collision outcome
        if laser.rect.top() < -LASER_OFFSCREEN_MARGIN {
            return false;
        }
        let mut hit = false;
        for block in blocks.iter_mut() {
            if block.health <= 0 || !block.rect.overlaps(&laser.rect) {
                continue;
            }
            hit = true;
            if let DamageOutcome::Destroyed { drop } = block.apply_damage(config.damage) {
                if drop {
                    events.push(GameEvent::SpawnUpgrade {
                        kind: UpgradeKind::sample(rng),
                        pos: block.rect.midbottom(),
                    });
                }
            }
        }
        !hit
    });
    blocks.retain(|b| b.health > 0);
}

/// Advance the ball one tick
fn advance_ball(
    ball: &mut Ball,
    paddle: &mut Paddle,
    blocks: &mut Vec<Block>,
    events: &mut Vec<GameEvent>,
    rng: &mut Pcg32,
    input: &TickInput,
    config: &GameConfig,
) {
    match ball.state {
        BallState::Attached => {
            // Track the paddle and keep the restart reference fresh
            ball.rect.set_midbottom(paddle.rect.midtop());
            ball.reset_pos = Vec2::new(paddle.rect.center().x, config.field_height - 80.0);
            if input.launch {
                log::debug!("Ball launched");
                ball.launch();
            }
        }
        BallState::Free => {
            ball.rect.min += ball.vel;

            // Bottom-edge drop is evaluated before the generic bounces and
            // ends the ball's tick outright
            if ball.rect.bottom() >= config.field_height {
                paddle.hearts = paddle.hearts.saturating_sub(1);
                log::info!("Ball lost, {} hearts left", paddle.hearts);
                ball.restart(config);
                return;
            }
            if ball.rect.top() <= 0.0 {
                ball.vel.y = -ball.vel.y;
            }
            if ball.rect.left() <= 0.0 || ball.rect.right() >= config.field_width {
                ball.vel.x = -ball.vel.x;
            }

            resolve_ball_collision(ball, paddle, blocks, events, rng, config);
        }
    }
}

/// What the ball may have struck this tick. The collision resolver checks
/// this tag to decide whether damage applies; only blocks are damageable.
enum Candidate {
    Block(usize),
    Paddle,
}

/// Resolve the ball against the grid and paddle as one candidate list:
/// every overlapping block, then the paddle if overlapping. Only the FIRST
/// candidate is processed - a deliberate simplification, not a bug.
fn resolve_ball_collision(
    ball: &mut Ball,
    paddle: &Paddle,
    blocks: &mut Vec<Block>,
    events: &mut Vec<GameEvent>,
    rng: &mut Pcg32,
    config: &GameConfig,
) {
    let candidate = blocks
        .iter()
        .position(|b| b.rect.overlaps(&ball.rect))
        .map(Candidate::Block)
        .or_else(|| ball.rect.overlaps(&paddle.rect).then_some(Candidate::Paddle));
    let Some(candidate) = candidate else {
        return;
    };

    let target = match candidate {
        Candidate::Block(i) => blocks[i].rect,
        Candidate::Paddle => paddle.rect,
    };
    let Some(side) = classify_contact(&ball.rect, ball.vel, &target, config.ball_radius) else {
        return;
    };

    // Reposition flush to the struck face and invert exactly one axis
    match side {
        ContactSide::BottomOntoTop => {
            ball.rect.set_bottom(target.top() - 1.0);
            ball.vel.y = -ball.vel.y;
        }
        ContactSide::TopOntoBottom => {
            ball.rect.set_top(target.bottom() + 1.0);
            ball.vel.y = -ball.vel.y;
        }
        ContactSide::RightOntoLeft => {
            ball.rect.set_right(target.left());
            ball.vel.x = -ball.vel.x;
        }
        ContactSide::LeftOntoRight => {
            ball.rect.set_left(target.right());
            ball.vel.x = -ball.vel.x;
        }
    }

    if let Candidate::Block(i) = candidate {
        if let DamageOutcome::Destroyed { drop } = blocks[i].apply_damage(config.damage) {
            if drop {
                events.push(GameEvent::SpawnUpgrade {
                    kind: UpgradeKind::sample(rng),
                    pos: blocks[i].rect.midbottom(),
                });
            }
            blocks.remove(i);
        }
    }
}
