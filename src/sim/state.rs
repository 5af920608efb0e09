//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay (covers both the attached ball and free play)
    Playing,
    /// All hearts lost; simulation frozen
    GameOver,
    /// Block grid cleared; simulation frozen
    Won,
}

impl GamePhase {
    /// Whether the simulation has halted
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Ball operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallState {
    /// Resting on the paddle: tracks its top-center, ignores velocity,
    /// skips all collision checks
    Attached,
    /// In free motion
    Free,
}

/// Upgrade pickup kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeKind {
    Slow,
    Fast,
    Laser,
    Heart,
}

impl UpgradeKind {
    /// Draw a kind uniformly
    pub fn sample(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..4) {
            0 => UpgradeKind::Slow,
            1 => UpgradeKind::Fast,
            2 => UpgradeKind::Laser,
            _ => UpgradeKind::Heart,
        }
    }
}

/// Spawn requests emitted by entities during a tick and drained once per
/// tick by the session controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    SpawnUpgrade { kind: UpgradeKind, pos: Vec2 },
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal movement per tick
    pub speed: f32,
    /// Remaining hit points; the session ends at zero
    pub hearts: u32,
    /// Set by the first laser pickup; firing stays impossible before it
    pub laser_unlocked: bool,
    /// Shots remaining (the unlocking pickup itself grants none)
    pub ammo: u32,
    /// Wall-clock time of the last shot, milliseconds
    pub last_fire_ms: u64,
    /// Cooldown elapsed, next shot permitted
    pub ready: bool,
    /// In-flight shots, owned and advanced by the paddle
    pub lasers: Vec<Laser>,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        let center = Vec2::new(
            config.field_width / 2.0,
            config.field_height - PADDLE_SPAWN_OFFSET,
        );
        Self {
            rect: Rect::from_center(center, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
            speed: config.paddle_speed,
            hearts: config.paddle_hearts,
            laser_unlocked: false,
            ammo: 0,
            last_fire_ms: 0,
            ready: true,
            lasers: Vec::new(),
        }
    }

    /// Clamp the paddle inside the field. Runs every tick whether or not a
    /// key was held; this is the only horizontal boundary enforcement.
    pub fn constrain(&mut self, field_width: f32) {
        if self.rect.left() <= 0.0 {
            self.rect.set_left(0.0);
        }
        if self.rect.right() >= field_width {
            self.rect.set_right(field_width);
        }
    }

    /// Apply a collected upgrade
    pub fn apply_upgrade(&mut self, kind: UpgradeKind, config: &GameConfig) {
        match kind {
            // Floor at 1: the paddle must always be able to move
            UpgradeKind::Slow => self.speed = (self.speed - 1.0).max(1.0),
            UpgradeKind::Fast => self.speed += 1.0,
            UpgradeKind::Heart => self.hearts += 1,
            UpgradeKind::Laser => {
                if self.laser_unlocked {
                    self.ammo += config.laser_ammo_per_pickup;
                } else {
                    // First pickup only unlocks the weapon; the ammo pool
                    // stays empty until the next one
                    self.laser_unlocked = true;
                }
            }
        }
    }

    /// Flip `ready` back on once the cooldown has elapsed. Only meaningful
    /// while there is ammo to spend.
    pub fn laser_recharge(&mut self, now_ms: u64, cooldown_ms: u64) {
        if !self.ready && now_ms.saturating_sub(self.last_fire_ms) >= cooldown_ms {
            self.ready = true;
        }
    }

    /// Whether a shot may be fired right now
    pub fn can_fire(&self) -> bool {
        self.laser_unlocked && self.ready && self.ammo > 0
    }

    /// Spend one shot: spawn a laser at the paddle's top-center and start
    /// the cooldown. Callers must check [`Paddle::can_fire`] first.
    pub fn fire(&mut self, now_ms: u64) -> Laser {
        self.ready = false;
        self.last_fire_ms = now_ms;
        self.ammo -= 1;
        Laser::new(self.rect.midtop())
    }
}

/// The single ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    /// Owned velocity value; restarts reassign it from config rather than
    /// sharing a default
    pub vel: Vec2,
    pub state: BallState,
    /// Where a restart recenters the ball; refreshed from the paddle every
    /// attached tick
    pub reset_pos: Vec2,
}

impl Ball {
    pub fn new(paddle: &Paddle, config: &GameConfig) -> Self {
        Self {
            rect: Rect::from_midbottom(paddle.rect.midtop(), Vec2::splat(BALL_SIZE)),
            vel: config.ball_velocity,
            state: BallState::Attached,
            reset_pos: Vec2::new(paddle.rect.center().x, config.field_height - 80.0),
        }
    }

    /// Detach the ball from the paddle: the restart transition in reverse
    pub fn launch(&mut self) {
        self.state = BallState::Free;
    }

    /// Return to the paddle after a bottom-edge drop
    pub fn restart(&mut self, config: &GameConfig) {
        self.state = BallState::Attached;
        self.vel = config.ball_velocity;
        self.rect.set_center(self.reset_pos);
    }
}

/// Outcome of one damage application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Health remains; tier dropped by one
    Damaged,
    /// Health exhausted; the block must be removed. `drop` carries its
    /// drop-eligibility so the caller can emit an upgrade event.
    Destroyed { drop: bool },
}

/// A destructible block in the grid
#[derive(Debug, Clone)]
pub struct Block {
    pub rect: Rect,
    pub row: u32,
    pub col: u32,
    /// Visual tier; starts at twice the layout value and drops one per
    /// non-lethal hit, so it always stays >= 1 and indexes the sprite table
    pub tier: u32,
    pub health: i32,
    /// Rolled once at construction: destroyed drop-eligible blocks spawn an
    /// upgrade
    pub drop: bool,
}

impl Block {
    pub fn new(value: u32, row: u32, col: u32, config: &GameConfig, rng: &mut Pcg32) -> Self {
        let min = Vec2::new(
            col as f32 * (BLOCK_WIDTH + BLOCK_GAP),
            BLOCK_TOP_OFFSET + row as f32 * (BLOCK_HEIGHT + BLOCK_GAP),
        );
        Self {
            rect: Rect::new(min, Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT)),
            row,
            col,
            tier: 2 * value,
            health: value as i32 * 100,
            drop: rng.random_range(0..=10) > config.drop_threshold,
        }
    }

    /// Subtract `amount` health. Tier and health move in lockstep: the tier
    /// only decrements while health survives the hit, and floors at 1 so it
    /// always names a valid sprite even when damage does not divide health
    /// evenly.
    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        self.health -= amount;
        if self.health > 0 {
            self.tier = self.tier.saturating_sub(1).max(1);
            DamageOutcome::Damaged
        } else {
            DamageOutcome::Destroyed { drop: self.drop }
        }
    }
}

/// A laser shot in flight
#[derive(Debug, Clone)]
pub struct Laser {
    pub rect: Rect,
}

impl Laser {
    /// Spawned with its bottom-center at the paddle's top-center
    pub fn new(midbottom: Vec2) -> Self {
        Self {
            rect: Rect::from_midbottom(midbottom, Vec2::new(LASER_WIDTH, LASER_HEIGHT)),
        }
    }
}

/// A falling upgrade pickup
#[derive(Debug, Clone)]
pub struct Upgrade {
    pub rect: Rect,
    pub kind: UpgradeKind,
}

impl Upgrade {
    /// Spawned with its top-center at the destroyed block's bottom-center
    pub fn new(midtop: Vec2, kind: UpgradeKind) -> Self {
        Self {
            rect: Rect::from_midtop(midtop, Vec2::new(UPGRADE_WIDTH, UPGRADE_HEIGHT)),
            kind,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// All randomness (rare slots, drop rolls, upgrade kinds) flows through
    /// this seeded generator
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: Vec<Block>,
    pub upgrades: Vec<Upgrade>,
    /// Spawn-request queue, drained once per tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session: paddle centered, grid built from the layout,
    /// ball attached and waiting for the launch input
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(config);
        let ball = Ball::new(&paddle, config);
        let blocks = super::tick::build_grid(config, &mut rng);
        log::info!(
            "New game: seed {seed}, {} blocks, {} hearts",
            blocks.len(),
            paddle.hearts
        );
        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            time_ticks: 0,
            paddle,
            ball,
            blocks,
            upgrades: Vec::new(),
            events: Vec::new(),
        }
    }
}
