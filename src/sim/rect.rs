//! Axis-aligned rectangle geometry and contact-side classification
//!
//! Screen coordinates: y grows downward, so `top` is the smaller y and a
//! positive y velocity moves toward the bottom edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, stored as top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self { min: center - size / 2.0, size }
    }

    /// Build a rect whose bottom-center sits at `midbottom`
    pub fn from_midbottom(midbottom: Vec2, size: Vec2) -> Self {
        Self {
            min: Vec2::new(midbottom.x - size.x / 2.0, midbottom.y - size.y),
            size,
        }
    }

    /// Build a rect whose top-center sits at `midtop`
    pub fn from_midtop(midtop: Vec2, size: Vec2) -> Self {
        Self {
            min: Vec2::new(midtop.x - size.x / 2.0, midtop.y),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    #[inline]
    pub fn midtop(&self) -> Vec2 {
        Vec2::new(self.min.x + self.size.x / 2.0, self.min.y)
    }

    #[inline]
    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.min.x + self.size.x / 2.0, self.min.y + self.size.y)
    }

    pub fn set_left(&mut self, x: f32) {
        self.min.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.min.x = x - self.size.x;
    }

    pub fn set_top(&mut self, y: f32) {
        self.min.y = y;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.min.y = y - self.size.y;
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.min = center - self.size / 2.0;
    }

    pub fn set_midbottom(&mut self, midbottom: Vec2) {
        self.min = Vec2::new(midbottom.x - self.size.x / 2.0, midbottom.y - self.size.y);
    }

    /// Strict overlap test; rects that merely share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Which face of the target a moving rect struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSide {
    /// Moving rect's bottom hit the target's top face
    BottomOntoTop,
    /// Moving rect's top hit the target's bottom face
    TopOntoBottom,
    /// Moving rect's right hit the target's left face
    RightOntoLeft,
    /// Moving rect's left hit the target's right face
    LeftOntoRight,
}

impl ContactSide {
    /// Whether the contact is against a horizontal face (flips vy)
    pub fn is_vertical(&self) -> bool {
        matches!(self, ContactSide::BottomOntoTop | ContactSide::TopOntoBottom)
    }
}

/// Classify which face of `target` the moving rect struck.
///
/// Each face matches when the opposing edges are within `tolerance` of each
/// other and the velocity points into that face. At most one side is
/// reported, vertical faces checked first: once a vertical contact matches,
/// the horizontal checks are skipped entirely. This tie-break is a hard
/// rule, not an optimization - classifying both axes from a single overlap
/// would reverse both velocity components at once and send the ball
/// straight back through the corner it grazed.
pub fn classify_contact(
    moving: &Rect,
    vel: Vec2,
    target: &Rect,
    tolerance: f32,
) -> Option<ContactSide> {
    if (moving.bottom() - target.top()).abs() < tolerance && vel.y > 0.0 {
        return Some(ContactSide::BottomOntoTop);
    }
    if (moving.top() - target.bottom()).abs() < tolerance && vel.y < 0.0 {
        return Some(ContactSide::TopOntoBottom);
    }
    if (moving.right() - target.left()).abs() < tolerance && vel.x > 0.0 {
        return Some(ContactSide::RightOntoLeft);
    }
    if (moving.left() - target.right()).abs() < tolerance && vel.x < 0.0 {
        return Some(ContactSide::LeftOntoRight);
    }
    None
}
