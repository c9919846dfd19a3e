//! Pure paddle-hit resolver. Given paddle and ball snapshots it decides
//! overlap and computes the post-collision velocity and position without
//! mutating either input. Deterministic: identical inputs give bit-identical
//! outputs, which the opponent's prediction relies on.

use glam::Vec2;

use crate::math;
use crate::Params;

/// Axis-aligned paddle rectangle, top-left origin.
#[derive(Debug, Clone, Copy)]
pub struct PaddleRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Current vertical velocity, feeds the spin term.
    pub vy: f32,
}

/// Outcome of testing one paddle against the ball.
#[derive(Debug, Clone, Copy)]
pub struct HitResult {
    pub hit: bool,
    pub vel: Vec2,
    /// Resolved ball x. On a hit this is flush against the paddle's outer
    /// face; on a miss it is the ball's x unchanged.
    pub x: f32,
}

/// Resolve a possible collision between a paddle and the ball.
///
/// The overlap test compares the ball's bounding square against the paddle
/// rectangle. A miss returns `hit = false` with the ball state passed through
/// unchanged; that is the common per-frame result, not an error.
#[allow(clippy::too_many_arguments)]
pub fn resolve_paddle_hit(
    rect: PaddleRect,
    ball_pos: Vec2,
    ball_vel: Vec2,
    ball_r: f32,
    is_left: bool,
    speed_up: f32,
    max_speed: f32,
    scale: f32,
) -> HitResult {
    let disjoint = ball_pos.x + ball_r < rect.x
        || ball_pos.x - ball_r > rect.x + rect.w
        || ball_pos.y + ball_r < rect.y
        || ball_pos.y - ball_r > rect.y + rect.h;
    if disjoint {
        return HitResult {
            hit: false,
            vel: ball_vel,
            x: ball_pos.x,
        };
    }

    // Place the ball flush against the outer face so it can neither tunnel
    // through nor stick inside the paddle, however deep the overlap was.
    let x = if is_left {
        rect.x + rect.w + ball_r
    } else {
        rect.x - ball_r
    };

    let new_speed = (ball_vel.length() * speed_up).min(max_speed * scale);

    // Where on the paddle the ball struck, from center, normalized by
    // half-height to [-1, 1].
    let half_h = rect.h * 0.5;
    let offset = math::clamp((ball_pos.y - (rect.y + half_h)) / half_h, -1.0, 1.0);

    let spin = math::clamp(
        rect.vy / (Params::SPIN_REF_SPEED * scale) * Params::SPIN_GAIN,
        -Params::SPIN_CLAMP,
        Params::SPIN_CLAMP,
    );

    // Steep blends are clamped to keep rebounds from going near-vertical and
    // stalling the rally.
    let angle = math::clamp(
        offset * Params::OFFSET_WEIGHT + spin,
        -Params::MAX_BOUNCE_ANGLE,
        Params::MAX_BOUNCE_ANGLE,
    );

    let dir = if is_left { 1.0 } else { -1.0 };
    HitResult {
        hit: true,
        vel: Vec2::new(angle.cos() * new_speed * dir, angle.sin() * new_speed),
        x,
    }
}
