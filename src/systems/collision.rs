use hecs::World;

use crate::collide::{resolve_paddle_hit, PaddleRect};
use crate::{Ball, Difficulty, Events, Field, Paddle, Params, Side};

/// Bounce the ball off the top/bottom walls and resolve paddle hits.
///
/// Only the paddle matching the ball's horizontal direction is tested; a ball
/// cannot be traveling toward both sides at once.
pub fn check_collisions(
    world: &mut World,
    field: &Field,
    difficulty: &Difficulty,
    events: &mut Events,
) {
    let ball = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => *ball,
            None => return,
        }
    };
    let (mut pos, mut vel) = (ball.pos, ball.vel);

    // Wall bounces: flip vy and clamp back inside
    let (min_y, max_y) = field.ball_y_range();
    if pos.y <= min_y {
        vel.y = vel.y.abs();
        pos.y = min_y;
        events.ball_hit_wall = true;
    } else if pos.y >= max_y {
        vel.y = -vel.y.abs();
        pos.y = max_y;
        events.ball_hit_wall = true;
    }

    let target_side = if vel.x < 0.0 { Side::Left } else { Side::Right };
    let paddle = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .find(|p| p.side == target_side);

    if let Some(paddle) = paddle {
        let rect = PaddleRect {
            x: field.paddle_x(paddle.side),
            y: paddle.y,
            w: field.paddle_w,
            h: field.paddle_h,
            vy: paddle.vy,
        };
        let res = resolve_paddle_hit(
            rect,
            pos,
            vel,
            field.ball_r,
            paddle.side == Side::Left,
            difficulty.speed_up_factor,
            Params::BALL_SPEED_MAX,
            field.scale,
        );
        if res.hit {
            pos.x = res.x;
            vel = res.vel;
            events.ball_hit_paddle = true;
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}
