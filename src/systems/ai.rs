use hecs::World;
use rand::Rng;

use crate::{math, Ball, Difficulty, Field, GameRng, Paddle, Pilot, Side, Steer, Time};

/// Update the scripted side's steering desire. Runs before paddle control.
///
/// The pilot re-evaluates its target only when the reaction countdown expires,
/// simulating reaction latency; between evaluations it keeps steering toward
/// the last committed target. While the ball is moving away it recenters on
/// the field midpoint.
pub fn steer_opponent(
    world: &mut World,
    time: &Time,
    field: &Field,
    difficulty: &Difficulty,
    rng: &mut GameRng,
) {
    let ball = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => *ball,
            None => return,
        }
    };

    for (_entity, (paddle, pilot, steer)) in
        world.query_mut::<(&Paddle, &mut Pilot, &mut Steer)>()
    {
        pilot.prev_y = paddle.y;

        pilot.reaction_left -= time.dt;
        if pilot.reaction_left <= 0.0 {
            pilot.reaction_left = difficulty.ai_reaction_ms / 1000.0;
            pilot.target_y = predict_arrival(&ball, field, difficulty, rng);
        }

        let center = paddle.center_y(field.paddle_h);
        let reach = field.height * crate::Params::STEER_RANGE_FRAC;
        steer.desire = math::clamp((pilot.target_y - center) / reach, -1.0, 1.0);
    }
}

/// Where the ball will cross the opponent's paddle plane, wall bounces folded
/// in, blurred by the difficulty's aim error. Falls back to the field midpoint
/// when the ball is moving away.
fn predict_arrival(ball: &Ball, field: &Field, difficulty: &Difficulty, rng: &mut GameRng) -> f32 {
    if ball.vel.x <= 0.0 {
        return field.center_y();
    }
    let plane = field.paddle_x(Side::Right) - field.ball_r;
    let t = (plane - ball.pos.x) / ball.vel.x;
    if t <= 0.0 {
        return field.center_y();
    }
    let (min_y, max_y) = field.ball_y_range();
    let arrival = math::fold_reflect(ball.pos.y + ball.vel.y * t, min_y, max_y);

    let err = difficulty.ai_error_px * field.scale;
    if err > 0.0 {
        arrival + rng.0.gen_range(-err..=err)
    } else {
        arrival
    }
}

/// Hard-cap the opponent's achieved speed after control integration.
///
/// The control law can overshoot `ai_max_speed` on easy settings; this
/// governor rewrites both the position delta and the velocity so the net
/// per-step movement never exceeds the cap. Runs after `drive_paddles`.
pub fn govern_opponent(world: &mut World, time: &Time, field: &Field, difficulty: &Difficulty) {
    if time.dt <= 0.0 {
        return;
    }
    let cap = difficulty.ai_max_speed * field.scale;
    for (_entity, (paddle, pilot)) in world.query_mut::<(&mut Paddle, &Pilot)>() {
        let achieved = (paddle.y - pilot.prev_y) / time.dt;
        if achieved.abs() > cap {
            paddle.y = field.clamp_paddle_y(pilot.prev_y + math::sign(achieved) * cap * time.dt);
            paddle.vy = math::clamp(paddle.vy, -cap, cap);
        }
    }
}
