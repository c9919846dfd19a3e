use hecs::World;

use crate::{math, Ball, Field, Mode, Paddle, Params, Steer, Time};

/// Drive both paddles toward their steering desire.
///
/// The control law blends an exponential approach to the target velocity with
/// a proportional acceleration term capped by a fixed per-step budget, giving
/// a snappy but bounded response. Both constants are engine tuning, shared by
/// the human and the scripted side.
pub fn drive_paddles(world: &mut World, time: &Time, field: &Field) {
    let max_speed = Params::PADDLE_MAX_SPEED * field.scale;
    let accel_budget = Params::PADDLE_ACCEL * field.scale * time.dt;
    let rate = 1.0 - (-Params::PADDLE_DAMPING * time.dt).exp();

    for (_entity, (paddle, steer)) in world.query_mut::<(&mut Paddle, &Steer)>() {
        let target = steer.desire * max_speed;
        let mut vy = math::lerp(paddle.vy, target, rate);
        vy += math::clamp(target - vy, -accel_budget, accel_budget);
        paddle.vy = math::clamp(vy, -max_speed, max_speed);
        paddle.y = field.clamp_paddle_y(paddle.y + paddle.vy * time.dt);
    }
}

/// Integrate the ball. Outside active play it drifts toward field center
/// (cosmetic idle state) instead of obeying its velocity.
pub fn move_ball(world: &mut World, time: &Time, field: &Field, mode: Mode) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if mode == Mode::Play {
            ball.pos += ball.vel * time.dt;
        } else {
            let t = 1.0 - (-Params::IDLE_DRIFT_RATE * time.dt).exp();
            let center = glam::Vec2::new(field.width * 0.5, field.center_y());
            ball.pos = ball.pos.lerp(center, t);
        }
    }
}
