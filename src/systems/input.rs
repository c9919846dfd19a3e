use hecs::World;

use crate::{math, Paddle, Side, Steer};

/// Write the human steering desire onto the left paddle. The value is sampled
/// once per step by the caller and treated as immutable for the step.
pub fn ingest_input(world: &mut World, desire: f32) {
    let desire = math::clamp(desire, -1.0, 1.0);
    for (_entity, (paddle, steer)) in world.query_mut::<(&Paddle, &mut Steer)>() {
        if paddle.side == Side::Left {
            steer.desire = desire;
        }
    }
}
