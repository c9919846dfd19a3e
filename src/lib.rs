pub mod collide;
pub mod components;
pub mod config;
pub mod fsm;
pub mod math;
pub mod resources;
pub mod systems;

pub use collide::{resolve_paddle_hit, HitResult, PaddleRect};
pub use components::*;
pub use config::*;
pub use fsm::{Command, Mode, ModeError, ModeMachine};
pub use resources::*;

use glam::Vec2;
use hecs::World;
use rand::Rng;
use systems::*;

/// Advance the simulation by one frame.
///
/// `dt` is wall-clock derived and clamped to [`Params::MAX_DT`]; every system
/// downstream is dt-parametric. `input_desire` is the human steering sample
/// for this step, immutable for its duration. Scoring-driven mode transitions
/// (`Play -> Serve`, `Play -> Over`) happen in here; everything else is the
/// caller's, via [`Game::command`].
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    field: &Field,
    difficulty: &Difficulty,
    fsm: &mut ModeMachine,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    input_desire: f32,
) -> Result<(), ModeError> {
    let dt = time.dt.min(Params::MAX_DT);
    let step_time = Time::new(dt, time.now);

    events.clear();

    let mode = fsm.mode();
    if mode == Mode::Paused {
        return Ok(());
    }

    ingest_input(world, input_desire);
    steer_opponent(world, &step_time, field, difficulty, rng);
    drive_paddles(world, &step_time, field);
    govern_opponent(world, &step_time, field, difficulty);
    move_ball(world, &step_time, field, mode);

    if mode == Mode::Play {
        check_collisions(world, field, difficulty, events);
        check_scoring(world, field, score, events, fsm)?;
    }

    time.now += dt;
    Ok(())
}

/// Spawn the human-controlled paddle.
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), Steer::new()))
}

/// Spawn the scripted right-side paddle with its pilot state.
pub fn create_opponent(world: &mut World, field: &Field) -> hecs::Entity {
    let y = (field.height - field.paddle_h) * 0.5;
    world.spawn((
        Paddle::new(Side::Right, y),
        Steer::new(),
        Pilot::new(field.center_y()),
    ))
}

/// Spawn the ball.
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Re-center both paddles and hold the ball at field center awaiting launch.
pub fn reset_round(world: &mut World, field: &Field) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = (field.height - field.paddle_h) * 0.5;
        paddle.vy = 0.0;
    }
    for (_entity, pilot) in world.query_mut::<&mut Pilot>() {
        pilot.reaction_left = 0.0;
        pilot.target_y = field.center_y();
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = Vec2::new(field.width * 0.5, field.center_y());
        ball.vel = Vec2::ZERO;
    }
}

/// Serve: give the held ball a velocity toward a random side at the
/// difficulty's serve speed, within the serve angle cone.
pub fn launch_ball(world: &mut World, field: &Field, difficulty: &Difficulty, rng: &mut GameRng) {
    let speed = difficulty.ball_speed * field.scale;
    let angle = rng.0.gen_range(-Params::SERVE_ANGLE..Params::SERVE_ANGLE);
    let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = Vec2::new(angle.cos() * speed * dir, angle.sin() * speed);
    }
}

/// One complete simulation: world, clock, layout, tuning and mode, owned by
/// the caller. Multiple independent games can coexist.
pub struct Game {
    pub world: World,
    pub time: Time,
    pub field: Field,
    pub difficulty: Difficulty,
    pub fsm: ModeMachine,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
}

impl Game {
    pub fn new(field: Field, difficulty: Difficulty, seed: u64) -> Self {
        let mut world = World::new();
        let y = (field.height - field.paddle_h) * 0.5;
        create_paddle(&mut world, Side::Left, y);
        create_opponent(&mut world, &field);
        create_ball(
            &mut world,
            Vec2::new(field.width * 0.5, field.center_y()),
            Vec2::ZERO,
        );
        Self {
            world,
            time: Time::new(0.016, 0.0),
            field,
            difficulty,
            fsm: ModeMachine::new(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Advance one frame with the given human steering sample.
    pub fn advance(&mut self, dt: f32, input_desire: f32) -> Result<(), ModeError> {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.field,
            &self.difficulty,
            &mut self.fsm,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            input_desire,
        )
    }

    /// Apply an external mode command and its side effects. Scoring commands
    /// (`PointScored`, `MatchWon`) are issued internally by the step.
    pub fn command(&mut self, command: Command) -> Result<Mode, ModeError> {
        let mode = self.fsm.apply(command)?;
        match command {
            Command::Start | Command::Reset => {
                self.score = Score::new();
                reset_round(&mut self.world, &self.field);
            }
            Command::Launch => {
                launch_ball(&mut self.world, &self.field, &self.difficulty, &mut self.rng);
            }
            _ => {}
        }
        Ok(mode)
    }

    /// Layout pass: adopt a resized field, remapping positions proportionally.
    pub fn set_field(&mut self, field: Field) {
        let sx = field.width / self.field.width;
        let sy = field.height / self.field.height;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = field.clamp_paddle_y(paddle.y * sy);
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos.x *= sx;
            ball.pos.y *= sy;
            ball.vel.x *= sx;
            ball.vel.y *= sy;
        }
        for (_entity, pilot) in self.world.query_mut::<&mut Pilot>() {
            pilot.target_y *= sy;
        }
        self.field = field;
    }

    /// Swap the difficulty preset. Only legal between rounds.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), ModeError> {
        match self.fsm.mode() {
            Mode::Play | Mode::Paused => Err(ModeError::DifficultyLocked {
                mode: self.fsm.mode(),
            }),
            _ => {
                self.difficulty = difficulty;
                Ok(())
            }
        }
    }

    pub fn mode(&self) -> Mode {
        self.fsm.mode()
    }

    /// Ball snapshot for the presentation layer.
    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .map(|(_e, b)| *b)
            .next()
            .unwrap_or(Ball::new(Vec2::ZERO, Vec2::ZERO))
    }

    /// Paddle snapshot for the given side.
    pub fn paddle(&self, side: Side) -> Paddle {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, p)| *p)
            .find(|p| p.side == side)
            .unwrap_or(Paddle::new(side, 0.0))
    }
}
