use glam::Vec2;

/// Which half of the field a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component. `y` is the top edge; `x`, width and height derive from
/// the current [`Field`](crate::Field) per side.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
    pub vy: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y, vy: 0.0 }
    }

    /// Center of the paddle face, given its height.
    pub fn center_y(&self, paddle_h: f32) -> f32 {
        self.y + paddle_h * 0.5
    }
}

/// The ball. Radius comes from the field layout.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Normalized steering intent in `[-1, 1]`, written by input ingest for the
/// human paddle and by the pilot for the scripted one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Steer {
    pub desire: f32,
}

impl Steer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Scripted-opponent state: a dt-driven reaction countdown and the target it
/// last committed to. `prev_y` is the paddle position sampled before control
/// integration, used by the speed governor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pilot {
    pub reaction_left: f32,
    pub target_y: f32,
    pub prev_y: f32,
}

impl Pilot {
    pub fn new(target_y: f32) -> Self {
        Self {
            reaction_left: 0.0,
            target_y,
            prev_y: 0.0,
        }
    }
}
