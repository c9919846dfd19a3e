use crate::math;

/// Fixed engine tuning. These are resolution-independent response constants;
/// anything the player can change lives in [`Difficulty`] instead.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle control law
    pub const PADDLE_MAX_SPEED: f32 = 820.0; // px/s at scale 1.0
    pub const PADDLE_DAMPING: f32 = 9.0; // exponential approach rate
    pub const PADDLE_ACCEL: f32 = 2400.0; // px/s^2 budget at scale 1.0

    // Paddle-hit response
    pub const OFFSET_WEIGHT: f32 = 0.75;
    pub const SPIN_GAIN: f32 = 0.55;
    pub const SPIN_CLAMP: f32 = 0.55;
    pub const SPIN_REF_SPEED: f32 = 1150.0; // px/s at scale 1.0
    pub const MAX_BOUNCE_ANGLE: f32 = 0.95; // radians

    // Ball
    pub const BALL_SPEED_MAX: f32 = 1200.0; // px/s at scale 1.0
    pub const IDLE_DRIFT_RATE: f32 = 3.0; // center drift outside play

    // Opponent steering
    pub const STEER_RANGE_FRAC: f32 = 0.22; // of field height

    // Scoring
    pub const EXIT_MARGIN: f32 = 24.0; // px past the edge at scale 1.0
    pub const MATCH_TARGET: u8 = 7;

    // Serve
    pub const SERVE_ANGLE: f32 = 0.785; // max |angle| off horizontal

    // Clamp dt to prevent large jumps after tab-switch stalls
    pub const MAX_DT: f32 = 0.1;
}

/// Playfield layout, recomputed by the presentation layer on every resize and
/// passed in read-only. All lengths are in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub paddle_w: f32,
    pub paddle_h: f32,
    pub paddle_inset: f32,
    pub ball_r: f32,
    /// Viewport scale factor applied to resolution-dependent tuning.
    pub scale: f32,
}

impl Field {
    /// Derive a layout from viewport dimensions.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let scale = (height / 600.0).min(width / 800.0).max(0.1);
        Self {
            width,
            height,
            paddle_w: 14.0 * scale,
            paddle_h: 110.0 * scale,
            paddle_inset: 28.0 * scale,
            ball_r: 9.0 * scale,
            scale,
        }
    }

    /// X of a paddle's left edge for the given side.
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Left => self.paddle_inset,
            crate::Side::Right => self.width - self.paddle_inset - self.paddle_w,
        }
    }

    /// Clamp a paddle top edge to the field's vertical bounds.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        math::clamp(y, 0.0, self.height - self.paddle_h)
    }

    /// Vertical range the ball center can occupy.
    pub fn ball_y_range(&self) -> (f32, f32) {
        (self.ball_r, self.height - self.ball_r)
    }

    pub fn center_y(&self) -> f32 {
        self.height * 0.5
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::for_viewport(800.0, 600.0)
    }
}

/// Opponent tuning and ball pacing. Selected by the embedding UI, immutable,
/// and swapped only between rounds.
#[derive(Debug, Clone, Copy)]
pub struct Difficulty {
    pub label: &'static str,
    /// Hard cap on the opponent's achieved speed, px/s at scale 1.0.
    pub ai_max_speed: f32,
    /// Reaction latency between target re-evaluations.
    pub ai_reaction_ms: f32,
    /// Half-width of the uniform aim error, px at scale 1.0.
    pub ai_error_px: f32,
    /// Serve speed, px/s at scale 1.0.
    pub ball_speed: f32,
    /// Per-hit multiplicative speed increase.
    pub speed_up_factor: f32,
}

impl Difficulty {
    pub const EASY: Difficulty = Difficulty {
        label: "easy",
        ai_max_speed: 300.0,
        ai_reaction_ms: 280.0,
        ai_error_px: 52.0,
        ball_speed: 420.0,
        speed_up_factor: 1.03,
    };

    pub const NORMAL: Difficulty = Difficulty {
        label: "normal",
        ai_max_speed: 430.0,
        ai_reaction_ms: 190.0,
        ai_error_px: 30.0,
        ball_speed: 520.0,
        speed_up_factor: 1.045,
    };

    pub const HARD: Difficulty = Difficulty {
        label: "hard",
        ai_max_speed: 580.0,
        ai_reaction_ms: 120.0,
        ai_error_px: 12.0,
        ball_speed: 640.0,
        speed_up_factor: 1.06,
    };
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_field_paddle_x_per_side() {
        let field = Field::default();
        assert_eq!(field.paddle_x(Side::Left), field.paddle_inset);
        assert_eq!(
            field.paddle_x(Side::Right),
            field.width - field.paddle_inset - field.paddle_w
        );
    }

    #[test]
    fn test_field_clamp_paddle_y() {
        let field = Field::default();
        assert_eq!(field.clamp_paddle_y(-50.0), 0.0);
        assert_eq!(
            field.clamp_paddle_y(field.height),
            field.height - field.paddle_h
        );
        assert_eq!(field.clamp_paddle_y(120.0), 120.0);
    }

    #[test]
    fn test_field_scales_with_viewport() {
        let small = Field::for_viewport(400.0, 300.0);
        let large = Field::for_viewport(1600.0, 1200.0);
        assert!(small.scale < large.scale);
        assert!(small.paddle_h < large.paddle_h);
        assert!(small.ball_r < large.ball_r);
    }

    #[test]
    fn test_difficulty_presets_ordered() {
        assert!(Difficulty::EASY.ai_max_speed < Difficulty::HARD.ai_max_speed);
        assert!(Difficulty::EASY.ai_reaction_ms > Difficulty::HARD.ai_reaction_ms);
        assert!(Difficulty::EASY.ai_error_px > Difficulty::HARD.ai_error_px);
        assert!(Difficulty::EASY.ball_speed < Difficulty::HARD.ball_speed);
    }
}
