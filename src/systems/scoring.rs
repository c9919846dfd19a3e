use hecs::World;

use crate::fsm::{Command, ModeError, ModeMachine};
use crate::{reset_round, Ball, Events, Field, Params, Score, Side};

/// Detect the ball leaving the field and settle the point.
///
/// A ball past a side boundary by the exit margin scores for the opposite
/// side. The round resets to serve, or the match ends when a side reaches the
/// target. Mode transitions go through the validated machine; calling this
/// outside `Play` is a contract violation surfaced as `ModeError`.
pub fn check_scoring(
    world: &mut World,
    field: &Field,
    score: &mut Score,
    events: &mut Events,
    fsm: &mut ModeMachine,
) -> Result<(), ModeError> {
    let ball_x = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.pos.x,
            None => return Ok(()),
        }
    };

    let margin = Params::EXIT_MARGIN * field.scale;
    let exited = if ball_x < -margin {
        Some(Side::Left)
    } else if ball_x > field.width + margin {
        Some(Side::Right)
    } else {
        None
    };

    if let Some(exit_side) = exited {
        let side = exit_side.opposite();
        score.increment(side);
        match side {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        log::debug!(
            "point for {:?}, score {}-{}",
            side,
            score.left,
            score.right
        );

        if score.winner(Params::MATCH_TARGET).is_some() {
            fsm.apply(Command::MatchWon)?;
        } else {
            fsm.apply(Command::PointScored)?;
            reset_round(world, field);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_opponent, create_paddle, Mode};
    use glam::Vec2;

    fn play_fsm() -> ModeMachine {
        let mut fsm = ModeMachine::new();
        fsm.apply(Command::Start).unwrap();
        fsm.apply(Command::Launch).unwrap();
        fsm
    }

    fn setup(ball_x: f32) -> (World, Field, Score, Events, ModeMachine) {
        let mut world = World::new();
        let field = Field::default();
        create_paddle(&mut world, Side::Left, 250.0);
        create_opponent(&mut world, &field);
        create_ball(&mut world, Vec2::new(ball_x, 300.0), Vec2::new(500.0, 0.0));
        (world, field, Score::new(), Events::new(), play_fsm())
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let (mut world, field, mut score, mut events, mut fsm) = setup(0.0);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x = field.width + Params::EXIT_MARGIN * field.scale + 1.0;
        }

        check_scoring(&mut world, &field, &mut score, &mut events, &mut fsm).unwrap();

        assert_eq!(score.left, 1);
        assert_eq!(score.right, 0);
        assert!(events.left_scored);
        assert_eq!(fsm.mode(), Mode::Serve, "Round resets to serve");
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let (mut world, field, mut score, mut events, mut fsm) = setup(0.0);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x = -(Params::EXIT_MARGIN * field.scale + 1.0);
        }

        check_scoring(&mut world, &field, &mut score, &mut events, &mut fsm).unwrap();

        assert_eq!(score.right, 1);
        assert!(events.right_scored);
        assert_eq!(fsm.mode(), Mode::Serve);
    }

    #[test]
    fn test_no_score_within_margin() {
        let (mut world, field, mut score, mut events, mut fsm) = setup(0.0);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            // Past the edge but inside the margin: still live
            ball.pos.x = field.width + 1.0;
        }

        check_scoring(&mut world, &field, &mut score, &mut events, &mut fsm).unwrap();

        assert_eq!(score.left, 0);
        assert_eq!(fsm.mode(), Mode::Play);
    }

    #[test]
    fn test_round_resets_ball_to_center_after_point() {
        let (mut world, field, mut score, mut events, mut fsm) = setup(0.0);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x = field.width + 100.0;
        }

        check_scoring(&mut world, &field, &mut score, &mut events, &mut fsm).unwrap();

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(field.width * 0.5, field.center_y()));
            assert_eq!(ball.vel, Vec2::ZERO, "Held until the next launch");
        }
    }

    #[test]
    fn test_match_target_ends_match() {
        let (mut world, field, mut score, mut events, mut fsm) = setup(0.0);
        score.left = Params::MATCH_TARGET - 1;
        let exit_x = field.width + 100.0;
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x = exit_x;
        }

        check_scoring(&mut world, &field, &mut score, &mut events, &mut fsm).unwrap();

        assert_eq!(score.left, Params::MATCH_TARGET);
        assert_eq!(fsm.mode(), Mode::Over);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos.x, exit_x, "No further round resets after the match");
        }
    }

    #[test]
    fn test_scoring_outside_play_is_rejected() {
        let (mut world, field, mut score, mut events, _) = setup(0.0);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x = field.width + 100.0;
        }

        let mut fsm = ModeMachine::new(); // still in attract
        let err = check_scoring(&mut world, &field, &mut score, &mut events, &mut fsm);
        assert!(err.is_err(), "Scoring while in attract is out of contract");
    }
}
