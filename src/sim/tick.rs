//! Per-tick simulation step
//!
//! One tick: drain the buffered gesture events, then advance every ball in
//! index order. Balls never collide with each other, only with course
//! borders, so index order cannot change the outcome. Turn advances are
//! applied after the ball loop so the sequencer observes post-tick states.

use glam::Vec2;

use super::collision::{bounce_off_segment, circle_segment_hit};
use super::course::Course;
use super::gesture::PullGesture;
use super::state::{Ball, BallState, FallingAnimation, GameState};
use crate::tuning::Tuning;

/// A translated pointer/touch event targeting one ball.
///
/// Delivery is asynchronous; events are buffered via
/// [`GameState::queue_input`] and take effect at the start of the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A drag began at `point`
    Start { ball: usize, point: Vec2 },
    /// The drag moved to `point`
    Move { ball: usize, point: Vec2 },
    /// The drag ended; a non-empty drag launches the ball
    End { ball: usize },
}

/// What a ball's step means for the turn order
enum StepOutcome {
    /// Nothing the sequencer cares about
    InPlay,
    /// Fly decayed to rest: the shot is over
    CameToRest,
    /// Falling animation finished: the ball is gone for good
    Sank,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState) {
    for event in state.drain_input() {
        apply_gesture(state, event);
    }

    state.time_ticks += 1;

    let GameState {
        course,
        tuning,
        balls,
        ..
    } = state;

    let mut shots_finished = 0;
    for ball in balls.iter_mut() {
        match step_ball(ball, course, tuning) {
            StepOutcome::InPlay => {}
            StepOutcome::CameToRest | StepOutcome::Sank => shots_finished += 1,
        }
    }

    for _ in 0..shots_finished {
        state.advance_turn();
    }
}

/// Validate and apply one gesture event.
///
/// Out-of-turn and mid-flight attempts are silently rejected; a gesture
/// whose owner has lost the turn is abandoned on its next move.
fn apply_gesture(state: &mut GameState, event: GestureEvent) {
    match event {
        GestureEvent::Start { ball: id, point } => {
            if id != state.turn {
                return;
            }
            let Some(ball) = state.balls.get_mut(id) else {
                return;
            };
            if ball.state != BallState::Pull || ball.gesture.is_some() {
                return;
            }
            ball.gesture = Some(PullGesture::new(point));
        }
        GestureEvent::Move { ball: id, point } => {
            let turn = state.turn;
            let Some(ball) = state.balls.get_mut(id) else {
                return;
            };
            if id != turn {
                ball.gesture = None;
                return;
            }
            if let Some(gesture) = ball.gesture.as_mut() {
                gesture.current = point;
            }
        }
        GestureEvent::End { ball: id } => {
            let turn = state.turn;
            let multiplier = state.tuning.pullback_multiplier;
            let Some(ball) = state.balls.get_mut(id) else {
                return;
            };
            let Some(gesture) = ball.gesture.take() else {
                return;
            };
            if id != turn {
                return;
            }
            // Zero-displacement drag carries no aim: release is a no-op
            let Some(vel) = gesture.launch_velocity(multiplier) else {
                return;
            };
            ball.vel = vel;
            ball.state = BallState::Fly;
            log::info!(
                "Ball {id} launched: tension {:.1}, velocity ({:.1}, {:.1})",
                gesture.tension(),
                vel.x,
                vel.y
            );
            if let Some(round) = state.players[id].strokes.last_mut() {
                *round += 1;
            }
        }
    }
}

/// Advance one ball: velocity update, sub-stepped movement with collision
/// response, hole capture, then rest detection.
fn step_ball(ball: &mut Ball, course: &Course, tuning: &Tuning) -> StepOutcome {
    match ball.state {
        BallState::Pull => {
            // Idle balls never drift
            ball.vel = Vec2::ZERO;
            StepOutcome::InPlay
        }

        BallState::Fly => {
            ball.vel *= 1.0 - tuning.friction;
            if ball.vel.x.abs() < tuning.velocity_deadzone {
                ball.vel.x = 0.0;
            }
            if ball.vel.y.abs() < tuning.velocity_deadzone {
                ball.vel.y = 0.0;
            }

            let speed = ball.vel.length();
            if speed > 0.0 {
                // Split movement so no sub-step exceeds the desired length,
                // re-testing every border after each; a corner graze can
                // bounce more than once within one tick.
                let steps = (speed / tuning.substep_length).ceil() as u32;
                for _ in 0..steps {
                    ball.pos += ball.vel / steps as f32;
                    for seg in course.segments() {
                        if circle_segment_hit(ball.pos, ball.radius, seg)
                            && let Some(vel) = bounce_off_segment(ball.pos, ball.vel, seg)
                        {
                            ball.vel = vel;
                            log::debug!("Ball {} bounced off border", ball.id);
                        }
                    }
                }
            }

            if ball.pos.distance(course.hole) <= ball.radius + course.hole_radius {
                ball.state = BallState::Hole;
                ball.falling = Some(FallingAnimation::new(ball.pos, course.hole, ball.radius));
                ball.gesture = None;
                log::info!("Ball {} captured by the hole", ball.id);
                // Turn advances once the fall completes
                return StepOutcome::InPlay;
            }

            if ball.vel == Vec2::ZERO {
                ball.state = BallState::Pull;
                log::debug!("Ball {} at rest", ball.id);
                return StepOutcome::CameToRest;
            }

            StepOutcome::InPlay
        }

        BallState::Hole => {
            let Some(falling) = ball.falling.as_mut() else {
                // Fully sunk; nothing left to animate
                return StepOutcome::InPlay;
            };
            falling.progress += tuning.fall_rate;
            let t = falling.progress.min(1.0);
            ball.pos = falling.start.lerp(falling.target, t);
            ball.radius = falling.initial_radius * (1.0 - t);
            if falling.progress >= 1.0 {
                ball.falling = None;
                log::info!("Ball {} sank", ball.id);
                return StepOutcome::Sank;
            }
            StepOutcome::InPlay
        }
    }
}
