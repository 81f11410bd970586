//! Sling Putt headless demo
//!
//! Plays a scripted two-player session on a walled rectangular course:
//! whoever holds the turn drags away from the hole and releases, and the
//! sim runs until every ball has dropped in.

use glam::Vec2;
use sling_putt::Tuning;
use sling_putt::sim::{BallState, Course, GameState, GestureEvent, tick};

/// Safety cap so a mis-tuned script can't spin forever
const MAX_TICKS: u64 = 50_000;

fn main() {
    env_logger::init();
    log::info!("Sling Putt (headless demo) starting...");

    let course = Course::rect(
        Vec2::ZERO,
        Vec2::new(800.0, 600.0),
        Vec2::new(120.0, 520.0),
        Vec2::new(680.0, 90.0),
    );
    let mut state = GameState::new(course, Tuning::default(), 2, 2024);

    while !state.is_over() && state.time_ticks < MAX_TICKS {
        aim_if_waiting(&mut state);
        tick(&mut state);
    }

    if state.is_over() {
        println!("Course complete after {} ticks", state.time_ticks);
        for (id, player) in state.players.iter().enumerate() {
            println!(
                "  player {id} (#{:06x}): {} strokes",
                player.color,
                player.total_strokes()
            );
        }
    } else {
        log::warn!("Demo hit the tick cap before every ball was holed");
    }
}

/// Queue a straight shot at the hole for whichever ball holds the turn
fn aim_if_waiting(state: &mut GameState) {
    let id = state.turn;
    let ball = &state.balls[id];
    if ball.state != BallState::Pull || ball.gesture.is_some() {
        return;
    }

    let to_hole = state.course.hole - ball.pos;
    // Modest overshoot: friction travel is ~32x launch speed, and the hole
    // captures a ball passing over it, so aiming through the hole suffices
    let tension = to_hole.length() / 10.0;
    let pull = ball.pos - to_hole.normalize_or_zero() * tension;
    let start = ball.pos;

    state.queue_input(GestureEvent::Start { ball: id, point: start });
    state.queue_input(GestureEvent::Move { ball: id, point: pull });
    state.queue_input(GestureEvent::End { ball: id });
    log::debug!("Player {id} shooting with tension {tension:.1}");
}
