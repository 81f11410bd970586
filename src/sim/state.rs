//! Game state and core simulation types
//!
//! Everything that must survive a save or a replay lives here. Balls are
//! index-aligned with players; `turn` indexes into both.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::course::Course;
use super::gesture::PullGesture;
use super::tick::GestureEvent;
use crate::tuning::Tuning;

/// What currently drives a ball's motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// At rest, awaiting a pull gesture; velocity forced to zero
    Pull,
    /// In motion; friction decays velocity each tick
    Fly,
    /// Captured by the hole; terminal for this ball
    Hole,
}

/// Post-capture interpolation sinking the ball into the hole
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FallingAnimation {
    /// Position at the moment of capture
    pub start: Vec2,
    /// Hole center
    pub target: Vec2,
    /// Animation progress in [0, 1]
    pub progress: f32,
    /// Radius at the moment of capture (shrinks to zero)
    pub initial_radius: f32,
}

impl FallingAnimation {
    pub fn new(start: Vec2, target: Vec2, initial_radius: f32) -> Self {
        Self {
            start,
            target,
            progress: 0.0,
            initial_radius,
        }
    }
}

/// One player's ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Stable per-player index
    pub id: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Packed 0xRRGGBB
    pub color: u32,
    pub state: BallState,
    /// Active aim drag; only the ball whose turn it is may hold one
    pub gesture: Option<PullGesture>,
    /// Present only while `Hole` and not yet fully sunk
    pub falling: Option<FallingAnimation>,
}

impl Ball {
    pub fn new(id: usize, pos: Vec2, radius: f32, color: u32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
            color,
            state: BallState::Pull,
            gesture: None,
            falling: None,
        }
    }

    /// Holed balls are done for the session and skipped by the turn order
    #[inline]
    pub fn is_holed(&self) -> bool {
        self.state == BallState::Hole
    }
}

/// One player's session record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Packed 0xRRGGBB, shared with the player's ball
    pub color: u32,
    /// Stroke count per round; last entry is the round in progress
    pub strokes: Vec<u32>,
}

impl Player {
    pub fn total_strokes(&self) -> u32 {
        self.strokes.iter().sum()
    }
}

/// Read-only per-ball view for the rendering layer
#[derive(Debug, Clone, Copy)]
pub struct BallSnapshot {
    pub pos: Vec2,
    pub radius: f32,
    pub color: u32,
    pub state: BallState,
    pub gesture: Option<PullGesture>,
}

/// Complete game session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed (player colors)
    pub seed: u64,
    /// Loaded course, immutable until the next round
    pub course: Course,
    /// Balance knobs
    pub tuning: Tuning,
    /// Index-aligned with `balls`
    pub players: Vec<Player>,
    pub balls: Vec<Ball>,
    /// Index of the ball allowed to act
    pub turn: usize,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Gesture events buffered for the next tick
    #[serde(skip)]
    pending_input: Vec<GestureEvent>,
}

impl GameState {
    /// Create a session on `course` with one ball per player
    pub fn new(course: Course, tuning: Tuning, player_count: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut players = Vec::with_capacity(player_count);
        let mut balls = Vec::with_capacity(player_count);

        for id in 0..player_count {
            let color: u32 = rng.random_range(0..=0x00FF_FFFF);
            players.push(Player {
                color,
                strokes: vec![0],
            });
            balls.push(Ball::new(id, course.start, tuning.ball_radius, color));
        }

        log::info!("New session: {player_count} players, seed {seed}");

        Self {
            seed,
            course,
            tuning,
            players,
            balls,
            turn: 0,
            time_ticks: 0,
            pending_input: Vec::new(),
        }
    }

    /// Buffer a gesture event for the next tick
    pub fn queue_input(&mut self, event: GestureEvent) {
        self.pending_input.push(event);
    }

    pub(crate) fn drain_input(&mut self) -> Vec<GestureEvent> {
        std::mem::take(&mut self.pending_input)
    }

    /// Move `turn` to the next ball still in play, skipping holed balls.
    /// No-op once every ball is holed.
    pub fn advance_turn(&mut self) {
        if self.is_over() {
            return;
        }
        loop {
            self.turn = (self.turn + 1) % self.balls.len();
            if !self.balls[self.turn].is_holed() {
                break;
            }
        }
        log::debug!("Turn advanced to player {}", self.turn);
    }

    /// True once every ball has been holed
    pub fn is_over(&self) -> bool {
        self.balls.iter().all(Ball::is_holed)
    }

    /// Start the next round on `course`: balls back to the start pad, a
    /// fresh stroke counter per player, turn back to player 0.
    pub fn new_round(&mut self, course: Course) {
        self.course = course;
        for (ball, player) in self.balls.iter_mut().zip(&mut self.players) {
            ball.pos = self.course.start;
            ball.vel = Vec2::ZERO;
            ball.radius = self.tuning.ball_radius;
            ball.state = BallState::Pull;
            ball.gesture = None;
            ball.falling = None;
            player.strokes.push(0);
        }
        self.turn = 0;
        self.pending_input.clear();
        log::info!("Round {} started", self.players[0].strokes.len());
    }

    /// Per-ball render view, in ball index order
    pub fn snapshots(&self) -> Vec<BallSnapshot> {
        self.balls
            .iter()
            .map(|b| BallSnapshot {
                pos: b.pos,
                radius: b.radius,
                color: b.color,
                state: b.state,
                gesture: b.gesture,
            })
            .collect()
    }
}
