//! Car spawning: lane choice and the self-balancing spawn timer.
//!
//! The timer period grows by one step for every car added and shrinks by one
//! step (never below the base period) for every car removed, so a crowded
//! field spawns more slowly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::geometry::{LaneId, LaneSet, Position};

/// Where the next car enters the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPlan {
    pub lane: LaneId,
    /// Spawn point, jitter already applied to y.
    pub position: Position,
}

pub struct Spawner {
    rng: StdRng,
    lanes: LaneSet,
    previous: Option<LaneId>,
    bound: f32,
    jitter_min: u8,
    jitter_max: u8,
    base_period_ms: u32,
    period_step_ms: u32,
    period_ms: u32,
    elapsed_ms: u32,
}

impl Spawner {
    pub fn new(lanes: LaneSet, config: &GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(lanes, config, rng)
    }

    pub fn with_rng(lanes: LaneSet, config: &GameConfig, rng: StdRng) -> Self {
        Spawner {
            rng,
            lanes,
            previous: None,
            bound: config.field_bound(),
            jitter_min: config.spawn.jitter_min,
            jitter_max: config.spawn.jitter_max,
            base_period_ms: config.spawn.base_period_ms,
            period_step_ms: config.spawn.period_step_ms,
            period_ms: config.spawn.base_period_ms,
            elapsed_ms: 0,
        }
    }

    pub fn lanes(&self) -> &LaneSet {
        &self.lanes
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn previous_lane(&self) -> Option<LaneId> {
        self.previous
    }

    /// Accumulates elapsed time; true when a spawn is due.
    pub fn advance_timer(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.period_ms {
            self.elapsed_ms = 0;
            true
        } else {
            false
        }
    }

    pub fn on_car_added(&mut self) {
        self.period_ms = self.period_ms.saturating_add(self.period_step_ms);
    }

    pub fn on_car_removed(&mut self) {
        self.period_ms = self
            .period_ms
            .saturating_sub(self.period_step_ms)
            .max(self.base_period_ms);
    }

    /// Back to the base period with an empty accumulator. The previous lane
    /// is kept so the first spawn after a reset still avoids it.
    pub fn reset(&mut self) {
        self.period_ms = self.base_period_ms;
        self.elapsed_ms = 0;
    }

    /// Chooses the next lane and spawn point. `None` only for an empty lane set.
    pub fn next_spawn(&mut self) -> Option<SpawnPlan> {
        let (lane, lane_y) = self.choose_lane()?;
        self.previous = Some(lane);

        let jitter = self.rng.gen_range(self.jitter_min..=self.jitter_max) as f32;
        Some(SpawnPlan {
            lane,
            position: Position::new(lane.direction.spawn_x(self.bound), lane_y + jitter),
        })
    }

    fn choose_lane(&mut self) -> Option<(LaneId, f32)> {
        let first = Direction::random(&mut self.rng);
        let mut pool = self.candidates(first);
        if pool.is_empty() {
            pool = self.candidates(first.opposite());
        }
        pool.choose(&mut self.rng).copied()
    }

    /// Lanes of one group, minus the previous lane when there is any other
    /// lane to fall back on.
    fn candidates(&self, direction: Direction) -> Vec<(LaneId, f32)> {
        let avoid = if self.lanes.lane_count() >= 2 { self.previous } else { None };
        self.lanes
            .group(direction)
            .iter()
            .enumerate()
            .map(|(index, &y)| (LaneId { direction, index }, y))
            .filter(|(id, _)| Some(*id) != avoid)
            .collect()
    }
}
