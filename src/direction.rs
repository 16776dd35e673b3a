use rand::Rng;
use serde::{Deserialize, Serialize};

/// Horizontal travel direction of a car.
#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Vertical intent of the player, set by input events.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum VerticalMove {
    Up,
    Down,
    #[default]
    Still,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Right, Direction::Left];

    /// Picks a direction uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        if rng.gen_bool(0.5) {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// Starting x for a car travelling this way: rightward cars enter from
    /// the left edge, leftward cars from the right edge.
    pub fn spawn_x(&self, bound: f32) -> f32 {
        -self.sign() * bound
    }

    /// True once `x` is past the field bound on the side this direction heads to.
    pub fn is_past_bound(&self, x: f32, bound: f32) -> bool {
        match self {
            Direction::Right => x > bound,
            Direction::Left => x < -bound,
        }
    }
}

impl VerticalMove {
    pub fn velocity(&self, speed: f32) -> f32 {
        match self {
            VerticalMove::Up => speed,
            VerticalMove::Down => -speed,
            VerticalMove::Still => 0.0,
        }
    }
}
