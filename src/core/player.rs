use crate::config::PlayerConfig;
use crate::direction::VerticalMove;
use crate::geometry::{Aabb, Position};
use crate::rendering::SpriteHandle;

/// The crossing player. Lives for the whole session; x never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub sprite: SpriteHandle,
    pub position: Position,
    pub movement: VerticalMove,
    pub bounds: Aabb,
    speed: f32,
    half_size: f32,
}

impl Player {
    pub fn new(sprite: SpriteHandle, config: &PlayerConfig) -> Self {
        let position = Position::new(0.0, config.start_y);
        Player {
            sprite,
            position,
            movement: VerticalMove::Still,
            bounds: Aabb::around(position, config.half_size, config.half_size),
            speed: config.speed,
            half_size: config.half_size,
        }
    }

    pub fn move_up(&mut self) {
        self.movement = VerticalMove::Up;
    }

    pub fn move_down(&mut self) {
        self.movement = VerticalMove::Down;
    }

    pub fn stop(&mut self) {
        self.movement = VerticalMove::Still;
    }

    pub fn velocity(&self) -> f32 {
        self.movement.velocity(self.speed)
    }

    /// Applies one tick of vertical velocity. Moving down never takes the
    /// player below `floor_y`.
    pub fn advance(&mut self, floor_y: f32) {
        let dy = self.velocity();
        let mut next = self.position.move_vertically(dy);
        if dy < 0.0 {
            next.y = next.y.max(floor_y.min(self.position.y));
        }
        self.position = next;
        self.update_bounds();
    }

    pub fn reset(&mut self, start_y: f32) {
        self.position = Position::new(0.0, start_y);
        self.movement = VerticalMove::Still;
        self.update_bounds();
    }

    pub fn has_finished(&self, finish_y: f32) -> bool {
        self.position.y >= finish_y
    }

    fn update_bounds(&mut self) {
        self.bounds = Aabb::around(self.position, self.half_size, self.half_size);
    }
}
