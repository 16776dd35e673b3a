use crate::config::CarConfig;
use crate::core::spawner::SpawnPlan;
use crate::direction::Direction;
use crate::geometry::{Aabb, LaneId, Position};
use crate::rendering::SpriteHandle;

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub sprite: SpriteHandle,
    pub position: Position,
    pub lane: LaneId,
    pub direction: Direction,
    /// Units per tick, difficulty already applied.
    pub speed: f32,
    pub bounds: Aabb,
    half_width: f32,
    half_height: f32,
}

impl Car {
    pub fn spawn(sprite: SpriteHandle, plan: &SpawnPlan, speed: f32, size: &CarConfig) -> Self {
        Car {
            sprite,
            position: plan.position,
            lane: plan.lane,
            direction: plan.lane.direction,
            speed,
            bounds: Aabb::around(plan.position, size.half_width, size.half_height),
            half_width: size.half_width,
            half_height: size.half_height,
        }
    }

    pub fn advance(&mut self) {
        self.position = self.position.move_in_direction(&self.direction, self.speed);
        self.update_bounds();
    }

    pub fn is_off_field(&self, bound: f32) -> bool {
        self.direction.is_past_bound(self.position.x, bound)
    }

    fn update_bounds(&mut self) {
        self.bounds = Aabb::around(self.position, self.half_width, self.half_height);
    }
}
