use crate::config::GameConfig;
use crate::core::car::Car;
use crate::core::player::Player;

/// Player-versus-traffic overlap test. Holds only thresholds; nothing is
/// remembered between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    broad_phase_distance: f32,
    player_margin: f32,
    car_margin: f32,
}

impl CollisionDetector {
    pub fn new(config: &GameConfig) -> Self {
        CollisionDetector {
            broad_phase_distance: config.broad_phase_distance,
            player_margin: config.player.collision_margin,
            car_margin: config.car.collision_margin,
        }
    }

    /// True if any car overlaps the player.
    pub fn check(&self, player: &Player, cars: &[Car]) -> bool {
        cars.iter().any(|car| self.is_hit(player, car))
    }

    pub fn is_hit(&self, player: &Player, car: &Car) -> bool {
        if player.position.horizontal_distance_to(&car.position) >= self.broad_phase_distance {
            return false;
        }
        player
            .bounds
            .expanded(self.player_margin)
            .overlaps(&car.bounds.expanded(self.car_margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spawner::SpawnPlan;
    use crate::direction::Direction;
    use crate::geometry::{LaneId, Position};
    use crate::rendering::SpriteHandle;
    use proptest::prelude::*;

    fn car_at(x: f32, y: f32) -> Car {
        let config = GameConfig::default();
        let plan = SpawnPlan {
            lane: LaneId { direction: Direction::Right, index: 0 },
            position: Position::new(x, y),
        };
        Car::spawn(SpriteHandle(100), &plan, 3.0, &config.car)
    }

    fn player_at(y: f32) -> Player {
        let config = GameConfig::default();
        let mut player = Player::new(SpriteHandle(0), &config.player);
        player.reset(y);
        player
    }

    fn detector() -> CollisionDetector {
        CollisionDetector::new(&GameConfig::default())
    }

    #[test]
    fn car_on_top_of_player_hits() {
        assert!(detector().check(&player_at(0.0), &[car_at(0.0, 0.0)]));
    }

    #[test]
    fn no_cars_no_hit() {
        assert!(!detector().check(&player_at(0.0), &[]));
    }

    #[test]
    fn margins_extend_reach() {
        // Player box reaches 15 + 2 right, car box 20 + 1 left: 38 apart still touches.
        assert!(detector().check(&player_at(0.0), &[car_at(38.0, 0.0)]));
        assert!(!detector().check(&player_at(0.0), &[car_at(38.5, 0.0)]));
        // Vertically: 15 + 2 above the player, 10 + 1 below the car.
        assert!(detector().check(&player_at(0.0), &[car_at(0.0, 28.0)]));
        assert!(!detector().check(&player_at(0.0), &[car_at(0.0, 28.5)]));
    }

    #[test]
    fn broad_phase_rejects_distant_cars() {
        let config = GameConfig {
            broad_phase_distance: 38.0,
            ..GameConfig::default()
        };
        let narrow = CollisionDetector::new(&config);
        // Exactly at the broad-phase distance is skipped even though the boxes touch.
        assert!(!narrow.check(&player_at(0.0), &[car_at(38.0, 0.0)]));
        assert!(narrow.check(&player_at(0.0), &[car_at(37.0, 0.0)]));
    }

    #[test]
    fn car_in_another_lane_misses() {
        assert!(!detector().check(&player_at(-350.0), &[car_at(0.0, 245.0), car_at(5.0, -200.0)]));
    }

    proptest! {
        #[test]
        fn result_ignores_car_order(
            player_y in -400.0f32..400.0,
            cars in prop::collection::vec((-100.0f32..100.0, -400.0f32..400.0), 0..12),
            rotate in 0usize..12,
        ) {
            let player = player_at(player_y);
            let mut list: Vec<Car> = cars.iter().map(|&(x, y)| car_at(x, y)).collect();
            let before = detector().check(&player, &list);
            if !list.is_empty() {
                let k = rotate % list.len();
                list.rotate_left(k);
            }
            list.reverse();
            prop_assert_eq!(detector().check(&player, &list), before);
            prop_assert_eq!(before, list.iter().any(|c| detector().is_hit(&player, c)));
        }
    }
}
