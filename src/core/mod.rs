pub mod car;
pub mod collision_detector;
pub mod player;
pub mod spawner;

pub use car::Car;
pub use collision_detector::CollisionDetector;
pub use player::Player;
pub use spawner::{SpawnPlan, Spawner};
