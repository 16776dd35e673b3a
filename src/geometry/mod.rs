pub mod bounds;
pub mod lanes;
pub mod position;

pub use bounds::Aabb;
pub use lanes::{LaneId, LaneSet, RoadBand, RoadLayout};
pub use position::Position;
