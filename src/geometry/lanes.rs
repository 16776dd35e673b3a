use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::direction::Direction;

/// Vertical placement of the roads. Each road carries one rightward lane
/// below its center line and one leftward lane above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadLayout {
    pub count: usize,
    pub top_center_y: f32,
    pub spacing: f32,
    pub lane_offset: f32,
    pub half_height: f32,
}

impl Default for RoadLayout {
    fn default() -> Self {
        RoadLayout {
            count: ROAD_COUNT,
            top_center_y: TOP_ROAD_CENTER_Y,
            spacing: ROAD_SPACING,
            lane_offset: LANE_OFFSET,
            half_height: ROAD_HALF_HEIGHT,
        }
    }
}

/// One road as drawn: its center line and its upper and lower edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadBand {
    pub center_y: f32,
    pub top_y: f32,
    pub bottom_y: f32,
}

impl RoadLayout {
    /// Roads from top to bottom.
    pub fn roads(&self) -> impl Iterator<Item = RoadBand> + '_ {
        (0..self.count).map(move |i| {
            let center_y = self.top_center_y - i as f32 * self.spacing;
            RoadBand {
                center_y,
                top_y: center_y + self.half_height,
                bottom_y: center_y - self.half_height,
            }
        })
    }

    pub fn lane_y(&self, road: &RoadBand, direction: Direction) -> f32 {
        match direction {
            Direction::Right => road.center_y - self.lane_offset,
            Direction::Left => road.center_y + self.lane_offset,
        }
    }
}

/// Identity of a lane: its travel direction and its index in that group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneId {
    pub direction: Direction,
    pub index: usize,
}

/// Spawn y-coordinates grouped by travel direction.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneSet {
    rightward: Vec<f32>,
    leftward: Vec<f32>,
}

impl LaneSet {
    pub fn new(rightward: Vec<f32>, leftward: Vec<f32>) -> Self {
        LaneSet { rightward, leftward }
    }

    pub fn from_layout(layout: &RoadLayout) -> Self {
        let roads: Vec<RoadBand> = layout.roads().collect();
        LaneSet::new(
            roads.iter().map(|r| layout.lane_y(r, Direction::Right)).collect(),
            roads.iter().map(|r| layout.lane_y(r, Direction::Left)).collect(),
        )
    }

    pub fn group(&self, direction: Direction) -> &[f32] {
        match direction {
            Direction::Right => &self.rightward,
            Direction::Left => &self.leftward,
        }
    }

    pub fn y_of(&self, lane: LaneId) -> Option<f32> {
        self.group(lane.direction).get(lane.index).copied()
    }

    pub fn lane_count(&self) -> usize {
        self.rightward.len() + self.leftward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lane_count() == 0
    }

    pub fn lanes(&self) -> impl Iterator<Item = LaneId> + '_ {
        Direction::ALL.into_iter().flat_map(move |direction| {
            (0..self.group(direction).len()).map(move |index| LaneId { direction, index })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_groups_start_at_known_lanes() {
        let lanes = LaneSet::from_layout(&RoadLayout::default());
        assert_eq!(lanes.group(Direction::Right)[0], 245.0);
        assert_eq!(lanes.group(Direction::Left)[0], 305.0);
        assert_eq!(lanes.lane_count(), ROAD_COUNT * 2);
    }

    #[test]
    fn roads_run_top_to_bottom() {
        let layout = RoadLayout::default();
        let centers: Vec<f32> = layout.roads().map(|r| r.center_y).collect();
        assert_eq!(centers, vec![275.0, 155.0, 35.0, -85.0, -205.0]);
        for road in layout.roads() {
            assert!(road.top_y > layout.lane_y(&road, Direction::Left));
            assert!(road.bottom_y < layout.lane_y(&road, Direction::Right));
        }
    }

    #[test]
    fn lane_ids_resolve() {
        let lanes = LaneSet::from_layout(&RoadLayout::default());
        let ids: Vec<LaneId> = lanes.lanes().collect();
        assert_eq!(ids.len(), lanes.lane_count());
        for id in ids {
            assert!(lanes.y_of(id).is_some());
        }
        let missing = LaneId { direction: Direction::Left, index: 99 };
        assert_eq!(lanes.y_of(missing), None);
    }

    #[test]
    fn zero_roads_means_no_lanes() {
        let layout = RoadLayout { count: 0, ..RoadLayout::default() };
        assert!(LaneSet::from_layout(&layout).is_empty());
    }
}
