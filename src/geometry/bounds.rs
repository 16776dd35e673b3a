use crate::geometry::Position;

/// Axis-aligned bounding box stored as its min corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Position,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    /// Box of `2 * half_width` by `2 * half_height` centered on `center`.
    pub fn around(center: Position, half_width: f32, half_height: f32) -> Self {
        Aabb {
            min: Position::new(center.x - half_width, center.y - half_height),
            width: half_width * 2.0,
            height: half_height * 2.0,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.min.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.min.y + self.height
    }

    pub fn expanded(&self, margin: f32) -> Aabb {
        Aabb {
            min: Position::new(self.min.x - margin, self.min.y - margin),
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }

    /// Inclusive overlap: boxes that only touch on an edge count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max_x()
            && self.max_x() >= other.min.x
            && self.min.y <= other.max_y()
            && self.max_y() >= other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn around_centers_the_box() {
        let b = Aabb::around(Position::new(0.0, 0.0), 20.0, 10.0);
        assert_eq!(b.min, Position::new(-20.0, -10.0));
        assert_eq!(b.max_x(), 20.0);
        assert_eq!(b.max_y(), 10.0);
    }

    #[test]
    fn touching_edges_overlap() {
        let a = Aabb::around(Position::new(0.0, 0.0), 10.0, 10.0);
        let b = Aabb::around(Position::new(20.0, 0.0), 10.0, 10.0);
        assert!(a.overlaps(&b));
        let c = Aabb::around(Position::new(20.5, 0.0), 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn margin_closes_a_gap() {
        let a = Aabb::around(Position::new(0.0, 0.0), 10.0, 10.0);
        let b = Aabb::around(Position::new(0.0, 22.0), 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.expanded(1.0).overlaps(&b.expanded(1.0)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Aabb::around(Position::new(3.0, -7.0), 15.0, 15.0);
        let b = Aabb::around(Position::new(25.0, 4.0), 20.0, 10.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}
