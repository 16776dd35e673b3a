use crate::direction::Direction;

/// World-space position. Origin at the center of the play field, y up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }

    pub fn move_in_direction(&self, direction: &Direction, speed: f32) -> Position {
        Position {
            x: self.x + direction.sign() * speed,
            y: self.y,
        }
    }

    pub fn move_vertically(&self, dy: f32) -> Position {
        Position {
            x: self.x,
            y: self.y + dy,
        }
    }

    pub fn horizontal_distance_to(&self, other: &Position) -> f32 {
        (self.x - other.x).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_along_one_axis() {
        let p = Position::new(10.0, 5.0);
        assert_eq!(p.move_in_direction(&Direction::Left, 3.0), Position::new(7.0, 5.0));
        assert_eq!(p.move_in_direction(&Direction::Right, 3.0), Position::new(13.0, 5.0));
        assert_eq!(p.move_vertically(-2.0), Position::new(10.0, 3.0));
    }

    #[test]
    fn horizontal_distance_ignores_y() {
        let a = Position::new(-4.0, 100.0);
        let b = Position::new(6.0, -100.0);
        assert_eq!(a.horizontal_distance_to(&b), 10.0);
        assert_eq!(b.horizontal_distance_to(&a), 10.0);
    }
}
