use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::geometry::{Aabb, RoadBand};

const DASH_LENGTH: i32 = 20;
const DASH_GAP: i32 = 20;
const FINISH_SQUARE: i32 = 10;

/// Maps world coordinates (origin at center, y up) to window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSpace {
    pub width: u32,
    pub height: u32,
}

impl ScreenSpace {
    pub fn x(&self, x: f32) -> i32 {
        (x + self.width as f32 / 2.0).round() as i32
    }

    pub fn y(&self, y: f32) -> i32 {
        (self.height as f32 / 2.0 - y).round() as i32
    }

    pub fn rect(&self, bounds: &Aabb) -> Rect {
        Rect::new(
            self.x(bounds.min.x),
            self.y(bounds.max_y()),
            bounds.width.round().max(1.0) as u32,
            bounds.height.round().max(1.0) as u32,
        )
    }
}

pub struct RoadRenderer;

impl RoadRenderer {
    pub fn render_background(canvas: &mut Canvas<Window>) {
        canvas.set_draw_color(Color::RGB(50, 205, 50));
        canvas.clear();
    }

    pub fn render_road_surface(
        canvas: &mut Canvas<Window>,
        screen: ScreenSpace,
        roads: &[RoadBand],
    ) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(51, 51, 51));
        for road in roads {
            let top = screen.y(road.top_y);
            let height = (screen.y(road.bottom_y) - top).max(1) as u32;
            canvas.fill_rect(Rect::new(0, top, screen.width, height))?;
        }
        Ok(())
    }

    pub fn render_lane_markers(
        canvas: &mut Canvas<Window>,
        screen: ScreenSpace,
        roads: &[RoadBand],
    ) -> Result<(), String> {
        let right = screen.width as i32;

        canvas.set_draw_color(Color::RGB(255, 255, 255));
        for road in roads {
            let top = screen.y(road.top_y);
            let bottom = screen.y(road.bottom_y);
            canvas.draw_line((0, top), (right, top))?;
            canvas.draw_line((0, bottom), (right, bottom))?;
        }

        // Dashed divider between the two opposing lanes
        canvas.set_draw_color(Color::RGB(255, 255, 0));
        for road in roads {
            let y = screen.y(road.center_y);
            let mut x = 0;
            while x < right {
                canvas.fill_rect(Rect::new(x, y - 2, DASH_LENGTH as u32, 4))?;
                x += DASH_LENGTH + DASH_GAP;
            }
        }
        Ok(())
    }

    /// Two rows of black and white squares with their lower edge on `y`.
    pub fn render_finish_line(
        canvas: &mut Canvas<Window>,
        screen: ScreenSpace,
        y: f32,
    ) -> Result<(), String> {
        let base = screen.y(y);
        let columns = screen.width as i32 / FINISH_SQUARE + 1;
        for row in 0..2 {
            for column in 0..columns {
                let color = if (row + column) % 2 == 0 {
                    Color::RGB(255, 255, 255)
                } else {
                    Color::RGB(0, 0, 0)
                };
                canvas.set_draw_color(color);
                canvas.fill_rect(Rect::new(
                    column * FINISH_SQUARE,
                    base - (row + 1) * FINISH_SQUARE,
                    FINISH_SQUARE as u32,
                    FINISH_SQUARE as u32,
                ))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    #[test]
    fn world_origin_is_window_center() {
        let screen = ScreenSpace { width: 800, height: 800 };
        assert_eq!(screen.x(0.0), 400);
        assert_eq!(screen.y(0.0), 400);
        assert_eq!(screen.y(350.0), 50);
        assert_eq!(screen.x(-400.0), 0);
    }

    #[test]
    fn rect_uses_top_left_corner() {
        let screen = ScreenSpace { width: 800, height: 800 };
        let bounds = Aabb::around(Position::new(0.0, -350.0), 15.0, 15.0);
        let rect = screen.rect(&bounds);
        assert_eq!((rect.x(), rect.y()), (385, 735));
        assert_eq!((rect.width(), rect.height()), (30, 30));
    }
}
