use std::collections::HashMap;

use rand::seq::SliceRandom;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas};
use sdl2::ttf::Font;
use sdl2::video::Window;

use crate::error::RenderResult;
use crate::geometry::{RoadBand, RoadLayout};
use crate::rendering::road_renderer::{RoadRenderer, ScreenSpace};
use crate::rendering::status_text::render_status_text;
use crate::rendering::{RenderSurface, Scene, SpriteHandle};

const CAR_COLORS: [Color; 12] = [
    Color::RGB(0, 0, 255),
    Color::RGB(255, 0, 0),
    Color::RGB(255, 255, 255),
    Color::RGB(20, 20, 20),
    Color::RGB(100, 149, 237),
    Color::RGB(255, 99, 71),
    Color::RGB(147, 112, 219),
    Color::RGB(255, 215, 0),
    Color::RGB(255, 69, 0),
    Color::RGB(135, 206, 235),
    Color::RGB(255, 105, 180),
    Color::RGB(245, 222, 179),
];
const PLAYER_COLOR: Color = Color::RGB(0, 205, 0);

/// Retained-mode surface over an SDL2 canvas: roads, finish line and text
/// are remembered and repainted on every redraw.
pub struct SdlSurface<'ttf> {
    canvas: Canvas<Window>,
    font: Option<Font<'ttf, 'static>>,
    screen: ScreenSpace,
    roads: Vec<RoadBand>,
    finish_y: Option<f32>,
    text: Option<(String, String)>,
    car_colors: HashMap<SpriteHandle, Color>,
}

impl<'ttf> SdlSurface<'ttf> {
    pub fn new(mut canvas: Canvas<Window>, font: Option<Font<'ttf, 'static>>) -> Result<Self, String> {
        let (width, height) = canvas.output_size()?;
        canvas.set_blend_mode(BlendMode::Blend);
        Ok(SdlSurface {
            canvas,
            font,
            screen: ScreenSpace { width, height },
            roads: Vec::new(),
            finish_y: None,
            text: None,
            car_colors: HashMap::new(),
        })
    }

    fn car_color(&mut self, handle: SpriteHandle) -> Color {
        *self.car_colors.entry(handle).or_insert_with(|| {
            CAR_COLORS
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or(Color::RGB(0, 0, 255))
        })
    }
}

impl RenderSurface for SdlSurface<'_> {
    fn draw_roads_and_lanes(&mut self, layout: &RoadLayout) -> RenderResult {
        self.roads = layout.roads().collect();
        log::debug!("Road layout set: {} roads", self.roads.len());
        Ok(())
    }

    fn draw_finish_line(&mut self, y: f32) -> RenderResult {
        self.finish_y = Some(y);
        Ok(())
    }

    fn draw_text(&mut self, main: &str, sub: &str) -> RenderResult {
        self.text = Some((main.to_string(), sub.to_string()));
        Ok(())
    }

    fn clear_text(&mut self) -> RenderResult {
        self.text = None;
        Ok(())
    }

    fn redraw(&mut self, scene: &Scene<'_>) -> RenderResult {
        let colors: Vec<Color> = scene.cars.iter().map(|car| self.car_color(car.sprite)).collect();
        let screen = self.screen;

        RoadRenderer::render_background(&mut self.canvas);
        RoadRenderer::render_road_surface(&mut self.canvas, screen, &self.roads)?;
        RoadRenderer::render_lane_markers(&mut self.canvas, screen, &self.roads)?;
        if let Some(y) = self.finish_y {
            RoadRenderer::render_finish_line(&mut self.canvas, screen, y)?;
        }

        for (car, color) in scene.cars.iter().zip(colors) {
            let rect = screen.rect(&car.bounds);
            self.canvas.set_draw_color(color);
            self.canvas.fill_rect(rect)?;
            self.canvas.set_draw_color(Color::RGB(0, 0, 0));
            self.canvas.draw_rect(rect)?;
        }

        let player_rect = screen.rect(&scene.player.bounds);
        self.canvas.set_draw_color(PLAYER_COLOR);
        self.canvas.fill_rect(player_rect)?;
        self.canvas.set_draw_color(Color::RGB(0, 100, 0));
        self.canvas.draw_rect(player_rect)?;

        if let Some((main, sub)) = &self.text {
            render_status_text(&mut self.canvas, self.font.as_ref(), main, sub)?;
        }

        self.canvas.present();
        Ok(())
    }

    fn remove_entity_sprite(&mut self, handle: SpriteHandle) -> RenderResult {
        self.car_colors.remove(&handle);
        Ok(())
    }
}
