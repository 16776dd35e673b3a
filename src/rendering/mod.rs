//! Drawing collaborator seen by the game loop.
//!
//! The loop never touches pixels: it hands the surface a road layout once,
//! status text on state changes, and a [`Scene`] every tick. Entities refer
//! to their sprites through a [`SpriteHandle`].

pub mod recording;

#[cfg(feature = "gui")]
pub mod road_renderer;
#[cfg(feature = "gui")]
pub mod sdl_surface;
#[cfg(feature = "gui")]
pub mod status_text;

pub use recording::{Frame, RecordingSurface, SurfaceCall};
#[cfg(feature = "gui")]
pub use sdl_surface::SdlSurface;

use crate::core::{Car, Player};
use crate::error::RenderResult;
use crate::geometry::RoadLayout;
use crate::simulation::GameState;

/// Opaque reference to an entity's sprite on the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteHandle(pub u32);

/// Everything needed to paint one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub state: GameState,
    pub player: &'a Player,
    pub cars: &'a [Car],
}

pub trait RenderSurface {
    fn draw_roads_and_lanes(&mut self, layout: &RoadLayout) -> RenderResult;
    fn draw_finish_line(&mut self, y: f32) -> RenderResult;
    fn draw_text(&mut self, main: &str, sub: &str) -> RenderResult;
    fn clear_text(&mut self) -> RenderResult;
    fn redraw(&mut self, scene: &Scene<'_>) -> RenderResult;
    fn remove_entity_sprite(&mut self, handle: SpriteHandle) -> RenderResult;
}
