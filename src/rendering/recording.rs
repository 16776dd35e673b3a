use crate::error::RenderResult;
use crate::geometry::{Position, RoadLayout};
use crate::rendering::{RenderSurface, Scene, SpriteHandle};
use crate::simulation::GameState;

/// Snapshot of what a redraw would put on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub state: GameState,
    pub player: Position,
    pub cars: Vec<(SpriteHandle, Position)>,
    pub text: Option<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Roads { count: usize },
    FinishLine { y: f32 },
    Text { main: String, sub: String },
    ClearText,
    Redraw,
    RemoveSprite(SpriteHandle),
}

/// In-memory surface for headless runs: logs every call and keeps the
/// frames it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    pub frames: Vec<Frame>,
    text: Option<(String, String)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn text(&self) -> Option<&(String, String)> {
        self.text.as_ref()
    }

    pub fn removed_sprites(&self) -> Vec<SpriteHandle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::RemoveSprite(handle) => Some(*handle),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_roads_and_lanes(&mut self, layout: &RoadLayout) -> RenderResult {
        self.calls.push(SurfaceCall::Roads { count: layout.count });
        Ok(())
    }

    fn draw_finish_line(&mut self, y: f32) -> RenderResult {
        self.calls.push(SurfaceCall::FinishLine { y });
        Ok(())
    }

    fn draw_text(&mut self, main: &str, sub: &str) -> RenderResult {
        self.text = Some((main.to_string(), sub.to_string()));
        self.calls.push(SurfaceCall::Text {
            main: main.to_string(),
            sub: sub.to_string(),
        });
        Ok(())
    }

    fn clear_text(&mut self) -> RenderResult {
        self.text = None;
        self.calls.push(SurfaceCall::ClearText);
        Ok(())
    }

    fn redraw(&mut self, scene: &Scene<'_>) -> RenderResult {
        self.frames.push(Frame {
            state: scene.state,
            player: scene.player.position,
            cars: scene.cars.iter().map(|car| (car.sprite, car.position)).collect(),
            text: self.text.clone(),
        });
        self.calls.push(SurfaceCall::Redraw);
        Ok(())
    }

    fn remove_entity_sprite(&mut self, handle: SpriteHandle) -> RenderResult {
        self.calls.push(SurfaceCall::RemoveSprite(handle));
        Ok(())
    }
}
