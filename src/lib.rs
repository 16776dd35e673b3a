//! Road-crossing arcade game: a player walks up through lanes of
//! horizontal traffic to reach the finish line.
//!
//! The simulation runs headless against any [`RenderSurface`]; the SDL2
//! front-end lives behind the `gui` feature.

pub mod config;
pub mod constants;
pub mod core;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod input;
pub mod rendering;
pub mod simulation;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use input::{InputAction, InputEvent};
pub use rendering::{RecordingSurface, RenderSurface, Scene, SpriteHandle};
pub use simulation::{GameLoop, GameState, Statistics};
