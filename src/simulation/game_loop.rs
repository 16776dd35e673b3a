//! The fixed-tick game loop and its Playing / Won / Lost state machine.
//!
//! One tick: spawn (if due and under capacity), move cars and drop the ones
//! that left the field, move the player, then judge the round. A collision
//! is checked before the finish line, so touching a car on the line loses.
//! Won and Lost freeze the loop until [`GameLoop::reset`].

use log::{debug, info, trace, warn};

use crate::config::GameConfig;
use crate::core::{Car, CollisionDetector, Player, SpawnPlan, Spawner};
use crate::error::{GameError, RenderResult};
use crate::geometry::LaneSet;
use crate::input::InputEvent;
use crate::rendering::{RenderSurface, Scene, SpriteHandle};
use crate::simulation::statistics::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

const PLAYER_SPRITE: SpriteHandle = SpriteHandle(0);

pub struct GameLoop<S: RenderSurface> {
    config: GameConfig,
    surface: S,
    state: GameState,
    player: Player,
    cars: Vec<Car>,
    /// Cars that left the field on the most recent tick.
    departed: Vec<Car>,
    spawner: Spawner,
    detector: CollisionDetector,
    statistics: Statistics,
    difficulty: f32,
    next_sprite_id: u32,
    ticks: u64,
}

impl<S: RenderSurface> GameLoop<S> {
    /// Validates `config`, lays out the roads and finish line on `surface`
    /// and starts in `Playing`.
    pub fn new(config: GameConfig, mut surface: S) -> Result<Self, GameError> {
        config.validate()?;

        let lanes = LaneSet::from_layout(&config.roads);
        surface.draw_roads_and_lanes(&config.roads)?;
        surface.draw_finish_line(config.finish_line_y)?;

        info!(
            "Game ready: {} lanes, {} cars max, finish at y={}",
            lanes.lane_count(),
            config.spawn.total_cars_on_screen,
            config.finish_line_y
        );

        Ok(GameLoop {
            spawner: Spawner::new(lanes, &config),
            detector: CollisionDetector::new(&config),
            player: Player::new(PLAYER_SPRITE, &config.player),
            statistics: Statistics::new(config.difficulty.initial),
            difficulty: config.difficulty.initial,
            cars: Vec::new(),
            departed: Vec::new(),
            state: GameState::Playing,
            next_sprite_id: PLAYER_SPRITE.0 + 1,
            ticks: 0,
            config,
            surface,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Cars removed for leaving the field during the last tick.
    pub fn departed(&self) -> &[Car] {
        &self.departed
    }

    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn lanes(&self) -> &LaneSet {
        self.spawner.lanes()
    }

    pub fn spawn_period_ms(&self) -> u32 {
        self.spawner.period_ms()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Result<(), GameError> {
        match event {
            InputEvent::MoveUpPressed => self.player.move_up(),
            InputEvent::MoveDownPressed => self.player.move_down(),
            InputEvent::MoveReleased => self.player.stop(),
            InputEvent::ResetClicked => self.reset()?,
        }
        Ok(())
    }

    /// Runs one tick and returns the resulting state. Does nothing unless
    /// the game is `Playing`.
    ///
    /// A surface error does not cut the tick short: the simulation always
    /// advances and the first error is reported afterwards.
    pub fn tick(&mut self) -> Result<GameState, GameError> {
        if self.state != GameState::Playing {
            return Ok(self.state);
        }
        self.ticks += 1;
        self.departed.clear();

        self.run_spawn_timer();
        let removed = self.advance_cars();
        self.player.advance(self.config.player_floor_y());

        trace!(
            "tick {}: player y={:.1}, {} cars",
            self.ticks,
            self.player.position.y,
            self.cars.len()
        );

        let ended = if self.detector.check(&self.player, &self.cars) {
            self.end_round(GameState::Lost)
        } else if self.player.has_finished(self.config.finish_line_y) {
            self.end_round(GameState::Won)
        } else {
            Ok(())
        };

        let redrawn = self.redraw();
        removed.and(ended).and(redrawn)?;
        Ok(self.state)
    }

    /// Adds a car unless the field is at capacity.
    pub fn spawn_car(&mut self, plan: SpawnPlan) -> Option<SpriteHandle> {
        if self.cars.len() >= self.config.spawn.total_cars_on_screen {
            return None;
        }

        let sprite = SpriteHandle(self.next_sprite_id);
        self.next_sprite_id += 1;

        let speed = self.config.car.base_speed * self.difficulty;
        self.cars.push(Car::spawn(sprite, &plan, speed, &self.config.car));
        self.spawner.on_car_added();
        self.statistics.record_spawn(self.cars.len());

        debug!(
            "Car {:?} spawned heading {:?} at ({:.0}, {:.0}), speed {:.2}",
            sprite, plan.lane.direction, plan.position.x, plan.position.y, speed
        );
        Some(sprite)
    }

    /// Starts a new round after a win or a loss. Ignored while playing.
    ///
    /// The round is reset before the surface is touched, so a failing
    /// surface still leaves a playable game; the first surface error is
    /// returned once every sprite removal has been attempted.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let outcome = self.state;
        if outcome == GameState::Playing {
            debug!("Reset ignored: round still in progress");
            return Ok(());
        }

        let cleared = std::mem::take(&mut self.cars);
        self.departed.clear();
        self.statistics.record_cleared(cleared.len());
        self.spawner.reset();
        self.player.reset(self.config.player.start_y);

        self.difficulty = self.next_difficulty(outcome);
        self.statistics.record_difficulty(self.difficulty);
        self.state = GameState::Playing;
        info!("New round after {:?}, difficulty {:.2}", outcome, self.difficulty);

        let removed = self.remove_sprites(&cleared);
        let cleared_text = self.surface.clear_text();
        let redrawn = self.redraw();
        removed.and(cleared_text).and(redrawn)
    }

    /// Repaints the current state without advancing it.
    pub fn redraw(&mut self) -> RenderResult {
        let scene = Scene {
            state: self.state,
            player: &self.player,
            cars: &self.cars,
        };
        self.surface.redraw(&scene)
    }

    fn run_spawn_timer(&mut self) {
        if self.cars.len() >= self.config.spawn.total_cars_on_screen {
            return;
        }
        let elapsed_ms = u32::try_from(self.config.tick_period_ms).unwrap_or(u32::MAX);
        if !self.spawner.advance_timer(elapsed_ms) {
            return;
        }
        if let Some(plan) = self.spawner.next_spawn() {
            self.spawn_car(plan);
        }
    }

    fn advance_cars(&mut self) -> RenderResult {
        let bound = self.config.field_bound();
        for car in &mut self.cars {
            car.advance();
        }

        let (gone, kept): (Vec<Car>, Vec<Car>) =
            self.cars.drain(..).partition(|car| car.is_off_field(bound));
        self.cars = kept;

        for car in &gone {
            self.spawner.on_car_removed();
            debug!("Car {:?} left the field at x={:.0}", car.sprite, car.position.x);
        }
        self.statistics.record_removals(gone.len());

        let removed = self.remove_sprites(&gone);
        self.departed = gone;
        removed
    }

    /// Asks the surface to drop every sprite in `cars`, carrying on past
    /// failures. Returns the first error.
    fn remove_sprites(&mut self, cars: &[Car]) -> RenderResult {
        let mut first_error = None;
        for car in cars {
            if let Err(e) = self.surface.remove_entity_sprite(car.sprite) {
                warn!("Could not remove sprite {:?}: {}", car.sprite, e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn end_round(&mut self, outcome: GameState) -> RenderResult {
        self.state = outcome;
        match outcome {
            GameState::Won => {
                self.statistics.record_win();
                // Levels climb with the win streak, like the speed does
                let level = self.statistics.current_streak + 1;
                info!("Crossed after {} ticks; level {} is next", self.ticks, level);
                self.surface
                    .draw_text("You made it!", &format!("Click to play level {}", level))
            }
            GameState::Lost => {
                self.statistics.record_loss();
                info!(
                    "Hit by traffic at y={:.0} after {} ticks",
                    self.player.position.y, self.ticks
                );
                self.surface.draw_text("Crashed!", "Click to try again")
            }
            GameState::Playing => Ok(()),
        }
    }

    fn next_difficulty(&self, outcome: GameState) -> f32 {
        let difficulty = &self.config.difficulty;
        match outcome {
            GameState::Won => (self.difficulty + difficulty.step_on_win).min(difficulty.max),
            GameState::Lost => difficulty.initial,
            GameState::Playing => self.difficulty,
        }
    }
}
