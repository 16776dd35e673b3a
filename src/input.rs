//! Player input, independent of the window system, plus the SDL event
//! mapping used by the desktop front-end.

#[cfg(feature = "gui")]
use sdl2::event::Event;
#[cfg(feature = "gui")]
use sdl2::keyboard::Keycode;

/// Events the game loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveUpPressed,
    MoveDownPressed,
    MoveReleased,
    ResetClicked,
}

// Actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Game(InputEvent),
    ShowStatistics,
    ShowHelp,
    Exit,
}

/// Turns SDL events into [`InputAction`]s.
#[cfg(feature = "gui")]
#[derive(Debug, Default)]
pub struct InputHandler;

#[cfg(feature = "gui")]
impl InputHandler {
    pub fn new() -> Self {
        InputHandler
    }

    pub fn process_event(&self, event: &Event) -> InputAction {
        match event {
            Event::Quit { .. } => InputAction::Exit,
            Event::KeyDown { keycode: Some(keycode), repeat, .. } => {
                // Held keys keep their velocity; repeats carry nothing new
                if *repeat {
                    return InputAction::None;
                }

                match keycode {
                    Keycode::Up | Keycode::W => InputAction::Game(InputEvent::MoveUpPressed),
                    Keycode::Down | Keycode::S => InputAction::Game(InputEvent::MoveDownPressed),
                    Keycode::Space => InputAction::ShowStatistics,
                    Keycode::H => InputAction::ShowHelp,
                    Keycode::Escape => InputAction::Exit,
                    _ => InputAction::None,
                }
            }
            Event::KeyUp { keycode: Some(keycode), .. } => match keycode {
                Keycode::Up | Keycode::W | Keycode::Down | Keycode::S => {
                    InputAction::Game(InputEvent::MoveReleased)
                }
                _ => InputAction::None,
            },
            Event::MouseButtonDown { .. } => InputAction::Game(InputEvent::ResetClicked),
            _ => InputAction::None,
        }
    }
}

pub fn print_controls() {
    log::info!("=== CONTROLS ===");
    log::info!("Up / W:      move up while held");
    log::info!("Down / S:    move down while held");
    log::info!("Mouse click: start the next round after a win or crash");
    log::info!("Space:       show session statistics");
    log::info!("H:           show this help");
    log::info!("Esc:         exit and show final statistics");
}

#[cfg(all(test, feature = "gui"))]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;
    use sdl2::mouse::MouseButton;

    fn key_down(keycode: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    fn key_up(keycode: Keycode) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn arrows_and_wasd_move() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.process_event(&key_down(Keycode::W, false)),
            InputAction::Game(InputEvent::MoveUpPressed)
        );
        assert_eq!(
            handler.process_event(&key_down(Keycode::Down, false)),
            InputAction::Game(InputEvent::MoveDownPressed)
        );
        assert_eq!(handler.process_event(&key_down(Keycode::Down, true)), InputAction::None);
    }

    #[test]
    fn releasing_a_movement_key_stops() {
        let handler = InputHandler::new();
        for keycode in [Keycode::Up, Keycode::W, Keycode::Down, Keycode::S] {
            assert_eq!(
                handler.process_event(&key_up(keycode)),
                InputAction::Game(InputEvent::MoveReleased)
            );
        }
        assert_eq!(handler.process_event(&key_up(Keycode::Space)), InputAction::None);
    }

    #[test]
    fn click_resets_and_escape_exits() {
        let handler = InputHandler::new();
        let click = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 10,
            y: 10,
        };
        assert_eq!(handler.process_event(&click), InputAction::Game(InputEvent::ResetClicked));
        assert_eq!(handler.process_event(&key_down(Keycode::Escape, false)), InputAction::Exit);
        assert_eq!(handler.process_event(&Event::Quit { timestamp: 0 }), InputAction::Exit);
        assert_eq!(
            handler.process_event(&key_down(Keycode::Space, false)),
            InputAction::ShowStatistics
        );
    }
}
