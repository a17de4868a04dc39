use crate::app::world::TickInput;
use crate::basic::Heading;
use ggez::input::keyboard::KeyCode::{self, *};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Steer(Heading),
    TogglePause,
    Quit,
}

#[derive(Copy, Clone)]
pub struct Controls {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl Controls {
    pub const ARROWS: Self = Self { up: Up, down: Down, left: Left, right: Right };
    pub const WASD: Self = Self { up: W, down: S, left: A, right: D };

    fn heading(self, key: KeyCode) -> Option<Heading> {
        match key {
            k if k == self.up => Some(Heading::Up),
            k if k == self.down => Some(Heading::Down),
            k if k == self.left => Some(Heading::Left),
            k if k == self.right => Some(Heading::Right),
            _ => None,
        }
    }
}

/// Collects key presses between two ticks
pub struct KeyboardControl {
    controls: Vec<Controls>,
    pending: TickInput,
}

impl Default for KeyboardControl {
    fn default() -> Self {
        Self {
            controls: vec![Controls::ARROWS, Controls::WASD],
            pending: TickInput::default(),
        }
    }
}

impl KeyboardControl {
    pub fn action(&self, key: KeyCode) -> Option<Action> {
        match key {
            Space | P => Some(Action::TogglePause),
            Escape => Some(Action::Quit),
            _ => self
                .controls
                .iter()
                .find_map(|controls| controls.heading(key))
                .map(Action::Steer),
        }
    }

    /// Queue up a key press for the next tick, the last steering key
    /// pressed wins, an even number of pause presses cancels out.
    /// Returns the action the key maps to.
    pub fn key_pressed(&mut self, key: KeyCode) -> Option<Action> {
        let action = self.action(key)?;
        match action {
            Action::Steer(heading) => self.pending.heading = Some(heading),
            Action::TogglePause => self.pending.toggle_pause ^= true,
            Action::Quit => {}
        }
        Some(action)
    }

    /// Input for the upcoming tick, clears the queue
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}
