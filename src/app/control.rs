#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Running,
    Paused,
    /// The snake ran into itself
    GameOver,
    /// The snake covers the whole board, nothing left to eat
    BoardFull,
}

impl State {
    /// Nothing leaves a terminal state for the rest of the run
    pub fn is_terminal(self) -> bool {
        matches!(self, State::GameOver | State::BoardFull)
    }
}

/// Game state management, gameplay only advances while running
#[derive(Debug)]
pub struct Control {
    state: State,
}

impl Default for Control {
    fn default() -> Self {
        Self { state: State::Running }
    }
}

impl Control {
    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Running <-> Paused, returns whether anything changed
    pub fn toggle_pause(&mut self) -> bool {
        self.state = match self.state {
            State::Running => State::Paused,
            State::Paused => State::Running,
            State::GameOver | State::BoardFull => return false,
        };
        true
    }

    pub fn game_over(&mut self) {
        if !self.state.is_terminal() {
            self.state = State::GameOver;
        }
    }

    pub fn board_full(&mut self) {
        if !self.state.is_terminal() {
            self.state = State::BoardFull;
        }
    }
}
