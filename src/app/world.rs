use log::{debug, info};
use rand::Rng;

use crate::{
    app::{
        control::{Control, State},
        prefs::Prefs,
    },
    apple::Placement,
    basic::{quantize, Board, Heading, Point, Ticks},
    motion,
    snake::Body,
};

/// Player input gathered since the previous tick
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub toggle_pause: bool,
    pub heading: Option<Heading>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or over, nothing moved
    Idle,
    Moved,
    Ate,
    Crashed,
    Filled,
}

/// Everything that changes while playing, owned by the game loop
pub struct World {
    board: Board,
    placement: Placement,
    speed_growth: f32,

    /// Unquantized position of the head, only its cell is visible
    head_pos: Point,
    heading: Heading,
    /// Pixels per tick
    speed: f32,

    body: Body,
    /// None only once the board is full
    apple: Option<Point>,

    control: Control,
    ticks: Ticks,
}

impl World {
    pub fn new(prefs: &Prefs, rng: &mut impl Rng) -> Self {
        let board = prefs.board;
        let head = board.center_cell();
        let body = Body::new(head, board.max_cells());
        let apple = prefs.placement.place(board, &body, rng);

        let mut world = Self {
            board,
            placement: prefs.placement,
            speed_growth: prefs.speed_growth,
            head_pos: head,
            heading: Heading::Right,
            speed: prefs.starting_speed,
            body,
            apple,
            control: Control::default(),
            ticks: 0,
        };
        if world.apple.is_none() || world.body.is_full() {
            world.control.board_full();
        }
        world
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn apple(&self) -> Option<Point> {
        self.apple
    }

    pub fn head_pos(&self) -> Point {
        self.head_pos
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn velocity(&self) -> Point {
        self.heading.velocity(self.speed)
    }

    pub fn state(&self) -> State {
        self.control.state()
    }

    pub fn ticks(&self) -> Ticks {
        self.ticks
    }

    pub fn score(&self) -> usize {
        self.body.len() - 1
    }

    pub fn tick(&mut self, input: TickInput, rng: &mut impl Rng) -> TickOutcome {
        if self.control.state().is_terminal() {
            return TickOutcome::Idle;
        }

        if input.toggle_pause && self.control.toggle_pause() {
            debug!("{:?} at tick {}", self.control.state(), self.ticks);
        }
        if !self.control.is_running() {
            return TickOutcome::Idle;
        }

        if let Some(requested) = input.heading {
            self.heading.turn(requested);
        }

        self.head_pos = motion::advance(self.head_pos, self.velocity(), self.board.dim);
        let new_head = quantize(self.head_pos, self.board.cell);
        self.ticks += 1;

        // eating takes precedence over crashing
        if self.apple == Some(new_head) {
            return self.eat(new_head, rng);
        }

        if self.body.step_advance_or_collide(new_head) {
            info!("game over at {:?}, score {}", new_head, self.score());
            self.control.game_over();
            return TickOutcome::Crashed;
        }
        TickOutcome::Moved
    }

    fn eat(&mut self, new_head: Point, rng: &mut impl Rng) -> TickOutcome {
        if let Err(e) = self.body.grow(new_head) {
            info!("board full: {}", e);
            return self.fill();
        }
        self.speed *= self.speed_growth;

        if self.body.is_full() {
            info!("board full, all {} cells covered", self.body.capacity());
            return self.fill();
        }

        match self.placement.place(self.board, &self.body, rng) {
            Some(apple) => {
                if self.body.contains(apple) {
                    debug!("apple placed under the snake at {:?}", apple);
                }
                self.apple = Some(apple);
                info!("score {}, speed {:.2}, next apple at {:?}", self.score(), self.speed, apple);
                TickOutcome::Ate
            }
            None => self.fill(),
        }
    }

    fn fill(&mut self) -> TickOutcome {
        self.apple = None;
        self.control.board_full();
        TickOutcome::Filled
    }
}

#[cfg(test)]
impl World {
    /// A world in an arbitrary running state
    fn with_state(
        prefs: &Prefs,
        segments: &[Point],
        head_pos: Point,
        heading: Heading,
        speed: f32,
        apple: Point,
    ) -> Self {
        Self {
            board: prefs.board,
            placement: prefs.placement,
            speed_growth: prefs.speed_growth,
            head_pos,
            heading,
            speed,
            body: Body::from_segments(segments, prefs.board.max_cells()),
            apple: Some(apple),
            control: Control::default(),
            ticks: 0,
        }
    }
}
