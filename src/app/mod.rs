use ggez::{
    conf::{WindowMode, WindowSetup},
    event::EventHandler,
    graphics::{Canvas, Color, DrawParam, Quad, Rect},
    input::keyboard::KeyInput,
    Context,
};
use log::info;
use rand::rngs::StdRng;

use crate::app::{
    app_error::{AppError, AppResult},
    control::State,
    keyboard_control::{Action, KeyboardControl},
    message::{Message, Position},
    palette::Palette,
    prefs::Prefs,
    world::World,
};
use crate::basic::Point;

pub mod app_error;
pub mod control;
mod keyboard_control;
mod message;
mod palette;
pub mod prefs;
pub mod world;

pub struct Game {
    prefs: Prefs,
    world: World,
    rng: StdRng,
    keyboard: KeyboardControl,
    palette: Palette,
}

impl Game {
    pub fn new(prefs: Prefs) -> Self {
        let mut rng = prefs.rng();
        let world = World::new(&prefs, &mut rng);
        Self {
            prefs,
            world,
            rng,
            keyboard: KeyboardControl::default(),
            palette: Palette::light(),
        }
    }

    pub fn wm(&self) -> WindowMode {
        let Point { x, y } = self.prefs.board.dim;
        WindowMode::default().dimensions(x, y)
    }

    pub fn ws(&self) -> WindowSetup {
        WindowSetup::default().title("Snake").vsync(true)
    }

    fn draw_cell(canvas: &mut Canvas, rect: Rect, color: Color) {
        canvas.draw(&Quad, DrawParam::new().dest_rect(rect).color(color));
    }

    fn draw_board(&self, canvas: &mut Canvas) {
        let cell = self.world.board().cell;

        for (index, (pos, size)) in self.world.body().cells(cell).enumerate() {
            Self::draw_cell(canvas, pos.rect(size), self.palette.segment_color(index));
        }

        if let Some(apple) = self.world.apple() {
            Self::draw_cell(canvas, apple.rect(cell), self.palette.apple);
        }
    }

    fn messages(&self, ctx: &Context) -> Vec<Message> {
        let mut messages = vec![Message::default(
            format!("Score: {}", self.world.score()),
            Position::TopLeft,
            self.palette.text,
        )];

        let hint = match self.world.state() {
            State::Running => Some("Press [SPACE] to pause"),
            State::Paused => Some("Press [SPACE] to unpause"),
            State::GameOver | State::BoardFull => None,
        };
        if let Some(hint) = hint {
            messages.push(Message::default(hint.to_string(), Position::BottomLeft, self.palette.text));
        }

        if self.prefs.show_diagnostics() {
            let Point { x, y } = self.world.head_pos();
            let text = format!(
                "Location: ({:03.0}, {:03.0})\nHeading: {:?}\nSpeed: {:.2}\nTick: {}\nFPS: {:.0}",
                x,
                y,
                self.world.heading(),
                self.world.speed(),
                self.world.ticks(),
                ctx.time.fps(),
            );
            messages.push(Message::default(text, Position::TopRight, self.palette.diagnostics));
        }

        messages
    }
}

impl EventHandler<AppError> for Game {
    fn update(&mut self, ctx: &mut Context) -> AppResult {
        while ctx.time.check_update_time(self.prefs.fps) {
            let input = self.keyboard.take();
            self.world.tick(input, &mut self.rng);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background);

        self.draw_board(&mut canvas);
        for message in self.messages(ctx) {
            message.draw(ctx, &mut canvas)?;
        }

        let banner = match self.world.state() {
            State::GameOver => Some("Game Over"),
            State::BoardFull => Some("Board Full"),
            State::Running | State::Paused => None,
        };
        if let Some(banner) = banner {
            let Point { x, y } = self.world.board().dim;
            Self::draw_cell(&mut canvas, Rect::new(0., 0., x, y), self.palette.overlay);
            Message::banner(banner.to_string(), self.palette.overlay_text).draw(ctx, &mut canvas)?;
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> AppResult {
        if repeated {
            return Ok(());
        }

        if let Some(key) = input.keycode {
            if self.keyboard.key_pressed(key) == Some(Action::Quit) {
                info!("quit requested, final score {}", self.world.score());
                ctx.request_quit();
            }
        }
        Ok(())
    }
}
