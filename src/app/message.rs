use crate::basic::Point;
use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text};
use ggez::{Context, GameResult};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    /// Centered in the window, used for the game over overlay
    Center,
}

pub struct Message {
    pub text: String,

    pub position: Position,
    pub h_margin: f32,
    pub v_margin: f32,
    pub font_size: f32,
    pub color: Color,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 10.;
    pub const DEFAULT_FONT_SIZE: f32 = 20.;
    pub const BANNER_FONT_SIZE: f32 = 60.;

    // `position` refers to where the text should be placed in the window
    pub fn default(text: String, position: Position, color: Color) -> Self {
        Self {
            text,
            position,
            h_margin: Self::DEFAULT_MARGIN,
            v_margin: Self::DEFAULT_MARGIN,
            font_size: Self::DEFAULT_FONT_SIZE,
            color,
        }
    }

    pub fn banner(text: String, color: Color) -> Self {
        Self {
            font_size: Self::BANNER_FONT_SIZE,
            ..Self::default(text, Position::Center, color)
        }
    }

    /// Top-left corner of text of size `text_dim` in a window of size `window_dim`
    pub fn dest(&self, window_dim: Point, text_dim: Point) -> Point {
        match self.position {
            Position::TopLeft => Point { x: self.h_margin, y: self.v_margin },
            Position::TopRight => Point {
                x: window_dim.x - self.h_margin - text_dim.x,
                y: self.v_margin,
            },
            Position::BottomLeft => Point {
                x: self.h_margin,
                y: window_dim.y - self.v_margin - text_dim.y,
            },
            Position::Center => (window_dim - text_dim) / 2.,
        }
    }

    pub fn draw(&self, ctx: &Context, canvas: &mut Canvas) -> GameResult {
        let (width, height) = ctx.gfx.drawable_size();

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size));
        let text_dim = text.measure(ctx)?;

        let dest = self.dest(
            Point { x: width, y: height },
            Point { x: text_dim.x, y: text_dim.y },
        );
        canvas.draw(&text, DrawParam::default().dest(dest).color(self.color));
        Ok(())
    }
}
