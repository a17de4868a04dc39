use ggez::graphics::Color;

macro_rules! gray {
    ($lightness:expr) => {
        Color {
            r: $lightness,
            g: $lightness,
            b: $lightness,
            a: 1.,
        }
    };
}

pub struct Palette {
    pub background: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub apple: Color,
    pub text: Color,
    pub diagnostics: Color,
    /// Drawn over the whole board once the game is over
    pub overlay: Color,
    pub overlay_text: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: gray!(0.96),
            snake_head: gray!(0.),
            snake_body: gray!(0.2),
            apple: Color::new(0.9, 0.16, 0.22, 1.),
            text: gray!(0.31),
            diagnostics: Color::new(0., 0.47, 0.95, 1.),
            overlay: Color::new(0., 0., 0., 0.6),
            overlay_text: Color::WHITE,
        }
    }

    pub fn segment_color(&self, index: usize) -> Color {
        if index == 0 {
            self.snake_head
        } else {
            self.snake_body
        }
    }
}
