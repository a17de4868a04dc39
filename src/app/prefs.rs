use std::fmt::{self, Display, Formatter};

use rand::{rngs::StdRng, SeedableRng};
use static_assertions::const_assert;

use crate::apple::Placement;
use crate::basic::{Board, Point};

pub const DEFAULT_BOARD_WIDTH: u32 = 800;
pub const DEFAULT_BOARD_HEIGHT: u32 = 440;
pub const DEFAULT_CELL_SIDE: u32 = 20;
const_assert!(DEFAULT_BOARD_WIDTH % DEFAULT_CELL_SIDE == 0);
const_assert!(DEFAULT_BOARD_HEIGHT % DEFAULT_CELL_SIDE == 0);

pub const DEFAULT_FPS: u32 = 60;
/// Pixels per tick
pub const DEFAULT_STARTING_SPEED: f32 = 2.;
/// Speed multiplier applied each time an apple is eaten
pub const SPEED_GROWTH: f32 = 1.05;
/// Seed used in deterministic mode unless one is given explicitly
pub const DEBUG_SEED: u64 = 42;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Fixed rng seed, diagnostics drawn on screen
    Deterministic,
    /// Seeded from system entropy, no diagnostics
    Entropy,
}

impl Default for Mode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Mode::Deterministic
        } else {
            Mode::Entropy
        }
    }
}

#[derive(Clone, Debug)]
pub struct Prefs {
    pub board: Board,
    pub fps: u32,
    pub starting_speed: f32,
    pub speed_growth: f32,
    pub placement: Placement,
    pub mode: Mode,
    /// Overrides the seed implied by `mode`
    pub seed: Option<u64>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board: Board {
                dim: Point::new(DEFAULT_BOARD_WIDTH as f32, DEFAULT_BOARD_HEIGHT as f32),
                cell: Point::square(DEFAULT_CELL_SIDE as f32),
            },
            fps: DEFAULT_FPS,
            starting_speed: DEFAULT_STARTING_SPEED,
            speed_growth: SPEED_GROWTH,
            placement: Placement::AvoidSnake,
            mode: Mode::default(),
            seed: None,
        }
    }
}

// builder
impl Prefs {
    pub fn board(mut self, width: f32, height: f32, cell_side: f32) -> Self {
        self.board = Board {
            dim: Point::new(width, height),
            cell: Point::square(cell_side),
        };
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn starting_speed(mut self, speed: f32) -> Self {
        self.starting_speed = speed;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Prefs {
    pub fn validate(self) -> Result<Self, ConfigError> {
        let Board { dim, cell } = self.board;
        if !(cell.x > 0. && cell.y > 0.) {
            return Err(ConfigError::CellSize(cell));
        }
        if dim.x < cell.x || dim.y < cell.y {
            return Err(ConfigError::BoardTooSmall { board: dim, cell });
        }
        if dim.x % cell.x != 0. || dim.y % cell.y != 0. {
            return Err(ConfigError::BoardNotAligned { board: dim, cell });
        }
        if !(self.starting_speed > 0.) {
            return Err(ConfigError::Speed(self.starting_speed));
        }
        if !(self.speed_growth >= 1.) {
            return Err(ConfigError::SpeedGrowth(self.speed_growth));
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(self)
    }

    /// Only deterministic mode draws diagnostics
    pub fn show_diagnostics(&self) -> bool {
        self.mode == Mode::Deterministic
    }

    /// The seed the game will be played with, None means system entropy
    pub fn effective_seed(&self) -> Option<u64> {
        match (self.seed, self.mode) {
            (Some(seed), _) => Some(seed),
            (None, Mode::Deterministic) => Some(DEBUG_SEED),
            (None, Mode::Entropy) => None,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.effective_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    CellSize(Point),
    BoardTooSmall { board: Point, cell: Point },
    BoardNotAligned { board: Point, cell: Point },
    Speed(f32),
    SpeedGrowth(f32),
    ZeroFps,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match self {
            CellSize(cell) => write!(f, "cell size must be positive, got {}x{}", cell.x, cell.y),
            BoardTooSmall { board, cell } => write!(
                f,
                "board {}x{} cannot hold a single {}x{} cell",
                board.x, board.y, cell.x, cell.y
            ),
            BoardNotAligned { board, cell } => write!(
                f,
                "board {}x{} is not a whole number of {}x{} cells",
                board.x, board.y, cell.x, cell.y
            ),
            Speed(speed) => write!(f, "starting speed must be positive, got {}", speed),
            SpeedGrowth(growth) => write!(f, "speed growth must be at least 1, got {}", growth),
            ZeroFps => write!(f, "fps must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_prefs_valid() {
        let prefs = Prefs::default().validate().unwrap();
        assert_eq!(prefs.board.max_cells(), 40 * 22);
        assert_eq!(prefs.fps, 60);
        assert_eq!(prefs.speed_growth, 1.05);
        assert_eq!(prefs.placement, Placement::AvoidSnake);
    }

    #[test]
    fn test_invalid_prefs() {
        assert!(matches!(
            Prefs::default().board(800., 440., 0.).validate(),
            Err(ConfigError::CellSize(_))
        ));
        assert!(matches!(
            Prefs::default().board(800., 450., 20.).validate(),
            Err(ConfigError::BoardNotAligned { .. })
        ));
        assert!(matches!(
            Prefs::default().board(10., 10., 20.).validate(),
            Err(ConfigError::BoardTooSmall { .. })
        ));
        assert_eq!(
            Prefs::default().starting_speed(0.).validate().unwrap_err(),
            ConfigError::Speed(0.)
        );
        assert_eq!(Prefs::default().fps(0).validate().unwrap_err(), ConfigError::ZeroFps);
    }

    #[test]
    fn test_mode_effects() {
        let deterministic = Prefs::default().mode(Mode::Deterministic);
        assert!(deterministic.show_diagnostics());
        assert_eq!(deterministic.effective_seed(), Some(DEBUG_SEED));

        let entropy = Prefs::default().mode(Mode::Entropy);
        assert!(!entropy.show_diagnostics());
        assert_eq!(entropy.effective_seed(), None);
        assert_eq!(entropy.seed(Some(9)).effective_seed(), Some(9));
    }

    #[test]
    fn test_deterministic_rng_repeats() {
        let prefs = Prefs::default().mode(Mode::Deterministic);
        let (mut a, mut b) = (prefs.rng(), prefs.rng());
        for _ in 0..8 {
            assert_eq!(a.gen::<u32>(), b.gen::<u32>());
        }
    }
}
