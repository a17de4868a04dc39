#[macro_use]
extern crate derive_more;

use clap::{Parser, ValueEnum};
use ggez::{event, ContextBuilder};
use log::{error, info, LevelFilter};
use simplelog::{Config, SimpleLogger};

use crate::app::app_error::{AppError, AppErrorConversion, AppResult};
use crate::app::prefs::{self, Mode, Prefs};
use crate::app::Game;
use crate::apple::Placement;

mod app;
mod apple;
mod basic;
mod motion;
mod snake;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid snake on a wrap-around board")]
struct Cli {
    /// Fixed rng seed and on-screen diagnostics (default for debug builds)
    #[arg(long, conflicts_with = "entropy")]
    deterministic: bool,

    /// Seed from system entropy, no diagnostics (default for release builds)
    #[arg(long)]
    entropy: bool,

    /// Explicit rng seed, overrides the mode's seed
    #[arg(long)]
    seed: Option<u64>,

    /// Board width in pixels
    #[arg(long, default_value_t = prefs::DEFAULT_BOARD_WIDTH as f32)]
    width: f32,

    /// Board height in pixels
    #[arg(long, default_value_t = prefs::DEFAULT_BOARD_HEIGHT as f32)]
    height: f32,

    /// Side length of a cell in pixels
    #[arg(long, default_value_t = prefs::DEFAULT_CELL_SIDE as f32)]
    cell: f32,

    /// Game ticks per second
    #[arg(long, default_value_t = prefs::DEFAULT_FPS)]
    fps: u32,

    /// Starting speed in pixels per tick
    #[arg(long, default_value_t = prefs::DEFAULT_STARTING_SPEED)]
    speed: f32,

    /// Where apples may appear
    #[arg(long, value_enum, default_value = "avoid-snake")]
    placement: PlacementArg,
}

#[derive(Copy, Clone, ValueEnum)]
enum PlacementArg {
    /// Only on cells the snake doesn't cover
    AvoidSnake,
    /// Anywhere, possibly under the snake
    Anywhere,
}

impl From<PlacementArg> for Placement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::AvoidSnake => Placement::AvoidSnake,
            PlacementArg::Anywhere => Placement::Anywhere,
        }
    }
}

impl Cli {
    fn mode(&self) -> Mode {
        match (self.deterministic, self.entropy) {
            (true, _) => Mode::Deterministic,
            (_, true) => Mode::Entropy,
            _ => Mode::default(),
        }
    }

    fn prefs(&self) -> AppResult<Prefs> {
        Prefs::default()
            .board(self.width, self.height, self.cell)
            .fps(self.fps)
            .starting_speed(self.speed)
            .placement(self.placement.into())
            .mode(self.mode())
            .seed(self.seed)
            .validate()
            .map_err(AppError::from)
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.mode() {
        Mode::Deterministic => LevelFilter::Debug,
        Mode::Entropy => LevelFilter::Info,
    };
    if let Err(e) = SimpleLogger::init(level, Config::default()) {
        eprintln!("warning: failed to initialize logger: {}", e);
    }

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(e.error_type().exit_code());
    }
}

/// Only returns if the game could not be started
fn run(cli: &Cli) -> AppResult {
    let prefs = cli.prefs().with_trace_step("reading preferences")?;
    info!(
        "{}x{} board of {}x{} cells, {:?} mode, seed {:?}",
        prefs.board.dim.x,
        prefs.board.dim.y,
        prefs.board.cell.x,
        prefs.board.cell.y,
        prefs.mode,
        prefs.effective_seed(),
    );

    let game = Game::new(prefs);
    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "gorilskij")
        .window_mode(game.wm())
        .window_setup(game.ws())
        .build()
        .map_err(AppError::from)
        .with_trace_step("building window")?;

    event::run(ctx, event_loop, game)
}
