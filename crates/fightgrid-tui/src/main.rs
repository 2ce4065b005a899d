mod app;
mod config;
mod game;
mod render;
mod theme;

use app::App;
use clap::Parser;
use config::FileConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fightgrid_core::{FightGraph, FightRecord, FighterDirectory, GeneratorConfig, GridError};
use game::Game;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use theme::Theme;

/// Name the fighter who fought both the row and the column fighter
#[derive(Debug, Parser)]
#[command(name = "fightgrid", version)]
struct Cli {
    /// Fight-record JSON: {"id": ["opponent id", ...]}
    #[arg(long)]
    fights: Option<PathBuf>,

    /// Directory JSON: {"id": "display name"}
    #[arg(long)]
    names: Option<PathBuf>,

    /// Fewest recorded fights for the first anchor
    #[arg(long)]
    min_degree: Option<usize>,

    /// Generation attempts before giving up
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Seed for the first puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Only accept grids where every cell has an answer
    #[arg(long)]
    strict: bool,

    /// dark, light or high-contrast
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let file_config = FileConfig::load();

    // Load before entering raw mode so errors print normally
    let game = setup_game(&cli, &file_config)?;
    let theme = Theme::by_name(cli.theme.as_deref().or(file_config.theme.as_deref()).unwrap_or("dark"));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, App::new(game, theme));

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn setup_game(cli: &Cli, file_config: &FileConfig) -> io::Result<Game> {
    let fights_path = cli
        .fights
        .as_ref()
        .or(file_config.fights.as_ref())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no fight record given (use --fights)"))?;
    let record = FightRecord::from_reader(BufReader::new(File::open(fights_path)?))
        .map_err(|err| invalid_data(fights_path, err))?;

    let directory = match cli.names.as_ref().or(file_config.names.as_ref()) {
        Some(path) => FighterDirectory::from_reader(BufReader::new(File::open(path)?))
            .map_err(|err| invalid_data(path, err))?,
        None => FighterDirectory::new(),
    };

    let defaults = if cli.strict || file_config.strict == Some(true) {
        GeneratorConfig::strict()
    } else {
        GeneratorConfig::standard()
    };
    let config = GeneratorConfig {
        min_degree: cli.min_degree.or(file_config.min_degree).unwrap_or(defaults.min_degree),
        max_attempts: cli.max_attempts.or(file_config.max_attempts).unwrap_or(defaults.max_attempts),
        require_solvable_cells: defaults.require_solvable_cells,
    };

    let graph = FightGraph::new(&record);
    log::info!(
        "loaded {} fighters from {}, {} names",
        graph.len(),
        fights_path.display(),
        directory.len()
    );

    let seed = cli.seed.unwrap_or_else(rand::random);
    Game::new(graph, directory, config, seed).map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}

fn invalid_data(path: &Path, err: GridError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("{}: {}", path.display(), err))
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, &app)?;

        // Handle input with timeout for timer updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
