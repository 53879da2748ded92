mod ai;
mod config;
mod debug;
mod device;
mod error;
mod game;
mod game_modes;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use config::Config;
use device::{BellChannel, Buzzer, Devices, KeyboardButton, SystemClock};
use error::SumoError;
use game::SpritePattern;
use game_modes::MatchController;
use ui::{Palette, TerminalScreen};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    debug: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    debug::init(options.debug).context("failed to open debug log")?;
    info!("Sumo Duel starting");

    let config = config::load_config().context("failed to load config")?;
    let pattern = SpritePattern::sumo().context("invalid sumo sprite")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Exact press/release tracking when the terminal can report it
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    terminal.clear()?;

    // Run game
    let result = run_game(terminal, &config, &pattern, release_events);

    // Restore terminal
    let mut stdout = io::stdout();
    if release_events {
        execute!(stdout, PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, crossterm::cursor::Show)?;

    match result {
        Err(SumoError::QuitRequested) => {
            info!("quit requested");
            Ok(())
        }
        other => other.context("game loop failed"),
    }
}

fn run_game(
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    pattern: &SpritePattern,
    release_events: bool,
) -> Result<(), SumoError> {
    info!(release_events, fps = config.display.target_fps, "game loop started");

    let devices = Devices {
        display: TerminalScreen::new(terminal, Palette::from_config(&config.display)),
        audio: Buzzer::new(
            BellChannel::new(io::stderr(), config.audio.enabled),
            SystemClock::new(),
        ),
        input: KeyboardButton::new(&config.keybindings, &config.input, release_events),
        clock: SystemClock::new(),
    };

    let frame_duration = game_modes::frame_duration(config.display.target_fps);
    let mut controller = MatchController::new(devices, rand::thread_rng(), pattern, frame_duration);
    controller.run()
}

/// Parse command line arguments
fn parse_args(args: &[String]) -> Options {
    let mut options = Options::default();
    let program = args.first().map(String::as_str).unwrap_or("sumo-duel");

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--help" | "-h" => {
                print_usage(program);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage(program);
                std::process::exit(1);
            }
        }
    }

    options
}

fn print_usage(program: &str) {
    println!("Sumo Duel - one-button sumo against the computer");
    println!();
    println!("Usage:");
    println!("  {}            # Play", program);
    println!("  {} --debug    # Play, logging to {}", program, debug::log_file_path().display());
    println!();
    println!("Hold the button to charge in a spiral; release to spin in place.");
    println!("Push the computer out of the ring. Best of 3 rounds.");
    println!("Config: {}", config::loader::get_config_path().display());
}
