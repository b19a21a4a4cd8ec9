//! Cannon Arc entry point
//!
//! Headless driver: reads one command per line from stdin and advances the
//! simulation between them. Logs go to stderr, the final score to stdout.
//!
//! Commands: `rotate [deg|+|-]`, `power [delta|+|-]`, `fire`, `quit`, plus
//! `tick <n>` (run n ticks), `frame <seconds>` (feed the fixed-step clock),
//! `wait` (run until the projectile rests) and `status` (log a snapshot).

use std::io::{self, BufRead};
use std::path::PathBuf;

use cannon_arc::Settings;
use cannon_arc::sim::{Command, FixedStep, GamePhase, GameState, RenderSnapshot, apply, tick};

/// Upper bound on ticks for a single `wait`
const WAIT_LIMIT_TICKS: u32 = 1_000_000;

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq)]
enum DriverLine {
    Game(Command),
    Ticks(u32),
    Frame(f32),
    Wait,
    Status,
}

impl DriverLine {
    fn parse(line: &str, settings: &Settings) -> Option<Self> {
        if let Some(command) = Command::parse(line, settings) {
            return Some(DriverLine::Game(command));
        }
        let mut words = line.split_whitespace();
        let verb = words.next()?.to_lowercase();
        let parsed = match verb.as_str() {
            "tick" | "t" => match words.next() {
                Some(n) => DriverLine::Ticks(n.parse().ok()?),
                None => DriverLine::Ticks(1),
            },
            "frame" => DriverLine::Frame(words.next()?.parse().ok()?),
            "wait" | "w" => DriverLine::Wait,
            "status" | "s" => DriverLine::Status,
            _ => return None,
        };
        if words.next().is_some() {
            return None;
        }
        Some(parsed)
    }
}

fn load_settings() -> Settings {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(Settings::PATH_ENV).map(PathBuf::from));

    match path {
        Some(path) => Settings::load(&path),
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    }
}

fn log_status(state: &GameState) {
    let snapshot = RenderSnapshot::capture(state);
    log::info!("{}", snapshot.hud_text());
    match serde_json::to_string(&snapshot) {
        Ok(json) => log::debug!("{}", json),
        Err(err) => log::warn!("Could not serialize snapshot: {}", err),
    }
}

fn run_line(state: &mut GameState, clock: &mut FixedStep, line: DriverLine) {
    let dt = state.settings.tick_dt;
    match line {
        DriverLine::Game(command) => {
            apply(state, command);
        }
        DriverLine::Ticks(n) => {
            for _ in 0..n {
                tick(state, dt);
                if state.is_terminated() {
                    break;
                }
            }
        }
        DriverLine::Frame(seconds) => {
            let ran = clock.advance(state, seconds);
            log::trace!("Frame of {:.4}s ran {} ticks", seconds, ran);
        }
        DriverLine::Wait => {
            let mut ticks = 0;
            while state.phase == GamePhase::Flying && ticks < WAIT_LIMIT_TICKS {
                tick(state, dt);
                ticks += 1;
            }
            if state.phase == GamePhase::Flying {
                log::warn!("Projectile still flying after {} ticks", ticks);
            }
        }
        DriverLine::Status => log_status(state),
    }

    for event in state.drain_events() {
        log::debug!("{:?}", event);
    }
}

fn main() {
    env_logger::init();
    log::info!("Cannon Arc (headless) starting...");

    let settings = load_settings();
    let mut clock = FixedStep::new(settings.tick_dt);
    let mut state = GameState::new(settings);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("Stopped reading input: {}", err);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match DriverLine::parse(line, &state.settings) {
            Some(parsed) => run_line(&mut state, &mut clock, parsed),
            None => log::warn!("Unrecognized command: {}", line),
        }

        if state.is_terminated() {
            break;
        }
    }

    // End of input behaves like quit
    if !state.is_terminated() {
        state.quit();
    }
    if let Some(message) = state.termination_reason().and_then(|r| r.message()) {
        println!("{}", message);
    }
    println!("{}", state.summary());
}
