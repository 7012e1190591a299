//! Purrfrog headless runner.
//!
//! Builds one scene from a built-in table (or a JSON table on disk), feeds it
//! a scripted list of input commands and runs it at the configured frame
//! rate for a fixed number of ticks or until the scene asks to leave.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --scene frogger --ticks 300 --input 10:START:UP --input 11:END:UP
//! cargo run -- --scene purr --dump-scene > purr.json
//! cargo run -- --scene-file purr.json --level levels/purr.txt
//! ```
//!
//! Audio cues are drained from the audio channel and logged at debug level;
//! frames go to a renderer that logs the HUD once per simulated second.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info, warn};

use purrfrog::context::GameContext;
use purrfrog::events::action::Command;
use purrfrog::game;
use purrfrog::resources::audio::AudioBridge;
use purrfrog::resources::gameconfig::GameConfig;
use purrfrog::resources::scenedef::SceneDef;
use purrfrog::scene::Scene;
use purrfrog::systems::render::{Frame, Renderer};

/// Purrfrog: lane crossing and a cat story on one scene loop.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Built-in scene to run (frogger or purr).
    #[arg(long, default_value = "frogger")]
    scene: String,

    /// Load the scene table from a JSON file instead.
    #[arg(long, value_name = "PATH")]
    scene_file: Option<PathBuf>,

    /// Level description file; overrides `[paths] level` from the config.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Ticks to simulate before stopping.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Scripted input as `TICK:START|END:NAME`, e.g. `10:START:UP`.
    #[arg(long, value_name = "TICK:TYPE:NAME")]
    input: Vec<String>,

    /// Print the scene table as JSON and exit.
    #[arg(long)]
    dump_scene: bool,
}

/// Renderer that logs the HUD once per `every` frames.
struct LogRenderer {
    every: u64,
    frames: u64,
    ending_logged: bool,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        if let (Some(message), false) = (&frame.final_message, self.ending_logged) {
            info!("ending: {}", message);
            self.ending_logged = true;
        }
        if self.frames % self.every == 0 {
            info!(
                "frame {}: score {} lives {} sprites {}{}",
                self.frames,
                frame.score,
                frame.lives,
                frame.sprites.len(),
                if frame.paused { " (paused)" } else { "" }
            );
            if let Some(text) = &frame.text {
                debug!("text: {}", text);
            }
        }
        self.frames += 1;
    }
}

fn parse_input(raw: &str) -> Option<(u64, Command)> {
    let mut parts = raw.splitn(3, ':');
    let tick = parts.next()?.parse().ok()?;
    let command = Command::parse(parts.next()?, parts.next()?)?;
    Some((tick, command))
}

fn load_scene_def(cli: &Cli) -> Result<SceneDef, String> {
    match &cli.scene_file {
        Some(path) => SceneDef::from_file(path).map_err(|e| e.to_string()),
        None => game::by_name(&cli.scene).ok_or_else(|| {
            format!(
                "unknown scene {:?}, expected one of {:?}",
                cli.scene,
                game::SCENE_NAMES
            )
        }),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let def = match load_scene_def(&cli) {
        Ok(def) => def,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.dump_scene {
        return match def.to_json() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(level) = &cli.level {
        config.level_path = Some(level.clone());
    }

    let mut inputs: Vec<(u64, Command)> = Vec::new();
    for raw in &cli.input {
        match parse_input(raw) {
            Some(input) => inputs.push(input),
            None => warn!("ignoring input {:?}", raw),
        }
    }
    inputs.sort_by_key(|(tick, _)| *tick);

    let (audio, audio_rx) = AudioBridge::channel();
    let ctx = GameContext::new(&config, audio, game::animations());
    let mut scene = Scene::new(def, ctx);

    if let Some(path) = &config.level_path {
        if let Err(e) = scene.load_level(path) {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let dt = config.frame_delta();
    let mut renderer = LogRenderer {
        every: u64::from(config.target_fps.max(1)),
        frames: 0,
        ending_logged: false,
    };
    let mut pending = inputs.into_iter().peekable();

    for tick in 0..cli.ticks {
        while let Some((_, command)) = pending.next_if(|(at, _)| *at <= tick) {
            scene.do_action(command);
        }
        scene.update(dt);
        scene.draw(&mut renderer);
        for cue in audio_rx.try_iter() {
            debug!("audio: {:?}", cue);
        }
        if let Some(transition) = scene.requested_transition() {
            info!("tick {}: leaving scene ({})", tick, transition);
            break;
        }
    }

    let ctx = scene.into_context();
    for cue in audio_rx.try_iter() {
        debug!("audio: {:?}", cue);
    }
    info!(
        "final score {}, {} lives left",
        ctx.scoreboard.score, ctx.scoreboard.lives
    );
    ExitCode::SUCCESS
}
