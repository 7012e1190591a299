//! Application context handed to each scene.
//!
//! The application owns one [`GameContext`] for its whole run. A
//! [`Scene`](crate::scene::Scene) takes it by value at construction, moves
//! its parts into the scene world as resources, and gives it back through
//! [`Scene::into_context`](crate::scene::Scene::into_context) so score and
//! lives carry over to the next scene.

use crossbeam_channel::Receiver;

use crate::events::audio::AudioCmd;
use crate::resources::animationstore::AnimationStore;
use crate::resources::audio::AudioBridge;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scoreboard::Scoreboard;

#[derive(Debug, Clone)]
pub struct GameContext {
    pub scoreboard: Scoreboard,
    pub audio: AudioBridge,
    pub animations: AnimationStore,
    /// Seed for the scene random source.
    pub seed: u64,
    /// Start scenes with bounding-box overlays on.
    pub debug_boxes: bool,
}

impl GameContext {
    pub fn new(config: &GameConfig, audio: AudioBridge, animations: AnimationStore) -> Self {
        Self {
            scoreboard: Scoreboard::new(config.lives),
            audio,
            animations,
            seed: config.seed,
            debug_boxes: config.debug_boxes,
        }
    }

    /// Context with default settings, the built-in animation catalogue and a
    /// fresh audio channel. Mostly useful in tests and headless runs.
    pub fn headless() -> (Self, Receiver<AudioCmd>) {
        let (audio, rx) = AudioBridge::channel();
        let ctx = Self::new(&GameConfig::default(), audio, crate::game::animations());
        (ctx, rx)
    }
}
