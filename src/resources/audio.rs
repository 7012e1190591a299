//! ECS resource that bridges the scene with whoever owns the audio device.
//!
//! The scene never plays sound itself. Systems write
//! [`AudioCmd`](crate::events::audio::AudioCmd) messages, and
//! [`forward_audio_cmds`](crate::systems::audio::forward_audio_cmds) pushes
//! them through the [`AudioBridge`] channel. The application keeps the
//! receiving end returned by [`AudioBridge::channel`].

use crate::events::audio::AudioCmd;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Sending half of the audio cue channel.
#[derive(Resource, Clone, Debug)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (scene -> audio owner).
    pub tx_cmd: Sender<AudioCmd>,
}

impl AudioBridge {
    /// Create a bridge and the receiver the audio owner drains.
    pub fn channel() -> (AudioBridge, Receiver<AudioCmd>) {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        (AudioBridge { tx_cmd }, rx_cmd)
    }
}

/// Register the bridge and the `Messages<AudioCmd>` mailbox on a world.
pub fn setup_audio(world: &mut World, bridge: AudioBridge) {
    world.insert_resource(bridge);
    world.insert_resource(Messages::<AudioCmd>::default());
}

/// Remove the bridge from the world and hand it back.
///
/// Commands still queued in the mailbox are flushed first so cues written
/// during the last tick are not lost.
pub fn shutdown_audio(world: &mut World) -> Option<AudioBridge> {
    let bridge = world.remove_resource::<AudioBridge>()?;
    if let Some(mut msgs) = world.remove_resource::<Messages<AudioCmd>>() {
        for cmd in msgs.drain() {
            let _ = bridge.tx_cmd.send(cmd);
        }
    }
    Some(bridge)
}
